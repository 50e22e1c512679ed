use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter when neither `LOGLEVEL` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "realty_genie=info,tower_http=info,warn";

/// Installs the global `tracing` subscriber.
///
/// `LOGLEVEL` (e.g. `debug`) wins over `RUST_LOG`; calling this more than once
/// is a no-op, which lets every test call it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = match std::env::var("LOGLEVEL") {
            Ok(level) if !level.trim().is_empty() => {
                EnvFilter::new(format!("realty_genie={},warn", level.trim().to_lowercase()))
            }
            _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
