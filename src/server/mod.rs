/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! HTTP surface of the service.

/// Error responses
pub mod error;
/// Request handlers
pub mod handlers;
/// Route table
pub mod router;
/// Shared handler state
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use crate::application::config::ServerConfig;
use crate::error::AppResult;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serves the API on `config` until Ctrl+C or SIGTERM
pub async fn serve(config: &ServerConfig, state: AppState) -> AppResult<()> {
    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to capture Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!("Failed to capture SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = sigterm => info!("SIGTERM received, shutting down"),
    }
}
