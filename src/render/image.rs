use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

const BINARY_NAME: &str = "wkhtmltoimage";

const WELL_KNOWN_PATHS: [&str; 4] = [
    "/usr/local/bin/wkhtmltoimage",
    "/usr/bin/wkhtmltoimage",
    r"C:\Program Files\wkhtmltopdf\bin\wkhtmltoimage.exe",
    r"C:\Program Files (x86)\wkhtmltopdf\bin\wkhtmltoimage.exe",
];

/// Turns an HTML document into a PNG
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    /// Renders `html` at `width` pixels, height follows the content
    async fn render_png(&self, html: &str, width: u32) -> AppResult<Vec<u8>>;
}

/// [`ImageRenderer`] that pipes HTML through the `wkhtmltoimage` binary
#[derive(Debug, Clone)]
pub struct WkHtmlToImage {
    binary: Option<PathBuf>,
}

impl WkHtmlToImage {
    /// Locates the binary: `configured` first, then well-known install
    /// locations, then every directory of `PATH`
    pub fn new(configured: Option<&Path>) -> Self {
        let binary = locate_binary(configured);
        match &binary {
            Some(path) => info!("Using wkhtmltoimage from: {}", path.display()),
            None => warn!("wkhtmltoimage not found, image rendering is disabled"),
        }
        Self { binary }
    }

    /// Path of the binary in use
    pub fn binary(&self) -> Option<&Path> {
        self.binary.as_deref()
    }
}

/// First existing candidate among the configured path, well-known paths and `PATH`
pub fn locate_binary(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warn!("Configured wkhtmltoimage path does not exist: {}", path.display());
    }

    if let Some(path) = WELL_KNOWN_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
    {
        return Some(path);
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| [dir.join(BINARY_NAME), dir.join(format!("{BINARY_NAME}.exe"))])
        .find(|p| p.is_file())
}

#[async_trait]
impl ImageRenderer for WkHtmlToImage {
    async fn render_png(&self, html: &str, width: u32) -> AppResult<Vec<u8>> {
        let binary = self
            .binary
            .as_ref()
            .ok_or_else(|| AppError::ImageRender("wkhtmltoimage is not installed".to_string()))?;

        let mut child = Command::new(binary)
            .args(["--quiet", "--format", "png", "--quality", "100"])
            .args(["--width", &width.to_string()])
            .args(["--encoding", "UTF-8", "--enable-local-file-access"])
            .args(["-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(html.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(AppError::ImageRender(format!(
                "wkhtmltoimage exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(AppError::ImageRender(
                "wkhtmltoimage produced no output".to_string(),
            ));
        }

        debug!("Rendered {} byte PNG", output.stdout.len());
        Ok(output.stdout)
    }
}
