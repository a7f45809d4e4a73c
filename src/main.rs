use tracing::info;
use tracing_subscriber::EnvFilter;

use wcag_contrast_server::mcp::{transport, McpServer};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // stdout carries protocol frames; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "wcag-contrast-server listening on stdio"
    );

    let server = McpServer::new();
    transport::run_stdio(&server).await
}
