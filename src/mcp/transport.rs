//! Newline-delimited JSON transport over stdio.

use serde_json::Value;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use super::protocol::{error_response, RpcError};
use super::server::McpServer;

/// Serve over stdin/stdout until EOF.
///
/// One JSON message per line. Responses are written in request order and
/// flushed per message; stdout carries only protocol frames.
pub async fn run_stdio(server: &McpServer) -> io::Result<()> {
    let mut reader = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            debug!("stdin closed, shutting down");
            return Ok(());
        }
        let frame = line.trim();
        if frame.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(frame) {
            Ok(message) => server.handle_message(message),
            Err(err) => {
                warn!(%err, "discarding unparseable frame");
                Some(error_response(
                    Value::Null,
                    RpcError::parse_error(format!("Invalid JSON: {err}")),
                ))
            }
        };

        if let Some(response) = response {
            let mut body = serde_json::to_vec(&response)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            body.push(b'\n');
            stdout.write_all(&body).await?;
            stdout.flush().await?;
        }
    }
}
