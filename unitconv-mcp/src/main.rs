//! Unitconv MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Stdout carries protocol frames
//! only; logs go to stderr.

mod config;
mod server;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use config::ServerConfig;

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();
    init_tracing(&config);

    info!(
        version = config.version,
        protocol = config.protocol_version,
        units = unitconv_units::UNITS.len(),
        "Unitconv MCP server started"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(response) = server::handle_line(&config, line) else {
            continue;
        };

        let mut frame = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                error!("Error serializing response: {}", e);
                continue;
            }
        };
        frame.push('\n');

        if let Err(e) = stdout.write_all(frame.as_bytes()).await {
            error!("Error writing response: {}", e);
            break;
        }
        if let Err(e) = stdout.flush().await {
            error!("Error flushing stdout: {}", e);
            break;
        }
        debug!("response sent");
    }

    info!("Server shutting down");
}
