use std::net::SocketAddr;
use std::sync::Arc;

use track_server::api;
use track_server::ingestion::Ingestor;
use track_server::store::TrackStore;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Shared state: the store and the ingestion pipeline.
    let store = Arc::new(TrackStore::new());
    let ingestor = Arc::new(Ingestor::new(reqwest::Client::new()));

    // 2. HTTP router with the state injected.
    let app = api::app(store, ingestor);

    // 3. Serve.
    tracing::info!("track registry listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
