use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use baywheels_server::gbfs::{GbfsClient, GbfsConfig};
use baywheels_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays clean for process supervisors.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Create the GBFS client, optionally pointed at a different network
    let mut config = GbfsConfig::default();
    if let Ok(url) = std::env::var("GBFS_DISCOVERY_URL") {
        config = config.with_discovery_url(url);
    }
    let gbfs = GbfsClient::new(config).expect("Failed to create GBFS client");

    // Build app state
    let state = AppState::new(gbfs);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Invalid HOST/PORT combination");

    println!("Bay Wheels GBFS server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /health                          - Health check");
    println!("  GET /tools/find_nearest_bike         - Nearest available bikes");
    println!("  GET /tools/find_nearest_dock_spaces  - Nearest return docks");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
