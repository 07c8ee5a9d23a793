//! Standalone location search relay (without the Dioxus frontend)
//!
//! Run with: cargo run --bin server --features server -- --port 5000

use std::net::SocketAddr;

use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use car_rental_location_finder::config::DEFAULT_API_HOST;
use car_rental_location_finder::handlers::{relay_routes, RelayState};
use car_rental_location_finder::shared::logging::mask_api_key;

#[derive(Debug, Parser)]
#[command(name = "server", about = "Relay for car rental location searches")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// RapidAPI key sent upstream
    #[arg(long, env = "RAPIDAPI_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Upstream API host
    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    tracing::info!("Starting Car Rental Location Finder relay...");
    let masked = mask_api_key(&args.api_key);
    tracing::info!(api_host = %args.api_host, api_key = %masked, "Upstream configured");
    if args.api_key.is_empty() {
        tracing::warn!("RAPIDAPI_KEY is not set; upstream requests will be rejected");
    }

    let state = RelayState::new(args.api_key, args.api_host)?;

    let app = relay_routes(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Server running on http://{}", addr);
    tracing::info!("API endpoint: http://{}/api/search-location?query=Kigali", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
