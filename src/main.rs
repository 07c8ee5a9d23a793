//! Car Rental Location Finder - Main Entry Point
//!
//! With the `server` feature the Dioxus app is served together with the
//! location search relay, so proxy mode works against the same origin.

use car_rental_location_finder::app::App;

// Server entry point - dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use dioxus::server::axum::{routing::get, Extension};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Car Rental Location Finder...");

    use car_rental_location_finder::handlers::{
        health_handler, search_location_handler, RelayState,
    };

    dioxus::serve(|| async move {
        let relay_state = RelayState::from_env()?;
        tracing::info!(api_host = %relay_state.api_host, "Relay enabled");

        let router = dioxus::server::router(App)
            .route("/api/search-location", get(search_location_handler))
            .route("/health", get(health_handler))
            .layer(Extension(relay_state));

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Car Rental Location Finder initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
