/// Location search relay and health check
pub mod relay;

pub use relay::{health_handler, search_location_handler, RelayError, RelayState};

use axum::{routing::get, Extension, Router};

/// Relay routes with their state attached.
pub fn relay_routes(state: RelayState) -> Router {
    Router::new()
        .route("/api/search-location", get(search_location_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
}
