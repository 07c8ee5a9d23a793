//! Mock upstreams for the integration tests

#![allow(dead_code)]

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use car_rental_location_finder::domain::services::search_client::{
    API_HOST_HEADER, API_KEY_HEADER, SEARCH_ENDPOINT,
};

/// Serves `router` on an ephemeral port, returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Upstream that answers every search with the same response.
pub fn fixed_upstream(status: u16, content_type: &'static str, body: String) -> Router {
    Router::new().route(
        SEARCH_ENDPOINT,
        get(move || {
            let body = body.clone();
            async move {
                (
                    StatusCode::from_u16(status).unwrap(),
                    [(header::CONTENT_TYPE, content_type)],
                    body,
                )
            }
        }),
    )
}

pub fn json_upstream(status: u16, body: Value) -> Router {
    fixed_upstream(status, "application/json", body.to_string())
}

/// Upstream that answers only after `delay`.
pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().route(
        SEARCH_ENDPOINT,
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({ "status": true, "data": [] }))
        }),
    )
}

/// Upstream that echoes the credential headers and the query as one CITY record.
pub fn echo_upstream() -> Router {
    Router::new().route(
        SEARCH_ENDPOINT,
        get(
            |headers: HeaderMap, axum::extract::Query(params): axum::extract::Query<Vec<(String, String)>>| async move {
                let header_value = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                let query = params
                    .into_iter()
                    .find(|(key, _)| key == "query")
                    .map(|(_, value)| value)
                    .unwrap_or_default();
                Json(json!({
                    "status": true,
                    "data": [{
                        "type": "CITY",
                        "gaiaId": header_value(API_KEY_HEADER),
                        "regionNames": {
                            "shortName": query,
                            "secondaryDisplayName": header_value(API_HOST_HEADER),
                        },
                    }],
                }))
            },
        ),
    )
}

/// The two records the API returns for "Paris", in API order.
pub fn paris_payload() -> Value {
    json!({
        "status": true,
        "data": [
            {
                "type": "CITY",
                "index": 0,
                "gaiaId": "2734",
                "regionNames": {
                    "fullName": "Paris, France",
                    "shortName": "Paris",
                    "primaryDisplayName": "Paris",
                    "secondaryDisplayName": "France",
                    "displayName": "Paris, France"
                },
                "coordinates": { "lat": "48.853564", "long": "2.348095" },
                "hierarchyInfo": {
                    "country": { "name": "France", "isoCode2": "FR" }
                }
            },
            {
                "type": "AIRPORT",
                "index": 1,
                "gaiaId": "4055",
                "regionNames": {
                    "fullName": "Paris (CDG - Charles de Gaulle), France",
                    "shortName": "Paris (CDG - Charles de Gaulle)",
                    "primaryDisplayName": "Paris (CDG - Charles de Gaulle)",
                    "secondaryDisplayName": "France",
                    "displayName": "Paris (CDG - Charles de Gaulle), France"
                },
                "coordinates": { "lat": 49.0097, "long": 2.5479 },
                "hierarchyInfo": {
                    "country": { "name": "France", "isoCode2": "FR" },
                    "airport": { "airportCode": "CDG" }
                }
            }
        ]
    })
}
