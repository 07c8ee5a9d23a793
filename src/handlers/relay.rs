//! Location search relay
//!
//! Forwards `GET /api/search-location?query=` to the upstream car-rental API
//! with the credential headers attached server-side, so the browser never
//! talks to the API host directly.

use std::time::Duration;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::DEFAULT_API_HOST;
use crate::domain::services::search_client::{API_HOST_HEADER, API_KEY_HEADER, SEARCH_ENDPOINT};
use crate::shared::logging::{log_relay_error, log_relay_forward, log_relay_upstream};

/// Upstream requests give up after this long.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Error bodies that are not JSON are cut to this many characters.
const ERROR_TEXT_LIMIT: usize = 500;

/// Relay configuration shared by all requests
#[derive(Clone)]
pub struct RelayState {
    pub api_key: String,
    pub api_host: String,
    pub upstream_base_url: String,
    pub client: Client,
}

impl RelayState {
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> anyhow::Result<Self> {
        let api_host = api_host.into();
        let upstream_base_url = format!("https://{api_host}");
        Self::with_upstream(api_key, api_host, upstream_base_url, UPSTREAM_TIMEOUT)
    }

    /// Same as [`RelayState::new`] but sends requests to `upstream_base_url`
    /// instead of `https://{api_host}` and gives up after `timeout`.
    pub fn with_upstream(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
        upstream_base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            upstream_base_url: upstream_base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Reads `RAPIDAPI_KEY` and `RAPIDAPI_HOST` from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("RAPIDAPI_KEY").unwrap_or_default();
        let api_host =
            std::env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
        Self::new(api_key, api_host)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.upstream_base_url, SEARCH_ENDPOINT)
    }
}

/// A failed relay call: HTTP status plus the `{status:false, ...}` body.
#[derive(Debug)]
pub struct RelayError {
    status: StatusCode,
    body: Value,
}

impl RelayError {
    fn new(status: StatusCode, message: impl Into<String>, error: &str) -> Self {
        Self {
            status,
            body: json!({
                "status": false,
                "message": message.into(),
                "error": error,
            }),
        }
    }

    fn missing_query() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Query parameter is required",
            "Missing query parameter",
        )
    }

    fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            log_relay_error("timeout", &err.to_string());
            Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                "Request timeout. The API took too long to respond.",
                "Timeout",
            )
        } else if err.is_connect() {
            log_relay_error("connect", &err.to_string());
            Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Unable to connect to the API. Please check your internet connection.",
                "Connection Error",
            )
        } else {
            log_relay_error("request", &err.to_string());
            Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("API request failed: {err}"),
                "Request Exception",
            )
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// The `query` parameter; when repeated, the first value wins.
fn first_query(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// GET /api/search-location?query=
pub async fn search_location_handler(
    Extension(state): Extension<RelayState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, RelayError> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let query = first_query(params).ok_or_else(RelayError::missing_query)?;

    let url = state.endpoint();
    log_relay_forward(&query, &url);

    let response = state
        .client
        .get(&url)
        .query(&[("query", query.as_str())])
        .header(API_KEY_HEADER, &state.api_key)
        .header(API_HOST_HEADER, &state.api_host)
        .send()
        .await
        .map_err(|e| RelayError::from_transport(&e))?;

    let upstream_status = response.status().as_u16();
    log_relay_upstream(upstream_status);
    let status = StatusCode::from_u16(upstream_status).unwrap_or(StatusCode::BAD_GATEWAY);

    let text = response
        .text()
        .await
        .map_err(|e| RelayError::from_transport(&e))?;
    let parsed = serde_json::from_str::<Value>(&text);

    if status == StatusCode::OK {
        return match parsed {
            Ok(body) => Ok((StatusCode::OK, Json(body)).into_response()),
            Err(e) => {
                log_relay_error("decode", &e.to_string());
                Err(RelayError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("API request failed: {e}"),
                    "Request Exception",
                ))
            }
        };
    }

    match parsed {
        Ok(body) => {
            tracing::warn!(upstream_status, "Passing upstream error body through");
            Ok((status, Json(body)).into_response())
        }
        Err(_) => {
            let error_text: String = text.chars().take(ERROR_TEXT_LIMIT).collect();
            tracing::warn!(upstream_status, error = %error_text, "Upstream error was not JSON");
            Ok((
                status,
                Json(json!({
                    "status": false,
                    "message": format!("API returned status {upstream_status}"),
                    "error": error_text,
                    "endpoint_used": SEARCH_ENDPOINT,
                    "suggestion": "Please verify the endpoint path matches the RapidAPI documentation",
                })),
            )
                .into_response())
        }
    }
}

/// GET /health
pub async fn health_handler(Extension(state): Extension<RelayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running",
        "api_host": state.api_host,
    }))
}
