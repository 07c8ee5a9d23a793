//! Minimal HTTP GET used by the search clients.
//!
//! The browser build goes through `gloo-net` (fetch), native builds through
//! `reqwest`. Both hand back the status line, content type and body text so
//! response classification stays platform independent.

use thiserror::Error;

/// Everything the search clients need from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, blocked by CORS, ...
    #[error("{0}")]
    Network(String),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

#[cfg(target_arch = "wasm32")]
pub async fn get(url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;

    let mut request = Request::get(url);
    for (name, value) in headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;

    Ok(HttpResponse {
        status,
        status_text,
        content_type,
        body,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get(url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
    let mut request = reqwest::Client::new().get(url);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            content_type: content_type.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn success_is_any_2xx() {
        assert!(response(200, None).is_success());
        assert!(response(204, None).is_success());
        assert!(!response(304, None).is_success());
        assert!(!response(404, None).is_success());
    }

    #[test]
    fn json_detection_ignores_charset() {
        assert!(response(400, Some("application/json; charset=utf-8")).is_json());
        assert!(!response(400, Some("text/plain")).is_json());
        assert!(!response(400, None).is_json());
    }
}
