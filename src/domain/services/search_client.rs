//! Location search against the RapidAPI endpoint, directly or via the relay.
//!
//! The transport is picked once from [`ApiConfig`]; after that callers only
//! see [`SearchClient::fetch_locations`]. Failures come back classified as
//! [`SearchError`]; a well-formed answer without locations is
//! [`SearchOutcome::NoResults`]. Nothing is retried.

use serde_json::Value;

use crate::config::ApiConfig;
use crate::domain::models::{LocationRecord, ResultSet, SearchOutcome, SearchQuery};
use crate::infrastructure::http::{self, HttpResponse};
use crate::shared::errors::SearchError;
use crate::shared::logging::{
    log_search_failure, log_search_request, log_search_response, log_search_success,
};

/// Path of the location search on the API host.
pub const SEARCH_ENDPOINT: &str = "/api/v1/car/search-location";
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Calls the API from the client with the credentials attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectClient {
    api_key: String,
    api_host: String,
    base_url: String,
}

impl DirectClient {
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        let api_host = api_host.into();
        Self {
            api_key: api_key.into(),
            base_url: format!("https://{api_host}"),
            api_host,
        }
    }

    /// Sends requests to `base_url` instead of `https://{api_host}`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn request_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}{}?query={}",
            self.base_url.trim_end_matches('/'),
            SEARCH_ENDPOINT,
            query.url_encoded()
        )
    }

    pub async fn fetch_locations(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        const MODE: &str = "direct";

        let url = self.request_url(query);
        log_search_request(MODE, &url, Some(&self.api_key));

        let headers = [
            (API_KEY_HEADER, self.api_key.as_str()),
            (API_HOST_HEADER, self.api_host.as_str()),
        ];
        let response = http::get(&url, &headers).await.map_err(|e| {
            let err = SearchError::NetworkFailure {
                detail: e.to_string(),
            };
            log_search_failure(MODE, &url, None, &e.to_string());
            err
        })?;
        log_search_response(MODE, response.status, &response.status_text);

        if !response.is_success() {
            let message = api_error_message(&response);
            log_search_failure(MODE, &url, Some(response.status), &message);
            return Err(SearchError::from_status(response.status, &url, message));
        }

        let outcome = parse_payload(&response.body);
        log_search_success(MODE, outcome_len(&outcome));
        Ok(outcome)
    }
}

/// Calls the same-origin relay, which injects the credentials itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClient {
    proxy_url: String,
}

impl ProxyClient {
    pub fn new(proxy_url: impl Into<String>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
        }
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    pub fn request_url(&self, query: &SearchQuery) -> String {
        let separator = if self.proxy_url.contains('?') { '&' } else { '?' };
        format!("{}{}query={}", self.proxy_url, separator, query.url_encoded())
    }

    pub async fn fetch_locations(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        const MODE: &str = "proxy";

        let url = self.request_url(query);
        log_search_request(MODE, &url, None);

        let response = http::get(&url, &[]).await.map_err(|e| {
            log_search_failure(MODE, &url, None, &e.to_string());
            self.failure(e.to_string())
        })?;
        log_search_response(MODE, response.status, &response.status_text);

        if !response.is_success() {
            let message = proxy_error_message(&response);
            log_search_failure(MODE, &url, Some(response.status), &message);
            return Err(self.failure(message));
        }

        let outcome = parse_payload(&response.body);
        log_search_success(MODE, outcome_len(&outcome));
        Ok(outcome)
    }

    fn failure(&self, message: String) -> SearchError {
        SearchError::ProxyFailure {
            message,
            proxy_url: self.proxy_url.clone(),
        }
    }
}

/// The transport chosen for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchClient {
    Direct(DirectClient),
    Proxy(ProxyClient),
}

impl SearchClient {
    /// Validates the configuration and picks the transport.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SearchError> {
        config.validate()?;
        if config.use_proxy {
            Ok(SearchClient::Proxy(ProxyClient::new(config.proxy_url.trim())))
        } else {
            Ok(SearchClient::Direct(DirectClient::new(
                config.api_key.trim(),
                config.api_host.trim(),
            )))
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            SearchClient::Direct(_) => "direct",
            SearchClient::Proxy(_) => "proxy",
        }
    }

    pub async fn fetch_locations(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        match self {
            SearchClient::Direct(client) => client.fetch_locations(query).await,
            SearchClient::Proxy(client) => client.fetch_locations(query).await,
        }
    }
}

/// One-shot search with a configuration object.
pub async fn search(query: &SearchQuery, config: &ApiConfig) -> Result<SearchOutcome, SearchError> {
    SearchClient::from_config(config)?
        .fetch_locations(query)
        .await
}

/// Reads `{ status, data: [...] }`.
///
/// Anything that is not an object with a non-empty `data` array is
/// `NoResults`. A `status` that is present but falsy also means no results; a
/// missing `status` alongside data is accepted.
pub fn parse_payload(body: &str) -> SearchOutcome {
    let Ok(Value::Object(mut payload)) = serde_json::from_str::<Value>(body) else {
        return SearchOutcome::NoResults;
    };

    if payload.get("status").is_some_and(|status| !is_truthy(status)) {
        return SearchOutcome::NoResults;
    }

    let Some(Value::Array(items)) = payload.remove("data") else {
        return SearchOutcome::NoResults;
    };

    let records: Vec<LocationRecord> = items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect();

    if records.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Found(ResultSet::new(records))
    }
}

/// JavaScript truthiness, which is what the API's `status` flag follows.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Best-effort message from an API error body.
///
/// JSON bodies give `message`, then `error`, then the whole document; other
/// bodies are used as text. Falls back to the status text.
pub fn api_error_message(response: &HttpResponse) -> String {
    let message = if response.is_json() {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(json) => non_empty_str(json.get("message"))
                .or_else(|| non_empty_str(json.get("error")))
                .map(str::to_string)
                .unwrap_or_else(|| json.to_string()),
            Err(e) => format!("Unable to parse error response: {e}"),
        }
    } else {
        response.body.trim().to_string()
    };

    if message.is_empty() {
        response.status_text.clone()
    } else {
        message
    }
}

/// Message from a relay error body: its `message`, else a generic line.
pub fn proxy_error_message(response: &HttpResponse) -> String {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(json) => non_empty_str(json.get("message"))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Proxy error: {}", response.status)),
        Err(_) if !response.status_text.is_empty() => response.status_text.clone(),
        Err(_) => format!("Proxy error: {}", response.status),
    }
}

fn outcome_len(outcome: &SearchOutcome) -> usize {
    match outcome {
        SearchOutcome::Found(results) => results.len(),
        SearchOutcome::NoResults => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::parse(text).unwrap()
    }

    fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: "Bad Request".to_string(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn direct_url_uses_api_host_and_encodes_query() {
        let client = DirectClient::new("key", "expedia13.p.rapidapi.com");
        assert_eq!(
            client.request_url(&query("New York")),
            "https://expedia13.p.rapidapi.com/api/v1/car/search-location?query=New%20York"
        );

        let client = client.with_base_url("http://127.0.0.1:9999/");
        assert_eq!(
            client.request_url(&query("Paris")),
            "http://127.0.0.1:9999/api/v1/car/search-location?query=Paris"
        );
    }

    #[test]
    fn proxy_url_appends_query_parameter() {
        let client = ProxyClient::new("http://localhost:5000/api/search-location");
        assert_eq!(
            client.request_url(&query("Kigali")),
            "http://localhost:5000/api/search-location?query=Kigali"
        );

        let client = ProxyClient::new("http://localhost:5000/search?v=2");
        assert_eq!(
            client.request_url(&query("Kigali")),
            "http://localhost:5000/search?v=2&query=Kigali"
        );
    }

    #[test]
    fn client_selection_follows_config() {
        let client = SearchClient::from_config(&ApiConfig::direct("key", "host")).unwrap();
        assert_eq!(client.mode(), "direct");

        let client = SearchClient::from_config(&ApiConfig::proxy("http://relay/api")).unwrap();
        assert_eq!(client.mode(), "proxy");

        assert_eq!(
            SearchClient::from_config(&ApiConfig::direct("", "host")),
            Err(SearchError::ConfigurationMissing(ConfigError::MissingApiKey))
        );
    }

    #[test]
    fn payload_with_records_is_found() {
        let outcome = parse_payload(
            r#"{ "status": true, "data": [ { "type": "CITY" }, { "type": "AIRPORT" } ] }"#,
        );
        let SearchOutcome::Found(results) = outcome else {
            panic!("expected results");
        };
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].kind(), Some("AIRPORT"));
    }

    #[test]
    fn empty_or_malformed_payloads_are_no_results() {
        for body in [
            r#"{ "status": true, "data": [] }"#,
            r#"{ "status": false, "data": [ { "type": "CITY" } ] }"#,
            r#"{ "status": 0, "data": [ { "type": "CITY" } ] }"#,
            r#"{ "status": true, "data": "nope" }"#,
            r#"{ "status": true }"#,
            r#"[ { "type": "CITY" } ]"#,
            "null",
            "not json at all",
            "",
        ] {
            assert_eq!(parse_payload(body), SearchOutcome::NoResults, "body: {body}");
        }
    }

    #[test]
    fn missing_status_with_data_is_accepted() {
        let outcome = parse_payload(r#"{ "data": [ { "type": "CITY" } ] }"#);
        assert!(matches!(outcome, SearchOutcome::Found(ref r) if r.len() == 1));
    }

    #[test]
    fn malformed_items_become_blank_records() {
        let SearchOutcome::Found(results) = parse_payload(r#"{ "status": "ok", "data": [ 42 ] }"#)
        else {
            panic!("expected results");
        };
        assert_eq!(results[0], LocationRecord::default());
    }

    #[test]
    fn api_error_message_prefers_message_then_error() {
        let json = Some("application/json");
        assert_eq!(
            api_error_message(&response(400, json, r#"{ "message": "Invalid query" }"#)),
            "Invalid query"
        );
        assert_eq!(
            api_error_message(&response(400, json, r#"{ "error": "Bad input" }"#)),
            "Bad input"
        );
        assert_eq!(
            api_error_message(&response(400, json, r#"{ "code": 7 }"#)),
            r#"{"code":7}"#
        );
        assert!(api_error_message(&response(400, json, "{oops")).starts_with("Unable to parse"));
    }

    #[test]
    fn api_error_message_uses_text_or_status_text() {
        assert_eq!(
            api_error_message(&response(400, Some("text/plain"), " quota exceeded \n")),
            "quota exceeded"
        );
        assert_eq!(api_error_message(&response(400, None, "")), "Bad Request");
    }

    #[test]
    fn proxy_error_message_fallbacks() {
        assert_eq!(
            proxy_error_message(&response(502, None, r#"{ "message": "Upstream down" }"#)),
            "Upstream down"
        );
        assert_eq!(
            proxy_error_message(&response(502, None, r#"{ "status": false }"#)),
            "Proxy error: 502"
        );
        assert_eq!(
            proxy_error_message(&response(502, None, "<html>")),
            "Bad Request"
        );
    }

    #[test]
    fn status_flag_truthiness() {
        assert!(is_truthy(&Value::Bool(true)));
        assert!(is_truthy(&serde_json::json!(1)));
        assert!(is_truthy(&serde_json::json!("ok")));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
    }
}
