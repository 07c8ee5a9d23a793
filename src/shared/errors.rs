use thiserror::Error;

use crate::config::ConfigError;

/// Why a search attempt ended without results.
///
/// `Display` is the message shown to the user: it names the likely cause and,
/// where one exists, the fix. A valid empty answer is not an error, see
/// [`crate::domain::models::SearchOutcome::NoResults`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("API configuration is missing ({0}). Provide an API key and host, or enable proxy mode.")]
    ConfigurationMissing(ConfigError),

    #[error("Please enter a location to search.")]
    EmptyQuery,

    #[error("A search is already running. Please wait for it to finish.")]
    SearchInProgress,

    #[error(
        "Authentication failed ({status}). Please verify:\n\
         1. Your API key is correct\n\
         2. You have an active subscription to the Expedia13 API on RapidAPI\n\
         3. Your subscription hasn't expired"
    )]
    Unauthorized { status: u16 },

    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    #[error(
        "Endpoint not found (404). Possible causes:\n\
         1. Your API subscription may not include this endpoint\n\
         2. The API may have changed\n\
         3. The request may be blocked by the browser (CORS)\n\n\
         Please verify your subscription at https://rapidapi.com/apiheya/api/expedia13 \
         and try proxy mode if the problem persists.\n\n\
         Requested URL: {url}"
    )]
    NotFound { url: String },

    #[error("Server error ({status}). The API server may be experiencing issues. Please try again later.")]
    ServerError { status: u16 },

    #[error("API request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error(
        "Network error: Unable to connect to the API. This could be due to:\n\
         1. No internet connection\n\
         2. The browser blocking the cross-origin request (CORS)\n\
         3. The API server being down\n\n\
         Solution: switch to proxy mode and run the bundled relay server. ({detail})"
    )]
    NetworkFailure { detail: String },

    #[error("Proxy server error: {message}\n\nMake sure the proxy server is running on {proxy_url}")]
    ProxyFailure { message: String, proxy_url: String },
}

impl SearchError {
    /// Maps a non-2xx status from the remote API to its error kind.
    ///
    /// `message` is whatever could be read from the error body; only the
    /// catch-all kind shows it.
    pub fn from_status(status: u16, url: &str, message: String) -> Self {
        match status {
            401 | 403 => SearchError::Unauthorized { status },
            429 => SearchError::RateLimited,
            404 => SearchError::NotFound {
                url: url.to_string(),
            },
            s if s >= 500 => SearchError::ServerError { status },
            _ => SearchError::RequestFailed { status, message },
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(err: ConfigError) -> Self {
        SearchError::ConfigurationMissing(err)
    }
}
