//! API configuration for the location search.
//!
//! The configuration is supplied from outside the app: in the browser it is
//! read from the global `window.CAR_RENTAL_CONFIG` object, natively from
//! environment variables. Everything else only ever reads it.

use serde::Deserialize;
use thiserror::Error;

/// Host of the RapidAPI location search service.
pub const DEFAULT_API_HOST: &str = "expedia13.p.rapidapi.com";

/// Where the bundled relay listens by default.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:5000/api/search-location";

/// Value shipped in the config template; never a usable key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_RAPIDAPI_KEY_HERE";

/// Name of the global object holding the browser configuration.
pub const WINDOW_CONFIG_KEY: &str = "CAR_RENTAL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("API host is missing")]
    MissingApiHost,

    #[error("proxy URL is missing")]
    MissingProxyUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    pub use_proxy: bool,
    pub proxy_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            use_proxy: false,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn direct(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            use_proxy: false,
            ..Self::default()
        }
    }

    pub fn proxy(proxy_url: impl Into<String>) -> Self {
        Self {
            use_proxy: true,
            proxy_url: proxy_url.into(),
            ..Self::default()
        }
    }

    /// True when the key is still the template placeholder.
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key.trim() == PLACEHOLDER_API_KEY
    }

    /// Checks that the selected transport has what it needs.
    ///
    /// Direct mode needs a key and a host. Proxy mode only needs the relay URL,
    /// credentials are injected by the relay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_proxy {
            if self.proxy_url.trim().is_empty() {
                return Err(ConfigError::MissingProxyUrl);
            }
            return Ok(());
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.api_host.trim().is_empty() {
            return Err(ConfigError::MissingApiHost);
        }
        Ok(())
    }

    /// Logs the active mode and warns about unusable credentials.
    pub fn warn_if_unusable(&self) {
        if self.use_proxy {
            tracing::info!(proxy_url = %self.proxy_url, "Location search configured for proxy mode");
            return;
        }
        if self.api_key.trim().is_empty() || self.has_placeholder_key() {
            tracing::warn!("API key not configured. Set RAPIDAPI_KEY or window.CAR_RENTAL_CONFIG.apiKey");
        }
    }

    /// Builds the configuration from compile-time environment values.
    ///
    /// Used by the browser build when no global config object exists.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: option_env!("RAPIDAPI_KEY").unwrap_or_default().to_string(),
            api_host: option_env!("RAPIDAPI_HOST")
                .map(str::to_string)
                .unwrap_or(defaults.api_host),
            use_proxy: option_env!("USE_PROXY").is_some_and(parse_flag),
            proxy_url: option_env!("PROXY_URL")
                .map(str::to_string)
                .unwrap_or(defaults.proxy_url),
        }
    }

    /// Reads `window.CAR_RENTAL_CONFIG`, falling back to build-time values.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::from_build_env();
        };
        let value = match js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(WINDOW_CONFIG_KEY)) {
            Ok(value) if value.is_object() => value,
            _ => {
                tracing::debug!("No window.{WINDOW_CONFIG_KEY} found, using build-time config");
                return Self::from_build_env();
            }
        };

        match serde_wasm_bindgen::from_value::<ApiConfig>(value) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid window.{WINDOW_CONFIG_KEY}: {}", e);
                Self::from_build_env()
            }
        }
    }

    /// Reads `RAPIDAPI_KEY`, `RAPIDAPI_HOST`, `USE_PROXY` and `PROXY_URL`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env_or("RAPIDAPI_KEY", defaults.api_key),
            api_host: env_or("RAPIDAPI_HOST", defaults.api_host),
            use_proxy: std::env::var("USE_PROXY").is_ok_and(|v| parse_flag(&v)),
            proxy_url: env_or("PROXY_URL", defaults.proxy_url),
        }
    }

    /// The configuration the running platform should use.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        let config = Self::from_window();
        #[cfg(not(target_arch = "wasm32"))]
        let config = Self::from_env();

        config.warn_if_unusable();
        config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_or(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::debug!("{key} not set, using default: {default:?}");
            default
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
