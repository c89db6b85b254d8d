//! Client configuration from build-time environment variables.
//!
//! - `WISHLIST_API_URL`: REST base URL, including the `/api` prefix
//!   (default: `http://localhost:5000/api`)
//! - `WISHLIST_SOCKET_URL`: socket server URL; `http(s)` is accepted and
//!   converted to `ws(s)` (default: `http://localhost:5000`)

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SOCKET_URL: &str = "http://localhost:5000";

/// Path appended to the socket URL when it has none.
pub const SOCKET_PATH: &str = "/ws";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub socket_url: String,
}

impl ClientConfig {
    /// Read the values baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("WISHLIST_API_URL"),
            option_env!("WISHLIST_SOCKET_URL"),
        )
    }

    pub fn from_values(api_url: Option<&str>, socket_url: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .trim_end_matches('/')
                .to_string()
        };

        Self {
            api_base_url: pick(api_url, DEFAULT_API_URL),
            socket_url: pick(socket_url, DEFAULT_SOCKET_URL),
        }
    }

    /// WebSocket endpoint derived from `socket_url`.
    ///
    /// Returns `None` when the configured value is not a valid URL.
    pub fn socket_endpoint(&self) -> Option<String> {
        let mut url = Url::parse(&self.socket_url).ok()?;
        let scheme = match url.scheme() {
            "http" | "ws" => "ws",
            "https" | "wss" => "wss",
            _ => return None,
        };
        url.set_scheme(scheme).ok()?;
        if url.path().is_empty() || url.path() == "/" {
            url.set_path(SOCKET_PATH);
        }
        Some(url.to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_or_blank_values() {
        let config = ClientConfig::from_values(None, Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.socket_url, DEFAULT_SOCKET_URL);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::from_values(Some("https://api.gifts.app/api/"), None);
        assert_eq!(config.api_base_url, "https://api.gifts.app/api");
    }

    #[test]
    fn socket_endpoint_switches_scheme_and_adds_path() {
        let config = ClientConfig::from_values(None, Some("https://gifts.app"));
        assert_eq!(config.socket_endpoint().as_deref(), Some("wss://gifts.app/ws"));

        let local = ClientConfig::default();
        assert_eq!(local.socket_endpoint().as_deref(), Some("ws://localhost:5000/ws"));
    }

    #[test]
    fn socket_endpoint_keeps_explicit_path() {
        let config = ClientConfig::from_values(None, Some("ws://10.0.0.2:4000/realtime"));
        assert_eq!(
            config.socket_endpoint().as_deref(),
            Some("ws://10.0.0.2:4000/realtime")
        );
    }

    #[test]
    fn socket_endpoint_rejects_garbage() {
        let config = ClientConfig::from_values(None, Some("not a url"));
        assert_eq!(config.socket_endpoint(), None);
    }
}
