//! HTTP API client with bearer-token authentication.
//!
//! Every request goes through [`ApiClient::execute`], which classifies the
//! response. A 401 is reported to the unauthorized hook before the error is
//! returned, so the session is dropped no matter which call triggered it.

use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wishlist_shared::ApiError;

/// Callback fired when the server answers 401.
#[derive(Clone)]
pub struct UnauthorizedHook(Rc<dyn Fn()>);

impl fmt::Debug for UnauthorizedHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnauthorizedHook")
    }
}

/// HTTP client for the wishlist REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
            on_unauthorized: None,
        }
    }

    /// Set the base URL for API requests, including the `/api` prefix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(UnauthorizedHook(Rc::new(hook)));
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    fn authorize(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.client.get(self.url(path));
        self.execute("GET", path, rb).await
    }

    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self.client.post(self.url(path)).json(body);
        self.execute("POST", path, rb).await
    }

    /// POST an empty JSON object to an action endpoint.
    pub async fn post_empty<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        self.execute("POST", path, self.empty_post(path)).await
    }

    /// Strict JSON body parsers reject a bare `null`, so actions send `{}`.
    fn empty_post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .json(&serde_json::Map::new())
    }

    pub async fn put_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self.client.put(self.url(path)).json(body);
        self.execute("PUT", path, rb).await
    }

    pub async fn delete_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.client.delete(self.url(path));
        self.execute("DELETE", path, rb).await
    }

    /// POST a multipart form (file uploads).
    pub async fn post_multipart<TRes: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<TRes, ApiError> {
        let rb = self.client.post(self.url(path)).multipart(form);
        self.execute("POST", path, rb).await
    }

    async fn execute<TRes: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        rb: RequestBuilder,
    ) -> Result<TRes, ApiError> {
        tracing::debug!("{method} {path}");

        let resp = self.authorize(rb).send().await.map_err(|e| {
            tracing::error!("{method} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            let err = ApiError::from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                text,
            );
            tracing::warn!("{method} {path} -> {}", status.as_u16());
            return Err(self.reject(err));
        }

        decode_body(&text)
    }

    /// Run the unauthorized hook for 401s and hand the error back.
    pub(crate) fn reject(&self, err: ApiError) -> ApiError {
        if err.is_unauthorized() {
            if let Some(hook) = &self.on_unauthorized {
                (hook.0)();
            }
        }
        err
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a success body; an empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{CredentialStore, Credentials};
    use crate::storage::MemoryStorage;
    use std::cell::Cell;
    use wishlist_shared::{MessageResponse, User};

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new().with_base_url("http://localhost:5000/api/");
        assert_eq!(client.url("/wishlists"), "http://localhost:5000/api/wishlists");
        assert_eq!(client.url("auth/me"), "http://localhost:5000/api/auth/me");
        assert_eq!(client.url("https://cdn.example.com/x"), "https://cdn.example.com/x");
    }

    #[test]
    fn url_without_base_is_root_relative() {
        let client = ApiClient::new();
        assert_eq!(client.url("wishlists"), "/wishlists");
    }

    #[test]
    fn empty_token_is_not_attached() {
        assert!(!ApiClient::new().with_token(Some(String::new())).has_token());
        assert!(ApiClient::new().with_token(Some("t".into())).has_token());
    }

    #[test]
    fn unauthorized_clears_stored_token() {
        let memory = MemoryStorage::new();
        let store = CredentialStore::new(memory.clone());
        store.save(&Credentials {
            token: "expired".to_string(),
            user: User {
                id: "u1".to_string(),
                username: "ana".to_string(),
                email: None,
                avatar: None,
            },
        });

        let hook_store = store.clone();
        let client = ApiClient::new()
            .with_token(store.token())
            .with_unauthorized_hook(move || hook_store.clear());

        let err = client.reject(ApiError::from_response(401, "Unauthorized", String::new()));

        assert!(err.is_unauthorized());
        assert_eq!(store.token(), None);
        assert!(memory.is_empty());
    }

    #[test]
    fn other_errors_leave_session_alone() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let client = ApiClient::new().with_unauthorized_hook(move || flag.set(true));

        client.reject(ApiError::from_response(403, "Forbidden", String::new()));
        client.reject(ApiError::Network("offline".into()));

        assert!(!fired.get());
    }

    #[test]
    fn action_posts_send_an_empty_object() {
        let request = ApiClient::new()
            .with_base_url("http://localhost:5000/api")
            .empty_post("/wishlists/join/AB12CD")
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:5000/api/wishlists/join/AB12CD");
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn empty_body_decodes_as_null() {
        assert!(decode_body::<()>("").is_ok());
        let missing: Option<MessageResponse> = decode_body("  ").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn malformed_body_is_a_deserialize_error() {
        let err = decode_body::<MessageResponse>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }
}
