//! Authentication session with persistent credential storage.
//!
//! Credentials are kept under two keys, `token` and `user`. A 401 from any
//! API call goes through [`AuthContext::expire`], which clears both keys and
//! raises `session_expired` for the app layout to act on.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use wishlist_shared::User;

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::storage::{KeyValueStore, LocalStorage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Stored session data
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Reads and writes [`Credentials`] in a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct CredentialStore<S = LocalStorage> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Both keys must be present and the user must decode.
    pub fn load(&self) -> Option<Credentials> {
        let token = self.token()?;
        let user = self.store.load_json::<User>(USER_KEY)?;
        Some(Credentials { token, user })
    }

    pub fn save(&self, credentials: &Credentials) -> bool {
        self.store.set(TOKEN_KEY, &credentials.token) && self.save_user(&credentials.user)
    }

    pub fn save_user(&self, user: &User) -> bool {
        self.store.save_json(USER_KEY, user)
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

/// Credential store behind the app's session.
pub type SessionStore = CredentialStore<Rc<dyn KeyValueStore>>;

/// Authentication context provided to the app
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: Signal<Option<Credentials>>,
    /// Set when a request came back 401; cleared on the next sign-in.
    pub session_expired: Signal<bool>,
    api_base_url: Signal<String>,
    store: CopyValue<SessionStore>,
}

/// Provider component that sets up auth context. Expects a
/// [`ClientConfig`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    use_context_provider(|| {
        let backend: Rc<dyn KeyValueStore> = Rc::new(LocalStorage);
        AuthContext::new(CredentialStore::new(backend), config.api_base_url.clone())
    });

    children
}

impl AuthContext {
    /// Load the stored session. Must run inside a component scope.
    pub fn new(store: SessionStore, api_base_url: String) -> Self {
        Self {
            session: Signal::new(store.load()),
            session_expired: Signal::new(false),
            api_base_url: Signal::new(api_base_url),
            store: CopyValue::new(store),
        }
    }

    /// Store credentials returned by login or register.
    pub fn sign_in(&mut self, credentials: Credentials) {
        if !self.store.read().save(&credentials) {
            tracing::warn!("could not persist credentials; session will not survive a reload");
        }
        self.session.set(Some(credentials));
        self.session_expired.set(false);
    }

    /// Replace the cached user after a profile update or `/auth/me` refresh.
    pub fn update_user(&mut self, user: User) {
        self.store.read().save_user(&user);
        if let Some(credentials) = &mut *self.session.write() {
            credentials.user = user;
        }
    }

    /// Logout and clear session
    pub fn sign_out(&mut self) {
        self.store.read().clear();
        self.session.set(None);
    }

    /// Drop the session after the server rejected the token.
    pub fn expire(&mut self) {
        tracing::warn!("session expired, clearing stored credentials");
        self.store.read().clear();
        self.session.set(None);
        self.session_expired.set(true);
    }

    /// Create an API client configured for the current session.
    /// Does not subscribe the caller to session changes.
    pub fn client(&self) -> ApiClient {
        let token = self.session.peek().as_ref().map(|c| c.token.clone());
        let ctx = *self;

        ApiClient::new()
            .with_base_url(self.api_base_url.peek().clone())
            .with_token(token)
            .with_unauthorized_hook(move || {
                let mut auth = ctx;
                auth.expire();
            })
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().as_ref().map(|c| c.user.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.read().as_ref().map(|c| c.user.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use dioxus::dioxus_core::VirtualDom;
    use wishlist_shared::ApiError;

    /// (error was 401, storage emptied, session cleared, expiry raised)
    type ExpiryOutcome = (bool, bool, bool, bool);

    thread_local! {
        static EXPIRY: RefCell<Option<ExpiryOutcome>> = const { RefCell::new(None) };
    }

    fn credentials() -> Credentials {
        Credentials {
            token: "jwt-token".to_string(),
            user: User {
                id: "u1".to_string(),
                username: "ana".to_string(),
                email: Some("ana@example.com".to_string()),
                avatar: None,
            },
        }
    }

    #[test]
    fn save_then_load_restores_credentials() {
        let store = CredentialStore::new(MemoryStorage::new());
        assert!(store.save(&credentials()));
        assert_eq!(store.load(), Some(credentials()));
    }

    #[test]
    fn load_requires_both_keys() {
        let memory = MemoryStorage::new();
        let store = CredentialStore::new(memory.clone());
        memory.set(TOKEN_KEY, "jwt-token");
        assert_eq!(store.load(), None);

        memory.remove(TOKEN_KEY);
        store.save_user(&credentials().user);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let memory = MemoryStorage::new();
        memory.set(TOKEN_KEY, "  ");
        assert_eq!(CredentialStore::new(memory).token(), None);
    }

    #[test]
    fn clear_removes_token_and_user() {
        let memory = MemoryStorage::new();
        let store = CredentialStore::new(memory.clone());
        store.save(&credentials());
        store.clear();
        assert!(memory.is_empty());
    }

    fn expiring_app() -> Element {
        let memory = use_hook(MemoryStorage::new);
        let auth = use_hook(|| {
            let backend: Rc<dyn KeyValueStore> = Rc::new(memory.clone());
            let store = CredentialStore::new(backend);
            store.save(&credentials());
            AuthContext::new(store, "http://localhost:5000/api".to_string())
        });

        use_hook(|| {
            let client = auth.client();
            assert!(client.has_token());
            let err = client.reject(ApiError::from_response(401, "Unauthorized", String::new()));
            let outcome = (
                err.is_unauthorized(),
                memory.is_empty(),
                auth.session.peek().is_none(),
                *auth.session_expired.peek(),
            );
            EXPIRY.with(|slot| *slot.borrow_mut() = Some(outcome));
        });

        rsx! {}
    }

    #[test]
    fn unauthorized_response_expires_the_session() {
        let mut dom = VirtualDom::new(expiring_app);
        dom.rebuild_in_place();
        assert_eq!(
            EXPIRY.with(|slot| *slot.borrow()),
            Some((true, true, true, true))
        );
    }
}
