use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{ApiError, Wishlist};

use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Modal, ModalFooter, TextField};
use crate::session::AuthContext;

/// What a join attempt does to the modal.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// Hand the wishlist to the parent, which closes the modal.
    Joined(Wishlist),
    /// Stay open and show the message.
    Rejected(String),
}

impl JoinOutcome {
    pub fn from_result(result: Result<Wishlist, ApiError>) -> Self {
        match result {
            Ok(wishlist) => JoinOutcome::Joined(wishlist),
            Err(err) => {
                tracing::warn!("join with code failed: {err}");
                JoinOutcome::Rejected(err.user_message())
            }
        }
    }

    pub fn keeps_modal_open(&self) -> bool {
        matches!(self, JoinOutcome::Rejected(_))
    }
}

/// Modal for joining a wishlist with an invite code. Stays open on failure.
#[component]
pub fn JoinWishlistModal(on_close: EventHandler<()>, on_joined: EventHandler<Wishlist>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let invite_code = code.read().trim().to_string();
        if invite_code.is_empty() {
            error.set(Some("Invite code is required".to_string()));
            return;
        }

        is_loading.set(true);
        spawn(async move {
            let result = auth.client().join_wishlist(&invite_code).await;
            match JoinOutcome::from_result(result) {
                JoinOutcome::Joined(wishlist) => {
                    tracing::info!("joined wishlist {}", wishlist.id);
                    on_joined.call(wishlist);
                }
                JoinOutcome::Rejected(message) => {
                    error.set(Some(message));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        Modal {
            title: "Join Wishlist",
            subtitle: "Enter the invite code a friend shared with you",
            on_close,
            form { onsubmit: handle_submit,
                div { class: "p-6 space-y-4",
                    TextField {
                        label: "Invite Code",
                        required: true,
                        autofocus: true,
                        placeholder: "e.g. 7F3K9Q",
                        value: code.read().clone(),
                        oninput: move |v| {
                            code.set(v);
                            error.set(None);
                        },
                    }
                    if let Some(err) = error.read().as_ref() {
                        ErrorBanner { message: err.clone() }
                    }
                }
                ModalFooter {
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                    Button {
                        r#type: "submit",
                        disabled: code.read().trim().is_empty(),
                        loading: *is_loading.read(),
                        loading_label: "Joining...",
                        "Join"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_keeps_modal_open_with_server_message() {
        let err = ApiError::from_response(
            404,
            "Not Found",
            r#"{"message":"Invalid invite code"}"#.to_string(),
        );
        let outcome = JoinOutcome::from_result(Err(err));

        assert!(outcome.keeps_modal_open());
        assert_eq!(outcome, JoinOutcome::Rejected("Invalid invite code".to_string()));
    }

    #[test]
    fn unreachable_server_keeps_modal_open() {
        let outcome = JoinOutcome::from_result(Err(ApiError::Network("refused".into())));
        assert!(outcome.keeps_modal_open());
    }
}
