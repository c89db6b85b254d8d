use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::Wishlist;

use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Modal, ModalFooter};
use crate::session::AuthContext;

/// Shows the wishlist's invite code, generating one on request.
#[component]
pub fn InviteModal(
    wishlist: Wishlist,
    on_close: EventHandler<()>,
    on_code: EventHandler<String>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let mut code = use_signal(|| wishlist.invite_code.clone());
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);
    let wishlist_id = wishlist.id.clone();

    let generate = move |_: MouseEvent| {
        let wishlist_id = wishlist_id.clone();
        is_loading.set(true);
        error.set(None);
        spawn(async move {
            match auth.client().create_invite(&wishlist_id).await {
                Ok(invite) => {
                    tracing::info!("new invite code for {wishlist_id}");
                    code.set(Some(invite.invite_code.clone()));
                    on_code.call(invite.invite_code);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            is_loading.set(false);
        });
    };

    rsx! {
        Modal {
            title: "Invite Friends",
            subtitle: "Share this code so friends can join \"{wishlist.title}\"",
            on_close,
            div { class: "p-6 space-y-4",
                match code.read().as_ref() {
                    Some(code) => rsx! {
                        div { class: "text-center space-y-2",
                            p { class: "text-sm text-gray-400", "Invite code" }
                            p { class: "font-mono text-3xl tracking-widest text-white select-all bg-[#1e1f22] rounded-lg py-4",
                                "{code}"
                            }
                            p { class: "text-xs text-gray-500",
                                "Friends enter it from their dashboard with \"Join Wishlist\"."
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-400 text-center",
                            "This wishlist has no invite code yet."
                        }
                    },
                }
                if let Some(err) = error.read().as_ref() {
                    ErrorBanner { message: err.clone() }
                }
            }
            ModalFooter {
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Done" }
                Button {
                    loading: *is_loading.read(),
                    loading_label: "Generating...",
                    onclick: generate,
                    if code.read().is_some() { "New Code" } else { "Generate Code" }
                }
            }
        }
    }
}
