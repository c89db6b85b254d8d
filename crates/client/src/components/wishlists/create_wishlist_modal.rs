use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::Wishlist;

use crate::components::ui::{
    Button, ButtonVariant, Checkbox, ErrorBanner, Modal, ModalFooter, TextArea, TextField,
};
use crate::forms::WishlistDraft;
use crate::session::AuthContext;

/// Modal for creating a new wishlist
#[component]
pub fn CreateWishlistModal(on_close: EventHandler<()>, on_created: EventHandler<Wishlist>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut draft = use_signal(WishlistDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match draft.read().to_create() {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        is_loading.set(true);
        spawn(async move {
            match auth.client().create_wishlist(&request).await {
                Ok(wishlist) => {
                    tracing::info!("created wishlist {}", wishlist.id);
                    on_created.call(wishlist);
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        Modal {
            title: "Create Wishlist",
            subtitle: "Collect gift ideas and share them with friends",
            on_close,
            form { onsubmit: handle_submit,
                div { class: "p-6 space-y-4",
                    TextField {
                        label: "Title",
                        required: true,
                        autofocus: true,
                        placeholder: "Birthday 2026",
                        value: draft.read().title.clone(),
                        oninput: move |v| {
                            draft.write().title = v;
                            error.set(None);
                        },
                    }
                    TextArea {
                        label: "Description",
                        placeholder: "What is this list for?",
                        value: draft.read().description.clone(),
                        oninput: move |v| draft.write().description = v,
                    }
                    Checkbox {
                        label: "Public (anyone with the link can view)",
                        checked: draft.read().is_public,
                        onchange: move |v| draft.write().is_public = v,
                    }
                    if let Some(err) = error.read().as_ref() {
                        ErrorBanner { message: err.clone() }
                    }
                }
                ModalFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: !draft.read().is_submittable(),
                        loading: *is_loading.read(),
                        loading_label: "Creating...",
                        "Create Wishlist"
                    }
                }
            }
        }
    }
}
