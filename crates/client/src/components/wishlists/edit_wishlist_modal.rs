use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::Wishlist;

use crate::components::ui::{
    Button, ButtonVariant, Checkbox, ErrorBanner, Modal, ModalFooter, TextArea, TextField,
};
use crate::forms::WishlistDraft;
use crate::session::AuthContext;

/// Owner-only settings: title, description, visibility, deletion.
#[component]
pub fn EditWishlistModal(
    wishlist: Wishlist,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Wishlist>,
    on_deleted: EventHandler<String>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let mut draft = use_signal(|| WishlistDraft::from_wishlist(&wishlist));
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let save_id = wishlist.id.clone();
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match draft.read().to_update() {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let wishlist_id = save_id.clone();

        is_saving.set(true);
        spawn(async move {
            match auth.client().update_wishlist(&wishlist_id, &request).await {
                Ok(updated) => on_saved.call(updated),
                Err(err) => {
                    error.set(Some(err.user_message()));
                    is_saving.set(false);
                }
            }
        });
    };

    let delete_id = wishlist.id.clone();
    let handle_delete = move |_: MouseEvent| {
        if !*confirm_delete.read() {
            confirm_delete.set(true);
            return;
        }
        let wishlist_id = delete_id.clone();
        is_deleting.set(true);
        spawn(async move {
            match auth.client().delete_wishlist(&wishlist_id).await {
                Ok(_) => {
                    tracing::info!("deleted wishlist {wishlist_id}");
                    on_deleted.call(wishlist_id);
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    is_deleting.set(false);
                    confirm_delete.set(false);
                }
            }
        });
    };

    rsx! {
        Modal { title: "Wishlist Settings", on_close,
            form { onsubmit: handle_submit,
                div { class: "p-6 space-y-4",
                    TextField {
                        label: "Title",
                        required: true,
                        value: draft.read().title.clone(),
                        oninput: move |v| {
                            draft.write().title = v;
                            error.set(None);
                        },
                    }
                    TextArea {
                        label: "Description",
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
                    div { class: "pt-4 border-t border-[#3f4147]",
                        Button {
                            variant: ButtonVariant::Danger,
                            loading: *is_deleting.read(),
                            loading_label: "Deleting...",
                            onclick: handle_delete,
                            if *confirm_delete.read() { "Click again to delete" } else { "Delete Wishlist" }
                        }
                    }
                }
                ModalFooter {
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                    Button {
                        r#type: "submit",
                        disabled: !draft.read().is_submittable(),
                        loading: *is_saving.read(),
                        "Save Changes"
                    }
                }
            }
        }
    }
}
