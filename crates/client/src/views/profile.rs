//! Profile page: username and avatar.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{User, UPLOAD_NOT_CONFIGURED_MESSAGE};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::image_upload::{ImageUpload, UploadTarget};
use crate::components::ui::{Button, ErrorBanner, TextField};
use crate::forms::ProfileDraft;
use crate::session::AuthContext;

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    match auth.user() {
        Some(user) => rsx! {
            ProfileForm { key: "{user.id}", user: user.clone() }
        },
        None => rsx! {},
    }
}

#[component]
fn ProfileForm(user: User) -> Element {
    let mut auth = use_context::<AuthContext>();

    let initial = ProfileDraft::from_user(&user);
    let mut username = use_signal(|| initial.username.clone());
    let mut avatar = use_signal(|| initial.avatar.clone());
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let upload_status = use_resource(move || async move { auth.client().upload_status().await });

    let draft = move || ProfileDraft {
        username: username.read().clone(),
        avatar: avatar.read().clone(),
    };
    let dirty = draft().is_dirty(&user);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match draft().to_request() {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        is_saving.set(true);
        notice.set(None);
        spawn(async move {
            match auth.client().update_profile(&request).await {
                Ok(updated) => {
                    tracing::info!("profile updated for {}", updated.id);
                    auth.update_user(updated);
                    notice.set(Some("Profile saved".to_string()));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            is_saving.set(false);
        });
    };

    // Uploads stay enabled when the status check itself fails; the upload
    // reports its own error.
    let status_message = match &*upload_status.read() {
        Some(Ok(status)) if !status.configured => Some(
            status
                .message
                .clone()
                .unwrap_or_else(|| UPLOAD_NOT_CONFIGURED_MESSAGE.to_string()),
        ),
        _ => None,
    };
    let uploads_disabled = status_message.is_some();
    let mut preview = user.clone();
    preview.avatar = avatar.read().clone();

    rsx! {
        div { class: "max-w-xl mx-auto px-4 py-10 space-y-8",
            h1 { class: "text-3xl font-bold text-white", "Your Profile" }
            div { class: "flex items-center gap-6",
                Avatar { user: preview, size: AvatarSize::Large }
                div { class: "space-y-2",
                    ImageUpload {
                        target: UploadTarget::Avatar,
                        label: "Change avatar",
                        disabled: uploads_disabled,
                        on_uploaded: move |url| {
                            avatar.set(Some(url));
                            notice.set(None);
                        },
                    }
                    if avatar.read().is_some() {
                        button {
                            r#type: "button",
                            class: "block text-xs text-gray-400 hover:text-white",
                            onclick: move |_| avatar.set(None),
                            "Remove avatar"
                        }
                    }
                    if let Some(message) = status_message {
                        p { class: "text-xs text-amber-300", "{message}" }
                    }
                }
            }
            form { class: "space-y-4", onsubmit: handle_submit,
                TextField {
                    label: "Username",
                    required: true,
                    value: username.read().clone(),
                    oninput: move |v| {
                        username.set(v);
                        error.set(None);
                        notice.set(None);
                    },
                }
                if let Some(email) = user.email.as_ref() {
                    div {
                        p { class: "text-sm font-medium text-gray-300 mb-2", "Email" }
                        p { class: "text-gray-400", "{email}" }
                    }
                }
                if let Some(err) = error.read().as_ref() {
                    ErrorBanner { message: err.clone() }
                }
                if let Some(message) = notice.read().as_ref() {
                    p { class: "text-sm text-emerald-400", "{message}" }
                }
                Button {
                    r#type: "submit",
                    disabled: !dirty || username.read().trim().is_empty(),
                    loading: *is_saving.read(),
                    "Save Profile"
                }
            }
        }
    }
}
