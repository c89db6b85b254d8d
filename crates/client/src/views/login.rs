use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::SESSION_EXPIRED_MESSAGE;

use crate::components::ui::{Button, ErrorBanner, TextField};
use crate::forms::LoginDraft;
use crate::session::{AuthContext, Credentials};
use crate::views::AuthCard;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut draft = use_signal(LoginDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match draft.read().to_request() {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        is_loading.set(true);
        spawn(async move {
            match auth.client().login(&request).await {
                Ok(response) => {
                    tracing::info!("signed in as {}", response.user.username);
                    auth.sign_in(Credentials {
                        token: response.token,
                        user: response.user,
                    });
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    is_loading.set(false);
                }
            }
        });
    };

    let expired = *auth.session_expired.read();

    rsx! {
        AuthCard { title: "Welcome back", subtitle: "Sign in to your wishlists",
            if expired {
                div { class: "p-3 bg-amber-500/10 border border-amber-500/30 rounded-lg text-amber-300 text-sm",
                    {SESSION_EXPIRED_MESSAGE}
                }
            }
            form { class: "space-y-4", onsubmit: handle_submit,
                TextField {
                    label: "Email",
                    input_type: "email",
                    required: true,
                    autofocus: true,
                    value: draft.read().email.clone(),
                    oninput: move |v| {
                        draft.write().email = v;
                        error.set(None);
                    },
                }
                TextField {
                    label: "Password",
                    input_type: "password",
                    required: true,
                    value: draft.read().password.clone(),
                    oninput: move |v| {
                        draft.write().password = v;
                        error.set(None);
                    },
                }
                if let Some(err) = error.read().as_ref() {
                    ErrorBanner { message: err.clone() }
                }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    disabled: !draft.read().is_submittable(),
                    loading: *is_loading.read(),
                    loading_label: "Signing in...",
                    "Sign In"
                }
            }
            p { class: "text-center text-sm text-gray-400",
                "No account yet? "
                Link { to: Route::Register {}, class: "text-pink-400 hover:underline", "Create one" }
            }
        }
    }
}
