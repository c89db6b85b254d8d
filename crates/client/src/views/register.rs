use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::ui::{Button, ErrorBanner, TextField};
use crate::forms::RegisterDraft;
use crate::session::{AuthContext, Credentials};
use crate::views::AuthCard;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut draft = use_signal(RegisterDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

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
            match auth.client().register(&request).await {
                Ok(response) => {
                    tracing::info!("registered {}", response.user.username);
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

    rsx! {
        AuthCard { title: "Create your account", subtitle: "Start collecting gift ideas with friends",
            form { class: "space-y-4", onsubmit: handle_submit,
                TextField {
                    label: "Username",
                    required: true,
                    autofocus: true,
                    value: draft.read().username.clone(),
                    oninput: move |v| {
                        draft.write().username = v;
                        error.set(None);
                    },
                }
                TextField {
                    label: "Email",
                    input_type: "email",
                    required: true,
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
                TextField {
                    label: "Confirm Password",
                    input_type: "password",
                    required: true,
                    value: draft.read().confirm_password.clone(),
                    oninput: move |v| {
                        draft.write().confirm_password = v;
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
                    loading_label: "Creating account...",
                    "Create Account"
                }
            }
            p { class: "text-center text-sm text-gray-400",
                "Already have an account? "
                Link { to: Route::Login {}, class: "text-pink-400 hover:underline", "Sign in" }
            }
        }
    }
}
