use dioxus::prelude::*;

use crate::session::AuthContext;
use crate::Route;

/// `/` sends signed-in users to their dashboard and everyone else to login.
#[component]
pub fn Landing() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-[#1e1f22] text-gray-400",
            "Redirecting..."
        }
    }
}
