//! Signed-in shell: navbar, session guard and `/auth/me` refresh.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::session::AuthContext;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let mut auth = use_context::<AuthContext>();
    let navigator = use_navigator();

    // Leaves for the login page when there is no session, including after
    // a 401 cleared it.
    use_effect(move || {
        if !auth.is_authenticated() {
            if *auth.session_expired.peek() {
                tracing::info!("session expired, returning to login");
            }
            navigator.replace(Route::Login {});
        }
    });

    // Pick up profile changes made elsewhere.
    use_hook(move || {
        if !auth.is_authenticated() {
            return;
        }
        spawn(async move {
            match auth.client().current_user().await {
                Ok(user) => auth.update_user(user),
                Err(err) => tracing::warn!("could not refresh current user: {err}"),
            }
        });
    });

    let Some(user) = auth.user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "min-h-screen bg-[#1e1f22] text-white",
            nav { class: "sticky top-0 z-40 bg-[#2b2d31]/95 backdrop-blur border-b border-[#3f4147]",
                div { class: "max-w-6xl mx-auto px-4 h-14 flex items-center justify-between",
                    Link { to: Route::Dashboard {}, class: "flex items-center gap-2 font-bold text-lg",
                        span { "🎁" }
                        span { class: "bg-gradient-to-r from-pink-400 to-orange-300 bg-clip-text text-transparent",
                            "Wishlist"
                        }
                    }
                    div { class: "flex items-center gap-4",
                        Link { to: Route::Dashboard {}, class: "text-sm text-gray-300 hover:text-white", "Dashboard" }
                        Link { to: Route::Profile {}, class: "flex items-center gap-2 text-sm text-gray-300 hover:text-white",
                            Avatar { user: user.clone(), size: AvatarSize::Small }
                            span { class: "hidden sm:inline", "{user.username}" }
                        }
                        button {
                            class: "text-sm text-gray-400 hover:text-white transition-colors",
                            onclick: move |_| {
                                auth.sign_out();
                                navigator.replace(Route::Login {});
                            },
                            "Log out"
                        }
                    }
                }
            }
            main { Outlet::<Route> {} }
        }
    }
}
