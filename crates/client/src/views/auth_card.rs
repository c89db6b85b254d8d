use dioxus::prelude::*;

/// Centered card shared by the login and register pages.
#[component]
pub fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-[#1e1f22] px-4",
            div { class: "w-full max-w-md bg-[#313338] rounded-2xl shadow-2xl p-8 space-y-6",
                div { class: "text-center space-y-1",
                    div { class: "text-4xl", "🎁" }
                    h1 { class: "text-2xl font-bold text-white", "{title}" }
                    p { class: "text-sm text-gray-400", "{subtitle}" }
                }
                {children}
            }
        }
    }
}
