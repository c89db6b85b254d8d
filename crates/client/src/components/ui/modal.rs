use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    title: String,
    #[props(optional)] subtitle: Option<String>,
    on_close: EventHandler<()>,
    #[props(default = "max-w-md".to_string())] width: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-[#313338] rounded-lg shadow-2xl w-full {width} mx-4 max-h-[90vh] overflow-y-auto",
                onclick: move |e| e.stop_propagation(),
                div { class: "px-6 py-4 border-b border-[#3f4147] flex items-start justify-between gap-4",
                    div {
                        h3 { class: "text-xl font-bold text-white", "{title}" }
                        if let Some(subtitle) = subtitle {
                            p { class: "text-sm text-gray-400 mt-1", "{subtitle}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "text-gray-400 hover:text-white transition-colors text-xl leading-none",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

/// Footer row for modal forms.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "px-6 py-4 border-t border-[#3f4147] flex justify-end gap-3", {children} }
    }
}
