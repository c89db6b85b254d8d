use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full bg-[#2b2d31] border border-[#3f4147] rounded-lg px-4 py-3 text-white placeholder-[#6d6f78] focus:outline-none focus:border-pink-500 transition-colors";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-300 mb-2";

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(optional)] placeholder: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS,
                "{label}"
                if required {
                    span { class: "text-pink-400 ml-0.5", "*" }
                }
            }
            input {
                class: INPUT_CLASS,
                r#type: "{input_type}",
                placeholder: placeholder.unwrap_or_default(),
                autofocus: autofocus,
                value: "{value}",
                oninput: move |e: FormEvent| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn TextArea(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(optional)] placeholder: Option<String>,
    #[props(default = 3)] rows: u32,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            textarea {
                class: "{INPUT_CLASS} resize-none",
                rows: "{rows}",
                placeholder: placeholder.unwrap_or_default(),
                value: "{value}",
                oninput: move |e: FormEvent| oninput.call(e.value()),
            }
        }
    }
}

/// A `<select>` over `(value, label)` pairs.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            select {
                class: INPUT_CLASS,
                value: "{value}",
                onchange: move |e: FormEvent| onchange.call(e.value()),
                for (choice, text) in options {
                    option { key: "{choice}", value: "{choice}", selected: choice == value, "{text}" }
                }
            }
        }
    }
}

#[component]
pub fn Checkbox(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "flex items-center gap-3 text-sm text-gray-300 cursor-pointer select-none",
            input {
                r#type: "checkbox",
                class: "h-4 w-4 rounded border-[#3f4147] bg-[#2b2d31] accent-pink-500",
                checked: checked,
                onchange: move |e: FormEvent| onchange.call(e.checked()),
            }
            "{label}"
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
            "{message}"
        }
    }
}
