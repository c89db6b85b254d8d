use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    /// Shows `loading_label` instead of the children and disables the button.
    #[props(optional)]
    pub loading: Option<bool>,
    #[props(optional, into)]
    pub loading_label: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let loading = props.loading.unwrap_or(false);
    let disabled = props.disabled.unwrap_or(false) || loading;

    let base = "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 text-sm font-semibold transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-[#1e1f22] disabled:opacity-50 disabled:pointer-events-none";

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-pink-500 to-orange-400 text-white hover:from-pink-400 hover:to-orange-300 hover:shadow-lg hover:shadow-pink-500/25 focus:ring-pink-500",
        ButtonVariant::Secondary => "bg-[#4e5058] text-white hover:bg-[#6d6f78] focus:ring-gray-500",
        ButtonVariant::Ghost => "bg-transparent text-gray-300 hover:bg-[#3f4147] hover:text-white focus:ring-gray-500",
        ButtonVariant::Danger => "bg-red-500 text-white hover:bg-red-600 focus:ring-red-500",
    };

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {variant_class} {extra}"),
        _ => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class,
            r#type: props.r#type.unwrap_or_else(|| "button".to_string()),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "h-4 w-4 animate-spin rounded-full border-2 border-white/40 border-t-white" }
                {props.loading_label.clone().unwrap_or_else(|| "Saving...".to_string())}
            } else {
                {props.children}
            }
        }
    }
}
