use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{Product, Reaction};

use crate::session::AuthContext;

/// Emojis offered on every product.
pub const REACTION_EMOJIS: [&str; 6] = ["❤️", "🎁", "🔥", "😍", "👍", "🤔"];

#[component]
pub fn ReactionBar(
    product: Product,
    /// Empty when nobody is signed in.
    viewer_id: String,
    on_reactions: EventHandler<Vec<Reaction>>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let mut pending = use_signal(|| false);
    let signed_in = !viewer_id.is_empty();
    let counts = product.reaction_counts(signed_in.then_some(viewer_id.as_str()));

    let react = move |emoji: &'static str| {
        let product_id = product.id.clone();
        move |_: MouseEvent| {
            if *pending.read() {
                return;
            }
            let product_id = product_id.clone();
            pending.set(true);
            spawn(async move {
                match auth.client().react(&product_id, emoji).await {
                    Ok(reactions) => on_reactions.call(reactions),
                    Err(err) => tracing::warn!("reaction on {product_id} failed: {err}"),
                }
                pending.set(false);
            });
        }
    };

    rsx! {
        div { class: "flex flex-wrap items-center gap-1.5",
            for emoji in REACTION_EMOJIS {
                {
                    let count = counts.iter().find(|c| c.emoji == emoji);
                    let mine = count.is_some_and(|c| c.mine);
                    let class = if mine {
                        "bg-pink-500/20 border-pink-500/60 text-white"
                    } else {
                        "bg-[#1e1f22] border-transparent text-gray-300 hover:border-[#4e5058]"
                    };
                    rsx! {
                        button {
                            key: "{emoji}",
                            r#type: "button",
                            class: "flex items-center gap-1 rounded-full border px-2 py-0.5 text-sm transition-colors {class}",
                            disabled: *pending.read() || !signed_in,
                            onclick: react(emoji),
                            span { "{emoji}" }
                            if let Some(count) = count {
                                span { class: "text-xs", "{count.count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
