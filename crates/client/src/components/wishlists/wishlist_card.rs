use dioxus::prelude::*;
use wishlist_shared::{format_currency, Wishlist, DEFAULT_CURRENCY};

use crate::components::avatar::AvatarStack;
use crate::Route;

/// Dashboard tile linking to a wishlist.
#[component]
pub fn WishlistCard(
    wishlist: Wishlist,
    is_owner: bool,
    on_delete: EventHandler<Wishlist>,
) -> Element {
    let members: Vec<_> = wishlist.members().into_iter().cloned().collect();
    let total = format_currency(wishlist.total_value, DEFAULT_CURRENCY);
    let visibility = if wishlist.is_public { "Public" } else { "Private" };
    let items = match wishlist.product_count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };

    rsx! {
        div { class: "group relative bg-[#2b2d31] rounded-xl border border-[#3f4147] hover:border-pink-500/50 transition-colors",
            Link {
                to: Route::WishlistPage { id: wishlist.id.clone() },
                class: "block p-5 space-y-3",
                div { class: "flex items-start justify-between gap-3",
                    h3 { class: "text-lg font-semibold text-white truncate", "{wishlist.title}" }
                    span { class: "text-xs px-2 py-0.5 rounded-full bg-[#1e1f22] text-gray-400 flex-shrink-0",
                        "{visibility}"
                    }
                }
                if let Some(description) = wishlist.description.as_ref().filter(|d| !d.is_empty()) {
                    p { class: "text-sm text-gray-400 line-clamp-2", "{description}" }
                }
                div { class: "flex items-center justify-between text-sm text-gray-400",
                    span { "{items} · {total}" }
                    AvatarStack { users: members }
                }
                if !is_owner {
                    p { class: "text-xs text-gray-500", "Shared by {wishlist.owner.username}" }
                }
            }
            if is_owner {
                button {
                    r#type: "button",
                    class: "absolute bottom-3 right-3 hidden group-hover:block text-xs text-red-400 hover:text-red-300",
                    onclick: {
                        let wishlist = wishlist.clone();
                        move |_| on_delete.call(wishlist.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}
