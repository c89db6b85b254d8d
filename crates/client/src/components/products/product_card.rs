use dioxus::prelude::*;
use wishlist_shared::{display_host, format_currency, Comment, Priority, Product, ProductStatus, Reaction};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::products::{CommentSection, ReactionBar};

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-500/15 text-red-300",
        Priority::Medium => "bg-amber-500/15 text-amber-300",
        Priority::Low => "bg-emerald-500/15 text-emerald-300",
    }
}

fn status_class(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Wanted => "bg-sky-500/15 text-sky-300",
        ProductStatus::Reserved => "bg-violet-500/15 text-violet-300",
        ProductStatus::Purchased => "bg-gray-500/20 text-gray-400 line-through",
    }
}

#[component]
pub fn ProductCard(
    product: Product,
    viewer_id: String,
    can_edit: bool,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<Product>,
    on_comment: EventHandler<(String, Comment)>,
    on_reactions: EventHandler<(String, Vec<Reaction>)>,
) -> Element {
    let price = product
        .price
        .map(|p| format_currency(p, &product.currency));
    let details: Vec<&str> = [product.brand.as_deref(), product.category.as_deref()]
        .into_iter()
        .flatten()
        .filter(|d| !d.is_empty())
        .collect();
    let details = details.join(" · ");
    let priority_badge = priority_class(product.priority);
    let status_badge = status_class(product.status);
    let priority_label = product.priority.label();
    let status_label = product.status.label();
    let link_host = product.url.as_deref().map(display_host);
    let comment_product = product.id.clone();
    let reaction_product = product.id.clone();

    rsx! {
        article { class: "bg-[#2b2d31] rounded-xl border border-[#3f4147] overflow-hidden flex flex-col",
            if let Some(image) = product.image_url.as_ref().filter(|i| !i.is_empty()) {
                img { class: "w-full h-44 object-cover bg-[#1e1f22]", src: "{image}", alt: "{product.name}" }
            }
            div { class: "p-4 flex-1 flex flex-col gap-3",
                div { class: "flex items-start justify-between gap-2",
                    div { class: "min-w-0",
                        h3 { class: "font-semibold text-white truncate", "{product.name}" }
                        if !details.is_empty() {
                            p { class: "text-xs text-gray-400 truncate", "{details}" }
                        }
                    }
                    if let Some(price) = price {
                        span { class: "text-pink-300 font-semibold whitespace-nowrap", "{price}" }
                    }
                }
                div { class: "flex flex-wrap gap-1.5 text-[11px] font-medium",
                    span { class: "px-2 py-0.5 rounded-full {priority_badge}", "{priority_label} priority" }
                    span { class: "px-2 py-0.5 rounded-full {status_badge}", "{status_label}" }
                    for tag in product.tags.iter() {
                        span { key: "{tag}", class: "px-2 py-0.5 rounded-full bg-[#1e1f22] text-gray-400", "#{tag}" }
                    }
                }
                if let (Some(url), Some(host)) = (product.url.as_ref().filter(|u| !u.is_empty()), link_host) {
                    a {
                        class: "text-xs text-sky-400 hover:underline truncate",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "🔗 {host}"
                    }
                }
                div { class: "flex items-center gap-2 text-xs text-gray-500",
                    Avatar { user: product.added_by.clone(), size: AvatarSize::Small }
                    span { "Added by {product.added_by.username}" }
                }
                ReactionBar {
                    product: product.clone(),
                    viewer_id: viewer_id.clone(),
                    on_reactions: move |reactions| on_reactions.call((reaction_product.clone(), reactions)),
                }
                CommentSection {
                    product_id: product.id.clone(),
                    comments: product.comments.clone(),
                    on_comment: move |comment| on_comment.call((comment_product.clone(), comment)),
                }
                if can_edit {
                    div { class: "mt-auto pt-2 flex justify-end gap-3 text-xs border-t border-[#3f4147]",
                        button {
                            r#type: "button",
                            class: "text-gray-400 hover:text-white",
                            onclick: {
                                let product = product.clone();
                                move |_| on_edit.call(product.clone())
                            },
                            "Edit"
                        }
                        button {
                            r#type: "button",
                            class: "text-red-400 hover:text-red-300",
                            onclick: {
                                let product = product.clone();
                                move |_| on_delete.call(product.clone())
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
