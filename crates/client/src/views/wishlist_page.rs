//! A single wishlist with live product updates.
//!
//! The page loads the wishlist and its products over REST, then follows the
//! wishlist's socket room. Local mutations go to REST first; on success the
//! list is patched in place and the change is relayed to the room.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{ApiError, Comment, Product, Reaction, Wishlist};

use crate::components::avatar::AvatarStack;
use crate::components::products::{ProductCard, ProductFormModal};
use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Modal, ModalFooter};
use crate::components::wishlists::{EditWishlistModal, InviteModal};
use crate::session::AuthContext;
use crate::socket::{use_connection_state, use_wishlist_room, ConnectionState, SocketClient};
use crate::stores::ProductFeed;
use crate::Route;

#[derive(Clone, PartialEq)]
enum PageModal {
    None,
    AddProduct,
    EditProduct(Product),
    DeleteProduct(Product),
    Invite,
    Settings,
}

/// Route target. Keyed so switching wishlists remounts the room.
#[component]
pub fn WishlistPage(id: String) -> Element {
    rsx! {
        WishlistRoom { key: "{id}", wishlist_id: id.clone() }
    }
}

#[component]
fn WishlistRoom(wishlist_id: String) -> Element {
    let auth = use_context::<AuthContext>();
    let socket = use_context::<SocketClient>();
    let nav = use_navigator();
    let mut wishlist = use_signal(|| None::<Wishlist>);
    let mut feed = use_signal(|| ProductFeed::new(wishlist_id.clone()));
    let mut modal = use_signal(|| PageModal::None);
    let mut action_error = use_signal(|| None::<String>);
    let mut is_deleting = use_signal(|| false);

    use_wishlist_room(wishlist_id.clone(), move |event| {
        if feed.write().apply(event) {
            tracing::debug!("applied {} from room", event.name());
        }
    });

    let load_id = wishlist_id.clone();
    let mut page = use_resource(move || {
        let id = load_id.clone();
        async move {
            let client = auth.client();
            let wishlist = client.get_wishlist(&id).await?;
            let products = client.list_products(&id).await?;
            Ok::<_, ApiError>((wishlist, products))
        }
    });

    use_effect(move || {
        if let Some(Ok((loaded, products))) = &*page.read() {
            wishlist.set(Some(loaded.clone()));
            feed.write().replace_all(products.clone());
        }
    });

    let viewer_id = auth.user_id();
    let connection = use_connection_state();

    let on_saved = {
        let socket = socket.clone();
        let wishlist_id = wishlist_id.clone();
        EventHandler::new(move |product: Product| {
            let is_new = feed.peek().get(&product.id).is_none();
            if is_new {
                feed.write().insert(product.clone());
                socket.emit_product_added(&wishlist_id, product);
            } else {
                feed.write().replace(product.clone());
                socket.emit_product_updated(&wishlist_id, product);
            }
            modal.set(PageModal::None);
        })
    };

    let on_comment = {
        let socket = socket.clone();
        let wishlist_id = wishlist_id.clone();
        EventHandler::new(move |(product_id, comment): (String, Comment)| {
            feed.write().add_comment(&product_id, comment.clone());
            socket.emit_comment_added(&wishlist_id, &product_id, comment);
        })
    };

    let on_reactions = {
        let socket = socket.clone();
        let wishlist_id = wishlist_id.clone();
        EventHandler::new(move |(product_id, reactions): (String, Vec<Reaction>)| {
            feed.write().set_reactions(&product_id, reactions.clone());
            socket.emit_reaction_added(&wishlist_id, &product_id, reactions);
        })
    };

    let delete_product = {
        let socket = socket.clone();
        let wishlist_id = wishlist_id.clone();
        move |product: Product| {
            let socket = socket.clone();
            let wishlist_id = wishlist_id.clone();
            is_deleting.set(true);
            spawn(async move {
                match auth.client().delete_product(&product.id).await {
                    Ok(_) => {
                        feed.write().remove(&product.id);
                        socket.emit_product_deleted(&wishlist_id, &product.id);
                        modal.set(PageModal::None);
                    }
                    Err(err) => action_error.set(Some(err.user_message())),
                }
                is_deleting.set(false);
            });
        }
    };

    let Some(current) = wishlist.read().clone() else {
        return match &*page.read() {
            Some(Err(err)) => rsx! {
                div { class: "max-w-3xl mx-auto px-4 py-16 space-y-4",
                    ErrorBanner { message: err.user_message() }
                    div { class: "flex gap-3",
                        Button { variant: ButtonVariant::Secondary, onclick: move |_| page.restart(), "Try again" }
                        Link { to: Route::Dashboard {}, class: "px-4 py-2 text-sm text-gray-300 hover:text-white", "Back to dashboard" }
                    }
                }
            },
            _ => rsx! {
                div { class: "flex items-center justify-center py-24 text-gray-400", "Loading wishlist..." }
            },
        };
    };

    let viewer = viewer_id.unwrap_or_default();
    let can_edit = current.can_edit(&viewer);
    let is_owner = current.is_owner(&viewer);
    let role = current.role_of(&viewer).map(|r| r.label()).unwrap_or("Viewer");
    let members: Vec<_> = current.members().into_iter().cloned().collect();
    let products = feed.read().products().to_vec();
    let total = feed.read().total_label();
    let count = products.len();
    let refreshing = !page.finished();
    let connection_label = connection.label();
    let (live_class, live_label) = match connection {
        ConnectionState::Connected => ("bg-emerald-400", "Live"),
        ConnectionState::Connecting | ConnectionState::Reconnecting { .. } => ("bg-amber-400", "Connecting"),
        _ => ("bg-gray-500", "Offline"),
    };

    rsx! {
        div { class: "max-w-6xl mx-auto px-4 py-8 space-y-6",
            header { class: "space-y-4",
                Link { to: Route::Dashboard {}, class: "text-sm text-gray-400 hover:text-white", "← All wishlists" }
                div { class: "flex flex-wrap items-start justify-between gap-4",
                    div { class: "space-y-2 min-w-0",
                        div { class: "flex items-center gap-3",
                            h1 { class: "text-3xl font-bold text-white truncate", "{current.title}" }
                            span { class: "text-xs px-2 py-0.5 rounded-full bg-[#2b2d31] text-gray-400",
                                if current.is_public { "Public" } else { "Private" }
                            }
                            span { class: "flex items-center gap-1.5 text-xs text-gray-400", title: "{connection_label}",
                                span { class: "h-2 w-2 rounded-full {live_class}" }
                                "{live_label}"
                            }
                        }
                        if let Some(description) = current.description.as_ref().filter(|d| !d.is_empty()) {
                            p { class: "text-gray-400 max-w-2xl", "{description}" }
                        }
                        div { class: "flex items-center gap-4 text-sm text-gray-400",
                            AvatarStack { users: members }
                            span { "{count} items · {total}" }
                            span { "You are {role}" }
                        }
                    }
                    div { class: "flex flex-wrap gap-2",
                        Button {
                            variant: ButtonVariant::Ghost,
                            loading: refreshing,
                            loading_label: "Refreshing...",
                            onclick: move |_| page.restart(),
                            "↻ Refresh"
                        }
                        Button { variant: ButtonVariant::Secondary, onclick: move |_| modal.set(PageModal::Invite), "Invite" }
                        if is_owner {
                            Button { variant: ButtonVariant::Secondary, onclick: move |_| modal.set(PageModal::Settings), "Settings" }
                        }
                        if can_edit {
                            Button { onclick: move |_| modal.set(PageModal::AddProduct), "+ Add Product" }
                        }
                    }
                }
            }

            if products.is_empty() {
                div { class: "rounded-xl border border-dashed border-[#3f4147] p-12 text-center text-gray-400",
                    if can_edit { "Nothing here yet. Add the first product!" } else { "Nothing here yet." }
                }
            } else {
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                    for product in products {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            viewer_id: viewer.clone(),
                            can_edit: can_edit,
                            on_edit: move |p| modal.set(PageModal::EditProduct(p)),
                            on_delete: move |p| {
                                action_error.set(None);
                                modal.set(PageModal::DeleteProduct(p));
                            },
                            on_comment,
                            on_reactions,
                        }
                    }
                }
            }
        }

        match modal.read().clone() {
            PageModal::None => rsx! {},
            PageModal::AddProduct => rsx! {
                ProductFormModal {
                    wishlist_id: wishlist_id.clone(),
                    on_close: move |_| modal.set(PageModal::None),
                    on_saved,
                }
            },
            PageModal::EditProduct(product) => rsx! {
                ProductFormModal {
                    key: "{product.id}",
                    wishlist_id: wishlist_id.clone(),
                    product,
                    on_close: move |_| modal.set(PageModal::None),
                    on_saved,
                }
            },
            PageModal::DeleteProduct(product) => {
                let warning = format!("\"{}\" will be removed from this wishlist.", product.name);
                rsx! {
                    Modal {
                        title: "Delete Product",
                        subtitle: warning,
                        on_close: move |_| modal.set(PageModal::None),
                        if let Some(err) = action_error.read().as_ref() {
                            div { class: "px-6 pt-4",
                                ErrorBanner { message: err.clone() }
                            }
                        }
                        ModalFooter {
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| modal.set(PageModal::None), "Cancel" }
                            Button {
                                variant: ButtonVariant::Danger,
                                loading: *is_deleting.read(),
                                loading_label: "Deleting...",
                                onclick: {
                                    let mut delete_product = delete_product.clone();
                                    move |_| delete_product(product.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
            PageModal::Invite => rsx! {
                InviteModal {
                    wishlist: current.clone(),
                    on_close: move |_| modal.set(PageModal::None),
                    on_code: move |code: String| {
                        if let Some(w) = wishlist.write().as_mut() {
                            w.invite_code = Some(code);
                        }
                    },
                }
            },
            PageModal::Settings => rsx! {
                EditWishlistModal {
                    wishlist: current.clone(),
                    on_close: move |_| modal.set(PageModal::None),
                    on_saved: move |updated: Wishlist| {
                        wishlist.set(Some(updated));
                        modal.set(PageModal::None);
                    },
                    on_deleted: move |_| {
                        nav.replace(Route::Dashboard {});
                    },
                }
            },
        }
    }
}
