//! Dashboard: the user's own and shared wishlists.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::Wishlist;

use crate::components::ui::{Button, ButtonVariant, ErrorBanner, Modal, ModalFooter};
use crate::components::wishlists::{CreateWishlistModal, JoinWishlistModal, WishlistCard};
use crate::session::AuthContext;
use crate::stores::wishlists;
use crate::Route;

#[derive(Clone, PartialEq)]
enum DashboardModal {
    None,
    Create,
    Join,
    ConfirmDelete(Wishlist),
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut lists = use_signal(Vec::<Wishlist>::new);
    let mut modal = use_signal(|| DashboardModal::None);
    let mut delete_error = use_signal(|| None::<String>);
    let mut is_deleting = use_signal(|| false);

    let mut fetch = use_resource(move || async move { auth.client().list_wishlists().await });

    use_effect(move || {
        if let Some(Ok(fetched)) = &*fetch.read() {
            lists.set(fetched.clone());
        }
    });

    let user_id = auth.user_id().unwrap_or_default();
    let all = lists.read().clone();
    let (owned, shared) = wishlists::partition_by_owner(&all, &user_id);
    let owned: Vec<Wishlist> = owned.into_iter().cloned().collect();
    let shared: Vec<Wishlist> = shared.into_iter().cloned().collect();
    let username = auth.user().map(|u| u.username).unwrap_or_default();

    let confirm_delete = move |wishlist: Wishlist| {
        is_deleting.set(true);
        spawn(async move {
            match auth.client().delete_wishlist(&wishlist.id).await {
                Ok(_) => {
                    tracing::info!("deleted wishlist {}", wishlist.id);
                    wishlists::remove(&mut lists.write(), &wishlist.id);
                    modal.set(DashboardModal::None);
                }
                Err(err) => delete_error.set(Some(err.user_message())),
            }
            is_deleting.set(false);
        });
    };

    let status = match &*fetch.read() {
        None => Some(rsx! { p { class: "text-gray-400", "Loading wishlists..." } }),
        Some(Err(err)) => Some(rsx! {
            div { class: "space-y-3",
                ErrorBanner { message: err.user_message() }
                Button { variant: ButtonVariant::Secondary, onclick: move |_| fetch.restart(), "Try again" }
            }
        }),
        Some(Ok(_)) => None,
    };

    rsx! {
        div { class: "max-w-6xl mx-auto px-4 py-8 space-y-8",
            div { class: "flex flex-wrap items-center justify-between gap-4",
                div {
                    h1 { class: "text-3xl font-bold text-white", "Hi {username} 👋" }
                    p { class: "text-gray-400", "Your wishlists and the ones friends shared with you" }
                }
                div { class: "flex gap-3",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| modal.set(DashboardModal::Join),
                        "Join with Code"
                    }
                    Button { onclick: move |_| modal.set(DashboardModal::Create), "+ New Wishlist" }
                }
            }

            if let Some(status) = status {
                {status}
            } else {
                section { class: "space-y-4",
                    h2 { class: "text-lg font-semibold text-white", "My Wishlists" }
                    if owned.is_empty() {
                        div { class: "rounded-xl border border-dashed border-[#3f4147] p-8 text-center text-gray-400",
                            "You have no wishlists yet. Create one to start collecting ideas."
                        }
                    } else {
                        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                            for wishlist in owned {
                                WishlistCard {
                                    key: "{wishlist.id}",
                                    wishlist: wishlist.clone(),
                                    is_owner: true,
                                    on_delete: move |w| {
                                        delete_error.set(None);
                                        modal.set(DashboardModal::ConfirmDelete(w));
                                    },
                                }
                            }
                        }
                    }
                }
                if !shared.is_empty() {
                    section { class: "space-y-4",
                        h2 { class: "text-lg font-semibold text-white", "Shared with Me" }
                        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                            for wishlist in shared {
                                WishlistCard {
                                    key: "{wishlist.id}",
                                    wishlist: wishlist.clone(),
                                    is_owner: false,
                                    on_delete: move |_| {},
                                }
                            }
                        }
                    }
                }
            }
        }

        match modal.read().clone() {
            DashboardModal::None => rsx! {},
            DashboardModal::Create => rsx! {
                CreateWishlistModal {
                    on_close: move |_| modal.set(DashboardModal::None),
                    on_created: move |wishlist: Wishlist| {
                        let id = wishlist.id.clone();
                        wishlists::upsert_front(&mut lists.write(), wishlist);
                        modal.set(DashboardModal::None);
                        nav.push(Route::WishlistPage { id });
                    },
                }
            },
            DashboardModal::Join => rsx! {
                JoinWishlistModal {
                    on_close: move |_| modal.set(DashboardModal::None),
                    on_joined: move |wishlist: Wishlist| {
                        let id = wishlist.id.clone();
                        wishlists::upsert_front(&mut lists.write(), wishlist);
                        modal.set(DashboardModal::None);
                        nav.push(Route::WishlistPage { id });
                    },
                }
            },
            DashboardModal::ConfirmDelete(wishlist) => {
                let warning = format!(
                    "\"{}\" and all of its products will be removed for everyone.",
                    wishlist.title
                );
                rsx! {
                    Modal {
                        title: "Delete Wishlist",
                        subtitle: warning,
                        on_close: move |_| modal.set(DashboardModal::None),
                        if let Some(err) = delete_error.read().as_ref() {
                            div { class: "px-6 pt-4",
                                ErrorBanner { message: err.clone() }
                            }
                        }
                        ModalFooter {
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| modal.set(DashboardModal::None),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                loading: *is_deleting.read(),
                                loading_label: "Deleting...",
                                onclick: {
                                    let mut confirm_delete = confirm_delete.clone();
                                    move |_| confirm_delete(wishlist.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
