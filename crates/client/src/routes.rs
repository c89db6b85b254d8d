//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{AppLayout, Dashboard, Landing, Login, Profile, Register, WishlistPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page redirects to login or dashboard
    #[route("/")]
    Landing {},

    // Auth routes
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    // Signed-in pages share the navbar and session guard
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/wishlist/:id")]
        WishlistPage { id: String },
        #[route("/profile")]
        Profile {},
}
