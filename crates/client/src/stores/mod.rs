//! Page-level list state.

pub mod product_feed;
pub mod wishlists;

pub use product_feed::ProductFeed;
