//! Typed REST calls grouped by resource.
//!
//! Each module adds methods to [`ApiClient`](crate::api_client::ApiClient);
//! none of them hold state or business logic.

pub mod auth;
pub mod products;
pub mod uploads;
pub mod wishlists;

pub use uploads::UploadFile;
