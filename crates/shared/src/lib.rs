//! Shared types and utilities for the wishlist client.

pub mod error;
pub mod format;
pub mod models;
pub mod protocol;

pub use error::*;
pub use format::*;
pub use models::*;
pub use protocol::*;
