//! Reusable view components.

pub mod avatar;
pub mod image_upload;
pub mod products;
pub mod ui;
pub mod wishlists;

pub use avatar::{Avatar, AvatarSize, AvatarStack};
pub use image_upload::{ImageUpload, UploadTarget};
