//! Wishlist cards and the dialogs that create, join, share and edit them.

pub mod create_wishlist_modal;
pub mod edit_wishlist_modal;
pub mod invite_modal;
pub mod join_wishlist_modal;
pub mod wishlist_card;

pub use create_wishlist_modal::CreateWishlistModal;
pub use edit_wishlist_modal::EditWishlistModal;
pub use invite_modal::InviteModal;
pub use join_wishlist_modal::JoinWishlistModal;
pub use wishlist_card::WishlistCard;
