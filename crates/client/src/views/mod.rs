//! View components for the application.

pub mod auth_card;
pub mod dashboard;
pub mod landing;
pub mod layouts;
pub mod login;
pub mod profile;
pub mod register;
pub mod wishlist_page;

pub use auth_card::AuthCard;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use layouts::AppLayout;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
pub use wishlist_page::WishlistPage;
