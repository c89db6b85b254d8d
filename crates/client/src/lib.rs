//! Wishlist Client - Dioxus web application
//!
//! Browser (and desktop) client for a collaborative wishlist service: a REST
//! wrapper with bearer-token auth, a socket client for live room updates,
//! and the pages built on top of them.

pub mod api;
pub mod api_client;
pub mod config;
pub mod forms;
pub mod session;
pub mod socket;
pub mod storage;
pub mod stores;

pub mod components;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use routes::Route;
pub use session::{AuthContext, AuthProvider, Credentials};
pub use socket::{SocketClient, SocketProvider};
