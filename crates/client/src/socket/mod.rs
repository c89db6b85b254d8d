//! Live wishlist updates over a WebSocket.
//!
//! - [`SocketClient`]: the single app-wide connection, owned by
//!   [`SocketProvider`] and read from context
//! - [`ListenerRegistry`]: room-scoped event handlers
//! - [`use_wishlist_room`]: join a room for the lifetime of a view
//!
//! ```text
//!   SocketProvider ── SocketClient ── outbound queue ──▶ driver task ──▶ server
//!                          ▲                                  │
//!                          └──────── Inbound (state/events) ◀─┘
//! ```

mod client;
mod connection;
mod hooks;
mod listeners;

pub use client::{SocketClient, SocketProvider, SocketStatus};
pub use connection::{ConnectionState, Inbound, ReconnectConfig};
pub use hooks::{use_connection_state, use_wishlist_room, RoomMembership};
pub use listeners::{ListenerId, ListenerRegistry, Subscription};
