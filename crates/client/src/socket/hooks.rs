//! Hooks for views that follow a wishlist room.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use wishlist_shared::ServerEvent;

use super::client::{SocketClient, SocketStatus};
use super::connection::ConnectionState;
use super::listeners::Subscription;

/// Membership in one wishlist room. Joining connects the socket if needed;
/// dropping leaves the room and unregisters the handler.
pub struct RoomMembership {
    socket: SocketClient,
    wishlist_id: String,
    _subscription: Subscription,
}

impl RoomMembership {
    pub fn join(
        socket: &SocketClient,
        wishlist_id: impl Into<String>,
        handler: impl FnMut(&ServerEvent) + 'static,
    ) -> Self {
        let wishlist_id = wishlist_id.into();
        socket.connect();
        socket.join_wishlist(&wishlist_id);
        let subscription = socket.subscribe(wishlist_id.clone(), handler);
        Self {
            socket: socket.clone(),
            wishlist_id,
            _subscription: subscription,
        }
    }

    pub fn wishlist_id(&self) -> &str {
        &self.wishlist_id
    }
}

impl Drop for RoomMembership {
    fn drop(&mut self) {
        self.socket.leave_wishlist(&self.wishlist_id);
    }
}

/// Join `wishlist_id`'s room for the lifetime of the calling component.
///
/// The handler is captured on first render. Components that can switch
/// wishlists should be keyed by the wishlist id so a new room gets a fresh
/// component.
pub fn use_wishlist_room(
    wishlist_id: String,
    handler: impl FnMut(&ServerEvent) + 'static,
) {
    let socket = use_context::<SocketClient>();
    let membership = use_hook(move || {
        Rc::new(RefCell::new(Some(RoomMembership::join(
            &socket,
            wishlist_id,
            handler,
        ))))
    });
    use_drop(move || {
        membership.borrow_mut().take();
    });
}

/// Current connection state of the app socket.
pub fn use_connection_state() -> ConnectionState {
    let status = use_context::<SocketStatus>();
    let state = status.0.read().clone();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_shared::ClientEvent;

    fn queued(socket: &SocketClient) -> Vec<ClientEvent> {
        let mut pending = socket.shared_outbound_for_tests();
        let mut events = Vec::new();
        if let Some(receiver) = pending.as_mut() {
            while let Ok(Some(event)) = receiver.try_next() {
                events.push(event);
            }
        }
        events
    }

    #[test]
    fn membership_joins_then_leaves_on_drop() {
        let socket = SocketClient::new(None);
        let membership = RoomMembership::join(&socket, "w1", |_| {});
        assert_eq!(membership.wishlist_id(), "w1");
        assert_eq!(socket.listener_count(), 1);

        drop(membership);
        assert_eq!(socket.listener_count(), 0);
        assert!(socket.joined_rooms().is_empty());
        assert_eq!(
            queued(&socket),
            vec![
                ClientEvent::JoinWishlist("w1".into()),
                ClientEvent::LeaveWishlist("w1".into()),
            ]
        );
    }

    #[test]
    fn two_views_of_one_room_each_get_events() {
        let socket = SocketClient::new(None);
        let first = RoomMembership::join(&socket, "w1", |_| {});
        let second = RoomMembership::join(&socket, "w1", |_| {});
        assert_eq!(socket.listener_count(), 2);
        drop(first);
        assert_eq!(socket.listener_count(), 1);
        drop(second);
    }
}
