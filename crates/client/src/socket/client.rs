//! The app-wide socket client.
//!
//! One [`SocketClient`] is created by [`SocketProvider`] at the app root and
//! handed to views through context. The connection is opened lazily on the
//! first room join. Rooms the client has joined are remembered and joined
//! again after every reconnect.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use wishlist_shared::{
    ClientEvent, Comment, CommentPayload, Product, ProductDeletedPayload, ProductPayload,
    Reaction, ReactionPayload, ServerEvent,
};

use super::connection::{spawn_connection, ConnectionState, Inbound, ReconnectConfig};
use super::listeners::{ListenerRegistry, Subscription};
use crate::config::ClientConfig;

struct Shared {
    endpoint: Option<String>,
    outbound: UnboundedSender<ClientEvent>,
    /// Handed to the driver on first connect.
    pending_outbound: RefCell<Option<UnboundedReceiver<ClientEvent>>>,
    inbound: UnboundedSender<Inbound>,
    pending_inbound: RefCell<Option<UnboundedReceiver<Inbound>>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
    rooms: RefCell<BTreeSet<String>>,
    connected_before: Cell<bool>,
}

/// Cheap-to-clone handle to the single socket connection.
#[derive(Clone)]
pub struct SocketClient {
    shared: Rc<Shared>,
}

impl fmt::Debug for SocketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocketClient")
            .field("endpoint", &self.shared.endpoint)
            .field("rooms", &self.shared.rooms.borrow())
            .finish()
    }
}

impl PartialEq for SocketClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl SocketClient {
    /// `endpoint` is the full `ws(s)://` URL; `None` disables live updates.
    pub fn new(endpoint: Option<String>) -> Self {
        let (outbound, pending_outbound) = unbounded();
        let (inbound, pending_inbound) = unbounded();
        Self {
            shared: Rc::new(Shared {
                endpoint,
                outbound,
                pending_outbound: RefCell::new(Some(pending_outbound)),
                inbound,
                pending_inbound: RefCell::new(Some(pending_inbound)),
                listeners: Rc::new(RefCell::new(ListenerRegistry::new())),
                rooms: RefCell::new(BTreeSet::new()),
                connected_before: Cell::new(false),
            }),
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.shared.endpoint.as_deref()
    }

    /// Start the connection driver. Later calls do nothing.
    pub fn connect(&self) {
        let Some(endpoint) = self.shared.endpoint.clone() else {
            tracing::warn!("no valid socket URL configured, live updates disabled");
            return;
        };
        let Some(outbound) = self.shared.pending_outbound.borrow_mut().take() else {
            return;
        };
        tracing::info!("opening socket to {endpoint}");
        spawn_connection(
            endpoint,
            outbound,
            self.shared.inbound.clone(),
            ReconnectConfig::default(),
        );
    }

    /// The stream of driver reports. Can be taken once.
    pub fn take_inbound(&self) -> Option<UnboundedReceiver<Inbound>> {
        self.shared.pending_inbound.borrow_mut().take()
    }

    /// Returns `false` once the driver has stopped for good.
    fn emit(&self, event: ClientEvent) -> bool {
        tracing::debug!("queue {} for {}", event.name(), event.wishlist_id());
        match self.shared.outbound.unbounded_send(event) {
            Ok(()) => true,
            Err(e) => {
                let event = e.into_inner();
                tracing::warn!(
                    "socket closed, dropping {} for {}",
                    event.name(),
                    event.wishlist_id()
                );
                false
            }
        }
    }

    pub fn join_wishlist(&self, wishlist_id: &str) {
        self.shared.rooms.borrow_mut().insert(wishlist_id.to_string());
        self.emit(ClientEvent::JoinWishlist(wishlist_id.to_string()));
    }

    pub fn leave_wishlist(&self, wishlist_id: &str) {
        self.shared.rooms.borrow_mut().remove(wishlist_id);
        self.emit(ClientEvent::LeaveWishlist(wishlist_id.to_string()));
    }

    pub fn joined_rooms(&self) -> Vec<String> {
        self.shared.rooms.borrow().iter().cloned().collect()
    }

    pub fn emit_product_added(&self, wishlist_id: &str, product: Product) {
        self.emit(ClientEvent::ProductAdded(ProductPayload {
            wishlist_id: wishlist_id.to_string(),
            product,
        }));
    }

    pub fn emit_product_updated(&self, wishlist_id: &str, product: Product) {
        self.emit(ClientEvent::ProductUpdated(ProductPayload {
            wishlist_id: wishlist_id.to_string(),
            product,
        }));
    }

    pub fn emit_product_deleted(&self, wishlist_id: &str, product_id: &str) {
        self.emit(ClientEvent::ProductDeleted(ProductDeletedPayload {
            wishlist_id: wishlist_id.to_string(),
            product_id: product_id.to_string(),
        }));
    }

    pub fn emit_comment_added(&self, wishlist_id: &str, product_id: &str, comment: Comment) {
        self.emit(ClientEvent::CommentAdded(CommentPayload {
            wishlist_id: wishlist_id.to_string(),
            product_id: product_id.to_string(),
            comment,
        }));
    }

    pub fn emit_reaction_added(&self, wishlist_id: &str, product_id: &str, reactions: Vec<Reaction>) {
        self.emit(ClientEvent::ReactionAdded(ReactionPayload {
            wishlist_id: wishlist_id.to_string(),
            product_id: product_id.to_string(),
            reactions,
        }));
    }

    /// Listen for events of one wishlist until the subscription is dropped.
    pub fn subscribe(
        &self,
        wishlist_id: impl Into<String>,
        handler: impl FnMut(&ServerEvent) + 'static,
    ) -> Subscription {
        Subscription::new(&self.shared.listeners, wishlist_id, handler)
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    #[cfg(test)]
    pub(crate) fn shared_outbound_for_tests(
        &self,
    ) -> std::cell::RefMut<'_, Option<UnboundedReceiver<ClientEvent>>> {
        self.shared.pending_outbound.borrow_mut()
    }

    /// Apply one driver report. Returns the new state for state changes.
    pub fn handle_inbound(&self, message: Inbound) -> Option<ConnectionState> {
        match message {
            Inbound::Event(event) => {
                let delivered = self.shared.listeners.borrow_mut().dispatch(&event);
                tracing::debug!(
                    "{} for {} reached {delivered} listener(s)",
                    event.name(),
                    event.wishlist_id()
                );
                None
            }
            Inbound::State(state) => {
                if let ConnectionState::Failed { reason } = &state {
                    tracing::error!("socket gave up: {reason}; live updates stopped");
                } else {
                    tracing::info!("socket {}", state.label());
                }
                if state.is_connected() {
                    let reconnected = self.shared.connected_before.replace(true);
                    if reconnected {
                        self.rejoin_rooms();
                    }
                }
                Some(state)
            }
        }
    }

    /// Joins queued before the first connect are still in the outbound
    /// queue; after a reconnect the server has forgotten them.
    fn rejoin_rooms(&self) {
        for room in self.joined_rooms() {
            tracing::info!("rejoining wishlist room {room}");
            self.emit(ClientEvent::JoinWishlist(room));
        }
    }
}

/// Connection state of the app's socket, provided next to the client.
#[derive(Clone, Copy, Debug)]
pub struct SocketStatus(pub Signal<ConnectionState>);

/// Creates the app's [`SocketClient`] and pumps its events. Expects a
/// [`ClientConfig`] in context.
#[component]
pub fn SocketProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    let socket = use_context_provider(|| SocketClient::new(config.socket_endpoint()));
    let mut state = use_signal(|| ConnectionState::Disconnected);
    use_context_provider(|| SocketStatus(state));

    use_future(move || {
        let socket = socket.clone();
        async move {
            let Some(mut inbound) = socket.take_inbound() else {
                return;
            };
            while let Some(message) = inbound.next().await {
                if let Some(next) = socket.handle_inbound(message) {
                    state.set(next);
                }
            }
        }
    });

    children
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(socket: &SocketClient) -> Vec<ClientEvent> {
        let mut pending = socket.shared_outbound_for_tests();
        let Some(receiver) = pending.as_mut() else {
            return Vec::new();
        };
        let mut events = Vec::new();
        while let Ok(Some(event)) = receiver.try_next() {
            events.push(event);
        }
        events
    }

    fn deleted(wishlist_id: &str) -> ServerEvent {
        ServerEvent::ProductDeleted(ProductDeletedPayload {
            wishlist_id: wishlist_id.to_string(),
            product_id: "p1".to_string(),
        })
    }

    #[test]
    fn join_and_leave_are_queued_and_tracked() {
        let socket = SocketClient::new(None);
        socket.join_wishlist("w1");
        assert_eq!(socket.joined_rooms(), vec!["w1".to_string()]);

        socket.leave_wishlist("w1");
        assert!(socket.joined_rooms().is_empty());
        assert_eq!(
            drain(&socket),
            vec![
                ClientEvent::JoinWishlist("w1".into()),
                ClientEvent::LeaveWishlist("w1".into()),
            ]
        );
    }

    #[test]
    fn connect_without_endpoint_keeps_queue() {
        let socket = SocketClient::new(None);
        socket.connect();
        socket.emit_product_deleted("w1", "p9");
        assert_eq!(drain(&socket).len(), 1);
    }

    #[test]
    fn inbound_events_reach_room_subscribers() {
        let socket = SocketClient::new(None);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _subscription = socket.subscribe("w1", move |_| counter.set(counter.get() + 1));

        assert_eq!(socket.handle_inbound(Inbound::Event(deleted("w1"))), None);
        socket.handle_inbound(Inbound::Event(deleted("w2")));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn reconnect_rejoins_rooms_but_first_connect_does_not() {
        let socket = SocketClient::new(None);
        socket.join_wishlist("w1");
        socket.join_wishlist("w2");
        drain(&socket);

        let state = socket.handle_inbound(Inbound::State(ConnectionState::Connected));
        assert_eq!(state, Some(ConnectionState::Connected));
        assert!(drain(&socket).is_empty());

        socket.handle_inbound(Inbound::State(ConnectionState::Disconnected));
        socket.handle_inbound(Inbound::State(ConnectionState::Connected));
        assert_eq!(
            drain(&socket),
            vec![
                ClientEvent::JoinWishlist("w1".into()),
                ClientEvent::JoinWishlist("w2".into()),
            ]
        );
    }

    #[test]
    fn emit_after_driver_stopped_reports_failure() {
        let socket = SocketClient::new(None);
        assert!(socket.emit(ClientEvent::JoinWishlist("w1".into())));

        drop(socket.shared_outbound_for_tests().take());
        assert!(!socket.emit(ClientEvent::JoinWishlist("w1".into())));
        socket.join_wishlist("w2");
        assert_eq!(socket.joined_rooms(), vec!["w2".to_string()]);
    }

    #[test]
    fn inbound_stream_is_taken_once() {
        let socket = SocketClient::new(None);
        assert!(socket.take_inbound().is_some());
        assert!(socket.take_inbound().is_none());
    }

    #[test]
    fn clones_share_one_connection() {
        let socket = SocketClient::new(Some("ws://localhost:5000/ws".into()));
        let other = socket.clone();
        assert_eq!(socket, other);
        assert_ne!(socket, SocketClient::new(None));
    }
}
