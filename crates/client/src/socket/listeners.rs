//! Per-room event listeners.
//!
//! Every listener is bound to one wishlist id and only sees events for that
//! wishlist. A [`Subscription`] unregisters its listener when dropped, so a
//! view that goes away cannot keep receiving (or double-receiving) events.
//! A subscription dropped while events are being dispatched is retired and
//! removed as soon as that dispatch finishes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus::logger::tracing;
use wishlist_shared::ServerEvent;

pub type ListenerId = u64;

type Handler = Box<dyn FnMut(&ServerEvent)>;

struct Listener {
    id: ListenerId,
    wishlist_id: String,
    handler: Handler,
}

#[derive(Default)]
pub struct ListenerRegistry {
    next_id: ListenerId,
    listeners: Vec<Listener>,
    /// Ids whose subscription was dropped while the registry was borrowed.
    retired: Rc<RefCell<Vec<ListenerId>>>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        wishlist_id: impl Into<String>,
        handler: impl FnMut(&ServerEvent) + 'static,
    ) -> ListenerId {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners.push(Listener {
            id,
            wishlist_id: wishlist_id.into(),
            handler: Box::new(handler),
        });
        id
    }

    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to the listeners of its wishlist.
    /// Returns how many handlers ran.
    pub fn dispatch(&mut self, event: &ServerEvent) -> usize {
        self.sweep_retired();
        let room = event.wishlist_id();
        let retired = self.retired.clone();
        let mut delivered = 0;
        for listener in self.listeners.iter_mut().filter(|l| l.wishlist_id == room) {
            if retired.borrow().contains(&listener.id) {
                continue;
            }
            (listener.handler)(event);
            delivered += 1;
        }
        self.sweep_retired();
        delivered
    }

    fn sweep_retired(&mut self) {
        let retired = std::mem::take(&mut *self.retired.borrow_mut());
        if !retired.is_empty() {
            self.listeners.retain(|l| !retired.contains(&l.id));
        }
    }

    pub fn listeners_for(&self, wishlist_id: &str) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.wishlist_id == wishlist_id)
            .count()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Keeps a listener registered for as long as it lives.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<ListenerRegistry>>,
    retired: Weak<RefCell<Vec<ListenerId>>>,
}

impl Subscription {
    pub fn new(
        registry: &Rc<RefCell<ListenerRegistry>>,
        wishlist_id: impl Into<String>,
        handler: impl FnMut(&ServerEvent) + 'static,
    ) -> Self {
        let mut inner = registry.borrow_mut();
        let id = inner.register(wishlist_id, handler);
        let retired = Rc::downgrade(&inner.retired);
        Self {
            id,
            registry: Rc::downgrade(registry),
            retired,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // A handler may drop a subscription mid-dispatch.
        match registry.try_borrow_mut() {
            Ok(mut registry) => {
                registry.unregister(self.id);
            }
            Err(_) => {
                if let Some(retired) = self.retired.upgrade() {
                    tracing::debug!("listener {} retired during dispatch", self.id);
                    retired.borrow_mut().push(self.id);
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wishlist_shared::ProductDeletedPayload;

    fn deleted(wishlist_id: &str, product_id: &str) -> ServerEvent {
        ServerEvent::ProductDeleted(ProductDeletedPayload {
            wishlist_id: wishlist_id.to_string(),
            product_id: product_id.to_string(),
        })
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&ServerEvent) + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move |_: &ServerEvent| inner.set(inner.get() + 1))
    }

    #[test]
    fn events_only_reach_listeners_of_their_wishlist() {
        let mut registry = ListenerRegistry::new();
        let (w1, on_w1) = counter();
        let (w2, on_w2) = counter();
        registry.register("w1", on_w1);
        registry.register("w2", on_w2);

        assert_eq!(registry.dispatch(&deleted("w1", "p1")), 1);
        assert_eq!(w1.get(), 1);
        assert_eq!(w2.get(), 0);
    }

    #[test]
    fn each_listener_runs_once_per_event() {
        let mut registry = ListenerRegistry::new();
        let (count, handler) = counter();
        registry.register("w1", handler);

        registry.dispatch(&deleted("w1", "p1"));
        registry.dispatch(&deleted("w1", "p2"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unregister_stops_delivery() {
        let mut registry = ListenerRegistry::new();
        let (count, handler) = counter();
        let id = registry.register("w1", handler);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert_eq!(registry.dispatch(&deleted("w1", "p1")), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let (count, handler) = counter();
        let subscription = Subscription::new(&registry, "w1", handler);
        assert_eq!(registry.borrow().listeners_for("w1"), 1);

        drop(subscription);
        assert!(registry.borrow().is_empty());
        registry.borrow_mut().dispatch(&deleted("w1", "p1"));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn subscription_dropped_by_its_handler_is_removed_after_dispatch() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let (count, mut handler) = counter();

        let inner = slot.clone();
        let subscription = Subscription::new(&registry, "w1", move |event: &ServerEvent| {
            handler(event);
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        assert_eq!(registry.borrow_mut().dispatch(&deleted("w1", "p1")), 1);
        assert!(slot.borrow().is_none());
        assert!(registry.borrow().is_empty());

        registry.borrow_mut().dispatch(&deleted("w1", "p2"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn listener_retired_mid_dispatch_misses_the_rest_of_it() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let (count, handler) = counter();
        let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let target = later.clone();
        let _first = Subscription::new(&registry, "w1", move |_: &ServerEvent| {
            target.borrow_mut().take();
        });
        *later.borrow_mut() = Some(Subscription::new(&registry, "w1", handler));

        assert_eq!(registry.borrow_mut().dispatch(&deleted("w1", "p1")), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(registry.borrow().listeners_for("w1"), 1);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let subscription = Subscription::new(&registry, "w1", |_: &ServerEvent| {});
        drop(registry);
        drop(subscription);
    }
}
