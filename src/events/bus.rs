//! Event bus - synchronous publish/subscribe for `GameEvent`s.
//!
//! Single-threaded. `EventBus` is a cheap cloneable handle; every clone
//! shares one listener registry. A listener stays registered for as long as
//! the `Subscription` returned by `subscribe` is alive.
//!
//! ## Reentrancy
//!
//! `publish` does not hold the registry borrow while listeners run, so a
//! listener may subscribe, drop subscriptions, or publish further events.
//! A listener removed mid-broadcast is not called for the rest of that
//! broadcast. A listener that is already running (nested publish reaching
//! it again) is skipped for the nested event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::event::GameEvent;

type Listener = Rc<RefCell<dyn FnMut(&GameEvent)>>;

/// Identifier of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl Registry {
    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(l, _)| *l == id)
    }

    fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let index = self.listeners.iter().position(|(l, _)| *l == id)?;
        Some(self.listeners.remove(index).1)
    }
}

/// Shared listener registry.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use rust_ccg_match::events::{EventBus, GameEvent};
///
/// let bus = EventBus::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&seen);
/// let subscription = bus.subscribe(move |_| counter.set(counter.get() + 1));
///
/// bus.publish(&GameEvent::PauseToggled);
/// drop(subscription);
/// bus.publish(&GameEvent::PauseToggled);
///
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is called for every published event, in
    /// registration order, until the returned `Subscription` is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&GameEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        trace!(listener = id.0, "listener subscribed");
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Broadcast an event to every registered listener.
    pub fn publish(&self, event: &GameEvent) {
        let snapshot: Vec<(ListenerId, Listener)> = self.registry.borrow().listeners.clone();
        trace!(event = event.name(), listeners = snapshot.len(), "publish");

        for (id, listener) in snapshot {
            if !self.registry.borrow().is_registered(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(event),
                Err(_) => trace!(listener = id.0, event = event.name(), "listener busy, skipped"),
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle. Dropping it unregisters the listener.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: ListenerId,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The listener is still registered with a live bus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map_or(false, |registry| registry.borrow().is_registered(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Bind the removed listener so it is dropped after the borrow ends;
        // its closure may own other subscriptions.
        let removed = registry.borrow_mut().remove(self.id);
        if removed.is_some() {
            trace!(listener = self.id.0, "listener unsubscribed");
        }
        drop(removed);
    }
}
