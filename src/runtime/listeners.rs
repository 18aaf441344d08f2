//! Process-wide event sources with scoped listener registrations.
//!
//! A [`Subscription`] unregisters its listener when dropped, so a component
//! that owns its subscriptions releases them on every exit path: normal
//! teardown, early return or unwinding.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Identifier of one registration on an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Registry<T> {
    next_id: u64,
    listeners: BTreeMap<ListenerId, T>,
}

trait Unregister {
    fn unregister(&self, id: ListenerId);
    fn contains(&self, id: ListenerId) -> bool;
}

impl<T> Unregister for RefCell<Registry<T>> {
    fn unregister(&self, id: ListenerId) {
        self.borrow_mut().listeners.remove(&id);
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.borrow().listeners.contains_key(&id)
    }
}

/// A global event source such as window resize or scroll.
///
/// `T` identifies who should receive the event; dispatch is done by the owner
/// of the source, which walks [`EventSource::listeners`].
#[derive(Debug)]
pub struct EventSource<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone + 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> EventSource<T> {
    /// Create a source with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// subscription is dropped.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, target: T) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = ListenerId(registry.next_id);
            registry.next_id += 1;
            registry.listeners.insert(id, target);
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        let registry: Weak<dyn Unregister> = weak;
        Subscription { id, registry }
    }

    /// Snapshot of current listeners in registration order.
    ///
    /// A snapshot so that listeners may subscribe or unsubscribe while the
    /// caller is dispatching.
    pub fn listeners(&self) -> Vec<T> {
        self.registry.borrow().listeners.values().cloned().collect()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Scoped registration on an [`EventSource`]. Unregisters on drop.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<dyn Unregister>,
}

impl Subscription {
    /// Registration id.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered.
    ///
    /// False once the source itself has been dropped.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }

    /// Unregister now. Same as dropping.
    pub fn release(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_registers_listener() {
        let source = EventSource::new();
        let sub = source.subscribe("resize");

        assert_eq!(source.listeners(), vec!["resize"]);
        assert!(sub.is_active());
    }

    #[test]
    fn drop_unregisters_listener() {
        let source = EventSource::new();
        let sub = source.subscribe("a");
        let _keep = source.subscribe("b");

        drop(sub);

        assert_eq!(source.listeners(), vec!["b"]);
    }

    #[test]
    fn release_is_equivalent_to_drop() {
        let source = EventSource::new();
        source.subscribe(1).release();
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn listeners_keep_registration_order() {
        let source = EventSource::new();
        let _a = source.subscribe('a');
        let _b = source.subscribe('b');
        let _c = source.subscribe('c');
        assert_eq!(source.listeners(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn subscription_outliving_source_is_harmless() {
        let source = EventSource::new();
        let sub = source.subscribe(());
        drop(source);

        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn unwinding_releases_subscription() {
        let source = EventSource::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _sub = source.subscribe("scroll");
            panic!("component failed mid-mount");
        }));

        assert!(result.is_err());
        assert_eq!(source.listener_count(), 0);
    }
}
