//! Model publication: a latest-value cell and an observer list.
//!
//! [`SnapshotCell`] lets render or network threads read the newest model
//! while the update thread replaces it. [`Broadcaster`] notifies observers
//! of each new value.
//!
//! # Failure Modes
//!
//! - **Re-entrant subscribe**: observers are called outside the registry
//!   lock, so an observer may subscribe or unsubscribe (itself included)
//!   without deadlocking. Changes take effect from the next emission.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: AtomicU64,
    observers: Mutex<Vec<(u64, Observer<T>)>>,
}

/// Thread-safe list of observers for values of type `T`.
pub struct Broadcaster<T> {
    registry: Arc<Registry<T>>,
}

impl<T> Clone for Broadcaster<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> Default for Broadcaster<T> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(0),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }
}

impl<T: 'static> fmt::Debug for Broadcaster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl<T: 'static> Broadcaster<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`. It stays registered until the returned
    /// [`Subscription`] is unsubscribed or dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.observers.lock().push((id, Arc::new(observer)));
        tracing::trace!(id, "observer subscribed");

        let registry: Weak<Registry<T>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.observers.lock().retain(|(other, _)| *other != id);
                tracing::trace!(id, "observer unsubscribed");
            }
        })
    }

    /// Call every observer registered at the time of the call, in
    /// registration order.
    pub fn emit(&self, value: &T) {
        let observers: Vec<Observer<T>> = self
            .registry
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(value);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.registry.observers.lock().len()
    }
}

/// Handle to a registered observer.
pub struct Subscription {
    cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(cancel))),
        }
    }

    /// Stop receiving values. Calling this more than once does nothing.
    pub fn unsubscribe(&self) {
        let cancel = self.cancel.lock().take();
        if let Some(cancel) = cancel {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.lock().is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Latest-value cell. Readers get the value current at the time of the
/// call and keep it alive for as long as they need.
#[derive(Debug)]
pub struct SnapshotCell<T> {
    current: RwLock<Arc<T>>,
}

impl<T> SnapshotCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(value)),
        }
    }

    pub fn load(&self) -> Arc<T> {
        Arc::clone(&self.current.read())
    }

    pub fn store(&self, value: Arc<T>) {
        *self.current.write() = value;
    }
}
