//! Generic append-only collection with change subscription.

use crate::board::ports::{BoardStoreError, BoardStoreResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Callback handle receiving an owned snapshot of the sequence.
pub type Listener<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

/// Thread-safe observable collection.
///
/// Items keep insertion order and are never reordered or deduplicated.
/// Every mutation is followed, in the same call, by invoking every listener
/// in registration order with its own fresh copy of the sequence. The
/// snapshot and the listener list are captured while the write lock is
/// held, so notifications always describe the state the mutation produced;
/// the lock is released before callbacks run, which lets a listener
/// re-enter the store.
#[derive(Clone)]
pub struct ObservableStore<T> {
    state: Arc<RwLock<ObservableState<T>>>,
}

struct ObservableState<T> {
    items: Vec<T>,
    listeners: Vec<Listener<T>>,
}

impl<T> Default for ObservableState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl<T> Default for ObservableStore<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(ObservableState::default())),
        }
    }
}

impl<T: Clone> ObservableStore<T> {
    /// Creates an empty store with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the sequence and notifies every
    /// listener.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the state lock is
    /// poisoned.
    pub fn append(&self, item: T) -> BoardStoreResult<()> {
        let (listeners, snapshot) = {
            let mut state = self.write_state()?;
            state.items.push(item);
            state.notification_batch()
        };
        dispatch(&listeners, &snapshot);
        Ok(())
    }

    /// Applies `apply` to the item sequence and notifies every listener
    /// when it reports a change.
    ///
    /// Returns whether a change was reported. When `apply` returns false
    /// no notification is sent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the state lock is
    /// poisoned.
    pub fn update<F>(&self, apply: F) -> BoardStoreResult<bool>
    where
        F: FnOnce(&mut Vec<T>) -> bool,
    {
        let batch = {
            let mut state = self.write_state()?;
            if apply(&mut state.items) {
                Some(state.notification_batch())
            } else {
                None
            }
        };
        let Some((listeners, snapshot)) = batch else {
            return Ok(false);
        };
        dispatch(&listeners, &snapshot);
        Ok(true)
    }

    /// Registers a listener for the store's lifetime.
    ///
    /// Registrations are kept in order and never deduplicated; there is no
    /// way to withdraw one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the state lock is
    /// poisoned.
    pub fn subscribe(&self, listener: Listener<T>) -> BoardStoreResult<()> {
        self.write_state()?.listeners.push(listener);
        Ok(())
    }

    /// Returns an independent copy of the sequence in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> BoardStoreResult<Vec<T>> {
        Ok(self.read_state()?.items.clone())
    }

    fn write_state(&self) -> BoardStoreResult<RwLockWriteGuard<'_, ObservableState<T>>> {
        self.state
            .write()
            .map_err(|err| BoardStoreError::storage(std::io::Error::other(err.to_string())))
    }

    fn read_state(&self) -> BoardStoreResult<RwLockReadGuard<'_, ObservableState<T>>> {
        self.state
            .read()
            .map_err(|err| BoardStoreError::storage(std::io::Error::other(err.to_string())))
    }
}

impl<T: Clone> ObservableState<T> {
    fn notification_batch(&self) -> (Vec<Listener<T>>, Vec<T>) {
        (self.listeners.clone(), self.items.clone())
    }
}

/// Invokes every listener with its own copy of the snapshot.
///
/// A panicking listener is isolated so the remaining listeners still run.
fn dispatch<T: Clone>(listeners: &[Listener<T>], snapshot: &[T]) {
    for listener in listeners {
        let callback = Arc::clone(listener);
        let items = snapshot.to_vec();
        if panic::catch_unwind(AssertUnwindSafe(move || callback(items))).is_err() {
            tracing::warn!("listener panicked during notification, continuing with the rest");
        }
    }
}
