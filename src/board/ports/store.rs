//! Store port for item persistence, subscription, and lane moves.

use crate::board::domain::{ItemId, ItemRecord, ItemStatus};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Callback handle receiving an owned snapshot after every mutation.
///
/// The snapshot is an independent copy of the item sequence; a subscriber
/// can read or even mutate it freely without affecting store state.
pub type Subscriber = Arc<dyn Fn(Vec<ItemRecord>) + Send + Sync>;

/// Board store contract.
///
/// Mutations are synchronous and run to completion: a mutating call does
/// not return until every subscriber has been notified, in registration
/// order, with a fully-updated snapshot.
pub trait BoardStore: Send + Sync {
    /// Appends an item to the end of the ordered sequence and notifies all
    /// subscribers.
    ///
    /// No uniqueness or content checks happen at this layer; validation is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when store state is
    /// inaccessible.
    fn add_item(&self, item: ItemRecord) -> BoardStoreResult<()>;

    /// Registers a subscriber for the store's lifetime.
    ///
    /// Registrations are never deduplicated and cannot be withdrawn.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when store state is
    /// inaccessible.
    fn subscribe(&self, subscriber: Subscriber) -> BoardStoreResult<()>;

    /// Writes the status lane of the record with the given id, then
    /// notifies all subscribers.
    ///
    /// Writing the lane a record is already on still notifies.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::RecordNotFound`] when no record has the
    /// id; nothing is mutated and nobody is notified in that case.
    fn set_status(&self, id: ItemId, status: ItemStatus) -> BoardStoreResult<()>;

    /// Returns an independent copy of the item sequence in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when store state is
    /// inaccessible.
    fn snapshot(&self) -> BoardStoreResult<Vec<ItemRecord>>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// No record carries the requested identifier.
    #[error("item not found: {0}")]
    RecordNotFound(ItemId),

    /// Store state could not be accessed.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a storage access error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
