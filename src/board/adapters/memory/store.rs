//! In-memory board store and the process-wide accessor.

use super::observable::ObservableStore;
use crate::board::domain::{ItemId, ItemRecord, ItemStatus};
use crate::board::ports::{BoardStore, BoardStoreError, BoardStoreResult, Subscriber};
use once_cell::sync::Lazy;
use std::sync::Arc;

static PROCESS_BOARD: Lazy<Arc<InMemoryBoardStore>> =
    Lazy::new(|| Arc::new(InMemoryBoardStore::new()));

/// Returns the process-wide board store, constructing it on first access.
///
/// Every call returns the same instance for the lifetime of the process;
/// there is no reset. Code that needs an isolated board constructs its own
/// [`InMemoryBoardStore`] instead.
#[must_use]
pub fn process_board() -> Arc<InMemoryBoardStore> {
    Arc::clone(&PROCESS_BOARD)
}

/// Thread-safe in-memory board store.
#[derive(Clone, Default)]
pub struct InMemoryBoardStore {
    items: ObservableStore<ItemRecord>,
}

impl InMemoryBoardStore {
    /// Creates an empty board store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStore for InMemoryBoardStore {
    fn add_item(&self, item: ItemRecord) -> BoardStoreResult<()> {
        tracing::debug!(item_id = %item.id(), "appending item to board");
        self.items.append(item)
    }

    fn subscribe(&self, subscriber: Subscriber) -> BoardStoreResult<()> {
        self.items.subscribe(subscriber)
    }

    fn set_status(&self, id: ItemId, status: ItemStatus) -> BoardStoreResult<()> {
        let changed = self.items.update(|items| {
            items
                .iter_mut()
                .find(|item| item.id() == id)
                .is_some_and(|item| {
                    item.set_status(status);
                    true
                })
        })?;
        if !changed {
            return Err(BoardStoreError::RecordNotFound(id));
        }
        tracing::debug!(item_id = %id, status = status.as_str(), "moved item between lanes");
        Ok(())
    }

    fn snapshot(&self) -> BoardStoreResult<Vec<ItemRecord>> {
        self.items.snapshot()
    }
}
