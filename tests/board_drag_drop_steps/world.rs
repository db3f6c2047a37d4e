//! Shared world state for board drag-and-drop BDD scenarios.

use std::sync::Arc;

use gropius::board::adapters::memory::InMemoryBoardStore;
use gropius::board::domain::{ItemId, ItemRecord};
use gropius::board::services::{BoardService, BoardServiceError};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardStore, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub last_created_item: Option<ItemRecord>,
    pub last_create_result: Option<Result<ItemRecord, BoardServiceError>>,
    pub last_drop_result: Option<Result<ItemId, BoardServiceError>>,
}

impl BoardWorld {
    /// Creates a world with a fresh board and no recorded results.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryBoardStore::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            last_created_item: None,
            last_create_result: None,
            last_drop_result: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
