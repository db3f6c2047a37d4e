//! Service layer for item creation and lane moves.

use crate::board::domain::{
    AssigneeCount, BoardDomainError, ItemDescription, ItemId, ItemRecord, ItemStatus, ItemTitle,
};
use crate::board::ports::{BoardStore, BoardStoreError, BoardStoreResult, Subscriber};
use crate::transfer::{DragPayload, ITEM_ID_KIND, TransferError};
use crate::validation::{FieldValue, ValidationRule};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Field rule applied to the title input.
const TITLE_RULE: ValidationRule = ValidationRule::new().with_required().with_min_length(5);

/// Field rule applied to the description input.
const DESCRIPTION_RULE: ValidationRule =
    ValidationRule::new().with_required().with_min_length(10);

/// Field rule applied to the assignee count input.
const ASSIGNEES_RULE: ValidationRule =
    ValidationRule::new().with_required().with_min(1).with_max(10);

/// Request payload for creating a board item from form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    title: String,
    description: String,
    assignee_count: u32,
}

impl CreateItemRequest {
    /// Creates a request from raw form field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee_count: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee_count,
        }
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Every intake field failed its rule.
    #[error("invalid input: all fields were rejected")]
    ValidationFailed,
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// Transfer payload was rejected.
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
#[derive(Clone)]
pub struct BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new item on the active lane from form input.
    ///
    /// Intake is deliberately lenient: the request is rejected outright
    /// only when every one of the three fields fails its own rule, so a
    /// single passing field carries the whole submission. Fields that rode
    /// along invalid are still subject to the domain invariants, which
    /// reject them individually.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ValidationFailed`] when all three
    /// fields fail intake, [`BoardServiceError::Domain`] when an accepted
    /// submission violates a domain invariant, and
    /// [`BoardServiceError::Store`] when the store rejects the append.
    pub fn create_item(&self, request: CreateItemRequest) -> BoardServiceResult<ItemRecord> {
        if !intake_accepts(&request) {
            return Err(BoardServiceError::ValidationFailed);
        }

        let title = ItemTitle::new(request.title)?;
        let description = ItemDescription::new(request.description)?;
        let assignee_count = AssigneeCount::new(request.assignee_count)?;
        let item = ItemRecord::new(title, description, assignee_count, &*self.clock);

        tracing::debug!(item_id = %item.id(), "creating board item");
        self.store.add_item(item.clone())?;
        Ok(item)
    }

    /// Handles a drop gesture on a lane: decodes the transfer string and
    /// writes the lane's fixed status to the decoded record.
    ///
    /// The target lane's status always wins, regardless of the record's
    /// current lane; dropping a record on its own lane is an idempotent
    /// write that still notifies every subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Transfer`] when the payload cannot be
    /// decoded or declares a foreign kind, and [`BoardServiceError::Store`]
    /// with the store's record-not-found error when the decoded id has no
    /// record.
    pub fn drop_on_lane(&self, transfer: &str, lane: ItemStatus) -> BoardServiceResult<ItemId> {
        let payload = DragPayload::from_transfer_string(transfer)?;
        let item_id = payload.decode(ITEM_ID_KIND)?;
        tracing::debug!(item_id = %item_id, lane = lane.as_str(), "handling drop on lane");
        self.store.set_status(item_id, lane)?;
        Ok(item_id)
    }

    /// Registers a renderer subscriber on the underlying store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store rejects the
    /// registration.
    pub fn subscribe(&self, subscriber: Subscriber) -> BoardServiceResult<()> {
        Ok(self.store.subscribe(subscriber)?)
    }

    /// Returns an independent copy of the store's item sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when store state is
    /// inaccessible.
    pub fn snapshot(&self) -> BoardServiceResult<Vec<ItemRecord>> {
        let snapshot: BoardStoreResult<Vec<ItemRecord>> = self.store.snapshot();
        Ok(snapshot?)
    }
}

/// The submission is rejected only when all three fields fail their own
/// rules; any single passing field accepts the whole form.
fn intake_accepts(request: &CreateItemRequest) -> bool {
    let title_valid = TITLE_RULE.is_satisfied_by(FieldValue::Text(&request.title));
    let description_valid =
        DESCRIPTION_RULE.is_satisfied_by(FieldValue::Text(&request.description));
    let assignees_valid =
        ASSIGNEES_RULE.is_satisfied_by(FieldValue::Number(i64::from(request.assignee_count)));
    title_valid || description_valid || assignees_valid
}
