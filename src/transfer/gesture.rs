//! Per-gesture state machines for drag sources and drop targets.

use super::TransferError;
use super::payload::{DragPayload, ITEM_ID_KIND};
use crate::board::domain::{ItemId, ItemRecord, ItemStatus};

/// Source-side gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSourceState {
    /// No gesture in progress.
    Idle,
    /// A drag has started and the payload is attached.
    Dragging,
}

/// Drag source for one item.
///
/// Encodes the item's identity when the gesture starts and returns to
/// idle when it ends, whether or not a drop happened anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    payload: DragPayload,
    state: DragSourceState,
}

impl DragSource {
    /// Creates an idle source carrying the item's encoded identity.
    #[must_use]
    pub fn new(item: &ItemRecord) -> Self {
        Self {
            payload: DragPayload::encode(item),
            state: DragSourceState::Idle,
        }
    }

    /// Starts the gesture and exposes the payload for the transfer slot.
    pub const fn begin(&mut self) -> &DragPayload {
        self.state = DragSourceState::Dragging;
        &self.payload
    }

    /// Ends the gesture, dropped or not.
    pub const fn end(&mut self) {
        self.state = DragSourceState::Idle;
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragSourceState {
        self.state
    }

    /// Returns the attached payload.
    #[must_use]
    pub const fn payload(&self) -> &DragPayload {
        &self.payload
    }
}

/// Target-side gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTargetState {
    /// No acceptable payload is hovering.
    Idle,
    /// An acceptable payload is hovering; the renderer marks the lane as
    /// drop-eligible.
    HoverAccepted,
}

/// Drop target for one status lane.
///
/// Each lane target carries a fixed status; a consumed drop writes that
/// status to the dropped record no matter which lane it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    lane: ItemStatus,
    state: DropTargetState,
}

impl DropTarget {
    /// Creates an idle target for the given lane.
    #[must_use]
    pub const fn new(lane: ItemStatus) -> Self {
        Self {
            lane,
            state: DropTargetState::Idle,
        }
    }

    /// Handles a hover, accepting only payloads of the item kind.
    ///
    /// Returns whether the payload is acceptable; an unacceptable payload
    /// resets the target to idle.
    pub fn hover(&mut self, payload: &DragPayload) -> bool {
        if payload.kind() == ITEM_ID_KIND {
            self.state = DropTargetState::HoverAccepted;
            true
        } else {
            self.state = DropTargetState::Idle;
            false
        }
    }

    /// Handles the hover leaving the target.
    pub const fn leave(&mut self) {
        self.state = DropTargetState::Idle;
    }

    /// Consumes a drop, returning the target to idle.
    ///
    /// The decoded id is handed to the caller to write this target's lane
    /// status into the store.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::KindMismatch`] for payloads of a foreign
    /// kind and [`TransferError::MalformedPayload`] for ids that do not
    /// parse; the store is untouched in both cases.
    pub fn accept(&mut self, payload: &DragPayload) -> Result<ItemId, TransferError> {
        self.state = DropTargetState::Idle;
        payload.decode(ITEM_ID_KIND)
    }

    /// Returns the lane status this target writes on a drop.
    #[must_use]
    pub const fn lane(&self) -> ItemStatus {
        self.lane
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DropTargetState {
        self.state
    }

    /// Returns whether the target currently marks itself drop-eligible.
    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        matches!(self.state, DropTargetState::HoverAccepted)
    }
}
