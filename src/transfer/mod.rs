//! Drag-and-drop transfer protocol.
//!
//! A drag gesture hands an item's identity from a drag source to a drop
//! target without either side holding a reference to the other's state.
//! The identity travels as a [`DragPayload`] tagged with a media-type
//! kind; a target only decodes payloads whose kind matches its own, and
//! the per-gesture state machines track what each side should currently
//! display.

mod error;
mod gesture;
mod payload;

pub use error::TransferError;
pub use gesture::{DragSource, DragSourceState, DropTarget, DropTargetState};
pub use payload::{DragPayload, ITEM_ID_KIND};

#[cfg(test)]
mod tests;
