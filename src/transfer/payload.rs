//! Drag payload encoding and decoding.

use super::TransferError;
use crate::board::domain::{ItemId, ItemRecord};
use serde::{Deserialize, Serialize};

/// Media-type token under which item identities travel.
///
/// Sources attach their payload under this kind and lane targets accept
/// only payloads declaring it.
pub const ITEM_ID_KIND: &str = "text/plain";

/// Identity of one item in transit between a drag source and a drop
/// target.
///
/// The item's id is the sole content; the kind tag is what lets a target
/// decide whether it can interpret the payload at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    kind: String,
    item_id: String,
}

impl DragPayload {
    /// Encodes an item's identity under [`ITEM_ID_KIND`].
    #[must_use]
    pub fn encode(item: &ItemRecord) -> Self {
        Self::with_kind(item, ITEM_ID_KIND)
    }

    /// Encodes an item's identity under an explicit kind token.
    #[must_use]
    pub fn with_kind(item: &ItemRecord, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            item_id: item.id().to_string(),
        }
    }

    /// Returns the declared kind token.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Decodes the carried item id, accepting only matching kinds.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::KindMismatch`] when the payload declares a
    /// kind other than `expected_kind`, and
    /// [`TransferError::MalformedPayload`] when the carried id fragment
    /// does not parse as an item identifier.
    pub fn decode(&self, expected_kind: &str) -> Result<ItemId, TransferError> {
        if self.kind != expected_kind {
            return Err(TransferError::KindMismatch {
                expected: expected_kind.to_owned(),
                actual: self.kind.clone(),
            });
        }
        self.item_id
            .parse()
            .map_err(|_| TransferError::MalformedPayload(self.item_id.clone()))
    }

    /// Serialises the payload to the single string a transfer slot holds.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::MalformedPayload`] when serialisation
    /// fails.
    pub fn to_transfer_string(&self) -> Result<String, TransferError> {
        serde_json::to_string(self).map_err(|err| TransferError::MalformedPayload(err.to_string()))
    }

    /// Parses a payload back out of a transfer slot string.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::MalformedPayload`] when the string is not
    /// a serialised payload.
    pub fn from_transfer_string(raw: &str) -> Result<Self, TransferError> {
        serde_json::from_str(raw).map_err(|err| TransferError::MalformedPayload(err.to_string()))
    }
}
