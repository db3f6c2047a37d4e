//! Identifier and validated scalar types for the board domain.

use super::{BoardDomainError, ParseItemIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a board item record.
///
/// Assigned once at creation and never reused or reassigned for the
/// lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random item identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an item identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ParseItemIdError(value.to_owned()))
    }
}

/// Non-empty item title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Creates a validated item title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty item description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemDescription(String);

impl ItemDescription {
    /// Creates a validated item description, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyDescription`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyDescription);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive count of people assigned to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeCount(u32);

impl AssigneeCount {
    /// Creates a validated assignee count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidAssigneeCount`] when the value is
    /// zero.
    pub const fn new(value: u32) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidAssigneeCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns a display label, singular for one assignee.
    #[must_use]
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 Person".to_owned()
        } else {
            format!("{} Persons", self.0)
        }
    }
}

impl fmt::Display for AssigneeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
