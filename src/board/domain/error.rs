//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The item title is empty after trimming.
    #[error("item title must not be empty")]
    EmptyTitle,

    /// The item description is empty after trimming.
    #[error("item description must not be empty")]
    EmptyDescription,

    /// The assignee count is not a positive integer.
    #[error("invalid assignee count {0}, expected a positive integer")]
    InvalidAssigneeCount(u32),
}

/// Error returned while parsing item statuses from lane or payload tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseItemStatusError(pub String);

/// Error returned while parsing item identifiers from transfer payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid item identifier: {0}")]
pub struct ParseItemIdError(pub String);
