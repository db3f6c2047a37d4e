//! Item record aggregate and its status enumeration.

use super::{AssigneeCount, ItemDescription, ItemId, ItemTitle, ParseItemStatusError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Status lane an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Work on the item is ongoing.
    Active,
    /// Work on the item has completed.
    Finished,
}

impl ItemStatus {
    /// Returns the canonical token representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ItemStatus {
    type Error = ParseItemStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseItemStatusError(value.to_owned())),
        }
    }
}

/// Board item aggregate root.
///
/// Identity, title, description, assignee count, and creation time are
/// fixed at construction; the status lane is the only field that changes
/// over the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    id: ItemId,
    title: ItemTitle,
    description: ItemDescription,
    assignee_count: AssigneeCount,
    status: ItemStatus,
    created_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Creates a new item record with a fresh identity on the active lane.
    #[must_use]
    pub fn new(
        title: ItemTitle,
        description: ItemDescription,
        assignee_count: AssigneeCount,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ItemId::new(),
            title,
            description,
            assignee_count,
            status: ItemStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item title.
    #[must_use]
    pub const fn title(&self) -> &ItemTitle {
        &self.title
    }

    /// Returns the item description.
    #[must_use]
    pub const fn description(&self) -> &ItemDescription {
        &self.description
    }

    /// Returns the assignee count.
    #[must_use]
    pub const fn assignee_count(&self) -> AssigneeCount {
        self.assignee_count
    }

    /// Returns the current status lane.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a display label for the assignees, e.g. `"2 Persons"`.
    #[must_use]
    pub fn assignees_label(&self) -> String {
        self.assignee_count.label()
    }

    /// Writes the status lane.
    ///
    /// Any lane may be written regardless of the current one; writing the
    /// current lane again is a harmless no-op on this value. The store is
    /// the authority for which record a write reaches, so mutating a
    /// snapshot copy never affects stored state.
    pub const fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}
