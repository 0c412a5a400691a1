//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its create/update request shapes.
//! - Keep `id` and `created_at` unreachable from the update path.
//!
//! # Invariants
//! - `id` is unique across the stored collection and never reused.
//! - `created_at <= updated_at` for every persisted record.
//! - `status` is a two-state toggle; overdue is derived at display time and
//!   never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Completion state of a task.
///
/// Transitions are caller-driven in both directions; there are no
/// intermediate or automatic states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet completed.
    Pending,
    /// Marked done by the user.
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Canonical task record as persisted in the tasks collection.
///
/// Field names serialize in camelCase to stay byte-compatible with the
/// stored JSON layout, legacy data included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID generated by the store, immutable after creation.
    pub id: TaskId,
    /// Short summary. Required; callers must reject empty-after-trim input.
    pub title: String,
    /// Free-form details, empty by default.
    pub description: String,
    /// When the task is due. Defaults to creation time when the draft
    /// omits it.
    pub due_date: DateTime<Utc>,
    /// Completion state.
    pub status: TaskStatus,
    /// Additional notes, empty by default.
    pub notes: String,
    /// Set once at creation, never mutated afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a task.
///
/// The store fills in `id`, `created_at` and `updated_at`; they are not
/// representable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `None` means "due at creation time".
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub notes: String,
}

impl TaskDraft {
    /// Creates a draft with the given title and defaults for the rest.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update applied over an existing task.
///
/// `id` and `created_at` cannot be expressed here, which makes their
/// immutability structural rather than conventional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

impl TaskPatch {
    /// Returns whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    /// Shorthand for the status toggle used by completion checkboxes.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Task {
    /// Merges a patch over this record, leaving `id` and `created_at`
    /// untouched. The caller is responsible for restamping `updated_at`.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
