//! Domain store over an injected key-value backend.
//!
//! # Responsibility
//! - Own the storage key scheme, current and legacy.
//! - Run the lazy one-time migration from legacy keys on read.
//! - Provide CRUD for tasks and links with the absorb-and-log error policy.
//!
//! # Invariants
//! - Record ids are generated here and never reused.
//! - `created_at` is written once; `updated_at` is restamped on every
//!   successful update.
//! - A category never exceeds [`LINKS_PER_TYPE_LIMIT`] links through
//!   `add_link`.
//! - Reads degrade to empty collections on medium failure or corrupt
//!   content; writes on a failed medium are skipped. Neither surfaces to
//!   the caller.

use crate::model::link::{Link, LinkCounts, LinkDraft, LinkId, LinkType, LINKS_PER_TYPE_LIMIT};
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::storage::StorageBackend;
use chrono::Utc;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Current storage key of the tasks collection.
pub const TASKS_KEY: &str = "task-manager-tasks";
/// Current storage key of the links collection.
pub const LINKS_KEY: &str = "task-manager-links";
/// Deprecated tasks key, read once for migration and then removed.
pub const LEGACY_TASKS_KEY: &str = "cmf-tasks";
/// Deprecated links key, read once for migration and then removed.
pub const LEGACY_LINKS_KEY: &str = "cmf-links";

/// Refusal to store another link of an already-full category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkQuotaError {
    /// Category that is at capacity.
    pub kind: LinkType,
    /// The per-category limit that was hit.
    pub limit: usize,
}

impl Display for LinkQuotaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let category = match self.kind {
            LinkType::Youtube => "youtube",
            LinkType::Website => "website",
        };
        write!(f, "link quota reached: {} {category} links", self.limit)
    }
}

impl Error for LinkQuotaError {}

/// Sole gateway to durable task/link state.
///
/// Generic over the storage capability so tests run against
/// [`crate::MemoryStorage`] and production callers against
/// [`crate::FileStorage`]. Every operation is a plain synchronous call;
/// add/update/delete are non-atomic read-modify-writes, so independent
/// writers to the same medium race with last-write-wins semantics.
pub struct DomainStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> DomainStore<S> {
    /// Creates a store over the given backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Returns the full tasks collection in storage order.
    ///
    /// Empty when the medium is unavailable or the stored value is
    /// unparseable; both cases are logged, never raised.
    pub fn get_tasks(&self) -> Vec<Task> {
        self.read_collection(TASKS_KEY, LEGACY_TASKS_KEY)
    }

    /// Serializes and overwrites the full tasks collection.
    pub fn save_tasks(&self, tasks: &[Task]) {
        self.write_collection(TASKS_KEY, tasks);
    }

    /// Creates a task from the draft and appends it to storage.
    ///
    /// Fills in a fresh id and creation timestamps; `due_date` falls back
    /// to the creation instant when the draft leaves it unset. Input
    /// content is persisted as given; required-field checks happen in the
    /// caller before the draft is built.
    pub fn add_task(&self, draft: TaskDraft) -> Task {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date.unwrap_or(now),
            status: draft.status,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };

        let mut tasks = self.get_tasks();
        tasks.push(task.clone());
        self.save_tasks(&tasks);
        task
    }

    /// Merges the patch over the task with the given id.
    ///
    /// Returns `None` without writing when the id is unknown. On success
    /// `updated_at` is restamped and the full collection is persisted.
    /// `id` and `created_at` are not representable in the patch and stay
    /// as stored.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        let mut tasks = self.get_tasks();
        let slot = tasks.iter_mut().find(|task| task.id == id)?;

        slot.apply(patch);
        slot.updated_at = Utc::now();
        let updated = slot.clone();

        self.save_tasks(&tasks);
        Some(updated)
    }

    /// Removes the task with the given id.
    ///
    /// Returns whether a removal occurred; the collection is persisted
    /// only when it did.
    pub fn delete_task(&self, id: TaskId) -> bool {
        let tasks = self.get_tasks();
        let before = tasks.len();
        let remaining: Vec<Task> = tasks.into_iter().filter(|task| task.id != id).collect();

        if remaining.len() == before {
            return false;
        }

        self.save_tasks(&remaining);
        true
    }

    /// Returns the full links collection in storage order.
    pub fn get_links(&self) -> Vec<Link> {
        self.read_collection(LINKS_KEY, LEGACY_LINKS_KEY)
    }

    /// Serializes and overwrites the full links collection.
    pub fn save_links(&self, links: &[Link]) {
        self.write_collection(LINKS_KEY, links);
    }

    /// Creates a link from the draft and appends it to storage.
    ///
    /// Refuses with [`LinkQuotaError`] when the draft's category already
    /// holds [`LINKS_PER_TYPE_LIMIT`] links; nothing is written in that
    /// case. The draft's `kind` and `url` are trusted as classified and
    /// validated by the caller.
    pub fn add_link(&self, draft: LinkDraft) -> Result<Link, LinkQuotaError> {
        let mut links = self.get_links();
        let counts = LinkCounts::tally(&links);
        if counts.is_full(draft.kind) {
            info!(
                "event=link_add module=store status=rejected reason=quota kind={:?} limit={}",
                draft.kind, LINKS_PER_TYPE_LIMIT
            );
            return Err(LinkQuotaError {
                kind: draft.kind,
                limit: LINKS_PER_TYPE_LIMIT,
            });
        }

        let link = Link {
            id: Uuid::new_v4(),
            title: draft.title,
            url: draft.url,
            kind: draft.kind,
            created_at: Utc::now(),
        };

        links.push(link.clone());
        self.save_links(&links);
        Ok(link)
    }

    /// Removes the link with the given id.
    ///
    /// Returns whether a removal occurred; the collection is persisted
    /// only when it did.
    pub fn delete_link(&self, id: LinkId) -> bool {
        let links = self.get_links();
        let before = links.len();
        let remaining: Vec<Link> = links.into_iter().filter(|link| link.id != id).collect();

        if remaining.len() == before {
            return false;
        }

        self.save_links(&remaining);
        true
    }

    /// Per-category tallies of the stored links, for caller-side quota
    /// pre-checks and badge display.
    pub fn link_counts(&self) -> LinkCounts {
        LinkCounts::tally(&self.get_links())
    }

    fn read_collection<T: DeserializeOwned>(&self, current: &str, legacy: &str) -> Vec<T> {
        match self.load_raw(current, legacy) {
            Some(text) => decode_records(current, &text),
            None => Vec::new(),
        }
    }

    /// Reads the current key, falling back to a one-time legacy migration.
    ///
    /// When only the legacy key holds a value it is copied verbatim to the
    /// current key and the legacy key is removed, so the fallback runs at
    /// most once per collection per medium.
    fn load_raw(&self, current: &str, legacy: &str) -> Option<String> {
        match self.backend.get_item(current) {
            Ok(Some(text)) => return Some(text),
            Ok(None) => {}
            Err(err) => {
                error!(
                    "event=collection_load module=store status=error key={current} error={err}"
                );
                return None;
            }
        }

        let text = match self.backend.get_item(legacy) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                error!("event=collection_load module=store status=error key={legacy} error={err}");
                return None;
            }
        };

        if let Err(err) = self.backend.set_item(current, &text) {
            error!(
                "event=legacy_migrate module=store status=error stage=copy from={legacy} to={current} error={err}"
            );
            return None;
        }
        match self.backend.remove_item(legacy) {
            Ok(()) => info!(
                "event=legacy_migrate module=store status=ok from={legacy} to={current} bytes={}",
                text.len()
            ),
            // The value is already safe under the current key; a failed
            // cleanup only leaves a stale legacy entry behind.
            Err(err) => warn!(
                "event=legacy_migrate module=store status=error stage=cleanup key={legacy} error={err}"
            ),
        }

        Some(text)
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) {
        let text = match serde_json::to_string(items) {
            Ok(text) => text,
            Err(err) => {
                error!("event=collection_encode module=store status=error key={key} error={err}");
                return;
            }
        };

        if let Err(err) = self.backend.set_item(key, &text) {
            error!("event=collection_save module=store status=error key={key} error={err}");
        }
    }
}

/// Decodes a stored JSON array, rejecting malformed records one by one.
///
/// An unparseable top-level value degrades the whole collection to empty;
/// a malformed element is dropped while well-formed neighbors survive.
fn decode_records<T: DeserializeOwned>(key: &str, text: &str) -> Vec<T> {
    let raw: Vec<serde_json::Value> = match serde_json::from_str(text) {
        Ok(values) => values,
        Err(err) => {
            error!("event=collection_decode module=store status=error key={key} error={err}");
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("event=record_discard module=store status=error key={key} error={err}");
            }
        }
    }
    records
}
