//! Persistence and domain core for the taskdeck task & bookmark manager.
//! This crate is the single source of truth for business invariants.

pub mod format;
pub mod logging;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod validate;

pub use format::format_date;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::link::{
    Link, LinkCounts, LinkDraft, LinkId, LinkType, LINKS_PER_TYPE_LIMIT,
};
pub use model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
pub use query::{
    is_overdue, links_of_type, select_tasks, task_stats, StatusFilter, TaskSort, TaskStats,
    TaskViewQuery,
};
pub use storage::{
    FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult, UnavailableStorage,
};
pub use store::{
    DomainStore, LinkQuotaError, LEGACY_LINKS_KEY, LEGACY_TASKS_KEY, LINKS_KEY, TASKS_KEY,
};
pub use validate::{classify_url, is_valid_url, is_youtube_url};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
