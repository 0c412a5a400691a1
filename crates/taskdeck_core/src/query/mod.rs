//! Pure view helpers over store-loaded collections.
//!
//! # Responsibility
//! - Filter, search, sort and summarize tasks for display.
//! - Partition links by category.
//!
//! # Invariants
//! - Everything here is a pure function over caller-held copies; nothing
//!   reads or writes the storage medium.

pub mod links;
pub mod tasks;

pub use links::links_of_type;
pub use tasks::{is_overdue, select_tasks, task_stats, StatusFilter, TaskSort, TaskStats, TaskViewQuery};
