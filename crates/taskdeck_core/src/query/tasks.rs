//! Task list selection and summary stats.
//!
//! # Responsibility
//! - Apply the search/status/sort controls of the task list view.
//! - Derive the header counters, including the overdue count.
//!
//! # Invariants
//! - Sorting is stable, so equal keys keep storage order.
//! - Overdue is derived from `due_date` against a caller-supplied clock
//!   and never persisted.

use crate::model::task::{Task, TaskStatus};
use chrono::{DateTime, Utc};

/// Status facet of the task list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only pending tasks.
    Pending,
    /// Only completed tasks.
    Completed,
}

/// Sort order of the task list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSort {
    /// Earliest due date first.
    #[default]
    DueDate,
    /// Pending before completed.
    Status,
    /// Most recently created first.
    Created,
}

/// Combined view controls applied by [`select_tasks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskViewQuery {
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort: TaskSort,
}

/// Header counters for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Whether a task is past due: still pending with `due_date` before `now`.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.status == TaskStatus::Pending && task.due_date < now
}

/// Filters, searches and sorts a task collection for display.
pub fn select_tasks(tasks: &[Task], query: &TaskViewQuery) -> Vec<Task> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| match query.status {
            StatusFilter::All => true,
            StatusFilter::Pending => task.status == TaskStatus::Pending,
            StatusFilter::Completed => task.status == TaskStatus::Completed,
        })
        .filter(|task| match &needle {
            Some(needle) => {
                task.title.to_lowercase().contains(needle)
                    || task.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .cloned()
        .collect();

    match query.sort {
        TaskSort::DueDate => selected.sort_by_key(|task| task.due_date),
        TaskSort::Status => {
            selected.sort_by_key(|task| task.status == TaskStatus::Completed);
        }
        TaskSort::Created => {
            selected.sort_by_key(|task| std::cmp::Reverse(task.created_at));
        }
    }

    selected
}

/// Computes the task list header counters.
pub fn task_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
        if is_overdue(task, now) {
            stats.overdue += 1;
        }
    }
    stats
}
