//! Persistence gateway for the task and link collections.
//!
//! # Responsibility
//! - Mediate every read and write of durable task/link state.
//! - Keep storage keys, legacy migration, and quota rules in one place.
//!
//! # Invariants
//! - No other module touches the storage medium directly.
//! - Expected outcomes (not-found, quota exhausted) surface as return
//!   values, never as panics.

mod domain_store;

pub use domain_store::{
    DomainStore, LinkQuotaError, LEGACY_LINKS_KEY, LEGACY_TASKS_KEY, LINKS_KEY, TASKS_KEY,
};
