//! Bookmarked link domain model.
//!
//! # Responsibility
//! - Define the link record and its creation request shape.
//! - Express the per-category quota as data (`LinkCounts`) so both the store
//!   and UI callers enforce the same limit.
//!
//! # Invariants
//! - `kind` is derived from the URL pattern at creation time and never
//!   recomputed afterwards.
//! - At most [`LINKS_PER_TYPE_LIMIT`] links of each kind coexist in storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a link record.
pub type LinkId = Uuid;

/// Maximum number of stored links per [`LinkType`].
///
/// With two categories this also caps the total collection at 10.
pub const LINKS_PER_TYPE_LIMIT: usize = 5;

/// Category of a bookmarked URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// youtube.com / youtu.be destinations.
    Youtube,
    /// Everything else.
    Website,
}

/// Canonical link record as persisted in the links collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Stable global ID generated by the store.
    pub id: LinkId,
    /// Display label. Required.
    pub title: String,
    /// Destination URL. Callers must verify parseability before the draft
    /// reaches the store.
    pub url: String,
    /// Serialized as `type` to match the stored JSON layout.
    #[serde(rename = "type")]
    pub kind: LinkType,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a link.
///
/// `kind` is classified by the caller from the URL string (see
/// `is_youtube_url`); the store trusts it as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub kind: LinkType,
}

/// Per-category link tallies, the store-provided counts quota checks
/// run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub youtube: usize,
    pub website: usize,
}

impl LinkCounts {
    /// Tallies a collection by category.
    pub fn tally(links: &[Link]) -> Self {
        let mut counts = Self::default();
        for link in links {
            match link.kind {
                LinkType::Youtube => counts.youtube += 1,
                LinkType::Website => counts.website += 1,
            }
        }
        counts
    }

    /// Count for one category.
    pub fn of(&self, kind: LinkType) -> usize {
        match kind {
            LinkType::Youtube => self.youtube,
            LinkType::Website => self.website,
        }
    }

    /// Total across categories.
    pub fn total(&self) -> usize {
        self.youtube + self.website
    }

    /// Whether the given category has reached [`LINKS_PER_TYPE_LIMIT`].
    pub fn is_full(&self, kind: LinkType) -> bool {
        self.of(kind) >= LINKS_PER_TYPE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, LinkCounts, LinkType, LINKS_PER_TYPE_LIMIT};
    use chrono::Utc;
    use uuid::Uuid;

    fn link(kind: LinkType) -> Link {
        Link {
            id: Uuid::new_v4(),
            title: "ref".to_string(),
            url: "https://example.com/page".to_string(),
            kind,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn kind_serializes_as_type_key() {
        let json = serde_json::to_value(link(LinkType::Youtube)).unwrap();
        assert_eq!(json["type"], "youtube");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn tally_counts_per_category() {
        let links = vec![
            link(LinkType::Youtube),
            link(LinkType::Website),
            link(LinkType::Website),
        ];
        let counts = LinkCounts::tally(&links);
        assert_eq!(counts.youtube, 1);
        assert_eq!(counts.website, 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn is_full_trips_at_limit() {
        let links: Vec<Link> = (0..LINKS_PER_TYPE_LIMIT)
            .map(|_| link(LinkType::Website))
            .collect();
        let counts = LinkCounts::tally(&links);
        assert!(counts.is_full(LinkType::Website));
        assert!(!counts.is_full(LinkType::Youtube));
    }
}
