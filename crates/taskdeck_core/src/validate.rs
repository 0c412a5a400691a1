//! URL validation and classification helpers.
//!
//! # Responsibility
//! - Give UI callers the checks they must run before building a
//!   [`crate::model::link::LinkDraft`].
//!
//! # Invariants
//! - Both helpers are pure functions of the input string and never panic.
//! - Classification happens once, at creation time; stored links keep the
//!   kind they were created with.

use crate::model::link::LinkType;
use once_cell::sync::Lazy;
use regex::Regex;

// Structural check only: a scheme followed by a non-space remainder, the
// generic URL grammar. Reachability or well-formedness of the authority is
// out of scope.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:[^\s]+$").expect("valid url regex"));

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").expect("valid youtube regex")
});

/// Returns whether `url` is structurally a URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// Returns whether `url` points at YouTube.
///
/// Accepts an optional scheme and optional `www.`, then `youtube.com` or
/// `youtu.be` followed by a non-empty path.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_RE.is_match(url)
}

/// Classifies a URL into the link category it belongs to.
pub fn classify_url(url: &str) -> LinkType {
    if is_youtube_url(url) {
        LinkType::Youtube
    } else {
        LinkType::Website
    }
}
