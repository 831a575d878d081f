//! Domain types shared across the importer crates.
//!
//! Everything here is platform-neutral: the YouTube client normalizes its
//! wire types into these shapes before anything downstream sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External platforms the importer knows how to pull from.
///
/// The string tag matches the `platform` column of the `accounts` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
}

impl Platform {
    /// Parses a platform tag as stored in the database / passed on the CLI.
    ///
    /// Matching is case-insensitive. Returns `None` for unrecognized tags;
    /// the entry point treats that as a fatal startup error.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "youtube" => Some(Self::YouTube),
            _ => None,
        }
    }

    /// The canonical tag used in the `accounts.platform` column.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Optional `{after, before}` filter restricting which content items are
/// listed. Both bounds are required when windowing is enabled; config
/// validation guarantees `published_after < published_before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWindow {
    pub published_after: DateTime<Utc>,
    pub published_before: DateTime<Utc>,
}

/// Normalized channel profile. `None` at the call sites means the fetch
/// failed or the channel does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelProfile {
    pub account_id: String,
    pub display_name: String,
    pub description: String,
    /// Channel creation time; `None` when the API value was missing or
    /// not parseable as RFC 3339.
    pub created_at: Option<DateTime<Utc>>,
    pub follower_count: u64,
}

/// Per-item engagement counters. The wire format carries these as JSON
/// strings; unparseable values degrade to 0 during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

/// One content item (a video) with its statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub stats: ContentStats,
}

/// The partial-failure-tolerant aggregate of one account's fetches.
///
/// Either field may independently be `None` (that sub-fetch failed or
/// found nothing). Both `None` is a valid no-op result, not an error.
#[derive(Debug, Clone, Default)]
pub struct AccountResult {
    pub profile: Option<ChannelProfile>,
    pub items: Option<Vec<ContentItem>>,
}

impl AccountResult {
    /// `true` when neither branch produced anything to persist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.profile.is_none() && self.items.is_none()
    }
}

/// Aggregate counters for one import run, reported by the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub accounts_processed: u32,
    pub profiles_written: u32,
    pub content_rows_written: u32,
    pub errors: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!(Platform::parse("YouTube"), Some(Platform::YouTube));
        assert_eq!(Platform::parse("youtube"), Some(Platform::YouTube));
        assert_eq!(Platform::parse("YOUTUBE"), Some(Platform::YouTube));
    }

    #[test]
    fn platform_parse_rejects_unknown_tags() {
        assert_eq!(Platform::parse("MySpace"), None);
        assert_eq!(Platform::parse(""), None);
    }

    #[test]
    fn platform_tag_round_trips() {
        let p = Platform::parse(Platform::YouTube.as_tag()).unwrap();
        assert_eq!(p, Platform::YouTube);
    }

    #[test]
    fn account_result_empty_when_both_sides_none() {
        assert!(AccountResult::default().is_empty());

        let with_items = AccountResult {
            profile: None,
            items: Some(vec![]),
        };
        assert!(!with_items.is_empty());
    }
}
