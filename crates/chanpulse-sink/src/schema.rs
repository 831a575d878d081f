//! Fixed, versioned output schemas.
//!
//! The header constants and the row projections below must stay in lockstep:
//! every written row conforms exactly to its header's field order and names.
//! The profile and content tables evolve independently.

use chrono::{DateTime, SecondsFormat, Utc};

use chanpulse_core::{ChannelProfile, ContentItem};

/// Columns of the profile table.
pub const PROFILE_HEADER: [&str; 5] = [
    "Id",
    "full_name",
    "description",
    "created_time",
    "subscriber_count",
];

/// Columns of the content table.
pub const CONTENT_HEADER: [&str; 7] = [
    "Id",
    "description",
    "title",
    "created_time",
    "view_count",
    "like_count",
    "comment_count",
];

/// Projects a profile into a row matching [`PROFILE_HEADER`].
#[must_use]
pub fn profile_row(profile: &ChannelProfile) -> [String; 5] {
    [
        profile.account_id.clone(),
        profile.display_name.clone(),
        profile.description.clone(),
        format_time(profile.created_at),
        profile.follower_count.to_string(),
    ]
}

/// Projects a content item into a row matching [`CONTENT_HEADER`].
#[must_use]
pub fn content_row(item: &ContentItem) -> [String; 7] {
    [
        item.id.clone(),
        item.description.clone(),
        item.title.clone(),
        format_time(item.published_at),
        item.stats.view_count.to_string(),
        item.stats.like_count.to_string(),
        item.stats.comment_count.to_string(),
    ]
}

// A missing timestamp becomes an empty cell, not a sentinel value.
fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanpulse_core::ContentStats;
    use chrono::TimeZone;

    #[test]
    fn profile_row_matches_header_arity_and_order() {
        let profile = ChannelProfile {
            account_id: "c1".to_owned(),
            display_name: "Name".to_owned(),
            description: "About".to_owned(),
            created_at: Some(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()),
            follower_count: 42,
        };
        let row = profile_row(&profile);
        assert_eq!(row.len(), PROFILE_HEADER.len());
        assert_eq!(row[0], "c1");
        assert_eq!(row[1], "Name");
        assert_eq!(row[3], "2020-01-02T03:04:05Z");
        assert_eq!(row[4], "42");
    }

    #[test]
    fn content_row_puts_description_before_title() {
        let item = ContentItem {
            id: "v1".to_owned(),
            title: "Title".to_owned(),
            description: "Desc".to_owned(),
            published_at: None,
            stats: ContentStats {
                view_count: 1,
                like_count: 2,
                comment_count: 3,
            },
        };
        let row = content_row(&item);
        assert_eq!(row.len(), CONTENT_HEADER.len());
        assert_eq!(row[1], "Desc");
        assert_eq!(row[2], "Title");
        assert_eq!(row[3], "", "missing timestamp is an empty cell");
        assert_eq!(row[4], "1");
        assert_eq!(row[5], "2");
        assert_eq!(row[6], "3");
    }
}
