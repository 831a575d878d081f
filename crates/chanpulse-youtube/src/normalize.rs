//! Conversion from `YouTube` wire types into the shared domain types.

use chrono::{DateTime, Utc};

use chanpulse_core::{ChannelProfile, ContentItem, ContentStats};

use crate::types::{ChannelItem, SearchItem, VideoStatistics};

/// Builds a [`ChannelProfile`] from a `channels` endpoint item.
#[must_use]
pub fn normalize_profile(account_id: &str, item: ChannelItem) -> ChannelProfile {
    let follower_count = item
        .statistics
        .and_then(|s| s.subscriber_count)
        .map_or(0, |raw| parse_count(&raw));

    ChannelProfile {
        account_id: account_id.to_owned(),
        display_name: item.snippet.title,
        description: item.snippet.description,
        created_at: item.snippet.published_at.as_deref().and_then(parse_timestamp),
        follower_count,
    }
}

/// Builds a [`ContentItem`] from a search hit plus its statistics.
///
/// `stats` is `None` when the statistics fetch failed or the video was
/// reported absent; counters then default to zero rather than dropping the
/// row.
#[must_use]
pub fn normalize_video(video_id: String, item: SearchItem, stats: Option<VideoStatistics>) -> ContentItem {
    ContentItem {
        id: video_id,
        title: item.snippet.title,
        description: item.snippet.description,
        published_at: item.snippet.published_at.as_deref().and_then(parse_timestamp),
        stats: stats.map(normalize_stats).unwrap_or_default(),
    }
}

/// Parses the string counters of a `videos` endpoint item.
#[must_use]
pub fn normalize_stats(stats: VideoStatistics) -> ContentStats {
    ContentStats {
        view_count: stats.view_count.map_or(0, |raw| parse_count(&raw)),
        like_count: stats.like_count.map_or(0, |raw| parse_count(&raw)),
        comment_count: stats.comment_count.map_or(0, |raw| parse_count(&raw)),
    }
}

// Counter strings that fail to parse degrade to 0; the row is still written.
fn parse_count(raw: &str) -> u64 {
    raw.parse::<u64>().unwrap_or(0)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
