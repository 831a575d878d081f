//! `YouTube` Data API v3 response types.
//!
//! All types model the JSON structures returned by the `channels`, `search`
//! and `videos` endpoints. Every response carries a `pageInfo` block with a
//! `totalResults` count and an `items` array; [`ApiEnvelope`] captures that
//! pattern generically. Counter fields arrive as JSON strings on the wire —
//! treating them as integers causes deserialization failure.

use serde::Deserialize;

/// Top-level envelope shared by all three endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub page_info: PageInfo,
    #[serde(default)]
    pub items: Vec<T>,
}

/// Result-count metadata; `total_results == 0` is the "confirmed absent"
/// signal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: i64,
    #[serde(default)]
    pub results_per_page: i64,
}

// ---------------------------------------------------------------------------
// channels endpoint
// ---------------------------------------------------------------------------

/// One item from the `channels` endpoint (`part=snippet,statistics`).
#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 channel creation time.
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
}

// ---------------------------------------------------------------------------
// search endpoint
// ---------------------------------------------------------------------------

/// One item from the `search` endpoint (`part=snippet`).
///
/// Search results are not limited to videos; `id.videoId` is absent for
/// channel or playlist hits and such items are skipped during collection.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

// ---------------------------------------------------------------------------
// videos endpoint
// ---------------------------------------------------------------------------

/// One item from the `videos` endpoint (`part=statistics`).
#[derive(Debug, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

/// Engagement counters for a single video, as JSON strings.
///
/// `likeCount` and `commentCount` are omitted entirely when the uploader has
/// disabled them, hence every field defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}
