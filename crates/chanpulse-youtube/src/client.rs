//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key management, typed response deserialization
//! and the not-found-vs-error contract: `Ok(None)` means the API confirmed
//! zero results, any transport or decode failure surfaces as a typed
//! [`YoutubeError`]. The client performs no retries of its own; callers
//! decide the retry policy.

use std::time::Duration;

use chrono::SecondsFormat;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use chanpulse_core::{ChannelProfile, ContentItem, ImportWindow};

use crate::error::YoutubeError;
use crate::normalize::{normalize_profile, normalize_video};
use crate::types::{ApiEnvelope, ChannelItem, SearchItem, VideoItem, VideoStatistics};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the `YouTube` Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests. The API key is appended as the `key` query parameter on
/// every call.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production `YouTube` API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("chanpulse/0.1 (channel-metrics)")
            .build()?;

        // Normalise: the base URL must end with exactly one slash so that
        // Url::join appends the endpoint instead of replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches a channel's profile (snippet + statistics) by channel id.
    ///
    /// Returns `Ok(None)` when the API reports zero results for the id —
    /// an expected outcome logged at info level, not an error.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Status`] on a non-2xx response (with body context).
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_profile(
        &self,
        channel_id: &str,
    ) -> Result<Option<ChannelProfile>, YoutubeError> {
        let url = self.build_url(
            "channels",
            &[("part", "snippet,statistics"), ("id", channel_id)],
        )?;
        let envelope: ApiEnvelope<ChannelItem> = self
            .request_envelope(&url, &format!("channels(id={channel_id})"))
            .await?;

        if envelope.page_info.total_results == 0 {
            tracing::info!(channel_id, "channel not found");
            return Ok(None);
        }
        let Some(item) = envelope.items.into_iter().next() else {
            tracing::info!(channel_id, "channel response carried no items");
            return Ok(None);
        };

        Ok(Some(normalize_profile(channel_id, item)))
    }

    /// Lists a channel's content via the `search` endpoint.
    ///
    /// When `window` is supplied its bounds are passed as `publishedAfter` /
    /// `publishedBefore` filters; when absent no window parameters are sent
    /// and the full available listing is requested. Returns `Ok(None)` when
    /// the API reports zero results for the channel (or window), logged at
    /// info level.
    ///
    /// # Errors
    ///
    /// Same contract as [`YoutubeClient::fetch_profile`].
    pub async fn list_videos(
        &self,
        channel_id: &str,
        window: Option<&ImportWindow>,
    ) -> Result<Option<Vec<SearchItem>>, YoutubeError> {
        let mut params: Vec<(&str, String)> = vec![
            ("part", "snippet".to_owned()),
            ("channelId", channel_id.to_owned()),
        ];
        if let Some(w) = window {
            params.push((
                "publishedAfter",
                w.published_after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
            params.push((
                "publishedBefore",
                w.published_before.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        let param_refs: Vec<(&str, &str)> =
            params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let url = self.build_url("search", &param_refs)?;
        let envelope: ApiEnvelope<SearchItem> = self
            .request_envelope(&url, &format!("search(channelId={channel_id})"))
            .await?;

        if envelope.page_info.total_results == 0 {
            match window {
                Some(w) => tracing::info!(
                    channel_id,
                    published_after = %w.published_after,
                    published_before = %w.published_before,
                    "no videos for channel in window"
                ),
                None => tracing::info!(channel_id, "no videos for channel"),
            }
            return Ok(None);
        }

        Ok(Some(envelope.items))
    }

    /// Fetches the statistics block for a single video.
    ///
    /// Returns `Ok(None)` when the API reports zero results for the id. A
    /// found video with a missing statistics block yields defaulted
    /// (all-zero) counters.
    ///
    /// # Errors
    ///
    /// Same contract as [`YoutubeClient::fetch_profile`].
    pub async fn fetch_video_stats(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoStatistics>, YoutubeError> {
        let url = self.build_url("videos", &[("part", "statistics"), ("id", video_id)])?;
        let envelope: ApiEnvelope<VideoItem> = self
            .request_envelope(&url, &format!("videos(id={video_id})"))
            .await?;

        if envelope.page_info.total_results == 0 {
            tracing::info!(video_id, "video not found");
            return Ok(None);
        }
        let stats = envelope
            .items
            .into_iter()
            .next()
            .and_then(|item| item.statistics)
            .unwrap_or_default();

        Ok(Some(stats))
    }

    /// Lists a channel's content and fetches per-item statistics for at most
    /// `max_items` items (the fan-out limit).
    ///
    /// Items beyond the limit are skipped entirely — a row without its
    /// statistics would not conform to the content schema. A statistics
    /// fetch failure for one item is logged and degrades that item's
    /// counters to zero; it never aborts the listing. Returns `Ok(None)`
    /// when the listing itself reported zero results.
    ///
    /// # Errors
    ///
    /// Propagates listing errors with the same contract as
    /// [`YoutubeClient::list_videos`]. Per-item statistics errors are not
    /// propagated.
    pub async fn collect_videos(
        &self,
        channel_id: &str,
        window: Option<&ImportWindow>,
        max_items: usize,
    ) -> Result<Option<Vec<ContentItem>>, YoutubeError> {
        let Some(items) = self.list_videos(channel_id, window).await? else {
            return Ok(None);
        };

        if items.len() > max_items {
            tracing::debug!(
                channel_id,
                listed = items.len(),
                max_items,
                "statistics fan-out capped"
            );
        }

        let mut collected = Vec::new();
        for item in items {
            if collected.len() >= max_items {
                break;
            }
            // Search results can include channel or playlist hits; only
            // video hits carry an id.videoId.
            let Some(video_id) = item.id.video_id.clone() else {
                continue;
            };
            let stats = match self.fetch_video_stats(&video_id).await {
                Ok(stats) => stats,
                Err(e) => {
                    tracing::warn!(
                        video_id,
                        error = %e,
                        "failed to fetch video statistics"
                    );
                    None
                }
            };
            collected.push(normalize_video(video_id, item, stats));
        }

        Ok(Some(collected))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| YoutubeError::InvalidBaseUrl(format!("'{endpoint}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and parses the body into the shared envelope.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] on network failure,
    /// [`YoutubeError::Status`] on a non-2xx status (with the body text
    /// attached), or [`YoutubeError::Deserialize`] if the body does not
    /// match the envelope shape.
    async fn request_envelope<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<ApiEnvelope<T>, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(YoutubeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
