//! Integration tests for `YoutubeClient` using wiremock HTTP mocks.

use chanpulse_core::ImportWindow;
use chanpulse_youtube::{YoutubeClient, YoutubeError};
use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn channel_body() -> serde_json::Value {
    serde_json::json!({
        "pageInfo": { "totalResults": 1, "resultsPerPage": 1 },
        "items": [
            {
                "snippet": {
                    "title": "Test Channel",
                    "description": "A channel about tests",
                    "publishedAt": "2019-06-01T00:00:00Z"
                },
                "statistics": { "subscriberCount": "4321" }
            }
        ]
    })
}

fn search_body(video_ids: &[&str]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = video_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": { "videoId": id },
                "snippet": {
                    "title": format!("video {id}"),
                    "description": "desc",
                    "publishedAt": "2024-03-01T12:00:00Z"
                }
            })
        })
        .collect();
    serde_json::json!({
        "pageInfo": { "totalResults": items.len(), "resultsPerPage": items.len() },
        "items": items
    })
}

fn stats_body(views: &str) -> serde_json::Value {
    serde_json::json!({
        "pageInfo": { "totalResults": 1, "resultsPerPage": 1 },
        "items": [
            { "statistics": { "viewCount": views, "likeCount": "10", "commentCount": "2" } }
        ]
    })
}

fn empty_body() -> serde_json::Value {
    serde_json::json!({
        "pageInfo": { "totalResults": 0, "resultsPerPage": 0 },
        "items": []
    })
}

#[tokio::test]
async fn fetch_profile_returns_parsed_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "snippet,statistics"))
        .and(query_param("id", "chan-1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(channel_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client
        .fetch_profile("chan-1")
        .await
        .expect("should parse profile")
        .expect("profile should be present");

    assert_eq!(profile.account_id, "chan-1");
    assert_eq!(profile.display_name, "Test Channel");
    assert_eq!(profile.follower_count, 4321);
    assert_eq!(
        profile.created_at.unwrap(),
        Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn fetch_profile_not_found_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.fetch_profile("ghost").await.expect("not an error");
    assert!(profile.is_none(), "zero results must map to None");
}

#[tokio::test]
async fn fetch_profile_server_error_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_profile("chan-1").await;

    match result {
        Err(YoutubeError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("quota exceeded"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_profile_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_profile("chan-1").await;
    assert!(
        matches!(result, Err(YoutubeError::Deserialize { .. })),
        "malformed body must not be swallowed into None: {result:?}"
    );
}

#[tokio::test]
async fn list_videos_sends_window_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("channelId", "chan-1"))
        .and(query_param("publishedAfter", "2024-01-01T00:00:00Z"))
        .and(query_param("publishedBefore", "2024-02-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1"])))
        .expect(1)
        .mount(&server)
        .await;

    let window = ImportWindow {
        published_after: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        published_before: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    };

    let client = test_client(&server.uri());
    let items = client
        .list_videos("chan-1", Some(&window))
        .await
        .expect("should list videos")
        .expect("listing should be non-empty");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.video_id.as_deref(), Some("v1"));
}

#[tokio::test]
async fn list_videos_without_window_omits_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("channelId", "chan-1"))
        .and(query_param_is_missing("publishedAfter"))
        .and(query_param_is_missing("publishedBefore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .list_videos("chan-1", None)
        .await
        .expect("should list videos");
    assert!(items.is_some());
}

#[tokio::test]
async fn list_videos_empty_listing_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.list_videos("chan-1", None).await.expect("not an error");
    assert!(items.is_none());
}

#[tokio::test]
async fn collect_videos_respects_fan_out_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1", "v2"])))
        .mount(&server)
        .await;

    // Only the first video's statistics may be requested.
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body("100")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body("999")))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .collect_videos("chan-1", None, 1)
        .await
        .expect("should collect")
        .expect("listing should be non-empty");

    assert_eq!(items.len(), 1, "fan-out limit of 1 must yield one item");
    assert_eq!(items[0].id, "v1");
    assert_eq!(items[0].stats.view_count, 100);
}

#[tokio::test]
async fn collect_videos_higher_limit_fetches_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1", "v2"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body("7")))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .collect_videos("chan-1", None, 10)
        .await
        .expect("should collect")
        .expect("listing should be non-empty");

    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn collect_videos_survives_stats_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["v1"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .collect_videos("chan-1", None, 1)
        .await
        .expect("listing must not fail because stats failed")
        .expect("listing should be non-empty");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].stats.view_count, 0, "failed stats degrade to zero");
}
