//! Comment fetcher
//!
//! Issues a single `commentThreads` request for one video and flattens the
//! top-level comment of every returned thread into a [`CommentRecord`]. Only
//! the first page is read and replies are never expanded.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::config::{ApiConfig, MAX_RESULTS_LIMIT};
use super::extractor::is_valid_video_id;
use super::models::{AppError, AppResult, CommentRecord};
use crate::utils::network::build_client;

// Wire format of the comment-listing endpoint. Only the fields we flatten are
// declared; everything else in the payload is ignored.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
    total_reply_count: u64,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    author_display_name: String,
    #[serde(default)]
    author_channel_id: Option<AuthorChannelId>,
    like_count: u64,
    published_at: String,
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct AuthorChannelId {
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Client for the comment-listing API
pub struct CommentFetcher {
    client: Client,
    endpoint: String,
    api_key: String,
    max_results: u32,
}

impl CommentFetcher {
    /// Create a fetcher from API settings
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = build_client(
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/commentThreads", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            max_results: config.max_results.clamp(1, MAX_RESULTS_LIMIT),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch up to `max_results` top-level comments of a video
    pub async fn fetch_comments(&self, video_id: &str) -> AppResult<Vec<CommentRecord>> {
        if !is_valid_video_id(video_id) {
            return Err(AppError::InvalidInput(format!(
                "Not a video identifier: {}",
                video_id
            )));
        }

        debug!(
            "Requesting comment threads for {} (maxResults={})",
            video_id, self.max_results
        );

        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            // 去掉 URL，避免把 API key 带进错误信息
            .map_err(|e| AppError::UpstreamUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.without_url().to_string()))?;

        if !status.is_success() {
            warn!("Comment API returned {} for {}", status, video_id);
            return Err(upstream_status_error(status, &body));
        }

        let records = parse_comment_threads(video_id, &body)?;
        info!("Fetched {} comments for {}", records.len(), video_id);
        Ok(records)
    }
}

/// Parse a `commentThreads` response body into comment records
pub fn parse_comment_threads(video_id: &str, body: &str) -> AppResult<Vec<CommentRecord>> {
    let response: CommentThreadListResponse =
        serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    Ok(response
        .items
        .into_iter()
        .map(|thread| normalize_thread(video_id, thread))
        .collect())
}

fn normalize_thread(video_id: &str, thread: CommentThread) -> CommentRecord {
    let CommentThreadSnippet {
        top_level_comment,
        total_reply_count,
    } = thread.snippet;
    let comment = top_level_comment.snippet;

    CommentRecord {
        channel_id: comment
            .author_channel_id
            .and_then(|channel| channel.value)
            .unwrap_or_default(),
        author_display_name: comment.author_display_name,
        video_id: video_id.to_string(),
        like_count: comment.like_count,
        reply_count: total_reply_count,
        published_at: comment.published_at,
        text_display: comment.text_display,
    }
}

fn upstream_status_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty());

    match message {
        Some(message) => AppError::UpstreamUnavailable(format!("HTTP {}: {}", status, message)),
        None => AppError::UpstreamUnavailable(format!("HTTP {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn thread(author: &str, channel: Option<&str>, likes: u64, replies: u64) -> serde_json::Value {
        let mut snippet = json!({
            "authorDisplayName": author,
            "likeCount": likes,
            "publishedAt": "2024-03-01T12:00:00Z",
            "textDisplay": format!("comment by {}", author),
        });
        if let Some(channel) = channel {
            snippet["authorChannelId"] = json!({ "value": channel });
        }
        json!({
            "kind": "youtube#commentThread",
            "snippet": {
                "videoId": "dQw4w9WgXcQ",
                "topLevelComment": { "snippet": snippet },
                "totalReplyCount": replies,
            }
        })
    }

    #[test]
    fn test_parse_populates_all_fields() {
        let body = json!({
            "items": [thread("alice", Some("UCalice"), 5, 2), thread("bob", Some("UCbob"), 0, 0)],
            "nextPageToken": "ignored",
        })
        .to_string();

        let records = parse_comment_threads("dQw4w9WgXcQ", &body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            CommentRecord {
                channel_id: "UCalice".to_string(),
                author_display_name: "alice".to_string(),
                video_id: "dQw4w9WgXcQ".to_string(),
                like_count: 5,
                reply_count: 2,
                published_at: "2024-03-01T12:00:00Z".to_string(),
                text_display: "comment by alice".to_string(),
            }
        );
        assert_eq!(records[1].author_display_name, "bob");
    }

    #[test]
    fn test_missing_channel_defaults_to_empty() {
        let mut no_value = thread("carol", None, 1, 0);
        no_value["snippet"]["topLevelComment"]["snippet"]["authorChannelId"] = json!({});
        let body = json!({ "items": [thread("dave", None, 1, 0), no_value] }).to_string();

        let records = parse_comment_threads("dQw4w9WgXcQ", &body).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.channel_id.is_empty()));
    }

    #[test]
    fn test_empty_items() {
        let records = parse_comment_threads("dQw4w9WgXcQ", r#"{"items": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_bodies() {
        let cases = [
            "not json".to_string(),
            "{}".to_string(),
            json!({ "items": [{ "snippet": { "totalReplyCount": 1 } }] }).to_string(),
            {
                let mut t = thread("erin", None, 1, 0);
                t["snippet"]["topLevelComment"]["snippet"]
                    .as_object_mut()
                    .unwrap()
                    .remove("likeCount");
                json!({ "items": [t] }).to_string()
            },
        ];

        for body in cases {
            let err = parse_comment_threads("dQw4w9WgXcQ", &body).unwrap_err();
            assert!(
                matches!(err, AppError::MalformedResponse(_)),
                "unexpected error for {}: {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn test_upstream_status_error_message() {
        let body = json!({ "error": { "code": 403, "message": "API key not valid." } }).to_string();
        let err = upstream_status_error(StatusCode::FORBIDDEN, &body);
        assert_eq!(
            err.to_string(),
            "Upstream unavailable: HTTP 403 Forbidden: API key not valid."
        );

        let err = upstream_status_error(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.to_string(), "Upstream unavailable: HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_endpoint_and_cap() {
        let config = ApiConfig {
            api_key: "k".to_string(),
            base_url: "http://localhost:1234/youtube/v3/".to_string(),
            max_results: 500,
            ..ApiConfig::default()
        };
        let fetcher = CommentFetcher::new(&config).unwrap();
        assert_eq!(fetcher.endpoint(), "http://localhost:1234/youtube/v3/commentThreads");
        assert_eq!(fetcher.max_results, MAX_RESULTS_LIMIT);
    }
}
