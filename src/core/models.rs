//! Core data models for the comment fetcher

use serde::{Deserialize, Serialize};

/// Column names of a comment record, in export order
pub const COMMENT_FIELDS: [&str; 7] = [
    "ChannelId",
    "AuthorDisplayName",
    "VideoId",
    "LikeCount",
    "ReplyCount",
    "PublishedAt",
    "TextDisplay",
];

/// One top-level comment flattened out of a comment thread

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentRecord {
    /// Empty when the author channel is unavailable
    pub channel_id: String,

    pub author_display_name: String,

    pub video_id: String,

    pub like_count: u64,

    /// Number of replies, the replies themselves are never fetched
    pub reply_count: u64,

    /// ISO-8601 timestamp kept as text
    pub published_at: String,

    /// May contain HTML-escaped markup as returned upstream
    pub text_display: String,
}

impl CommentRecord {
    /// Cell values in `COMMENT_FIELDS` order
    pub fn cells(&self) -> [String; 7] {
        [
            self.channel_id.clone(),
            self.author_display_name.clone(),
            self.video_id.clone(),
            self.like_count.to_string(),
            self.reply_count.to_string(),
            self.published_at.clone(),
            self.text_display.clone(),
        ]
    }
}

/// Records of the most recent fetch.
///
/// Every fetch replaces the whole session; records are never merged across
/// fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSession {
    video_id: Option<String>,
    records: Vec<CommentRecord>,
}

impl CommentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the session with the result of a fetch
    pub fn replace(&mut self, video_id: impl Into<String>, records: Vec<CommentRecord>) {
        self.video_id = Some(video_id.into());
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.video_id = None;
        self.records.clear();
    }

    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Application error types

#[derive(Debug, thiserror::Error)]

pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No comments to save")]
    NothingToExport,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the failure came from talking to the comment API
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable(_) | Self::MalformedResponse(_)
        )
    }
}

/// Result type alias for application operations

pub type AppResult<T> = Result<T, AppError>;
