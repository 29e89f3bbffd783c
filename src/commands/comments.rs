//! Comment command handlers
//!
//! The fetch handler owns the write side of the comment session and the save
//! handler the read side. Both translate failures into the notice the user
//! sees, picking the wording per error kind.

use tracing::{debug, error, info};

use crate::core::extractor::extract_video_id;
use crate::core::models::AppError;
use crate::ui::notify::Notice;
use crate::AppState;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube video URL.";
pub const NO_COMMENTS_MESSAGE: &str = "No comments to save.";

/// User-facing notice for a failed operation
pub fn notice_for(err: &AppError) -> Notice {
    match err {
        AppError::InvalidInput(_) => Notice::warning(INVALID_URL_MESSAGE),
        AppError::NothingToExport => Notice::warning(NO_COMMENTS_MESSAGE),
        e if e.is_upstream() => Notice::error(format!("An error occurred: {}", e)),
        AppError::Io(_) | AppError::Csv(_) => {
            Notice::error(format!("Failed to save comments: {}", err))
        }
        _ => Notice::error(err.to_string()),
    }
}

/// Fetch the comments of the video named by `url` into the session.
///
/// Returns the number of comments fetched. An unrecognized URL leaves the
/// session as it was; an upstream failure empties it.
pub async fn fetch_comments(state: &mut AppState, url: &str) -> Result<usize, Notice> {
    let url = url.trim();
    info!("💬 Fetching comments for: {}", url);

    let video_id = match extract_video_id(url) {
        Some(id) => id,
        None => {
            debug!("No video identifier in input: {:?}", url);
            return Err(notice_for(&AppError::InvalidInput(url.to_string())));
        }
    };

    match state.fetcher.fetch_comments(&video_id).await {
        Ok(records) => {
            let count = records.len();
            state.session.replace(video_id, records);
            info!("✅ Loaded {} comments", count);
            Ok(count)
        }
        Err(e) => {
            error!("❌ Failed to fetch comments for {}: {}", video_id, e);
            state.session.replace(video_id, Vec::new());
            Err(notice_for(&e))
        }
    }
}

/// Export the current session to the configured CSV file
pub fn save_comments(state: &AppState) -> Notice {
    match state.exporter.export(state.session.records()) {
        Ok(path) => Notice::success(format!("Comments saved to {}", path.display())),
        Err(e) => {
            if !matches!(e, AppError::NothingToExport) {
                error!("❌ Failed to save comments: {}", e);
            }
            notice_for(&e)
        }
    }
}
