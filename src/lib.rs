//! YouTube comment fetcher - core library
//!
//! Fetches the top-level comments of one video through the YouTube Data API,
//! shows them as a table and exports them to CSV.

pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    config::AppConfig,
    exporter::CsvExporter,
    extractor::extract_video_id,
    fetcher::CommentFetcher,
    models::{AppError, AppResult, CommentRecord, CommentSession},
};

/// Application state shared between command handlers.
///
/// The session is the only mutable part; the fetch handler replaces it and the
/// save handler reads it.
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: CommentFetcher,
    pub exporter: CsvExporter,
    pub session: CommentSession,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let fetcher = CommentFetcher::new(&config.api)?;
        let exporter = CsvExporter::new(config.export.output_path.clone());

        tracing::debug!(
            "AppState ready (endpoint: {}, output: {})",
            fetcher.endpoint(),
            exporter.output_path().display()
        );

        Ok(Self {
            config,
            fetcher,
            exporter,
            session: CommentSession::new(),
        })
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
