//! Core business logic module
//!
//! Domain models, configuration, identifier extraction, the comment fetcher
//! and the CSV exporter.

pub mod config;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod models;


// Re-export commonly used types
pub use config::AppConfig;
pub use exporter::CsvExporter;
pub use fetcher::CommentFetcher;
