//! CSV export of comment records

use csv::Writer;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::models::{AppError, AppResult, CommentRecord};
use crate::utils::file_utils::ensure_parent_dir;

/// Writes comment records to a flat CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_path: PathBuf,
}

impl CsvExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Overwrite the output file with `records`.
    ///
    /// An empty slice leaves the file system untouched.
    pub fn export(&self, records: &[CommentRecord]) -> AppResult<PathBuf> {
        if records.is_empty() {
            return Err(AppError::NothingToExport);
        }

        ensure_parent_dir(&self.output_path).map_err(|e| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
        })?;

        let file = std::fs::File::create(&self.output_path)?;
        write_records(file, records)?;

        info!(
            "Saved {} comments to {}",
            records.len(),
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }
}

/// Serialize records with a header row in field order
pub fn write_records<W: Write>(writer: W, records: &[CommentRecord]) -> AppResult<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::COMMENT_FIELDS;
    use tempfile::tempdir;

    fn record(author: &str, text: &str) -> CommentRecord {
        CommentRecord {
            channel_id: format!("UC{}", author),
            author_display_name: author.to_string(),
            video_id: "dQw4w9WgXcQ".to_string(),
            like_count: 7,
            reply_count: 0,
            published_at: "2024-03-01T12:00:00Z".to_string(),
            text_display: text.to_string(),
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comments.csv");
        let exporter = CsvExporter::new(&path);

        let written = exporter
            .export(&[record("alice", "first"), record("bob", "second")])
            .unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], COMMENT_FIELDS.join(","));
        assert_eq!(
            lines[1],
            "UCalice,alice,dQw4w9WgXcQ,7,0,2024-03-01T12:00:00Z,first"
        );
    }

    #[test]
    fn test_export_empty_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comments.csv");
        let exporter = CsvExporter::new(&path);

        let err = exporter.export(&[]).unwrap_err();
        assert!(matches!(err, AppError::NothingToExport));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_empty_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comments.csv");
        std::fs::write(&path, "previous").unwrap();

        assert!(CsvExporter::new(&path).export(&[]).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_export_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comments.csv");
        let exporter = CsvExporter::new(&path);

        exporter
            .export(&[record("alice", "a"), record("bob", "b"), record("carol", "c")])
            .unwrap();
        exporter.export(&[record("dave", "d")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("dave"));
        assert!(!content.contains("alice"));
    }

    #[test]
    fn test_export_quotes_text_and_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("comments.csv");
        let original = record("eve", "line one\nline two, with \"quotes\" &amp; markup");

        CsvExporter::new(&path)
            .export(std::slice::from_ref(&original))
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), COMMENT_FIELDS.to_vec());

        let rows: Vec<CommentRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, vec![original]);
    }
}
