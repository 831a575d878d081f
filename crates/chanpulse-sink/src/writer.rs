//! Append-only CSV writer with create-with-header-on-first-write semantics.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chanpulse_core::{ChannelProfile, ContentItem};

use crate::schema::{content_row, profile_row, CONTENT_HEADER, PROFILE_HEADER};
use crate::SinkError;

/// Durable CSV destination for normalized output records.
///
/// Both files are append-only logs: prior rows are never rewritten,
/// re-validated or deduplicated. The header row is emitted only when a file
/// is first created; later runs append data rows after the existing content.
#[derive(Debug, Clone)]
pub struct CsvSink {
    profile_path: PathBuf,
    content_path: PathBuf,
}

impl CsvSink {
    #[must_use]
    pub fn new(profile_path: impl Into<PathBuf>, content_path: impl Into<PathBuf>) -> Self {
        Self {
            profile_path: profile_path.into(),
            content_path: content_path.into(),
        }
    }

    /// Appends one profile row, returning the number of rows written (1).
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] on I/O or CSV serialization failure. Callers
    /// are expected to log and continue; a sink failure is never fatal for
    /// a run.
    pub fn append_profile(&self, profile: &ChannelProfile) -> Result<usize, SinkError> {
        append_rows(&self.profile_path, &PROFILE_HEADER, &[profile_row(profile)])
    }

    /// Appends one row per content item, returning the number written.
    ///
    /// An empty slice is a no-op returning 0 — it creates no file and no
    /// header-only output.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] on I/O or CSV serialization failure.
    pub fn append_content(&self, items: &[ContentItem]) -> Result<usize, SinkError> {
        let rows: Vec<[String; 7]> = items.iter().map(content_row).collect();
        append_rows(&self.content_path, &CONTENT_HEADER, &rows)
    }
}

/// Appends `rows` to the CSV file at `path`.
///
/// When the file does not yet exist it is created and `header` is written
/// first. Empty input writes nothing and creates nothing.
fn append_rows<const N: usize>(
    path: &Path,
    header: &[&str; N],
    rows: &[[String; N]],
) -> Result<usize, SinkError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let exists = path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    if !exists {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "appended rows to sink");
    Ok(rows.len())
}
