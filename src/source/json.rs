//! JSON file record source.
//!
//! Reads a local file holding the same array the podcast API returns. Useful for
//! offline browsing and for tests.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "10716",
//!     "title": "Something Was Wrong",
//!     "description": "...",
//!     "seasons": 14,
//!     "image": "https://...",
//!     "genres": [1, 2],
//!     "updated": "2022-11-03T07:00:00.000Z"
//!   }
//! ]
//! ```

use crate::domain::error::{PodshelfError, Result};
use crate::domain::Record;
use crate::source::backend::RecordSource;
use std::path::{Path, PathBuf};

/// Local JSON file source.
///
/// The file is re-read on every fetch, so a manual refresh picks up edits.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Decodes a JSON record array.
///
/// # Errors
///
/// Returns [`PodshelfError::Parse`] if the payload is not an array of records.
pub fn decode_records(payload: &str) -> Result<Vec<Record>> {
    serde_json::from_str(payload)
        .map_err(|e| PodshelfError::Parse(format!("invalid record list: {e}")))
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!(path = ?self.file_path, "reading records from file");
        let contents = std::fs::read_to_string(&self.file_path)?;
        let records = decode_records(&contents)?;
        tracing::debug!(record_count = records.len(), "records decoded from file");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.file_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "title": "One", "genres": [3]}}, {{"id": 2, "title": "Two"}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let records = source.fetch().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id.as_str(), "2");
        assert!(source.describe().starts_with("file "));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(PodshelfError::Io(_))));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "a list"}}"#).unwrap();
        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.fetch(), Err(PodshelfError::Parse(_))));
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        assert!(decode_records("[]").unwrap().is_empty());
    }

    #[test]
    fn null_attributes_do_not_reject_the_list() {
        let records = decode_records(
            r#"[{"id":"1","title":"Ok","image":"x"},
                {"id":"2","title":"Bad","image":null,"updated":null,"seasons":null,"genres":null,"description":null}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image, "x");
        assert!(records[1].image.is_empty());
    }
}
