//! Record sources: where the raw catalog list comes from.
//!
//! # Modules
//!
//! - `backend`: the [`RecordSource`] trait
//! - `http`: the podcast preview API over blocking `reqwest`
//! - `json`: a local JSON file with the same shape

pub mod backend;
pub mod http;
pub mod json;

pub use backend::RecordSource;
pub use http::{HttpSource, DEFAULT_SOURCE_URL};
pub use json::{decode_records, JsonFileSource};

use crate::domain::error::Result;
use crate::domain::Record;
use std::collections::HashSet;
use std::time::Duration;

/// Drops records whose identifier was already seen, keeping the first.
///
/// # Examples
///
/// ```
/// use podshelf::domain::Record;
/// use podshelf::source::dedup_by_id;
///
/// let records = vec![Record::new("1", "First"), Record::new("1", "Again"), Record::new("2", "Two")];
/// let unique = dedup_by_id(records);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].display_title(), "First");
/// ```
#[must_use]
pub fn dedup_by_id(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id.clone());
            if !fresh {
                tracing::warn!(record_id = %record.id, "duplicate record id dropped");
            }
            fresh
        })
        .collect()
}

/// Builds the configured source: a local file when given, the URL otherwise.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn from_config(config: &crate::Config) -> Result<Box<dyn RecordSource>> {
    match &config.source_file {
        Some(path) => Ok(Box::new(JsonFileSource::new(path.clone()))),
        None => Ok(Box::new(HttpSource::new(
            config.source_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?)),
    }
}
