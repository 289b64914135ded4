//! Record source abstraction.
//!
//! This module defines the [`RecordSource`] trait that abstracts over where the
//! catalog's raw record list comes from. The worker thread owns one source and
//! calls it on every fetch request, so switching from the podcast API to a local
//! file never touches the catalog or the UI.
//!
//! The trait is deliberately one operation wide: the catalog never asks a source
//! to filter, sort or page. Every fetch returns the complete list.

use crate::domain::error::Result;
use crate::domain::Record;

/// Abstraction over record suppliers.
///
/// # Implementations
///
/// - [`HttpSource`](crate::source::HttpSource): GET against the podcast preview API (default)
/// - [`JsonFileSource`](crate::source::JsonFileSource): a local JSON file with the same shape
///
/// # Examples
///
/// ```no_run
/// use podshelf::source::{JsonFileSource, RecordSource};
///
/// let source = JsonFileSource::new("/tmp/podcasts.json");
/// let records = source.fetch()?;
/// println!("{} records from {}", records.len(), source.describe());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait RecordSource: Send {
    /// Fetches the complete record list.
    ///
    /// Implementations return the list exactly as supplied; duplicate
    /// identifiers are removed by the caller via
    /// [`dedup_by_id`](crate::source::dedup_by_id).
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the payload cannot be decoded.
    fn fetch(&self) -> Result<Vec<Record>>;

    /// Short human-readable description, used in logs and the footer.
    fn describe(&self) -> String;
}
