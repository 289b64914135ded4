//! Domain layer for podshelf.
//!
//! Core domain types with no knowledge of the terminal, the network or the
//! filesystem layout.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The podcast record model
//! - [`genre`]: Genre reference data and the genre selector
//!
//! # Examples
//!
//! ```
//! use podshelf::domain::{GenreCatalog, Record};
//!
//! let mut record = Record::new("10716", "Something Was Wrong");
//! record.genres = Some(vec![1, 2]);
//!
//! let genres = GenreCatalog::builtin();
//! assert_eq!(
//!     genres.titles_for(record.genre_ids()),
//!     vec!["Personal Growth", "Investigative Journalism"]
//! );
//! ```

pub mod error;
pub mod genre;
pub mod record;

pub use error::{PodshelfError, Result};
pub use genre::{Genre, GenreCatalog, GenreSelector};
pub use record::{Record, RecordId};
