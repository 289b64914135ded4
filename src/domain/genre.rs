//! Genre reference data and the genre selector.
//!
//! The genre table is static reference data: it is embedded in the binary as TOML,
//! decoded once and never changes for the lifetime of the process. The
//! [`GenreSelector`] is the user-facing filter value, either the "all" sentinel or
//! one concrete genre identifier.

use crate::domain::error::{PodshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const BUILTIN_GENRES: &str = include_str!("../../data/genres.toml");

/// One genre of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct GenreTable {
    genres: Vec<Genre>,
}

/// Read-only genre id → title lookup.
///
/// # Examples
///
/// ```
/// use podshelf::domain::GenreCatalog;
///
/// let genres = GenreCatalog::builtin();
/// assert_eq!(genres.title(3), Some("History"));
/// assert_eq!(genres.titles_for(&[4, 99, 1]), vec!["Personal Growth", "Comedy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCatalog {
    genres: Vec<Genre>,
}

impl GenreCatalog {
    /// Builds a catalog from an explicit list.
    #[must_use]
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }

    /// Parses a catalog from a TOML document with a `[[genres]]` array.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Parse`] if the document is not valid TOML or lacks
    /// `id`/`title` fields.
    pub fn from_toml(text: &str) -> Result<Self> {
        let table: GenreTable = toml::from_str(text)
            .map_err(|e| PodshelfError::Parse(format!("invalid genre table: {e}")))?;
        Ok(Self::new(table.genres))
    }

    /// The genre table shipped with the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(BUILTIN_GENRES).expect("built-in genre table should always parse")
    }

    /// Title of the genre with the given id.
    #[must_use]
    pub fn title(&self, id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|genre| genre.id == id)
            .map(|genre| genre.title.as_str())
    }

    /// Titles of the given ids, in catalog order; unknown ids are skipped.
    #[must_use]
    pub fn titles_for(&self, ids: &[u32]) -> Vec<&str> {
        self.genres
            .iter()
            .filter(|genre| ids.contains(&genre.id))
            .map(|genre| genre.title.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Selector following `current` in the cycle `All → first … last → All`.
    #[must_use]
    pub fn next_selector(&self, current: &GenreSelector) -> GenreSelector {
        let position = match current {
            GenreSelector::Id(id) => self.genres.iter().position(|g| g.id == *id),
            GenreSelector::All | GenreSelector::Unrecognized(_) => None,
        };
        let next = match (current, position) {
            (GenreSelector::Id(_), Some(idx)) => self.genres.get(idx + 1),
            _ => self.genres.first(),
        };
        next.map_or(GenreSelector::All, |genre| GenreSelector::Id(genre.id))
    }

    /// Selector preceding `current` in the same cycle.
    #[must_use]
    pub fn previous_selector(&self, current: &GenreSelector) -> GenreSelector {
        let position = match current {
            GenreSelector::Id(id) => self.genres.iter().position(|g| g.id == *id),
            GenreSelector::All | GenreSelector::Unrecognized(_) => None,
        };
        match position {
            Some(0) => GenreSelector::All,
            Some(idx) => GenreSelector::Id(self.genres[idx - 1].id),
            None => self
                .genres
                .last()
                .map_or(GenreSelector::All, |genre| GenreSelector::Id(genre.id)),
        }
    }

    /// Display label for a selector ("All Genres", a title, or the raw text).
    #[must_use]
    pub fn selector_label(&self, selector: &GenreSelector) -> String {
        match selector {
            GenreSelector::All => "All Genres".to_string(),
            GenreSelector::Id(id) => self
                .title(*id)
                .map_or_else(|| format!("Genre {id}"), ToString::to_string),
            GenreSelector::Unrecognized(raw) => format!("Unknown genre \"{raw}\""),
        }
    }
}

impl Default for GenreCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Genre filter value.
///
/// `Unrecognized` keeps malformed input instead of rejecting it; it matches no
/// records, which makes a bad selector an ordinary empty result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreSelector {
    #[default]
    All,
    Id(u32),
    Unrecognized(String),
}

impl GenreSelector {
    /// Parses selector text. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use podshelf::domain::GenreSelector;
    ///
    /// assert_eq!(GenreSelector::parse("all"), GenreSelector::All);
    /// assert_eq!(GenreSelector::parse(" 4 "), GenreSelector::Id(4));
    /// assert!(matches!(GenreSelector::parse("comedy"), GenreSelector::Unrecognized(_)));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        trimmed
            .parse::<u32>()
            .map_or_else(|_| Self::Unrecognized(trimmed.to_string()), Self::Id)
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for GenreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
