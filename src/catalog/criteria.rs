//! Filter, sort and page criteria.

use crate::domain::GenreSelector;
use std::fmt;

/// Records per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Closed set of sort orders.
///
/// Parsing never fails: any unrecognized text falls back to [`SortCriterion::Recent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortCriterion {
    /// Ascending locale-aware title order.
    TitleAz,
    /// Descending locale-aware title order.
    TitleZa,
    /// Newest `updated` first.
    #[default]
    Recent,
    /// Oldest `updated` first.
    Oldest,
    /// Most seasons first; a missing count reads as 0.
    Seasons,
}

impl SortCriterion {
    pub const ALL: [Self; 5] = [
        Self::Recent,
        Self::TitleAz,
        Self::TitleZa,
        Self::Oldest,
        Self::Seasons,
    ];

    /// Parses a criterion key such as `title-az`.
    ///
    /// # Examples
    ///
    /// ```
    /// use podshelf::catalog::SortCriterion;
    ///
    /// assert_eq!(SortCriterion::parse("seasons"), SortCriterion::Seasons);
    /// assert_eq!(SortCriterion::parse("popularity"), SortCriterion::Recent);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "title-az" => Self::TitleAz,
            "title-za" => Self::TitleZa,
            "oldest" => Self::Oldest,
            "seasons" => Self::Seasons,
            _ => Self::Recent,
        }
    }

    /// Wire key of the criterion.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TitleAz => "title-az",
            Self::TitleZa => "title-za",
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::Seasons => "seasons",
        }
    }

    /// Human-readable label for the controls bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TitleAz => "Title A–Z",
            Self::TitleZa => "Title Z–A",
            Self::Recent => "Newest",
            Self::Oldest => "Oldest",
            Self::Seasons => "Most seasons",
        }
    }

    /// Next criterion in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The complete input tuple of one derivation besides the records themselves.
///
/// Owned by the controller and passed by reference into the pipeline; the
/// pipeline keeps nothing between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub search_term: String,
    pub genre: GenreSelector,
    pub sort: SortCriterion,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Criteria {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// True when a search term or a concrete genre narrows the result.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty() || !self.genre.is_all()
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            genre: GenreSelector::All,
            sort: SortCriterion::Recent,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
