//! The catalog derivation pipeline.
//!
//! A pure function of `(records, criteria)` composed of strictly ordered stages:
//!
//! ```text
//! records → search → genre → sort → (filtered+sorted, total_count) → pagination
//! ```
//!
//! Each stage takes a sequence of record references and produces a new one; the
//! raw list is never mutated or reordered. Identical inputs always produce
//! identical outputs, and nothing is memoized between calls.

use super::collate::locale_compare;
use super::criteria::{Criteria, SortCriterion};
use crate::domain::{GenreSelector, Record};
use std::cmp::Ordering;

/// Output of the filter and sort stages, before pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation<'r> {
    /// Every record that passed the filters, in sorted order.
    pub records: Vec<&'r Record>,
    /// `records.len()`, kept alongside for the pagination contract.
    pub total_count: usize,
}

/// Runs search, genre filter and sort over `records`.
///
/// An empty record list yields an empty derivation; no input can make this fail.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::{derive, Criteria};
/// use podshelf::domain::Record;
///
/// let records = vec![Record::new("1", "Rust in Production"), Record::new("2", "Cooking")];
/// let criteria = Criteria { search_term: "RUST".to_string(), ..Criteria::default() };
///
/// let derivation = derive(&records, &criteria);
/// assert_eq!(derivation.total_count, 1);
/// assert_eq!(derivation.records[0].id.as_str(), "1");
/// ```
#[must_use]
pub fn derive<'r>(records: &'r [Record], criteria: &Criteria) -> Derivation<'r> {
    let _span = tracing::debug_span!(
        "derive",
        total_records = records.len(),
        search_len = criteria.search_term.len(),
        genre = %criteria.genre,
        sort = %criteria.sort
    )
    .entered();

    let searched = search_stage(records.iter().collect(), &criteria.search_term);
    let filtered = genre_stage(searched, &criteria.genre);
    let sorted = sort_stage(filtered, criteria.sort);

    tracing::debug!(filtered_count = sorted.len(), "catalog derived");

    Derivation {
        total_count: sorted.len(),
        records: sorted,
    }
}

/// Normalizes a search term: trimmed and lowercased.
#[must_use]
pub fn fold_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Keeps records whose lowercased title contains the folded term.
///
/// An empty or whitespace-only term passes everything through. A record without
/// a title is dropped while a term is active.
#[must_use]
pub fn search_stage<'r>(records: Vec<&'r Record>, term: &str) -> Vec<&'r Record> {
    let needle = fold_search_term(term);
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            record
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keeps records tagged with the selected genre.
///
/// `All` passes everything through untouched. A concrete id keeps records whose
/// genre list contains it; records without genres never match. `Unrecognized`
/// matches nothing.
#[must_use]
pub fn genre_stage<'r>(records: Vec<&'r Record>, selector: &GenreSelector) -> Vec<&'r Record> {
    match selector {
        GenreSelector::All => records,
        GenreSelector::Id(id) => records
            .into_iter()
            .filter(|record| record.genre_ids().contains(id))
            .collect(),
        GenreSelector::Unrecognized(raw) => {
            tracing::debug!(selector = %raw, "unrecognized genre selector matches nothing");
            Vec::new()
        }
    }
}

/// Sorts by the criterion. Stable: records with equal keys keep their input order.
#[must_use]
pub fn sort_stage(mut records: Vec<&Record>, criterion: SortCriterion) -> Vec<&Record> {
    records.sort_by(|a, b| compare(a, b, criterion));
    records
}

fn compare(a: &Record, b: &Record, criterion: SortCriterion) -> Ordering {
    match criterion {
        SortCriterion::TitleAz => locale_compare(a.display_title(), b.display_title()),
        SortCriterion::TitleZa => locale_compare(b.display_title(), a.display_title()),
        SortCriterion::Recent => b.updated.cmp(&a.updated),
        SortCriterion::Oldest => a.updated.cmp(&b.updated),
        SortCriterion::Seasons => b.season_count().cmp(&a.season_count()),
    }
}
