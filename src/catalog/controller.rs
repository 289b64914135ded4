//! The catalog controller: sole owner of criteria, selection and pending search.
//!
//! Every intent of the control surface lands here. Criteria changes reset the page
//! to 1; a page change touches nothing else. [`CatalogController::derive`] runs the
//! pure pipeline and pagination calculator and then applies the one correction the
//! calculator reports: an out-of-range page becomes page 1.

use super::criteria::{Criteria, SortCriterion};
use super::debounce::SearchDebouncer;
use super::pagination::paginate;
use super::pipeline;
use super::selection::{Resolution, Selection};
use crate::domain::{GenreSelector, Record, RecordId};
use std::time::{Duration, Instant};

/// Visible page plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedResult<'r> {
    pub items: Vec<&'r Record>,
    /// Records left after filtering, across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// The page the items were sliced from.
    pub current_page: usize,
}

impl DerivedResult<'_> {
    /// 1-based index of the first visible record within the filtered list, or 0.
    #[must_use]
    pub fn first_index(&self, page_size: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * page_size + 1
        }
    }

    /// 1-based index of the last visible record, or 0.
    #[must_use]
    pub fn last_index(&self, page_size: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index(page_size) + self.items.len() - 1
        }
    }
}

/// Owns the catalog's mutable state.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::{CatalogController, SortCriterion};
/// use podshelf::domain::Record;
///
/// let records: Vec<Record> = (1..=10).map(|i| Record::new(i.to_string(), format!("Show {i}"))).collect();
/// let mut controller = CatalogController::default();
///
/// controller.set_page(2);
/// assert_eq!(controller.derive(&records).items.len(), 2);
///
/// controller.set_sort_criterion(SortCriterion::TitleAz);
/// assert_eq!(controller.criteria().page, 1);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogController {
    criteria: Criteria,
    selection: Selection,
    debouncer: SearchDebouncer,
}

impl CatalogController {
    #[must_use]
    pub fn new(page_size: usize, search_debounce: Duration) -> Self {
        Self {
            criteria: Criteria::with_page_size(page_size),
            selection: Selection::default(),
            debouncer: SearchDebouncer::new(search_debounce),
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn reset_page(&mut self) {
        self.criteria.page = 1;
    }

    /// Applies a search term immediately and resets the page.
    ///
    /// The term is stored as typed, minus surrounding whitespace. Case folding
    /// happens at match time.
    pub fn set_search_term(&mut self, term: &str) {
        let term = term.trim();
        tracing::debug!(term = %term, "search term set");
        self.criteria.search_term = term.to_string();
        self.reset_page();
    }

    pub fn set_genre(&mut self, genre: GenreSelector) {
        tracing::debug!(genre = %genre, "genre set");
        self.criteria.genre = genre;
        self.reset_page();
    }

    pub fn set_sort_criterion(&mut self, sort: SortCriterion) {
        tracing::debug!(sort = %sort, "sort criterion set");
        self.criteria.sort = sort;
        self.reset_page();
    }

    /// Requests a page. Out-of-range values are corrected on the next derivation.
    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.criteria.page_size = page_size.max(1);
        self.reset_page();
    }

    /// Clears the search term and any pending keystrokes.
    pub fn clear_search(&mut self) {
        self.debouncer.cancel();
        self.criteria.search_term.clear();
        self.reset_page();
    }

    /// Clears search and genre; the sort criterion is kept.
    pub fn clear_filters(&mut self) {
        self.debouncer.cancel();
        self.criteria.search_term.clear();
        self.criteria.genre = GenreSelector::All;
        self.reset_page();
    }

    /// Records raw keystroke-level input; it applies after the debounce delay.
    pub fn input_search_text(&mut self, text: &str, now: Instant) {
        self.debouncer.schedule(text, now);
    }

    /// Applies `text` now, discarding any pending debounced input.
    pub fn commit_search_text(&mut self, text: &str) {
        self.debouncer.cancel();
        self.set_search_term(text);
    }

    /// Applies the pending search if its deadline passed. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(term) => {
                self.set_search_term(&term);
                true
            }
            None => false,
        }
    }

    pub fn select_record(&mut self, id: RecordId) {
        self.selection.select(id);
    }

    pub fn close_selection(&mut self) {
        self.selection.close();
    }

    /// Resolves the selection against the current raw records.
    #[must_use]
    pub fn resolve_selection<'r>(&self, records: &'r [Record]) -> Resolution<'r> {
        self.selection.resolve(records)
    }

    fn compute<'r>(&self, records: &'r [Record]) -> (DerivedResult<'r>, bool) {
        let derivation = pipeline::derive(records, &self.criteria);
        let page = paginate(
            &derivation.records,
            self.criteria.page,
            self.criteria.page_size,
        );

        let result = DerivedResult {
            items: page.items.to_vec(),
            total_count: derivation.total_count,
            total_pages: page.total_pages,
            current_page: page.effective_page,
        };
        (result, page.out_of_range)
    }

    /// Derives the visible page without touching any state.
    ///
    /// Returns exactly what [`derive`](Self::derive) would, but leaves an
    /// out-of-range page uncorrected. Used by read-only consumers such as the
    /// view model.
    #[must_use]
    pub fn view<'r>(&self, records: &'r [Record]) -> DerivedResult<'r> {
        self.compute(records).0
    }

    /// Derives the visible page from `records` and the current criteria.
    ///
    /// If the requested page lies past the last page, the stored page is reset to
    /// 1 so later derivations agree with what was displayed.
    pub fn derive<'r>(&mut self, records: &'r [Record]) -> DerivedResult<'r> {
        let (result, out_of_range) = self.compute(records);

        if out_of_range {
            tracing::debug!(
                requested_page = self.criteria.page,
                total_pages = result.total_pages,
                "requested page out of range, resetting to first page"
            );
            self.criteria.page = 1;
        }

        result
    }
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(
            super::criteria::DEFAULT_PAGE_SIZE,
            super::debounce::DEFAULT_SEARCH_DEBOUNCE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};

    fn ten_records() -> Vec<Record> {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        (1..=10)
            .map(|i| {
                let mut record = Record::new(format!("r{i}"), format!("Show {i}"));
                record.updated = Some(base + ChronoDuration::days(i64::from(i)));
                record.genres = Some(vec![if i % 2 == 0 { 2 } else { 3 }]);
                record
            })
            .collect()
    }

    #[test]
    fn ten_records_eight_per_page_newest_first() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        let result = controller.derive(&records);
        assert_eq!(result.items.len(), 8);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.total_count, 10);
        assert_eq!(result.items[0].id.as_str(), "r10");
        assert_eq!(result.items[7].id.as_str(), "r3");
    }

    #[test]
    fn no_match_search_is_empty_not_an_error() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.set_search_term("xyz-no-match");
        let result = controller.derive(&records);
        assert_eq!(result.total_count, 0);
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn out_of_range_page_is_corrected_in_state() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.set_page(5);
        let result = controller.derive(&records);
        assert_eq!(result.current_page, 1);
        assert_eq!(controller.criteria().page, 1);
        let first_page: Vec<_> = result.items.iter().map(|r| r.id.clone()).collect();

        let again = controller.derive(&records);
        let again_ids: Vec<_> = again.items.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_page, again_ids);
    }

    #[test]
    fn criteria_changes_reset_page_but_page_changes_keep_criteria() {
        let mut controller = CatalogController::default();
        controller.set_search_term("show");
        controller.set_genre(GenreSelector::Id(2));
        controller.set_sort_criterion(SortCriterion::Oldest);

        controller.set_page(2);
        assert_eq!(controller.criteria().search_term, "show");
        assert_eq!(controller.criteria().genre, GenreSelector::Id(2));
        assert_eq!(controller.criteria().sort, SortCriterion::Oldest);
        assert_eq!(controller.criteria().page, 2);

        controller.set_genre(GenreSelector::Id(2));
        assert_eq!(controller.criteria().page, 1);

        controller.set_page(2);
        controller.clear_search();
        assert_eq!(controller.criteria().page, 1);
        assert_eq!(controller.criteria().genre, GenreSelector::Id(2));

        controller.set_page(2);
        controller.clear_filters();
        assert_eq!(controller.criteria().page, 1);
        assert_eq!(controller.criteria().genre, GenreSelector::All);
        assert_eq!(controller.criteria().sort, SortCriterion::Oldest);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut controller = CatalogController::default();
        controller.set_page(3);
        controller.set_page_size(4);
        assert_eq!(controller.criteria().page, 1);
        assert_eq!(controller.criteria().page_size, 4);
    }

    #[test]
    fn debounced_input_applies_on_tick_and_resets_page() {
        let records = ten_records();
        let mut controller = CatalogController::new(8, Duration::from_millis(300));
        let t0 = Instant::now();
        controller.set_page(2);

        controller.input_search_text("Show 1", t0);
        assert!(!controller.tick(t0 + Duration::from_millis(100)));
        assert_eq!(controller.criteria().page, 2);

        assert!(controller.tick(t0 + Duration::from_millis(300)));
        assert_eq!(controller.criteria().search_term, "Show 1");
        assert_eq!(controller.criteria().page, 1);
        // "Show 1" and "Show 10".
        assert_eq!(controller.derive(&records).total_count, 2);
    }

    #[test]
    fn commit_bypasses_and_cancels_pending_input() {
        let mut controller = CatalogController::default();
        let t0 = Instant::now();
        controller.input_search_text("sho", t0);
        controller.commit_search_text("Show 3");
        assert_eq!(controller.criteria().search_term, "Show 3");
        assert!(!controller.tick(t0 + Duration::from_secs(5)));
        assert_eq!(controller.criteria().search_term, "Show 3");
    }

    #[test]
    fn clear_search_discards_pending_keystrokes() {
        let mut controller = CatalogController::default();
        let t0 = Instant::now();
        controller.input_search_text("stale", t0);
        controller.clear_search();
        assert!(!controller.tick(t0 + Duration::from_secs(1)));
        assert!(controller.criteria().search_term.is_empty());
    }

    #[test]
    fn selection_is_independent_of_the_pipeline() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.select_record(RecordId::new("r1"));
        controller.set_search_term("xyz-no-match");
        assert!(matches!(
            controller.resolve_selection(&records),
            Resolution::Found(r) if r.id.as_str() == "r1"
        ));
        controller.close_selection();
        assert_eq!(controller.resolve_selection(&records), Resolution::Closed);
    }

    #[test]
    fn selecting_an_unknown_id_resolves_to_not_found() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.select_record(RecordId::new("nope"));
        assert_eq!(controller.resolve_selection(&records), Resolution::NotFound);
    }

    #[test]
    fn view_matches_derive_but_leaves_state_alone() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.set_page(9);
        let viewed = controller.view(&records);
        assert_eq!(controller.criteria().page, 9);
        let derived = controller.derive(&records);
        assert_eq!(viewed, derived);
        assert_eq!(controller.criteria().page, 1);
    }

    #[test]
    fn visible_range_indices() {
        let records = ten_records();
        let mut controller = CatalogController::default();
        controller.set_page(2);
        let result = controller.derive(&records);
        assert_eq!(result.first_index(8), 9);
        assert_eq!(result.last_index(8), 10);
    }
}
