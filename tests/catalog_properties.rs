//! Property tests for the catalog pipeline, pagination and controller.

use chrono::{DateTime, TimeZone, Utc};
use podshelf::catalog::collate::locale_compare;
use podshelf::catalog::pagination::paginate;
use podshelf::catalog::pipeline::{genre_stage, search_stage, sort_stage};
use podshelf::catalog::{CatalogController, SortCriterion};
use podshelf::domain::{GenreSelector, Record};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::time::Duration;

fn timestamp() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    // a narrow range so equal keys are common
    proptest::option::of((0i64..4).prop_map(|day| {
        Utc.timestamp_opt(1_700_000_000 + day * 86_400, 0).single().unwrap()
    }))
}

fn record_fields() -> impl Strategy<Value = (Option<String>, Option<Vec<u32>>, Option<u32>, Option<DateTime<Utc>>)> {
    (
        proptest::option::weighted(0.9, "[a-cA-C ]{0,6}"),
        proptest::option::of(proptest::collection::vec(1u32..=9, 0..3)),
        proptest::option::of(0u32..4),
        timestamp(),
    )
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(record_fields(), 0..40).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(idx, (title, genres, seasons, updated))| {
                let mut record = Record::new(idx.to_string(), "");
                record.title = title;
                record.genres = genres;
                record.seasons = seasons;
                record.updated = updated;
                record
            })
            .collect()
    })
}

fn criterion() -> impl Strategy<Value = SortCriterion> {
    proptest::sample::select(SortCriterion::ALL.to_vec())
}

fn index(record: &Record) -> usize {
    record.id.as_str().parse().unwrap()
}

fn equal_keys(a: &Record, b: &Record, criterion: SortCriterion) -> bool {
    match criterion {
        SortCriterion::TitleAz | SortCriterion::TitleZa => {
            locale_compare(a.display_title(), b.display_title()) == Ordering::Equal
        }
        SortCriterion::Recent | SortCriterion::Oldest => a.updated == b.updated,
        SortCriterion::Seasons => a.season_count() == b.season_count(),
    }
}

proptest! {
    #[test]
    fn search_keeps_exactly_the_matching_titles(records in records(), term in "[a-cA-C]{1,2}") {
        let kept = search_stage(records.iter().collect(), &term);
        let needle = term.to_lowercase();

        for record in &kept {
            let title = record.title.as_deref().unwrap_or_default().to_lowercase();
            prop_assert!(title.contains(&needle));
        }
        for record in records.iter().filter(|r| !kept.iter().any(|k| k.id == r.id)) {
            prop_assert!(record
                .title
                .as_deref()
                .map_or(true, |title| !title.to_lowercase().contains(&needle)));
        }
    }

    #[test]
    fn blank_search_passes_everything(records in records(), blank in "[ \t]{0,3}") {
        prop_assert_eq!(search_stage(records.iter().collect(), &blank).len(), records.len());
    }

    #[test]
    fn concrete_genre_keeps_only_tagged_records(records in records(), id in 1u32..=9) {
        let kept = genre_stage(records.iter().collect(), &GenreSelector::Id(id));
        for record in &kept {
            prop_assert!(record.genre_ids().contains(&id));
        }
        let expected = records.iter().filter(|r| r.genre_ids().contains(&id)).count();
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn all_genres_is_identity(records in records()) {
        let input: Vec<&Record> = records.iter().collect();
        prop_assert_eq!(genre_stage(input.clone(), &GenreSelector::All), input);
    }

    #[test]
    fn sort_is_ordered_and_stable(records in records(), criterion in criterion()) {
        let sorted = sort_stage(records.iter().collect(), criterion);
        prop_assert_eq!(sorted.len(), records.len());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ordering = match criterion {
                SortCriterion::TitleAz => locale_compare(a.display_title(), b.display_title()),
                SortCriterion::TitleZa => locale_compare(b.display_title(), a.display_title()),
                SortCriterion::Recent => b.updated.cmp(&a.updated),
                SortCriterion::Oldest => a.updated.cmp(&b.updated),
                SortCriterion::Seasons => b.season_count().cmp(&a.season_count()),
            };
            prop_assert_ne!(ordering, Ordering::Greater);
            if equal_keys(a, b, criterion) {
                prop_assert!(index(a) < index(b), "equal keys reordered");
            }
        }
    }

    #[test]
    fn page_length_formula(total in 0usize..100, page_size in 1usize..20, page in 0usize..12) {
        let items: Vec<usize> = (0..total).collect();
        let result = paginate(&items, page, page_size);
        let skipped = (result.effective_page - 1) * page_size;
        prop_assert_eq!(result.items.len(), page_size.min(total.saturating_sub(skipped)));
        prop_assert_eq!(result.total_pages, total.div_ceil(page_size));
        prop_assert!(result.effective_page >= 1);
    }

    #[test]
    fn criteria_changes_reset_the_page(
        records in records(),
        page in 1usize..5,
        term in "[a-c]{0,1}",
        id in 1u32..=9,
        criterion in criterion(),
        which in 0usize..3,
    ) {
        let mut controller = CatalogController::new(3, Duration::from_millis(300));
        controller.set_page(page);
        let _ = controller.derive(&records);

        match which {
            0 => controller.set_search_term(&term),
            1 => controller.set_genre(GenreSelector::Id(id)),
            _ => controller.set_sort_criterion(criterion),
        }
        prop_assert_eq!(controller.derive(&records).current_page, 1);
    }

    #[test]
    fn page_change_preserves_other_criteria(
        term in "[a-c]{0,2}",
        id in 1u32..=9,
        criterion in criterion(),
        page in 1usize..9,
    ) {
        let mut controller = CatalogController::new(4, Duration::from_millis(300));
        controller.set_search_term(&term);
        controller.set_genre(GenreSelector::Id(id));
        controller.set_sort_criterion(criterion);
        let before = controller.criteria().clone();

        controller.set_page(page);
        let after = controller.criteria();
        prop_assert_eq!(&after.search_term, &before.search_term);
        prop_assert_eq!(&after.genre, &before.genre);
        prop_assert_eq!(after.sort, before.sort);
        prop_assert_eq!(after.page_size, before.page_size);
        prop_assert_eq!(after.page, page);
    }
}
