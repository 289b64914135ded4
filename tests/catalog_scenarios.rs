//! End-to-end scenarios: a JSON file source behind the supply worker, driven
//! through the event handler the way the terminal runner drives it.

use podshelf::app::{handle_event, Action, AppState, Event};
use podshelf::ui::Body;
use podshelf::worker::SupplyHandle;
use podshelf::{initialize, Config};
use serde_json::json;
use std::path::Path;

fn write_shows(path: &Path, count: usize) {
    let shows: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Show {i:02}"),
                "description": format!("Episode notes for show {i}"),
                "image": format!("https://img.example/{i}.png"),
                "genres": [if i % 2 == 0 { 2 } else { 5 }],
                "seasons": i % 4,
                "updated": format!("2024-01-{i:02}T08:00:00.000Z"),
            })
        })
        .collect();
    std::fs::write(path, serde_json::to_string(&shows).unwrap()).unwrap();
}

fn send(state: &mut AppState, worker: &SupplyHandle, event: Event) {
    let (_, actions) = handle_event(state, &event).unwrap();
    for action in actions {
        if let Action::PostToWorker(request) = action {
            worker.post(request).unwrap();
            let response = worker.recv().unwrap();
            handle_event(state, &Event::WorkerResponse(response)).unwrap();
        }
    }
}

fn start(path: &Path) -> (AppState, SupplyHandle) {
    let config = Config {
        source_file: Some(path.to_path_buf()),
        ..Config::default()
    };
    let source = podshelf::source::from_config(&config).unwrap();
    let worker = SupplyHandle::spawn(source).unwrap();
    let mut state = initialize(&config);
    send(&mut state, &worker, Event::Refresh);
    (state, worker)
}

fn visible_titles(state: &AppState) -> Vec<String> {
    state
        .derived()
        .items
        .iter()
        .map(|r| r.display_title().to_string())
        .collect()
}

#[test]
fn first_page_is_newest_eight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shows.json");
    write_shows(&path, 10);
    let (state, _worker) = start(&path);

    let derived = state.derived();
    assert_eq!(derived.items.len(), 8);
    assert_eq!(derived.total_pages, 2);
    assert_eq!(visible_titles(&state)[0], "Show 10");
    assert_eq!(visible_titles(&state)[7], "Show 03");
}

#[test]
fn unmatched_search_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shows.json");
    write_shows(&path, 10);
    let (mut state, worker) = start(&path);

    send(&mut state, &worker, Event::EnterSearch);
    for ch in "xyz-no-match".chars() {
        send(&mut state, &worker, Event::Char { ch, at: std::time::Instant::now() });
    }
    send(&mut state, &worker, Event::CommitSearch);

    let derived = state.derived();
    assert_eq!(derived.total_count, 0);
    assert_eq!(derived.total_pages, 0);
    assert!(matches!(state.compute_viewmodel(24, 100).body, Body::Empty(_)));
}

#[test]
fn genre_and_sort_compose_with_paging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shows.json");
    write_shows(&path, 20);
    let (mut state, worker) = start(&path);

    send(&mut state, &worker, Event::NextPage);
    send(&mut state, &worker, Event::SetGenre(podshelf::GenreSelector::Id(2)));
    send(&mut state, &worker, Event::SetSort(podshelf::SortCriterion::TitleAz));

    let derived = state.derived();
    assert_eq!(derived.current_page, 1);
    assert_eq!(derived.total_count, 10);
    assert_eq!(visible_titles(&state)[0], "Show 02");
}

#[test]
fn refresh_re_resolves_the_selection_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shows.json");
    write_shows(&path, 3);
    let (mut state, worker) = start(&path);

    send(&mut state, &worker, Event::SelectRecord("2".into()));
    assert_eq!(
        state.compute_viewmodel(24, 100).detail.map(|d| d.title),
        Some("Show 02".to_string())
    );

    std::fs::write(
        &path,
        r#"[{"id": "2", "title": "Show 02 (Remastered)"}, {"id": "3", "title": "Show 03"}]"#,
    )
    .unwrap();
    send(&mut state, &worker, Event::Refresh);
    let detail = state.compute_viewmodel(24, 100).detail.unwrap();
    assert_eq!(detail.title, "Show 02 (Remastered)");
    assert_eq!(detail.updated, "Unknown");

    std::fs::write(&path, r#"[{"id": "3", "title": "Show 03"}]"#).unwrap();
    send(&mut state, &worker, Event::Refresh);
    assert!(state.compute_viewmodel(24, 100).detail.is_none());
    assert!(!state.detail_visible());
}

#[test]
fn unreadable_source_shows_banner_over_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let (state, _worker) = start(&dir.path().join("missing.json"));

    assert!(state.supply.is_failed());
    let vm = state.compute_viewmodel(24, 100);
    assert!(vm.banner.unwrap().message.starts_with("Failed to load podcasts"));
    assert_eq!(state.derived().total_count, 0);
}
