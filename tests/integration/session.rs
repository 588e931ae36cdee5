//! The search modal driven with synthetic keystrokes and clock ticks.

use sitefind::{
    Catalog, Category, Key, SearchConfig, SearchSession, SearchState, Searcher, SessionAction,
};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::common::load_fixture_catalog;

const WINDOW: Duration = Duration::from_millis(300);

fn open_session(catalog: Catalog) -> SearchSession {
    let searcher = Searcher::new(catalog, SearchConfig::default());
    let mut session = SearchSession::new(Arc::new(searcher));
    assert_eq!(session.handle_key(Key::Shortcut), SessionAction::Opened);
    session
}

/// Type `text` and let the debounce window pass.
fn settle(session: &mut SearchSession, text: &str, now: Instant) -> Instant {
    session.input(text, now);
    let later = now + WINDOW;
    assert!(session.poll(later));
    later
}

fn selected_url(session: &SearchSession) -> Option<String> {
    session.selected().map(|hit| hit.document.url.clone())
}

#[test]
fn test_typing_burst_runs_one_search() {
    let mut s = open_session(load_fixture_catalog());
    let t0 = Instant::now();

    let mut now = t0;
    for prefix in ["as", "ast", "astr", "astro"] {
        assert!(s.input(prefix, now).is_some());
        assert!(matches!(s.state(), SearchState::Loading));
        now += Duration::from_millis(50);
        assert!(!s.poll(now), "fired mid-burst at {:?}", prefix);
    }

    // 300ms after the last keystroke
    assert!(s.poll(t0 + Duration::from_millis(150) + WINDOW));
    let results = s.state().results().unwrap();
    assert_eq!(results.query, "astro");
    assert_eq!(results.total, 2);

    // Nothing left to run
    assert!(!s.poll(now + Duration::from_secs(5)));
}

#[test]
fn test_category_switch_reruns_query() {
    let mut s = open_session(load_fixture_catalog());
    let now = settle(&mut s, "web", Instant::now());
    assert_eq!(s.state().results().unwrap().total, 3);

    assert!(s.set_category(Some(Category::Service), now).is_some());
    assert!(matches!(s.state(), SearchState::Loading));
    assert!(s.poll(now + WINDOW));

    let results = s.state().results().unwrap();
    assert_eq!(results.total, 1);
    assert_eq!(results.count(Category::Service), 1);
    assert_eq!(s.query(), "web");
    assert_eq!(s.category(), Some(Category::Service));
}

#[test]
fn test_category_switch_with_short_query_stays_idle() {
    let mut s = open_session(load_fixture_catalog());
    let now = Instant::now();
    s.input("w", now);
    assert!(s.set_category(Some(Category::Blog), now).is_none());
    assert!(s.state().is_idle());
}

#[test]
fn test_arrow_keys_wrap() {
    let mut s = open_session(load_fixture_catalog());
    settle(&mut s, "web", Instant::now());

    assert_eq!(s.selected_index(), 0);
    assert_eq!(selected_url(&s).as_deref(), Some("/"));

    s.handle_key(Key::ArrowUp);
    assert_eq!(s.selected_index(), 2);
    assert_eq!(selected_url(&s).as_deref(), Some("/projects/content-tools"));

    s.handle_key(Key::ArrowDown);
    assert_eq!(s.selected_index(), 0);
    s.handle_key(Key::ArrowDown);
    assert_eq!(selected_url(&s).as_deref(), Some("/services/web-development"));
}

#[test]
fn test_arrows_without_results_do_nothing() {
    let mut s = open_session(load_fixture_catalog());
    settle(&mut s, "xyz123", Instant::now());
    assert!(matches!(s.state(), SearchState::NoResults(_)));

    s.handle_key(Key::ArrowDown);
    assert_eq!(s.selected_index(), 0);
    assert!(s.selected().is_none());
}

#[test]
fn test_enter_navigates_and_closes() {
    let mut s = open_session(load_fixture_catalog());
    settle(&mut s, "web", Instant::now());
    s.handle_key(Key::ArrowDown);

    assert_eq!(
        s.handle_key(Key::Enter),
        SessionAction::Navigate("/services/web-development".to_string())
    );
    assert!(!s.is_open());
    assert!(s.query().is_empty());
    assert!(s.state().is_idle());
}

#[test]
fn test_new_search_resets_selection() {
    let mut s = open_session(load_fixture_catalog());
    let now = settle(&mut s, "web", Instant::now());
    s.handle_key(Key::ArrowDown);
    assert_eq!(s.selected_index(), 1);

    settle(&mut s, "printing", now);
    assert_eq!(s.selected_index(), 0);
}

#[test]
fn test_escape_drops_pending_search() {
    let mut s = open_session(load_fixture_catalog());
    let t0 = Instant::now();
    s.input("web", t0);
    assert_eq!(s.handle_key(Key::Escape), SessionAction::Closed);
    assert!(!s.poll(t0 + WINDOW));
    assert!(s.state().is_idle());
}

#[test]
fn test_host_timer_completion() {
    let mut s = open_session(load_fixture_catalog());
    let t0 = Instant::now();
    let first = s.input("res", t0).unwrap();
    let second = s.input("resin", t0 + Duration::from_millis(20)).unwrap();

    assert!(!s.complete(first));
    assert!(s.complete(second));
    assert_eq!(s.state().results().unwrap().total, 2);
    // Already consumed
    assert!(!s.complete(second));
}

#[test]
fn test_unreadable_catalog_degrades_to_empty() {
    let catalog = Catalog::load_or_empty(Path::new("data/fixtures/missing.json"));
    let mut s = open_session(catalog);
    settle(&mut s, "web", Instant::now());

    match s.state() {
        SearchState::Empty(results) => assert!(!results.suggestions.is_empty()),
        other => panic!("expected Empty, got {}", other.name()),
    }
}
