//! Tests for the view-state engine.

use super::*;
use crate::state::observer::RecordingObserver;

// ===== Test Helpers =====

fn record(id: usize, name: &str) -> Record {
    Record::new(
        RecordId::new(id.to_string()).unwrap(),
        name,
        format!("user{}@example.com", id),
        format!("Course {}", id),
    )
}

fn numbered_roster(count: usize) -> Roster {
    Roster::new((1..=count).map(|i| record(i, &format!("Person {}", i))).collect()).unwrap()
}

fn named_roster(names: &[&str]) -> Roster {
    Roster::new(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| record(i + 1, name))
            .collect(),
    )
    .unwrap()
}

fn id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap()
}

fn page_size(rows: usize) -> PageSize {
    PageSize::new(rows).unwrap()
}

fn visible_ids(view: &ViewState) -> Vec<String> {
    view.visible_records()
        .iter()
        .map(|r| r.id().to_string())
        .collect()
}

// ===== Construction =====

#[test]
fn new_view_starts_unfiltered_on_page_one() {
    let view = ViewState::new(numbered_roster(5), page_size(10));
    assert_eq!(view.search_text(), "");
    assert_eq!(view.current_page(), PageNumber::FIRST);
    assert_eq!(view.filtered_count(), 5);
    assert_eq!(view.selected_count(), 0);
}

// ===== Pagination scenario =====

#[test]
fn twenty_records_page_size_ten_has_two_pages() {
    let mut view = ViewState::new(numbered_roster(20), page_size(10));
    assert_eq!(view.total_pages(), 2);

    let expected_first: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
    assert_eq!(visible_ids(&view), expected_first);

    view.change_page(2).unwrap();
    let expected_second: Vec<String> = (11..=20).map(|i| i.to_string()).collect();
    assert_eq!(visible_ids(&view), expected_second);

    let err = view.change_page(3).unwrap_err();
    assert_eq!(
        err,
        InvalidPageRequest {
            requested: 3,
            total_pages: 2
        }
    );
    assert_eq!(view.current_page().get(), 2, "Out of range request is a no-op");
}

#[test]
fn change_page_zero_is_rejected() {
    let mut view = ViewState::new(numbered_roster(20), page_size(10));
    assert!(view.change_page(0).is_err());
    assert_eq!(view.current_page(), PageNumber::FIRST);
}

#[test]
fn next_and_prev_page_stop_at_bounds() {
    let mut view = ViewState::new(numbered_roster(25), page_size(10));
    assert!(view.prev_page().is_err());
    assert_eq!(view.next_page().unwrap().get(), 2);
    assert_eq!(view.next_page().unwrap().get(), 3);
    assert!(view.next_page().is_err());
    assert_eq!(view.current_page().get(), 3);
    assert_eq!(visible_ids(&view), vec!["21", "22", "23", "24", "25"]);
}

#[test]
fn first_and_last_page_jump() {
    let mut view = ViewState::new(numbered_roster(35), page_size(10));
    assert_eq!(view.last_page().get(), 4);
    assert_eq!(view.first_page().get(), 1);
}

#[test]
fn empty_roster_still_has_one_page() {
    let mut view = ViewState::new(numbered_roster(0), page_size(10));
    assert_eq!(view.total_pages(), 1);
    assert!(view.visible_records().is_empty());
    assert_eq!(view.last_page(), PageNumber::FIRST);
}

// ===== Filter =====

#[test]
fn john_matches_john_doe_and_alice_johnson() {
    let mut view = ViewState::new(
        named_roster(&["John Doe", "Jane Smith", "Alice Johnson", "Bob Brown"]),
        page_size(10),
    );

    view.set_search_text("john");

    let names: Vec<&str> = view.filtered_records().map(Record::name).collect();
    assert_eq!(names, vec!["John Doe", "Alice Johnson"]);
    assert_eq!(view.total_pages(), 1);
}

#[test]
fn changing_search_text_resets_page() {
    let mut view = ViewState::new(numbered_roster(30), page_size(10));
    view.change_page(3).unwrap();

    assert!(view.set_search_text("Person 1"));

    assert_eq!(view.current_page(), PageNumber::FIRST);
}

#[test]
fn setting_same_search_text_is_noop() {
    let mut view = ViewState::new(numbered_roster(30), page_size(10));
    view.set_search_text("Person");
    view.change_page(2).unwrap();
    let runs = view.filter_runs();

    assert!(!view.set_search_text("Person"));

    assert_eq!(view.current_page().get(), 2, "Page kept when text unchanged");
    assert_eq!(view.filter_runs(), runs, "Filter not re-evaluated");
}

#[test]
fn page_and_selection_changes_do_not_refilter() {
    let mut view = ViewState::new(numbered_roster(30), page_size(10));
    let runs = view.filter_runs();

    view.change_page(2).unwrap();
    view.toggle_one(&id("12")).unwrap();
    view.toggle_all();
    let _ = view.visible_records();
    let _ = view.total_pages();

    assert_eq!(view.filter_runs(), runs);
}

#[test]
fn new_text_and_roster_replacement_each_refilter_once() {
    let mut view = ViewState::new(numbered_roster(10), page_size(5));
    let runs = view.filter_runs();

    view.set_search_text("Person 1");
    assert_eq!(view.filter_runs(), runs + 1);

    view.replace_roster(numbered_roster(4));
    assert_eq!(view.filter_runs(), runs + 2);
}

#[test]
fn search_text_change_uses_fresh_filter() {
    let mut view = ViewState::new(named_roster(&["Ann", "Bob"]), page_size(10));
    view.set_search_text("ann");
    assert_eq!(view.filtered_count(), 1);
    view.set_search_text("bob");
    let names: Vec<&str> = view.filtered_records().map(Record::name).collect();
    assert_eq!(names, vec!["Bob"]);
}

// ===== Selection =====

#[test]
fn toggle_one_rejects_unknown_id() {
    let mut view = ViewState::new(numbered_roster(3), page_size(10));
    assert_eq!(view.toggle_one(&id("99")), Err(UnknownRecord(id("99"))));
    assert_eq!(view.selected_count(), 0);
}

#[test]
fn toggle_one_twice_is_involution() {
    let mut view = ViewState::new(numbered_roster(3), page_size(10));
    view.toggle_one(&id("1")).unwrap();
    let before = view.selection().clone();

    assert_eq!(view.toggle_one(&id("2")), Ok(true));
    assert_eq!(view.toggle_one(&id("2")), Ok(false));

    assert_eq!(view.selection(), &before);
}

#[test]
fn toggle_all_is_scoped_to_filter_not_page() {
    // 11 matches across two pages; all of them get selected
    let mut view = ViewState::new(numbered_roster(20), page_size(10));
    view.set_search_text("person 1");

    let outcome = view.toggle_all();

    // "Person 1", "Person 10".."Person 19"
    assert_eq!(outcome, ToggleAllOutcome::Selected(11));
    assert!(view.is_selected(&id("19")));
    assert!(!view.is_selected(&id("2")));
    assert!(view.select_all_indicator());
}

#[test]
fn toggle_all_deselects_only_filtered() {
    let mut view = ViewState::new(
        named_roster(&["John Doe", "Jane Smith", "Alice Johnson"]),
        page_size(10),
    );
    view.toggle_one(&id("2")).unwrap(); // Jane, outside the filter below
    view.set_search_text("john");
    view.toggle_all();
    assert_eq!(view.selected_count(), 3);

    let outcome = view.toggle_all();

    assert_eq!(outcome, ToggleAllOutcome::Deselected(2));
    assert!(view.is_selected(&id("2")), "Jane stays selected");
    assert_eq!(view.selected_count(), 1);
}

#[test]
fn indicator_false_when_stale_selection_outside_filter() {
    let mut view = ViewState::new(
        named_roster(&["John Doe", "Jane Smith", "Alice Johnson"]),
        page_size(10),
    );
    view.toggle_one(&id("2")).unwrap();
    view.set_search_text("john");
    view.toggle_all();

    // Both filtered ids are selected, but so is Jane
    assert_eq!(view.selected_in_filter(), 2);
    assert!(!view.select_all_indicator());
}

#[test]
fn refilter_to_empty_keeps_selection_and_indicator_reads_false() {
    let mut view = ViewState::new(
        named_roster(&["Ann One", "Ann Two", "Ann Three", "Bob"]),
        page_size(10),
    );
    view.set_search_text("ann");
    view.toggle_all();
    assert_eq!(view.selected_count(), 3);
    assert!(view.select_all_indicator());

    view.set_search_text("zzz");

    assert_eq!(view.filtered_count(), 0);
    assert_eq!(view.selected_count(), 3, "Refiltering never clears selection");
    for raw in ["1", "2", "3"] {
        assert!(view.is_selected(&id(raw)));
    }
    assert!(
        !view.select_all_indicator(),
        "Empty filtered set always reads as not all selected"
    );
}

#[test]
fn toggle_all_on_empty_filter_changes_nothing() {
    let mut view = ViewState::new(named_roster(&["Ann"]), page_size(10));
    view.toggle_one(&id("1")).unwrap();
    view.set_search_text("zzz");

    assert_eq!(view.toggle_all(), ToggleAllOutcome::Unchanged);
    assert_eq!(view.selected_count(), 1);
}

#[test]
fn clear_selection_removes_everything() {
    let mut view = ViewState::new(numbered_roster(5), page_size(10));
    view.toggle_all();
    assert_eq!(view.clear_selection(), 5);
    assert_eq!(view.selected_count(), 0);
}

// ===== Roster replacement =====

#[test]
fn replace_roster_prunes_missing_selected_ids() {
    let mut view = ViewState::new(numbered_roster(5), page_size(10));
    view.toggle_one(&id("2")).unwrap();
    view.toggle_one(&id("5")).unwrap();

    view.replace_roster(numbered_roster(3));

    assert!(view.is_selected(&id("2")));
    assert!(!view.is_selected(&id("5")));
    assert_eq!(view.selected_count(), 1);
}

#[test]
fn replace_roster_clamps_page_and_keeps_search() {
    let mut view = ViewState::new(numbered_roster(30), page_size(10));
    view.set_search_text("person");
    view.change_page(3).unwrap();

    view.replace_roster(numbered_roster(12));

    assert_eq!(view.search_text(), "person");
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.current_page().get(), 2);
}

// ===== Observer =====

#[test]
fn observer_receives_selection_and_filter_events() {
    let observer = RecordingObserver::new();
    let mut view =
        ViewState::with_observer(named_roster(&["Ann", "Bob"]), page_size(10), observer.clone());

    view.toggle_one(&id("1")).unwrap();
    view.set_search_text("bob");

    assert_eq!(
        observer.events(),
        vec![
            ViewEvent::SelectionChanged {
                selected: vec![id("1")]
            },
            ViewEvent::FilterChanged {
                query: "bob".to_string(),
                matched: 1
            },
        ]
    );
}

#[test]
fn observer_sees_page_reset_on_refilter() {
    let observer = RecordingObserver::new();
    let mut view = ViewState::with_observer(numbered_roster(20), page_size(10), observer.clone());
    view.change_page(2).unwrap();
    observer.clear();

    view.set_search_text("Person");

    let events = observer.events();
    assert!(events.contains(&ViewEvent::PageChanged {
        page: 1,
        total_pages: 2
    }));
}

#[test]
fn rejected_page_request_emits_nothing() {
    let observer = RecordingObserver::new();
    let mut view = ViewState::with_observer(numbered_roster(5), page_size(10), observer.clone());

    let _ = view.change_page(7);

    assert!(observer.events().is_empty());
}
