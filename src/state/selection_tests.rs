//! Tests for the selection stage.

use super::*;

fn id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap()
}

fn ids(raw: &[&str]) -> Vec<RecordId> {
    raw.iter().map(|r| id(r)).collect()
}

fn refs(ids: &[RecordId]) -> Vec<&RecordId> {
    ids.iter().collect()
}

fn selected(selection: &Selection) -> Vec<&str> {
    selection.iter().map(RecordId::as_str).collect()
}

// ===== toggle tests =====

#[test]
fn toggle_adds_unselected_id() {
    let mut selection = Selection::new();
    assert!(selection.toggle(&id("1")));
    assert!(selection.contains(&id("1")));
    assert_eq!(selection.len(), 1);
}

#[test]
fn toggle_removes_selected_id() {
    let mut selection = Selection::new();
    selection.toggle(&id("1"));
    assert!(!selection.toggle(&id("1")));
    assert!(selection.is_empty());
}

#[test]
fn toggle_twice_restores_prior_state() {
    let mut selection = Selection::new();
    selection.insert(id("a"));
    selection.insert(id("b"));
    let before = selection.clone();

    selection.toggle(&id("c"));
    selection.toggle(&id("c"));
    assert_eq!(selection, before);
}

#[test]
fn iteration_follows_insertion_order() {
    let mut selection = Selection::new();
    selection.insert(id("3"));
    selection.insert(id("1"));
    selection.insert(id("2"));
    assert_eq!(selected(&selection), vec!["3", "1", "2"]);
}

#[test]
fn insert_is_idempotent() {
    let mut selection = Selection::new();
    assert!(selection.insert(id("1")));
    assert!(!selection.insert(id("1")));
    assert_eq!(selection.len(), 1);
}

#[test]
fn clear_reports_removed_count() {
    let mut selection = Selection::new();
    selection.insert(id("1"));
    selection.insert(id("2"));
    assert_eq!(selection.clear(), 2);
    assert!(selection.is_empty());
    assert!(!selection.contains(&id("1")));
}

#[test]
fn retain_prunes_and_keeps_order() {
    let mut selection = Selection::new();
    for raw in ["1", "2", "3", "4"] {
        selection.insert(id(raw));
    }
    let removed = selection.retain(|id| id.as_str() != "2" && id.as_str() != "4");
    assert_eq!(removed, 2);
    assert_eq!(selected(&selection), vec!["1", "3"]);
    assert!(!selection.contains(&id("2")));
}

// ===== toggle_all tests =====

#[test]
fn toggle_all_selects_every_filtered_id() {
    let filtered = ids(&["1", "2", "3"]);
    let mut selection = Selection::new();

    let outcome = toggle_all(&mut selection, &refs(&filtered));

    assert_eq!(outcome, ToggleAllOutcome::Selected(3));
    assert_eq!(selected(&selection), vec!["1", "2", "3"]);
}

#[test]
fn toggle_all_completes_partial_selection() {
    let filtered = ids(&["1", "2", "3"]);
    let mut selection = Selection::new();
    selection.insert(id("2"));

    let outcome = toggle_all(&mut selection, &refs(&filtered));

    assert_eq!(outcome, ToggleAllOutcome::Selected(2));
    assert_eq!(selection.len(), 3);
}

#[test]
fn toggle_all_deselects_when_all_filtered_selected() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("1"));
    selection.insert(id("2"));

    let outcome = toggle_all(&mut selection, &refs(&filtered));

    assert_eq!(outcome, ToggleAllOutcome::Deselected(2));
    assert!(selection.is_empty());
}

#[test]
fn toggle_all_leaves_ids_outside_filter_untouched() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("9"));
    selection.insert(id("1"));
    selection.insert(id("2"));

    toggle_all(&mut selection, &refs(&filtered));

    assert_eq!(selected(&selection), vec!["9"]);
}

#[test]
fn toggle_all_on_empty_filter_is_noop() {
    let mut selection = Selection::new();
    selection.insert(id("1"));

    let outcome = toggle_all(&mut selection, &[]);

    assert_eq!(outcome, ToggleAllOutcome::Unchanged);
    assert_eq!(selected(&selection), vec!["1"]);
}

#[test]
fn toggle_all_twice_restores_fully_selected_filter() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("1"));
    selection.insert(id("2"));
    selection.insert(id("5"));

    toggle_all(&mut selection, &refs(&filtered));
    toggle_all(&mut selection, &refs(&filtered));

    assert_eq!(selection.len(), 3);
    for raw in ["1", "2", "5"] {
        assert!(selection.contains(&id(raw)));
    }
}

// ===== select_all_indicator tests =====

#[test]
fn indicator_true_when_selection_equals_filter() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("2"));
    selection.insert(id("1"));
    assert!(select_all_indicator(&selection, &refs(&filtered)));
}

#[test]
fn indicator_false_when_partially_selected() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("1"));
    assert!(!select_all_indicator(&selection, &refs(&filtered)));
}

#[test]
fn indicator_false_with_matching_count_but_stale_ids() {
    // Same size as the filter, but one id is outside it
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    selection.insert(id("1"));
    selection.insert(id("9"));
    assert!(!select_all_indicator(&selection, &refs(&filtered)));
}

#[test]
fn indicator_false_when_extra_ids_selected_outside_filter() {
    let filtered = ids(&["1", "2"]);
    let mut selection = Selection::new();
    for raw in ["1", "2", "9"] {
        selection.insert(id(raw));
    }
    assert!(!select_all_indicator(&selection, &refs(&filtered)));
}

#[test]
fn indicator_false_for_empty_filter_even_with_empty_selection() {
    let selection = Selection::new();
    assert!(!select_all_indicator(&selection, &[]));
}

#[test]
fn unknown_record_display() {
    assert_eq!(
        UnknownRecord(id("42")).to_string(),
        "Record 42 is not in the roster"
    );
}
