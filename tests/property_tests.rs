//! Property-based tests for the filter, pagination and selection stages.
//!
//! Tests validate:
//! 1. Filtering yields an order-preserving subsequence of matching names
//! 2. Pages are bounded and concatenate back to the filtered list
//! 3. Toggling a record twice is an involution
//! 4. Toggling all twice restores the selection outside the filter
//! 5. The select-all indicator matches its definition

use proptest::prelude::*;
use rollcall::model::{Record, RecordId, Roster};
use rollcall::state::{
    filter, paginate, select_all_indicator, toggle_all, total_pages, PageNumber, PageSize,
    Selection, ViewState,
};
use std::collections::HashSet;

// ===== Strategies =====

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z ]{0,12}").unwrap()
}

fn roster_strategy() -> impl Strategy<Value = Roster> {
    prop::collection::vec(name_strategy(), 0..60).prop_map(|names| {
        let records = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                Record::new(
                    RecordId::new(format!("r{}", i)).unwrap(),
                    name,
                    format!("r{}@example.com", i),
                    "Course",
                )
            })
            .collect();
        Roster::new(records).unwrap()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{0,3}").unwrap()
}

fn id(i: usize) -> RecordId {
    RecordId::new(format!("r{}", i)).unwrap()
}

// ===== Property 1: Filter =====

proptest! {
    #[test]
    fn filter_is_ordered_subsequence_of_matches(roster in roster_strategy(), query in query_strategy()) {
        let filtered = filter(&roster, &query);
        let positions = filtered.positions();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "Roster order preserved");

        let query_lower = query.to_lowercase();
        let kept: HashSet<usize> = positions.iter().copied().collect();
        for (position, record) in roster.records().iter().enumerate() {
            let matches = record.name().to_lowercase().contains(&query_lower);
            prop_assert_eq!(kept.contains(&position), matches);
        }
    }

    #[test]
    fn empty_query_matches_everything(roster in roster_strategy()) {
        prop_assert_eq!(filter(&roster, "").len(), roster.len());
    }
}

// ===== Property 2: Pagination =====

proptest! {
    #[test]
    fn pages_are_bounded_and_concatenate(len in 0usize..200, rows in 1usize..25) {
        let items: Vec<usize> = (0..len).collect();
        let page_size = PageSize::new(rows).unwrap();
        let total = total_pages(len, page_size);
        prop_assert!(total >= 1);

        let mut joined = Vec::new();
        for page in 1..=total {
            let page = paginate(&items, page_size, PageNumber::new(page).unwrap());
            prop_assert!(page.items.len() <= rows);
            joined.extend_from_slice(page.items);
        }
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn out_of_range_page_request_is_rejected(roster in roster_strategy(), rows in 1usize..10, extra in 1usize..5) {
        let mut view = ViewState::new(roster, PageSize::new(rows).unwrap());
        let total = view.total_pages();

        prop_assert!(view.change_page(total + extra).is_err());
        prop_assert!(view.change_page(0).is_err());
        prop_assert_eq!(view.current_page(), PageNumber::FIRST);
    }
}

// ===== Property 3-5: Selection =====

proptest! {
    #[test]
    fn toggle_one_twice_is_involution(
        roster in roster_strategy(),
        preselect in prop::collection::vec(0usize..60, 0..10),
        pick in 0usize..60,
    ) {
        prop_assume!(!roster.is_empty());
        let mut view = ViewState::new(roster, PageSize::default());
        let len = view.roster().len();
        for i in preselect {
            let _ = view.toggle_one(&id(i % len));
        }
        let before = view.selection().clone();

        let target = id(pick % len);
        view.toggle_one(&target).unwrap();
        view.toggle_one(&target).unwrap();

        let before_set: HashSet<&RecordId> = before.iter().collect();
        let after_set: HashSet<&RecordId> = view.selection().iter().collect();
        prop_assert_eq!(before_set, after_set);
    }

    #[test]
    fn toggle_all_twice_restores_outside_filter(
        filtered in prop::collection::hash_set(0usize..30, 0..15),
        selected in prop::collection::hash_set(0usize..30, 0..15),
    ) {
        let filtered_ids: Vec<RecordId> = filtered.iter().map(|&i| id(i)).collect();
        let filtered_refs: Vec<&RecordId> = filtered_ids.iter().collect();
        let mut selection = Selection::new();
        for &i in &selected {
            selection.insert(id(i));
        }
        let all_selected = filtered.iter().all(|i| selected.contains(i));
        let none_selected = filtered.iter().all(|i| !selected.contains(i));
        let before: HashSet<RecordId> = selection.iter().cloned().collect();

        toggle_all(&mut selection, &filtered_refs);
        toggle_all(&mut selection, &filtered_refs);

        let after: HashSet<RecordId> = selection.iter().cloned().collect();
        let outside = |set: &HashSet<RecordId>| -> HashSet<RecordId> {
            set.iter().filter(|id| !filtered_ids.contains(id)).cloned().collect()
        };
        prop_assert_eq!(outside(&before), outside(&after));
        if all_selected || none_selected {
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn indicator_matches_definition(
        filtered in prop::collection::hash_set(0usize..20, 0..10),
        selected in prop::collection::hash_set(0usize..20, 0..10),
    ) {
        let filtered_ids: Vec<RecordId> = filtered.iter().map(|&i| id(i)).collect();
        let filtered_refs: Vec<&RecordId> = filtered_ids.iter().collect();
        let mut selection = Selection::new();
        for &i in &selected {
            selection.insert(id(i));
        }

        let expected = !filtered.is_empty() && filtered == selected;
        prop_assert_eq!(select_all_indicator(&selection, &filtered_refs), expected);
    }

    #[test]
    fn refiltering_never_changes_selection(
        roster in roster_strategy(),
        first in query_strategy(),
        second in query_strategy(),
    ) {
        let mut view = ViewState::new(roster, PageSize::default());
        view.set_search_text(first);
        view.toggle_all();
        let before = view.selection().clone();

        view.set_search_text(second);

        prop_assert_eq!(view.selection(), &before);
        prop_assert_eq!(view.current_page(), PageNumber::FIRST);
    }
}
