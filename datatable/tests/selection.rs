mod common;

use datatable::{Selection, SelectionMode};

use common::{User, users, view};

#[test]
fn test_single_select_is_exclusive() {
    let mut view = view(SelectionMode::Single);

    view.toggle_selection(1);
    view.toggle_selection(2);
    assert!(!view.has_selection(&1));
    assert!(view.has_selection(&2));
    assert_eq!(view.selected_keys(), vec![&2]);

    view.toggle_selection(2);
    assert!(view.selection().is_empty());
}

#[test]
fn test_single_select_toggle_returns_new_state() {
    let mut view = view(SelectionMode::Single);

    let selection = view.toggle_selection(3);
    assert!(matches!(selection, Selection::Single(Some(3))));
    let selection = view.toggle_selection(3);
    assert!(matches!(selection, Selection::Single(None)));
}

#[test]
fn test_multi_select_toggles_independently() {
    let mut view = view(SelectionMode::Multi);

    view.toggle_selection(1);
    view.toggle_selection(2);
    view.toggle_selection(1);

    assert!(!view.has_selection(&1));
    assert!(view.has_selection(&2));
    assert_eq!(view.selection().len(), 1);
}

#[test]
fn test_multi_select_iterates_in_selection_order() {
    let mut view = view(SelectionMode::Multi);

    for id in [3, 1, 2] {
        view.toggle_selection(id);
    }
    assert_eq!(view.selected_keys(), vec![&3, &1, &2]);

    view.toggle_selection(1);
    view.toggle_selection(1);
    assert_eq!(view.selected_keys(), vec![&3, &2, &1]);
}

#[test]
fn test_multi_select_keeps_order_through_heavy_churn() {
    let mut selection: Selection<u32> = Selection::for_mode(SelectionMode::Multi);

    for key in 0..1000 {
        selection.toggle(key);
    }
    // Drop every key but the multiples of 100, then re-add 150
    for key in (0..1000).filter(|key| key % 100 != 0) {
        selection.toggle(key);
    }
    selection.toggle(150);

    let expected: Vec<u32> = (0..1000).step_by(100).chain([150]).collect();
    assert_eq!(selection.keys().into_iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(selection.len(), expected.len());
    assert!(selection.is_selected(&900));
    assert!(!selection.is_selected(&901));

    selection.toggle(0);
    assert_eq!(selection.keys().first(), Some(&&100));
    assert_eq!(selection.clear().len(), expected.len() - 1);
    assert!(selection.is_empty());
}

#[test]
fn test_disabled_selection_stays_empty() {
    let mut view = view(SelectionMode::None);

    view.toggle_selection(1);
    view.toggle_selection(2);

    assert_eq!(view.selection_mode(), SelectionMode::None);
    assert!(!view.has_selection(&1));
    assert!(view.selection().is_empty());
    assert!(view.selected_keys().is_empty());
}

#[test]
fn test_unknown_ids_are_accepted() {
    let mut view = view(SelectionMode::Multi);

    view.toggle_selection(999);
    assert!(view.has_selection(&999));
}

#[test]
fn test_selection_survives_sorting_and_new_rows() {
    let mut view = view(SelectionMode::Multi);
    let records = users();

    view.toggle_selection(1);
    view.toggle_selection(3);
    view.activate_sort("age");
    let _ = view.derive_view(&records);

    // Row 1 disappears from the data; its id stays selected
    let replaced = vec![User::new(2, "Alice", 25), User::new(3, "Alice", 40)];
    let _ = view.derive_view(&replaced);
    assert!(view.has_selection(&1));
    assert!(view.has_selection(&3));
}

#[test]
fn test_prune_drops_only_absent_ids() {
    let mut view = view(SelectionMode::Multi);
    for id in [1, 2, 3] {
        view.toggle_selection(id);
    }

    let replaced = vec![User::new(2, "Alice", 25), User::new(4, "Dana", 18)];
    let removed = view.prune_selection(&replaced);

    assert_eq!(removed, vec![1, 3]);
    assert_eq!(view.selected_keys(), vec![&2]);
}

#[test]
fn test_prune_in_single_mode() {
    let mut view = view(SelectionMode::Single);
    view.toggle_selection(1);

    assert!(view.prune_selection(&users()).is_empty());
    assert!(view.has_selection(&1));

    assert_eq!(view.prune_selection(&[]), vec![1]);
    assert!(view.selection().is_empty());
}

#[test]
fn test_clear_selection_returns_removed_ids() {
    let mut view = view(SelectionMode::Multi);
    view.toggle_selection(2);
    view.toggle_selection(1);

    assert_eq!(view.clear_selection(), vec![2, 1]);
    assert!(view.selection().is_empty());
    assert!(view.clear_selection().is_empty());
}

#[test]
fn test_selection_for_mode() {
    let single: Selection<u32> = Selection::for_mode(SelectionMode::Single);
    let multi: Selection<u32> = Selection::for_mode(SelectionMode::Multi);
    let disabled: Selection<u32> = Selection::for_mode(SelectionMode::None);

    assert_eq!(single.mode(), SelectionMode::Single);
    assert_eq!(multi.mode(), SelectionMode::Multi);
    assert_eq!(disabled.mode(), SelectionMode::None);
}

#[test]
fn test_toggle_reports_changes() {
    let mut selection: Selection<&str> = Selection::for_mode(SelectionMode::Single);

    assert_eq!(selection.toggle("a"), (vec!["a"], vec![]));
    assert_eq!(selection.toggle("b"), (vec!["b"], vec!["a"]));
    assert_eq!(selection.toggle("b"), (vec![], vec!["b"]));

    let mut disabled: Selection<&str> = Selection::for_mode(SelectionMode::None);
    assert_eq!(disabled.toggle("a"), (vec![], vec![]));
}
