use super::*;
use crate::page::test_helpers::*;
use crate::selection::SelectionProvider;

// =============================================================
// unique_selection
// =============================================================

#[test]
fn minimum_two_rejects_zero_and_one() {
    let one = [WidgetId::new()];
    assert_eq!(unique_selection(&[], 2), Err(CommandError::InsufficientSelection { selected: 0 }));
    assert_eq!(unique_selection(&one, 2), Err(CommandError::InsufficientSelection { selected: 1 }));
}

#[test]
fn minimum_one_reports_empty_selection() {
    assert_eq!(unique_selection(&[], 1), Err(CommandError::EmptySelection));
    assert!(unique_selection(&[WidgetId::new()], 1).is_ok());
}

#[test]
fn repeated_handle_counts_once() {
    let a = WidgetId::new();
    assert_eq!(unique_selection(&[a, a], 2), Err(CommandError::InsufficientSelection { selected: 1 }));
}

#[test]
fn repeats_dropped_in_first_seen_order() {
    let (a, b, c) = (WidgetId::new(), WidgetId::new(), WidgetId::new());
    assert_eq!(unique_selection(&[b, a, b, c, a], 2), Ok(vec![b, a, c]));
}

// =============================================================
// sorted_group
// =============================================================

#[test]
fn sorted_group_orders_by_axis_not_selection() {
    let (page, ids) = page_with_row(&[(10, 20), (50, 30), (5, 15)]);
    let group = sorted_group(&page, &ids, PropertyKey::X).unwrap();
    assert_eq!(group, vec![ids[2], ids[0], ids[1]]);
}

#[test]
fn sorted_group_is_stable_for_ties() {
    let (page, ids) = page_with_row(&[(10, 5), (10, 6), (0, 7), (10, 8)]);
    let group = sorted_group(&page, &ids, PropertyKey::X).unwrap();
    assert_eq!(group, vec![ids[2], ids[0], ids[1], ids[3]]);
}

#[test]
fn sorted_group_leaves_selection_untouched() {
    let (page, ids) = page_with_row(&[(30, 1), (20, 1), (10, 1)]);
    let before = page.selected_list();
    sorted_group(&page, &before, PropertyKey::X).unwrap();
    assert_eq!(page.selected_list(), ids);
}

#[test]
fn sorted_group_rejects_stale_handle() {
    let (page, ids) = page_with_row(&[(30, 1)]);
    let ghost = WidgetId::new();
    assert_eq!(sorted_group(&page, &[ids[0], ghost], PropertyKey::X), Err(CommandError::WidgetNotFound(ghost)));
}

#[test]
fn sorted_group_rejects_non_integer_key() {
    let (page, ids) = page_with_row(&[(30, 1), (0, 1)]);
    assert!(matches!(sorted_group(&page, &ids, PropertyKey::Enabled), Err(CommandError::TypeMismatch { .. })));
}
