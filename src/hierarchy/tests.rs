//! Unit tests for the hierarchy list and drag-to-reorder.

use bevy::prelude::*;

use super::list::HierarchyList;
use super::reorder::{ReorderDrag, ReorderTarget, RowLocator, UniformRows};

const ROW_HEIGHT: f32 = 20.0;

fn list_of(names: &[&str]) -> HierarchyList {
    let mut list = HierarchyList::default();
    for name in names {
        list.add_item(*name);
    }
    list
}

fn rows_for(list: &HierarchyList) -> UniformRows {
    UniformRows {
        top: 100.0,
        row_height: ROW_HEIGHT,
        len: list.len(),
    }
}

/// Vertical center of a row.
fn row_y(index: usize) -> f32 {
    100.0 + index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
}

fn cursor_at(index: usize) -> Vec2 {
    Vec2::new(50.0, row_y(index))
}

// UniformRows tests
#[test]
fn test_row_at_hits_rows() {
    let rows = UniformRows {
        top: 0.0,
        row_height: 10.0,
        len: 3,
    };
    assert_eq!(rows.row_at(0.0), Some(0));
    assert_eq!(rows.row_at(15.0), Some(1));
    assert_eq!(rows.row_at(29.9), Some(2));
}

#[test]
fn test_row_at_misses_outside_rows() {
    let rows = UniformRows {
        top: 0.0,
        row_height: 10.0,
        len: 3,
    };
    assert_eq!(rows.row_at(-1.0), None);
    assert_eq!(rows.row_at(30.0), None);
}

#[test]
fn test_nearest_row_clamps() {
    let rows = UniformRows {
        top: 0.0,
        row_height: 10.0,
        len: 3,
    };
    assert_eq!(rows.nearest_row(-50.0), Some(0));
    assert_eq!(rows.nearest_row(500.0), Some(2));
    assert_eq!(rows.nearest_row(12.0), Some(1));
}

#[test]
fn test_empty_rows_resolve_nothing() {
    let rows = UniformRows {
        top: 0.0,
        row_height: 10.0,
        len: 0,
    };
    assert_eq!(rows.row_at(5.0), None);
    assert_eq!(rows.nearest_row(5.0), None);
}

// HierarchyList tests
#[test]
fn test_list_reorder_target() {
    let mut list = list_of(&["A", "B", "C"]);
    assert_eq!(list.row_label(1), Some("B".to_string()));
    assert_eq!(list.row_label(3), None);
    assert_eq!(list.remove_at(0), Some("A".to_string()));
    assert_eq!(list.remove_at(5), None);
    list.insert_at(99, "Z".to_string());
    assert_eq!(list.items(), ["B", "C", "Z"]);
}

#[test]
fn test_remove_selected() {
    let mut list = list_of(&["Camera", "Player", "Light"]);
    assert_eq!(list.remove_selected(), None);

    list.select(Some(1));
    assert_eq!(list.selected_item(), Some("Player"));
    assert_eq!(list.remove_selected(), Some("Player".to_string()));
    assert_eq!(list.items(), ["Camera", "Light"]);
    assert_eq!(list.selected(), None);
}

#[test]
fn test_select_out_of_range_clears() {
    let mut list = list_of(&["A"]);
    list.select(Some(0));
    list.select(Some(4));
    assert_eq!(list.selected(), None);
}

#[test]
fn test_selection_tracks_shifting_rows() {
    let mut list = list_of(&["A", "B", "C"]);
    list.select(Some(2));
    list.remove_at(0);
    assert_eq!(list.selected_item(), Some("C"));
    list.insert_at(0, "X".to_string());
    assert_eq!(list.selected_item(), Some("C"));
}

// ReorderDrag tests
#[test]
fn test_drop_moves_before_target_row() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    assert!(drag.begin(&rows, &list, row_y(0)));
    drag.drag_to(&rows, cursor_at(1));
    drag.drag_to(&rows, cursor_at(2));
    let outcome = drag.release(&rows, &mut list, row_y(2)).unwrap();

    assert_eq!(list.items(), ["B", "C", "A", "D"]);
    let reorder = outcome.reorder.unwrap();
    assert_eq!((reorder.from, reorder.to), (0, 2));
    assert_eq!(reorder.label, "A");
}

#[test]
fn test_drop_upward() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(3));
    drag.drag_to(&rows, cursor_at(1));
    drag.release(&rows, &mut list, row_y(1));

    assert_eq!(list.items(), ["A", "D", "B", "C"]);
}

#[test]
fn test_drop_on_last_row_moves_to_end() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(1));
    drag.drag_to(&rows, cursor_at(3));
    drag.release(&rows, &mut list, row_y(3));

    assert_eq!(list.items(), ["A", "C", "D", "B"]);
}

#[test]
fn test_drop_below_list_clamps_to_last_row() {
    let mut list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(0));
    drag.release(&rows, &mut list, 10_000.0);

    assert_eq!(list.items(), ["B", "C", "A"]);
}

#[test]
fn test_drop_on_source_leaves_order_unchanged() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(1));
    drag.drag_to(&rows, cursor_at(2));
    drag.drag_to(&rows, cursor_at(3));
    drag.drag_to(&rows, cursor_at(0));
    drag.drag_to(&rows, cursor_at(1));
    let outcome = drag.release(&rows, &mut list, row_y(1)).unwrap();

    assert!(outcome.reorder.is_none());
    assert_eq!(list.items(), ["A", "B", "C", "D"]);
    assert!(!drag.is_dragging());
    assert!(drag.ghost().is_none());
    assert_eq!(drag.highlighted(), None);
}

#[test]
fn test_release_without_begin_is_noop() {
    let mut list = list_of(&["A", "B"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    assert!(drag.release(&rows, &mut list, row_y(1)).is_none());
    assert_eq!(list.items(), ["A", "B"]);
}

#[test]
fn test_drag_to_without_begin_is_noop() {
    let list = list_of(&["A", "B"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.drag_to(&rows, cursor_at(1));
    assert!(drag.ghost().is_none());
    assert_eq!(drag.highlighted(), None);
}

#[test]
fn test_begin_on_empty_list_does_not_start() {
    let list = HierarchyList::default();
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    assert!(!drag.begin(&rows, &list, row_y(0)));
    assert!(!drag.is_dragging());
}

#[test]
fn test_begin_outside_rows_does_not_start() {
    let list = list_of(&["A", "B"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    assert!(!drag.begin(&rows, &list, row_y(5)));
    assert!(!drag.begin(&rows, &list, 0.0));
    assert!(!drag.is_dragging());
}

#[test]
fn test_second_begin_is_ignored() {
    let list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    assert!(drag.begin(&rows, &list, row_y(0)));
    assert!(!drag.begin(&rows, &list, row_y(2)));
    let session = drag.session().unwrap();
    assert_eq!(session.source_index, 0);
    assert_eq!(session.source_label, "A");
}

#[test]
fn test_highlight_follows_hover_but_skips_source() {
    let list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(1));
    drag.drag_to(&rows, cursor_at(1));
    assert_eq!(drag.highlighted(), None);

    drag.drag_to(&rows, cursor_at(2));
    assert_eq!(drag.highlighted(), Some(2));
    assert_eq!(drag.session().unwrap().hover_index, Some(2));

    drag.drag_to(&rows, cursor_at(0));
    assert_eq!(drag.highlighted(), Some(0));

    drag.drag_to(&rows, cursor_at(1));
    assert_eq!(drag.highlighted(), None);
}

#[test]
fn test_hover_clamps_past_list_edges() {
    let list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(1));
    drag.drag_to(&rows, Vec2::new(0.0, -300.0));
    assert_eq!(drag.highlighted(), Some(0));
    drag.drag_to(&rows, Vec2::new(0.0, 9_000.0));
    assert_eq!(drag.highlighted(), Some(2));
}

#[test]
fn test_ghost_created_lazily_and_follows_cursor() {
    let list = list_of(&["Camera", "Player"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(0));
    assert!(drag.ghost().is_none());

    drag.drag_to(&rows, Vec2::new(40.0, row_y(1)));
    let ghost = drag.ghost().unwrap();
    assert_eq!(ghost.label, "Camera");
    assert_eq!(ghost.position, Vec2::new(50.0, row_y(1) + 10.0));

    drag.drag_to(&rows, Vec2::new(70.0, 80.0));
    assert_eq!(drag.ghost().unwrap().position, Vec2::new(80.0, 90.0));
}

#[test]
fn test_custom_ghost_offset() {
    let list = list_of(&["A"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::with_ghost_offset(Vec2::new(-4.0, 2.0));

    drag.begin(&rows, &list, row_y(0));
    drag.drag_to(&rows, Vec2::new(10.0, 10.0));
    assert_eq!(drag.ghost().unwrap().position, Vec2::new(6.0, 12.0));
}

#[test]
fn test_ghost_released_exactly_once() {
    let mut list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(0));
    drag.drag_to(&rows, cursor_at(1));
    drag.drag_to(&rows, cursor_at(2));
    let outcome = drag.release(&rows, &mut list, row_y(2)).unwrap();
    assert!(outcome.ghost_released);
    assert!(drag.ghost().is_none());

    // A stray second release neither reorders nor releases again
    assert!(drag.release(&rows, &mut list, row_y(0)).is_none());
    assert_eq!(list.items(), ["B", "C", "A"]);
}

#[test]
fn test_release_without_moves_has_no_ghost() {
    let mut list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(0));
    let outcome = drag.release(&rows, &mut list, row_y(0)).unwrap();

    assert!(!outcome.ghost_released);
    assert!(outcome.reorder.is_none());
    assert!(!drag.is_dragging());
}

#[test]
fn test_sessions_are_independent() {
    let mut list = list_of(&["A", "B", "C"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    drag.begin(&rows, &list, row_y(2));
    drag.drag_to(&rows, cursor_at(0));
    drag.release(&rows, &mut list, row_y(0));
    assert_eq!(list.items(), ["C", "A", "B"]);

    assert!(drag.begin(&rows, &list, row_y(1)));
    assert_eq!(drag.session().unwrap().hover_index, None);
    assert!(drag.ghost().is_none());
    drag.drag_to(&rows, cursor_at(2));
    drag.release(&rows, &mut list, row_y(2));
    assert_eq!(list.items(), ["C", "B", "A"]);
}

#[test]
fn test_selection_can_follow_moved_row() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    let rows = rows_for(&list);
    let mut drag = ReorderDrag::default();

    list.select(Some(0));
    drag.begin(&rows, &list, row_y(0));
    let outcome = drag.release(&rows, &mut list, row_y(2)).unwrap();
    list.select(outcome.reorder.map(|r| r.to));

    assert_eq!(list.selected_item(), Some("A"));
}
