use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::align::{Axis, SpacingCommand};
use crate::model::{PropertyKey, PropertyValue, WidgetId};
use crate::page::test_helpers::*;

// =============================================================
// Helpers
// =============================================================

/// Command that sets one widget's X and logs every call.
struct SetX {
    id: WidgetId,
    from: i32,
    to: i32,
    log: Rc<RefCell<Vec<String>>>,
}

impl Command for SetX {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        self.log.borrow_mut().push(format!("execute {}", self.to));
        page.change_value(&self.id, PropertyKey::X, PropertyValue::Int(self.to))
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.log.borrow_mut().push(format!("undo {}", self.to));
        page.change_value(&self.id, PropertyKey::X, PropertyValue::Int(self.from))
    }

    fn describe(&self) -> String {
        format!("x -> {}", self.to)
    }
}

struct Fixture {
    page: Page,
    id: WidgetId,
    log: Rc<RefCell<Vec<String>>>,
}

impl Fixture {
    fn new() -> Self {
        let (page, ids) = page_with_row(&[(0, 10)]);
        Self { page, id: ids[0], log: Rc::new(RefCell::new(Vec::new())) }
    }

    fn set_x(&self, from: i32, to: i32) -> Box<dyn Command> {
        Box::new(SetX { id: self.id, from, to, log: Rc::clone(&self.log) })
    }

    fn x(&self) -> i32 {
        xs(&self.page, &[self.id])[0]
    }
}

// =============================================================
// Submit / undo / redo
// =============================================================

#[test]
fn new_history_is_empty_and_unmodified() {
    let history = History::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.is_modified());
    assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn submit_executes_and_records() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 5), &mut f.page).unwrap();
    assert_eq!(f.x(), 5);
    assert_eq!(history.undo_len(), 1);
    assert_eq!(history.undo_description().as_deref(), Some("x -> 5"));
    assert_eq!(*f.log.borrow(), vec!["execute 5"]);
}

#[test]
fn undo_and_redo_move_between_stacks() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 5), &mut f.page).unwrap();
    history.submit(f.set_x(5, 9), &mut f.page).unwrap();

    assert!(history.undo(&mut f.page).unwrap());
    assert_eq!(f.x(), 5);
    assert_eq!((history.undo_len(), history.redo_len()), (1, 1));
    assert_eq!(history.redo_description().as_deref(), Some("x -> 9"));

    assert!(history.redo(&mut f.page).unwrap());
    assert_eq!(f.x(), 9);
    assert_eq!((history.undo_len(), history.redo_len()), (2, 0));
    assert_eq!(*f.log.borrow(), vec!["execute 5", "execute 9", "undo 9", "execute 9"]);
}

#[test]
fn undo_and_redo_on_empty_stacks_are_noops() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    assert!(!history.undo(&mut f.page).unwrap());
    assert!(!history.redo(&mut f.page).unwrap());
    assert!(f.log.borrow().is_empty());
}

#[test]
fn submit_after_undo_truncates_redo_tail() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    history.submit(f.set_x(1, 2), &mut f.page).unwrap();
    history.undo(&mut f.page).unwrap();
    history.submit(f.set_x(1, 3), &mut f.page).unwrap();

    assert!(!history.can_redo());
    assert_eq!(history.descriptions(), vec!["x -> 1", "x -> 3"]);
    assert!(!history.redo(&mut f.page).unwrap());
    assert_eq!(f.x(), 3);
}

#[test]
fn undo_all_then_redo_all() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    for to in 1..=4 {
        history.submit(f.set_x(to - 1, to), &mut f.page).unwrap();
    }
    while history.undo(&mut f.page).unwrap() {}
    assert_eq!(f.x(), 0);
    while history.redo(&mut f.page).unwrap() {}
    assert_eq!(f.x(), 4);
}

// =============================================================
// Capacity
// =============================================================

#[test]
fn capacity_evicts_oldest_on_submit() {
    let mut f = Fixture::new();
    let mut history = History::new(2);
    for to in 1..=3 {
        history.submit(f.set_x(to - 1, to), &mut f.page).unwrap();
    }
    assert_eq!(history.descriptions(), vec!["x -> 2", "x -> 3"]);
    history.undo(&mut f.page).unwrap();
    history.undo(&mut f.page).unwrap();
    assert!(!history.undo(&mut f.page).unwrap());
    assert_eq!(f.x(), 1);
}

#[test]
fn undo_and_redo_never_evict() {
    let mut f = Fixture::new();
    let mut history = History::new(2);
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    history.submit(f.set_x(1, 2), &mut f.page).unwrap();
    history.undo(&mut f.page).unwrap();
    history.undo(&mut f.page).unwrap();
    history.redo(&mut f.page).unwrap();
    history.redo(&mut f.page).unwrap();
    assert_eq!(history.undo_len(), 2);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    assert_eq!(History::new(0).capacity(), 1);
}

// =============================================================
// Failure handling
// =============================================================

#[test]
fn failed_execute_is_not_recorded() {
    let (mut page, ids) = page_with_row(&[(0, 10), (20, 10)]);
    let cmd = SpacingCommand::with_spacing(Axis::Horizontal, &page, &ids, 5).unwrap();
    page.remove(&ids[1]);
    let mut history = History::new(10);
    let err = history.submit(Box::new(cmd), &mut page).unwrap_err();
    assert_eq!(err, CommandError::WidgetNotFound(ids[1]));
    assert!(!history.can_undo());
}

#[test]
fn failed_undo_keeps_command_undoable() {
    let (mut page, ids) = page_with_row(&[(0, 10), (20, 10)]);
    let cmd = SpacingCommand::with_spacing(Axis::Horizontal, &page, &ids, 5).unwrap();
    let mut history = History::new(10);
    history.submit(Box::new(cmd), &mut page).unwrap();
    let removed = page.remove(&ids[0]).unwrap();

    assert!(history.undo(&mut page).is_err());
    assert_eq!((history.undo_len(), history.redo_len()), (1, 0));

    page.insert(removed);
    assert!(history.undo(&mut page).unwrap());
    assert_eq!(xs(&page, &ids), vec![0, 20]);
}

// =============================================================
// Saved point
// =============================================================

#[test]
fn modified_tracks_saved_depth() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    assert!(history.is_modified());
    history.mark_saved();
    assert!(!history.is_modified());
    history.undo(&mut f.page).unwrap();
    assert!(history.is_modified());
    history.redo(&mut f.page).unwrap();
    assert!(!history.is_modified());
}

#[test]
fn saved_point_lost_when_redo_tail_truncated() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    history.mark_saved();
    history.undo(&mut f.page).unwrap();
    history.submit(f.set_x(0, 2), &mut f.page).unwrap();
    assert!(history.is_modified());
    history.undo(&mut f.page).unwrap();
    assert!(history.is_modified());
}

#[test]
fn saved_point_lost_when_evicted() {
    let mut f = Fixture::new();
    let mut history = History::new(1);
    history.mark_saved();
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    history.submit(f.set_x(1, 2), &mut f.page).unwrap();
    history.undo(&mut f.page).unwrap();
    assert!(history.is_modified());
}

#[test]
fn clear_forgets_commands_but_keeps_modified_flag() {
    let mut f = Fixture::new();
    let mut history = History::new(10);
    history.submit(f.set_x(0, 1), &mut f.page).unwrap();
    history.clear();
    assert!(!history.can_undo());
    assert!(history.is_modified());
    history.mark_saved();
    history.clear();
    assert!(!history.is_modified());
}
