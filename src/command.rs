//! The undoable command contract and helpers shared by concrete commands.
//!
//! DESIGN
//! ======
//! A command is prepared by an associated constructor that validates the
//! selection, asks the user for any missing parameter, builds its working
//! group, and captures a memento. Only a successfully prepared command exists
//! as a value, so a cancelled or invalid attempt can never reach the history.
//!
//! `execute` is re-run for redo and therefore reads no interactive input:
//! every parameter is fixed at prepare time. `undo` restores the memento.
//! Both return `Result` only to report a broken invariant (a handle that no
//! longer resolves), never a user error.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use crate::error::CommandError;
use crate::model::{PropertyKey, WidgetId};
use crate::page::Page;
use crate::selection::Selection;

/// An undoable, redoable unit of user-initiated edit work.
pub trait Command {
    /// Apply the edit to the page.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if a widget the command was prepared against is gone.
    fn execute(&self, page: &mut Page) -> Result<(), CommandError>;

    /// Revert the edit from the captured memento.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if a widget the command was prepared against is gone.
    fn undo(&self, page: &mut Page) -> Result<(), CommandError>;

    /// Human-readable label for history menus.
    fn describe(&self) -> String;
}

/// Copy an externally supplied selection, keeping the first occurrence of
/// each handle, and reject it if fewer than `min` distinct widgets remain.
///
/// # Errors
///
/// `EmptySelection` when `min` is 1 and nothing is selected, otherwise
/// `InsufficientSelection` with the distinct count.
pub fn unique_selection(selection: &[WidgetId], min: usize) -> Result<Vec<WidgetId>, CommandError> {
    let unique = selection.iter().copied().collect::<Selection>().into_ids();
    if unique.len() >= min {
        return Ok(unique);
    }
    if min <= 1 {
        Err(CommandError::EmptySelection)
    } else {
        Err(CommandError::InsufficientSelection { selected: unique.len() })
    }
}

/// Copy `selection` into a group ordered by ascending integer `key`.
///
/// The sort is stable, so widgets sharing a coordinate keep selection order.
///
/// # Errors
///
/// `WidgetNotFound` for a stale handle, `UnknownProperty`/`TypeMismatch` if a
/// widget has no integer `key`.
pub fn sorted_group(page: &Page, selection: &[WidgetId], key: PropertyKey) -> Result<Vec<WidgetId>, CommandError> {
    let mut keyed = Vec::with_capacity(selection.len());
    for id in selection {
        let model = page.model(id)?;
        let value = model
            .int(key)
            .ok_or(CommandError::TypeMismatch { key, expected: key.value_type() })?;
        keyed.push((value, *id));
    }
    keyed.sort_by_key(|(value, _)| *value);
    Ok(keyed.into_iter().map(|(_, id)| id).collect())
}
