//! Direct edits: dragging the selection and changing one property.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::command::{Command, unique_selection};
use crate::error::CommandError;
use crate::memento::Memento;
use crate::model::{PropertyKey, PropertyValue, WidgetId};
use crate::page::Page;

/// Translates every selected widget by a fixed offset.
#[derive(Debug, Clone)]
pub struct MoveCommand {
    group: Vec<WidgetId>,
    dx: i32,
    dy: i32,
    memento: Memento,
}

impl MoveCommand {
    /// # Errors
    ///
    /// `EmptySelection` or `WidgetNotFound`.
    pub fn prepare(page: &Page, selection: &[WidgetId], dx: i32, dy: i32) -> Result<Self, CommandError> {
        let group = unique_selection(selection, 1)?;
        page.ensure_all(&group)?;
        let memento = Memento::capture(page, &group, &[PropertyKey::X, PropertyKey::Y])?;
        Ok(Self { group, dx, dy, memento })
    }

    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

impl Command for MoveCommand {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        page.ensure_all(&self.group)?;
        for id in &self.group {
            // Always offset from the captured origin so redo never compounds.
            let (x, y) = match (self.memento.value_of(id, PropertyKey::X), self.memento.value_of(id, PropertyKey::Y)) {
                (Some(PropertyValue::Int(x)), Some(PropertyValue::Int(y))) => (*x, *y),
                _ => return Err(CommandError::WidgetNotFound(*id)),
            };
            page.change_value(id, PropertyKey::X, PropertyValue::Int(x.saturating_add(self.dx)))?;
            page.change_value(id, PropertyKey::Y, PropertyValue::Int(y.saturating_add(self.dy)))?;
        }
        Ok(())
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.memento.restore(page)
    }

    fn describe(&self) -> String {
        format!("Move {} widget(s) by ({}, {})", self.group.len(), self.dx, self.dy)
    }
}

/// Sets one property of one widget, as edited in the property inspector.
#[derive(Debug, Clone)]
pub struct PropertyCommand {
    id: WidgetId,
    key: PropertyKey,
    value: PropertyValue,
    memento: Memento,
}

impl PropertyCommand {
    /// Validate the key and value type against the widget's kind.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound`, `UnknownProperty`, or `TypeMismatch`.
    pub fn prepare(page: &Page, id: WidgetId, key: PropertyKey, value: PropertyValue) -> Result<Self, CommandError> {
        page.model(&id)?.check_value(key, &value)?;
        let memento = Memento::capture(page, &[id], &[key])?;
        Ok(Self { id, key, value, memento })
    }
}

impl Command for PropertyCommand {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        page.change_value(&self.id, self.key, self.value.clone())
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.memento.restore(page)
    }

    fn describe(&self) -> String {
        format!("Set {}: {}", self.key, self.value)
    }
}
