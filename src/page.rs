//! Page: the arena that owns every widget model on one screen.
//!
//! Commands and mementos refer to widgets only through `WidgetId` handles and
//! resolve them here on every use, so a handle never dangles across undo and
//! redo cycles. Every property write that actually changes a value queues a
//! `ModelChange`; the view layer drains the queue with `take_changes` to know
//! what to redraw. Hosts are expected to drain after every edit. A host that
//! never drains loses the oldest notifications once `MAX_PENDING_CHANGES`
//! are pending, so the queue stays bounded.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PENDING_CHANGES;
use crate::error::CommandError;
use crate::model::{PropertyKey, PropertyValue, WidgetId, WidgetModel};
use crate::selection::{Selection, SelectionProvider};

/// Notification that one property of one widget changed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChange {
    pub id: WidgetId,
    pub key: PropertyKey,
    pub old: PropertyValue,
    pub new: PropertyValue,
}

/// Owns the widget models of one screen plus the current selection.
#[derive(Debug, Default)]
pub struct Page {
    widgets: HashMap<WidgetId, WidgetModel>,
    /// Placement order; also the draw order.
    order: Vec<WidgetId>,
    selection: Selection,
    changes: VecDeque<ModelChange>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Arena ---

    /// Place a widget on the page and return its handle. A model with the
    /// same id replaces the existing one in place.
    pub fn insert(&mut self, model: WidgetModel) -> WidgetId {
        let id = model.id();
        if self.widgets.insert(id, model).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove a widget, dropping it from the selection as well.
    pub fn remove(&mut self, id: &WidgetId) -> Option<WidgetModel> {
        let model = self.widgets.remove(id)?;
        self.order.retain(|placed| placed != id);
        self.selection.remove(id);
        Some(model)
    }

    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&WidgetModel> {
        self.widgets.get(id)
    }

    /// Resolve a handle or report it as missing.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if no model with `id` is on the page.
    pub fn model(&self, id: &WidgetId) -> Result<&WidgetModel, CommandError> {
        self.widgets.get(id).ok_or(CommandError::WidgetNotFound(*id))
    }

    #[must_use]
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Verify every handle in `ids` resolves.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` for the first handle that does not.
    pub fn ensure_all(&self, ids: &[WidgetId]) -> Result<(), CommandError> {
        match ids.iter().find(|id| !self.widgets.contains_key(id)) {
            Some(missing) => Err(CommandError::WidgetNotFound(*missing)),
            None => Ok(()),
        }
    }

    /// Widgets in placement order.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetModel> + '_ {
        self.order.iter().filter_map(|id| self.widgets.get(id))
    }

    /// Owned copy of every model in placement order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WidgetModel> {
        self.widgets().cloned().collect()
    }

    /// Replace every widget with `models`, clearing selection and pending changes.
    pub fn load_snapshot(&mut self, models: Vec<WidgetModel>) {
        self.widgets.clear();
        self.order.clear();
        self.selection.clear();
        self.changes.clear();
        for model in models {
            self.insert(model);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    // --- Properties ---

    /// Read one property of one widget.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` for an unknown handle, `UnknownProperty` if the kind lacks `key`.
    pub fn value(&self, id: &WidgetId, key: PropertyKey) -> Result<PropertyValue, CommandError> {
        let model = self.model(id)?;
        model.value(key).ok_or(CommandError::UnknownProperty { kind: model.kind(), key })
    }

    /// Write one property of one widget and notify observers if the value changed.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound`, `UnknownProperty`, or `TypeMismatch`; nothing changes on error.
    pub fn change_value(&mut self, id: &WidgetId, key: PropertyKey, value: PropertyValue) -> Result<(), CommandError> {
        let model = self.widgets.get_mut(id).ok_or(CommandError::WidgetNotFound(*id))?;
        let new = value.clone();
        let old = model.set_value(key, value)?;
        if old != new {
            if self.changes.len() == MAX_PENDING_CHANGES {
                self.changes.pop_front();
                tracing::warn!(limit = MAX_PENDING_CHANGES, "change queue full; dropped oldest notification");
            }
            self.changes.push_back(ModelChange { id: *id, key, old, new });
        }
        Ok(())
    }

    /// Drain pending change notifications in the order they happened.
    ///
    /// Call after every edit; at most `MAX_PENDING_CHANGES` are retained.
    pub fn take_changes(&mut self) -> Vec<ModelChange> {
        std::mem::take(&mut self.changes).into()
    }

    /// Number of notifications waiting to be drained.
    #[must_use]
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    // --- Selection ---

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Add a widget to the selection. Returns `false` for unknown or already-selected ids.
    pub fn select(&mut self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id) && self.selection.insert(id)
    }

    pub fn deselect(&mut self, id: &WidgetId) -> bool {
        self.selection.remove(id)
    }

    /// Replace the selection, skipping unknown and duplicate ids.
    pub fn select_only(&mut self, ids: &[WidgetId]) {
        self.selection.clear();
        for id in ids {
            self.select(*id);
        }
    }

    /// Select every widget in placement order.
    pub fn select_all(&mut self) {
        self.selection = self.order.iter().copied().collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

impl SelectionProvider for Page {
    fn selected_list(&self) -> Vec<WidgetId> {
        self.selection.selected_list()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::model::WidgetKind;

    /// Place boxes with the given `(x, width)` pairs on row `y = 0`, height 10,
    /// and select them in the order given.
    pub fn page_with_row(specs: &[(i32, i32)]) -> (Page, Vec<WidgetId>) {
        let mut page = Page::new();
        let ids: Vec<WidgetId> = specs
            .iter()
            .map(|&(x, w)| page.insert(WidgetModel::with_bounds(WidgetKind::Box, x, 0, w, 10)))
            .collect();
        page.select_only(&ids);
        (page, ids)
    }

    /// Place boxes with the given `(y, height)` pairs on column `x = 0`, width 10,
    /// and select them in the order given.
    pub fn page_with_column(specs: &[(i32, i32)]) -> (Page, Vec<WidgetId>) {
        let mut page = Page::new();
        let ids: Vec<WidgetId> = specs
            .iter()
            .map(|&(y, h)| page.insert(WidgetModel::with_bounds(WidgetKind::Box, 0, y, 10, h)))
            .collect();
        page.select_only(&ids);
        (page, ids)
    }

    /// Place boxes with full `(x, y, width, height)` bounds and select them in order.
    pub fn page_with_rects(rects: &[(i32, i32, i32, i32)]) -> (Page, Vec<WidgetId>) {
        let mut page = Page::new();
        let ids: Vec<WidgetId> = rects
            .iter()
            .map(|&(x, y, w, h)| page.insert(WidgetModel::with_bounds(WidgetKind::Box, x, y, w, h)))
            .collect();
        page.select_only(&ids);
        (page, ids)
    }

    /// X coordinate of each widget, in the order of `ids`.
    pub fn xs(page: &Page, ids: &[WidgetId]) -> Vec<i32> {
        ids.iter().map(|id| page.get(id).map_or(i32::MIN, WidgetModel::x)).collect()
    }

    /// Y coordinate of each widget, in the order of `ids`.
    pub fn ys(page: &Page, ids: &[WidgetId]) -> Vec<i32> {
        ids.iter().map(|id| page.get(id).map_or(i32::MIN, WidgetModel::y)).collect()
    }
}
