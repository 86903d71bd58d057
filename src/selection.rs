//! Ordered widget selection and the provider interface commands read it through.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::model::WidgetId;

/// Source of the currently selected widgets on the active page.
///
/// Implementations return a copy; commands never mutate the provider's sequence.
pub trait SelectionProvider {
    /// Selected widgets in selection order (not geometric order).
    fn selected_list(&self) -> Vec<WidgetId>;
}

/// Widgets in the order the user selected them. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<WidgetId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id`. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: WidgetId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`, preserving the order of the rest. Returns `false` if absent.
    pub fn remove(&mut self, id: &WidgetId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    /// Select `id` if absent, deselect it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: WidgetId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn ids(&self) -> &[WidgetId] {
        &self.ids
    }

    #[must_use]
    pub fn into_ids(self) -> Vec<WidgetId> {
        self.ids
    }

    /// The widget selected first, if any.
    #[must_use]
    pub fn first(&self) -> Option<WidgetId> {
        self.ids.first().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl SelectionProvider for Selection {
    fn selected_list(&self) -> Vec<WidgetId> {
        self.ids.clone()
    }
}

impl FromIterator<WidgetId> for Selection {
    fn from_iter<I: IntoIterator<Item = WidgetId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}
