//! Memento: captured prior property values for exact undo.
//!
//! DESIGN
//! ======
//! A memento is built once, before its command mutates anything, and is never
//! modified afterwards. It owns values only; the models stay in the page.
//! Restoring writes every recorded `(widget, key, value)` triple back. The
//! triples are independent, so order does not matter and restoring twice
//! leaves the page exactly as restoring once did.

#[cfg(test)]
#[path = "memento_test.rs"]
mod memento_test;

use crate::error::CommandError;
use crate::model::{PropertyKey, PropertyValue, WidgetId};
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: WidgetId,
    key: PropertyKey,
    value: PropertyValue,
}

/// Immutable snapshot of the properties a command is about to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    entries: Vec<Entry>,
}

impl Memento {
    /// Record the current value of every key in `keys` for every widget in `group`.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` for a stale handle, `UnknownProperty` if a widget lacks one of `keys`.
    pub fn capture(page: &Page, group: &[WidgetId], keys: &[PropertyKey]) -> Result<Self, CommandError> {
        let mut entries = Vec::with_capacity(group.len() * keys.len());
        for id in group {
            for &key in keys {
                let value = page.value(id, key)?;
                entries.push(Entry { id: *id, key, value });
            }
        }
        tracing::debug!(widgets = group.len(), values = entries.len(), "memento captured");
        Ok(Self { entries })
    }

    /// Write every captured value back onto the page.
    ///
    /// All handles are checked first so a stale handle leaves the page untouched.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound` if a captured widget has been removed from the page.
    pub fn restore(&self, page: &mut Page) -> Result<(), CommandError> {
        if let Some(missing) = self.entries.iter().find(|e| !page.contains(&e.id)) {
            return Err(CommandError::WidgetNotFound(missing.id));
        }
        for entry in &self.entries {
            page.change_value(&entry.id, entry.key, entry.value.clone())?;
        }
        Ok(())
    }

    /// The captured value of `key` on widget `id`, if it was recorded.
    #[must_use]
    pub fn value_of(&self, id: &WidgetId, key: PropertyKey) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|e| e.id == *id && e.key == key)
            .map(|e| &e.value)
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
