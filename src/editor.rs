//! Editor facade: one page, its history, and the preferences commands read.
//!
//! The host UI owns an `Editor` and calls into it on discrete user actions.
//! Every entry point takes `&mut self`, so only one command is ever in flight.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::align::{AlignKind, prepare_align};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::edit::{MoveCommand, PropertyCommand};
use crate::error::CommandError;
use crate::history::History;
use crate::model::{PropertyKey, PropertyValue, WidgetId};
use crate::page::Page;
use crate::prompt::Prompt;

/// Result of a user action that may be abandoned at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and was recorded; carries its description.
    Applied(String),
    /// The user cancelled; nothing changed.
    Cancelled,
}

pub struct Editor {
    page: Page,
    history: History,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { page: Page::new(), history: History::new(config.history_capacity), config }
    }

    /// Start from an existing page, e.g. one the host just loaded.
    #[must_use]
    pub fn with_page(config: EditorConfig, page: Page) -> Self {
        Self { page, history: History::new(config.history_capacity), config }
    }

    // --- Accessors ---

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable page access for selection changes and widget placement.
    ///
    /// Property edits made here bypass the history.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // --- Commands ---

    /// Run an alignment over the current selection.
    ///
    /// # Errors
    ///
    /// `InsufficientSelection`, `InvalidParameter`, or `WidgetNotFound`; the
    /// page and history are unchanged in every error case.
    pub fn align(&mut self, kind: AlignKind, prompt: &mut dyn Prompt) -> Result<Outcome, CommandError> {
        match prepare_align(kind, &self.page, &self.page, prompt, &self.config) {
            Ok(command) => self.submit(command),
            Err(CommandError::Cancelled) => {
                tracing::debug!(%kind, "alignment cancelled");
                Ok(Outcome::Cancelled)
            }
            Err(e) => {
                tracing::info!(%kind, error = %e, "alignment rejected");
                Err(e)
            }
        }
    }

    /// Move the selected widgets by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// `EmptySelection` or `WidgetNotFound`.
    pub fn move_selection(&mut self, dx: i32, dy: i32) -> Result<Outcome, CommandError> {
        let command = MoveCommand::prepare(&self.page, self.page.selection().ids(), dx, dy)?;
        self.submit(Box::new(command))
    }

    /// Change one property of one widget through the history.
    ///
    /// # Errors
    ///
    /// `WidgetNotFound`, `UnknownProperty`, or `TypeMismatch`.
    pub fn set_property(&mut self, id: WidgetId, key: PropertyKey, value: PropertyValue) -> Result<Outcome, CommandError> {
        let command = PropertyCommand::prepare(&self.page, id, key, value)?;
        self.submit(Box::new(command))
    }

    /// Execute and record an externally prepared command.
    ///
    /// # Errors
    ///
    /// Propagates the command's `execute` error.
    pub fn submit(&mut self, command: Box<dyn Command>) -> Result<Outcome, CommandError> {
        let description = command.describe();
        self.history.submit(command, &mut self.page)?;
        Ok(Outcome::Applied(description))
    }

    /// # Errors
    ///
    /// Propagates a broken-invariant error from the command being undone.
    pub fn undo(&mut self) -> Result<bool, CommandError> {
        self.history.undo(&mut self.page)
    }

    /// # Errors
    ///
    /// Propagates a broken-invariant error from the command being redone.
    pub fn redo(&mut self) -> Result<bool, CommandError> {
        self.history.redo(&mut self.page)
    }
}
