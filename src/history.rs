//! Undo/redo history: a bounded, linear stack of executed commands.
//!
//! DESIGN
//! ======
//! Two stacks. `submit` executes a prepared command, pushes it onto the undo
//! stack, and drops the redo tail, so history never branches. `undo` moves
//! the newest command to the redo stack after reverting it; `redo` executes it
//! again and moves it back. When the undo stack outgrows its capacity the
//! oldest command is evicted, and only inside `submit`.
//!
//! The saved point is tracked as an undo-stack depth. It becomes unreachable
//! (`None`) when the command it sits on is evicted or the redo tail that
//! contains it is dropped.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::command::Command;
use crate::consts::DEFAULT_HISTORY_CAPACITY;
use crate::error::CommandError;
use crate::page::Page;

pub struct History {
    undo_stack: VecDeque<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    capacity: usize,
    saved_at: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` undoable commands (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { undo_stack: VecDeque::new(), redo_stack: Vec::new(), capacity: capacity.max(1), saved_at: Some(0) }
    }

    /// Execute a prepared command and record it.
    ///
    /// # Errors
    ///
    /// Propagates the command's `execute` error; history is unchanged in that case.
    pub fn submit(&mut self, command: Box<dyn Command>, page: &mut Page) -> Result<(), CommandError> {
        if let Err(e) = command.execute(page) {
            tracing::error!(error = %e, command = %command.describe(), "command execute failed");
            return Err(e);
        }
        tracing::info!(command = %command.describe(), "command executed");

        if !self.redo_stack.is_empty() {
            if self.saved_at.is_some_and(|saved| saved > self.undo_stack.len()) {
                self.saved_at = None;
            }
            self.redo_stack.clear();
        }

        self.undo_stack.push_back(command);
        while self.undo_stack.len() > self.capacity {
            if let Some(evicted) = self.undo_stack.pop_front() {
                tracing::warn!(command = %evicted.describe(), capacity = self.capacity, "history full; evicted oldest");
            }
            self.saved_at = match self.saved_at {
                Some(0) | None => None,
                Some(saved) => Some(saved - 1),
            };
        }
        Ok(())
    }

    /// Revert the newest command. Returns `false` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates the command's `undo` error; the command stays on the undo stack.
    pub fn undo(&mut self, page: &mut Page) -> Result<bool, CommandError> {
        let Some(command) = self.undo_stack.pop_back() else {
            return Ok(false);
        };
        if let Err(e) = command.undo(page) {
            tracing::error!(error = %e, command = %command.describe(), "command undo failed");
            self.undo_stack.push_back(command);
            return Err(e);
        }
        tracing::info!(command = %command.describe(), "command undone");
        self.redo_stack.push(command);
        Ok(true)
    }

    /// Re-execute the most recently undone command. Returns `false` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Propagates the command's `execute` error; the command stays on the redo stack.
    pub fn redo(&mut self, page: &mut Page) -> Result<bool, CommandError> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = command.execute(page) {
            tracing::error!(error = %e, command = %command.describe(), "command redo failed");
            self.redo_stack.push(command);
            return Err(e);
        }
        tracing::info!(command = %command.describe(), "command redone");
        self.undo_stack.push_back(command);
        Ok(true)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Label of the command `undo` would revert.
    #[must_use]
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|c| c.describe())
    }

    /// Label of the command `redo` would re-apply.
    #[must_use]
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.describe())
    }

    /// Labels of every undoable command, oldest first.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.undo_stack.iter().map(|c| c.describe()).collect()
    }

    /// Record the current state as saved.
    pub fn mark_saved(&mut self) {
        self.saved_at = Some(self.undo_stack.len());
    }

    /// Whether the page differs from the last saved state.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.saved_at != Some(self.undo_stack.len())
    }

    /// Forget every command, keeping the modified flag as it is.
    pub fn clear(&mut self) {
        let modified = self.is_modified();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.saved_at = if modified { None } else { Some(0) };
    }
}
