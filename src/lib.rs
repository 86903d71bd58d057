//! Undoable editing core for a visual screen layout editor.
//!
//! Users place widgets on a page, select several of them, and line them up.
//! This crate owns everything between the selection and the widget models:
//! preparing a command against the current selection, capturing the values it
//! will overwrite, applying a deterministic geometric transform, and reverting
//! it exactly on undo. Rendering, dialogs, and project files belong to the
//! host; it reaches the core through the [`selection::SelectionProvider`],
//! [`prompt::Prompt`], and [`config::Preferences`] traits and observes edits
//! through [`page::Page::take_changes`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Facade tying a page, its history, and preferences together |
//! | [`align`] | Spacing, edge, center, and size alignment commands |
//! | [`edit`] | Move and single-property commands |
//! | [`command`] | The `Command` trait and shared preparation helpers |
//! | [`memento`] | Captured prior values used for undo |
//! | [`history`] | Bounded linear undo/redo stacks |
//! | [`page`] | Arena of widget models, selection, change notifications |
//! | [`selection`] | Ordered selection and the provider trait |
//! | [`model`] | Widget ids, kinds, property keys and values |
//! | [`prompt`] | Numeric input prompting |
//! | [`config`] | Preferences and environment configuration |
//! | [`error`] | Error types and codes |
//! | [`consts`] | Shared defaults and prompt text |

pub mod align;
pub mod command;
pub mod config;
pub mod consts;
pub mod edit;
pub mod editor;
pub mod error;
pub mod history;
pub mod memento;
pub mod model;
pub mod page;
pub mod prompt;
pub mod selection;

pub use align::AlignKind;
pub use command::Command;
pub use config::{EditorConfig, Preferences};
pub use editor::{Editor, Outcome};
pub use error::{CommandError, ConfigError, ErrorCode};
pub use history::History;
pub use model::{PropertyKey, PropertyValue, WidgetId, WidgetKind, WidgetModel};
pub use page::{ModelChange, Page};
pub use prompt::Prompt;
pub use selection::{Selection, SelectionProvider};
