//! Error taxonomy for command preparation, execution, and configuration.
//!
//! DESIGN
//! ======
//! Every failure is local to a single command attempt. User-facing outcomes
//! (too few widgets selected, a cancelled prompt, text that is not a number)
//! are recoverable and leave the page and history untouched. The remaining
//! variants signal a broken invariant: a handle that no longer resolves, or a
//! property write that the widget kind does not support.

use crate::model::{PropertyKey, ValueType, WidgetId, WidgetKind};

/// Stable machine-readable code for an error, suitable for host UIs and logs.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

// =============================================================================
// COMMAND ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("at least two widgets must be selected (selected: {selected})")]
    InsufficientSelection { selected: usize },
    #[error("no widgets selected")]
    EmptySelection,
    #[error("operation cancelled")]
    Cancelled,
    #[error("input must be a number, got {input:?}")]
    InvalidParameter { input: String },
    #[error("widget not found: {0}")]
    WidgetNotFound(WidgetId),
    #[error("{kind} widgets have no {key} property")]
    UnknownProperty { kind: WidgetKind, key: PropertyKey },
    #[error("{key} expects a {expected} value")]
    TypeMismatch { key: PropertyKey, expected: ValueType },
}

impl CommandError {
    /// Whether the error is an ordinary user outcome rather than a broken invariant.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientSelection { .. } | Self::EmptySelection | Self::Cancelled | Self::InvalidParameter { .. }
        )
    }
}

impl ErrorCode for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientSelection { .. } => "E_INSUFFICIENT_SELECTION",
            Self::EmptySelection => "E_EMPTY_SELECTION",
            Self::Cancelled => "E_CANCELLED",
            Self::InvalidParameter { .. } => "E_INVALID_PARAMETER",
            Self::WidgetNotFound(_) => "E_WIDGET_NOT_FOUND",
            Self::UnknownProperty { .. } => "E_UNKNOWN_PROPERTY",
            Self::TypeMismatch { .. } => "E_TYPE_MISMATCH",
        }
    }
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_CONFIG_PARSE",
            Self::Zero { .. } => "E_CONFIG_ZERO",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
