//! Shared numeric constants and prompt strings for the layout core.

// ── Preferences ─────────────────────────────────────────────────

/// Default horizontal spacing offered by the spacing prompt, in pixels.
pub const DEFAULT_H_SPACING: i32 = 10;

/// Default vertical spacing offered by the spacing prompt, in pixels.
pub const DEFAULT_V_SPACING: i32 = 10;

/// Number of undoable commands kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// How many times a numeric prompt is shown before giving up on bad input.
pub const DEFAULT_PROMPT_ATTEMPTS: u32 = 3;

/// Undrained change notifications a page keeps; older ones are dropped first.
pub const MAX_PENDING_CHANGES: usize = 4096;

// ── Widget defaults ─────────────────────────────────────────────

/// `(width, height)` of a newly placed widget.
pub const DEFAULT_WIDGET_SIZE: (i32, i32) = (80, 40);

/// `(width, height)` of a newly placed list box.
pub const DEFAULT_LISTBOX_SIZE: (i32, i32) = (200, 100);

/// Upper bound of a newly placed slider.
pub const DEFAULT_SLIDER_MAX: i32 = 100;

// ── Prompt text ─────────────────────────────────────────────────

pub const SPACING_PROMPT_TITLE: &str = "Enter spacing";
pub const H_SPACING_PROMPT_MESSAGE: &str = "Enter horizontal spacing in pixels";
pub const V_SPACING_PROMPT_MESSAGE: &str = "Enter vertical spacing in pixels";
pub const INVALID_NUMBER_TITLE: &str = "Error!";
pub const INVALID_NUMBER_MESSAGE: &str = "Input must be number! You entered text. Please try again!";
