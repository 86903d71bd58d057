//! Widget model: stable ids, widget kinds, property keys, and the property bag.
//!
//! A `WidgetModel` is the view-independent state of one placed widget. Its
//! geometry lives in dedicated fields so the alignment math never has to
//! probe for absent values; kind-specific attributes live in a small map that
//! is fully populated at construction. The set of keys a model answers to is
//! fixed by its `WidgetKind` and never changes afterwards.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_LISTBOX_SIZE, DEFAULT_SLIDER_MAX, DEFAULT_WIDGET_SIZE};
use crate::error::CommandError;

// =============================================================================
// IDS AND KINDS
// =============================================================================

/// Stable handle for a widget owned by a [`crate::page::Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Allocate a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The type of a placed widget. Determines which properties it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Plain filled box.
    Box,
    /// Push button with a label.
    Button,
    /// Static text label.
    Text,
    /// Checkbox or radio button.
    Checkbox,
    /// Scrollable list of items.
    ListBox,
    /// Horizontal or vertical slider.
    Slider,
}

impl WidgetKind {
    /// Kind-specific keys beyond the common geometry and `Enabled`.
    #[must_use]
    pub fn extra_keys(self) -> &'static [PropertyKey] {
        match self {
            Self::Box => &[],
            Self::Button | Self::Text => &[PropertyKey::Text],
            Self::Checkbox => &[PropertyKey::Checked],
            Self::ListBox => &[PropertyKey::SelectedIndex],
            Self::Slider => &[PropertyKey::Value, PropertyKey::Min, PropertyKey::Max],
        }
    }

    /// Whether a model of this kind carries `key`.
    #[must_use]
    pub fn has_key(self, key: PropertyKey) -> bool {
        key.is_common() || self.extra_keys().contains(&key)
    }

    /// Default `(width, height)` for a freshly placed widget of this kind.
    #[must_use]
    pub fn default_size(self) -> (i32, i32) {
        match self {
            Self::ListBox => DEFAULT_LISTBOX_SIZE,
            _ => DEFAULT_WIDGET_SIZE,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Button => "button",
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::ListBox => "listbox",
            Self::Slider => "slider",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Property keys understood by widget models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    X,
    Y,
    Width,
    Height,
    Enabled,
    Text,
    Checked,
    SelectedIndex,
    Value,
    Min,
    Max,
}

impl PropertyKey {
    /// Keys every widget kind carries.
    pub const COMMON: [Self; 5] = [Self::X, Self::Y, Self::Width, Self::Height, Self::Enabled];

    #[must_use]
    pub fn is_common(self) -> bool {
        Self::COMMON.contains(&self)
    }

    /// The value type stored under this key.
    #[must_use]
    pub fn value_type(self) -> ValueType {
        match self {
            Self::Enabled | Self::Checked => ValueType::Bool,
            Self::Text => ValueType::Text,
            Self::X | Self::Y | Self::Width | Self::Height | Self::SelectedIndex | Self::Value | Self::Min | Self::Max => {
                ValueType::Int
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Enabled => "enabled",
            Self::Text => "text",
            Self::Checked => "checked",
            Self::SelectedIndex => "selected_index",
            Self::Value => "value",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag for a [`PropertyValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Bool,
    Text,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "integer",
            Self::Bool => "boolean",
            Self::Text => "text",
        })
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i32),
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::Bool(_) => ValueType::Bool,
            Self::Text(_) => ValueType::Text,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn default_for(key: PropertyKey) -> Self {
        match key {
            PropertyKey::Enabled => Self::Bool(true),
            PropertyKey::Checked => Self::Bool(false),
            PropertyKey::Text => Self::Text(String::new()),
            PropertyKey::SelectedIndex => Self::Int(-1),
            PropertyKey::Max => Self::Int(DEFAULT_SLIDER_MAX),
            _ => Self::Int(0),
        }
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => v.fmt(f),
            Self::Bool(v) => v.fmt(f),
            Self::Text(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// WIDGET MODEL
// =============================================================================

/// Property bag for one placed widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetModel {
    id: WidgetId,
    kind: WidgetKind,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    enabled: bool,
    extras: BTreeMap<PropertyKey, PropertyValue>,
}

impl WidgetModel {
    /// Create a model at `(x, y)` with the kind's default size and defaults for every extra key.
    #[must_use]
    pub fn new(kind: WidgetKind, x: i32, y: i32) -> Self {
        let (width, height) = kind.default_size();
        Self::with_bounds(kind, x, y, width, height)
    }

    /// Create a model with explicit bounds.
    #[must_use]
    pub fn with_bounds(kind: WidgetKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        let extras = kind
            .extra_keys()
            .iter()
            .map(|&key| (key, PropertyValue::default_for(key)))
            .collect();
        Self { id: WidgetId::new(), kind, x, y, width, height, enabled: true, extras }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Right edge, `x + width`.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, `y + height`.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Every key this model answers to, common keys first.
    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        PropertyKey::COMMON.into_iter().chain(self.extras.keys().copied())
    }

    /// Read a property. `None` only when the kind does not carry `key`.
    #[must_use]
    pub fn value(&self, key: PropertyKey) -> Option<PropertyValue> {
        match key {
            PropertyKey::X => Some(PropertyValue::Int(self.x)),
            PropertyKey::Y => Some(PropertyValue::Int(self.y)),
            PropertyKey::Width => Some(PropertyValue::Int(self.width)),
            PropertyKey::Height => Some(PropertyValue::Int(self.height)),
            PropertyKey::Enabled => Some(PropertyValue::Bool(self.enabled)),
            _ => self.extras.get(&key).cloned(),
        }
    }

    /// Read an integer property. `None` if absent or not an integer.
    #[must_use]
    pub fn int(&self, key: PropertyKey) -> Option<i32> {
        self.value(key).and_then(|v| v.as_int())
    }

    /// Check that `value` may be stored under `key` without writing it.
    ///
    /// # Errors
    ///
    /// `UnknownProperty` if the kind lacks `key`, `TypeMismatch` if the value
    /// type differs from the key's type.
    pub fn check_value(&self, key: PropertyKey, value: &PropertyValue) -> Result<(), CommandError> {
        if !self.kind.has_key(key) {
            return Err(CommandError::UnknownProperty { kind: self.kind, key });
        }
        if value.value_type() != key.value_type() {
            return Err(CommandError::TypeMismatch { key, expected: key.value_type() });
        }
        Ok(())
    }

    /// Write a property, returning the previous value.
    ///
    /// # Errors
    ///
    /// Same as [`Self::check_value`]; the model is untouched on error.
    pub fn set_value(&mut self, key: PropertyKey, value: PropertyValue) -> Result<PropertyValue, CommandError> {
        self.check_value(key, &value)?;
        let previous = match (key, value) {
            (PropertyKey::X, PropertyValue::Int(v)) => PropertyValue::Int(std::mem::replace(&mut self.x, v)),
            (PropertyKey::Y, PropertyValue::Int(v)) => PropertyValue::Int(std::mem::replace(&mut self.y, v)),
            (PropertyKey::Width, PropertyValue::Int(v)) => PropertyValue::Int(std::mem::replace(&mut self.width, v)),
            (PropertyKey::Height, PropertyValue::Int(v)) => {
                PropertyValue::Int(std::mem::replace(&mut self.height, v))
            }
            (PropertyKey::Enabled, PropertyValue::Bool(v)) => {
                PropertyValue::Bool(std::mem::replace(&mut self.enabled, v))
            }
            (key, value) => match self.extras.insert(key, value) {
                Some(previous) => previous,
                None => return Err(CommandError::UnknownProperty { kind: self.kind, key }),
            },
        };
        Ok(previous)
    }
}
