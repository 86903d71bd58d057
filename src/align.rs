//! Alignment commands: spacing, edge and center alignment, and size equalization.
//!
//! DESIGN
//! ======
//! Every alignment command follows the same shape. `prepare` rejects
//! selections of fewer than two widgets, copies the selection into a group
//! sorted along the command's axis, fixes its parameters, and captures a
//! memento over exactly the properties it will write.
//!
//! Spacing is chained: the first widget in axis order is the anchor and keeps
//! its position, and each following widget is placed `spacing` pixels after
//! the already-moved widget before it. Edge, center, and size targets are
//! computed once from the original geometry, so `execute` is a pure
//! assignment and redo reproduces the same layout.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use std::fmt;

use crate::command::{Command, sorted_group, unique_selection};
use crate::config::Preferences;
use crate::consts::{H_SPACING_PROMPT_MESSAGE, SPACING_PROMPT_TITLE, V_SPACING_PROMPT_MESSAGE};
use crate::error::CommandError;
use crate::memento::Memento;
use crate::model::{PropertyKey, PropertyValue, WidgetId, WidgetModel};
use crate::page::Page;
use crate::prompt::{IntegerRequest, Prompt, prompt_for_integer_with_retry};
use crate::selection::SelectionProvider;

/// Alignment needs at least this many selected widgets.
const MIN_ALIGN_SELECTION: usize = 2;

// =============================================================================
// TYPES
// =============================================================================

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Coordinate along this axis: `X` or `Y`.
    #[must_use]
    pub fn position_key(self) -> PropertyKey {
        match self {
            Self::Horizontal => PropertyKey::X,
            Self::Vertical => PropertyKey::Y,
        }
    }

    /// Extent along this axis: `Width` or `Height`.
    #[must_use]
    pub fn extent_key(self) -> PropertyKey {
        match self {
            Self::Horizontal => PropertyKey::Width,
            Self::Vertical => PropertyKey::Height,
        }
    }

    fn position(self, model: &WidgetModel) -> i32 {
        match self {
            Self::Horizontal => model.x(),
            Self::Vertical => model.y(),
        }
    }

    fn extent(self, model: &WidgetModel) -> i32 {
        match self {
            Self::Horizontal => model.width(),
            Self::Vertical => model.height(),
        }
    }

    fn default_spacing(self, prefs: &dyn Preferences) -> i32 {
        match self {
            Self::Horizontal => prefs.default_h_spacing(),
            Self::Vertical => prefs.default_v_spacing(),
        }
    }

    fn prompt_message(self) -> &'static str {
        match self {
            Self::Horizontal => H_SPACING_PROMPT_MESSAGE,
            Self::Vertical => V_SPACING_PROMPT_MESSAGE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }
}

/// Edge or center line that [`EdgeAlignCommand`] lines widgets up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
    /// Horizontal center of the selection's bounding box.
    CenterHorizontal,
    /// Vertical center of the selection's bounding box.
    CenterVertical,
}

impl Edge {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::CenterHorizontal => Axis::Horizontal,
            Self::Top | Self::Bottom | Self::CenterVertical => Axis::Vertical,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::CenterHorizontal => "Center",
            Self::CenterVertical => "Vertical Center",
        }
    }
}

/// Which dimensions [`SizeCommand`] equalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
    Both,
}

impl Dimension {
    fn keys(self) -> &'static [PropertyKey] {
        match self {
            Self::Width => &[PropertyKey::Width],
            Self::Height => &[PropertyKey::Height],
            Self::Both => &[PropertyKey::Width, PropertyKey::Height],
        }
    }
}

/// Every alignment the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignKind {
    HorizontalSpacing,
    VerticalSpacing,
    Left,
    Right,
    Top,
    Bottom,
    CenterHorizontal,
    CenterVertical,
    EqualWidth,
    EqualHeight,
    EqualSize,
}

impl AlignKind {
    pub const ALL: [Self; 11] = [
        Self::HorizontalSpacing,
        Self::VerticalSpacing,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::CenterHorizontal,
        Self::CenterVertical,
        Self::EqualWidth,
        Self::EqualHeight,
        Self::EqualSize,
    ];

    /// Whether preparing this alignment asks the user for a number.
    #[must_use]
    pub fn needs_prompt(self) -> bool {
        matches!(self, Self::HorizontalSpacing | Self::VerticalSpacing)
    }
}

impl fmt::Display for AlignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HorizontalSpacing => "horizontal spacing",
            Self::VerticalSpacing => "vertical spacing",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterHorizontal => "center horizontal",
            Self::CenterVertical => "center vertical",
            Self::EqualWidth => "equal width",
            Self::EqualHeight => "equal height",
            Self::EqualSize => "equal size",
        })
    }
}

/// Prepare the alignment command `kind` for the provider's current selection.
///
/// # Errors
///
/// `InsufficientSelection` for fewer than two widgets, `Cancelled` or
/// `InvalidParameter` from the spacing prompt, `WidgetNotFound` if the
/// provider hands out a handle the page does not own.
pub fn prepare_align(
    kind: AlignKind,
    page: &Page,
    selection: &dyn SelectionProvider,
    prompt: &mut dyn Prompt,
    prefs: &dyn Preferences,
) -> Result<Box<dyn Command>, CommandError> {
    let selected = unique_selection(&selection.selected_list(), MIN_ALIGN_SELECTION)?;
    let command: Box<dyn Command> = match kind {
        AlignKind::HorizontalSpacing => {
            Box::new(SpacingCommand::prepare(Axis::Horizontal, page, &selected, prompt, prefs)?)
        }
        AlignKind::VerticalSpacing => Box::new(SpacingCommand::prepare(Axis::Vertical, page, &selected, prompt, prefs)?),
        AlignKind::Left => Box::new(EdgeAlignCommand::prepare(Edge::Left, page, &selected)?),
        AlignKind::Right => Box::new(EdgeAlignCommand::prepare(Edge::Right, page, &selected)?),
        AlignKind::Top => Box::new(EdgeAlignCommand::prepare(Edge::Top, page, &selected)?),
        AlignKind::Bottom => Box::new(EdgeAlignCommand::prepare(Edge::Bottom, page, &selected)?),
        AlignKind::CenterHorizontal => Box::new(EdgeAlignCommand::prepare(Edge::CenterHorizontal, page, &selected)?),
        AlignKind::CenterVertical => Box::new(EdgeAlignCommand::prepare(Edge::CenterVertical, page, &selected)?),
        AlignKind::EqualWidth => Box::new(SizeCommand::prepare(Dimension::Width, page, &selected)?),
        AlignKind::EqualHeight => Box::new(SizeCommand::prepare(Dimension::Height, page, &selected)?),
        AlignKind::EqualSize => Box::new(SizeCommand::prepare(Dimension::Both, page, &selected)?),
    };
    tracing::debug!(?kind, widgets = selected.len(), command = %command.describe(), "alignment prepared");
    Ok(command)
}

// =============================================================================
// SPACING
// =============================================================================

/// Lays widgets out along an axis with a uniform gap between neighbours.
#[derive(Debug, Clone)]
pub struct SpacingCommand {
    axis: Axis,
    group: Vec<WidgetId>,
    spacing: i32,
    memento: Memento,
}

impl SpacingCommand {
    /// Validate the selection, then ask the user for the spacing.
    ///
    /// The selection is checked before prompting, so a single widget never
    /// triggers the dialog.
    ///
    /// # Errors
    ///
    /// `InsufficientSelection`, `Cancelled`, `InvalidParameter`, or `WidgetNotFound`.
    pub fn prepare(
        axis: Axis,
        page: &Page,
        selection: &[WidgetId],
        prompt: &mut dyn Prompt,
        prefs: &dyn Preferences,
    ) -> Result<Self, CommandError> {
        let selection = unique_selection(selection, MIN_ALIGN_SELECTION)?;
        page.ensure_all(&selection)?;
        let request = IntegerRequest {
            title: SPACING_PROMPT_TITLE,
            message: axis.prompt_message(),
            default: axis.default_spacing(prefs),
        };
        let spacing = prompt_for_integer_with_retry(prompt, request, prefs.prompt_attempts())?;
        Self::with_spacing(axis, page, &selection, spacing)
    }

    /// Prepare with a spacing already known. Negative spacing overlaps neighbours.
    ///
    /// # Errors
    ///
    /// `InsufficientSelection` or `WidgetNotFound`.
    pub fn with_spacing(axis: Axis, page: &Page, selection: &[WidgetId], spacing: i32) -> Result<Self, CommandError> {
        let selection = unique_selection(selection, MIN_ALIGN_SELECTION)?;
        let group = sorted_group(page, &selection, axis.position_key())?;
        let memento = Memento::capture(page, &group, &[axis.position_key()])?;
        Ok(Self { axis, group, spacing, memento })
    }

    /// Widgets in axis order; the first is the anchor.
    #[must_use]
    pub fn group(&self) -> &[WidgetId] {
        &self.group
    }

    #[must_use]
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl Command for SpacingCommand {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        page.ensure_all(&self.group)?;
        // (position, extent) of the previous widget after it was placed.
        let mut previous: Option<(i32, i32)> = None;
        for id in &self.group {
            let model = page.model(id)?;
            let extent = self.axis.extent(model);
            let position = match previous {
                None => self.axis.position(model),
                Some((prev_pos, prev_extent)) => {
                    let position = prev_pos.saturating_add(prev_extent).saturating_add(self.spacing);
                    page.change_value(id, self.axis.position_key(), PropertyValue::Int(position))?;
                    position
                }
            };
            previous = Some((position, extent));
        }
        Ok(())
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.memento.restore(page)
    }

    fn describe(&self) -> String {
        format!("Align {} Spacing: {}", self.axis.label(), self.spacing)
    }
}

// =============================================================================
// EDGE AND CENTER
// =============================================================================

/// Moves every widget so one edge, or its center, lands on a shared line.
#[derive(Debug, Clone)]
pub struct EdgeAlignCommand {
    edge: Edge,
    group: Vec<WidgetId>,
    target: i32,
    memento: Memento,
}

impl EdgeAlignCommand {
    /// Compute the shared line from the original geometry and capture the memento.
    ///
    /// # Errors
    ///
    /// `InsufficientSelection` or `WidgetNotFound`.
    pub fn prepare(edge: Edge, page: &Page, selection: &[WidgetId]) -> Result<Self, CommandError> {
        let selection = unique_selection(selection, MIN_ALIGN_SELECTION)?;
        let axis = edge.axis();
        let group = sorted_group(page, &selection, axis.position_key())?;
        let mut models = Vec::with_capacity(group.len());
        for id in &group {
            models.push(page.model(id)?);
        }
        let target = edge_target(edge, &models);
        let memento = Memento::capture(page, &group, &[axis.position_key()])?;
        Ok(Self { edge, group, target, memento })
    }

    /// The shared edge or center coordinate.
    #[must_use]
    pub fn target(&self) -> i32 {
        self.target
    }

    #[must_use]
    pub fn group(&self) -> &[WidgetId] {
        &self.group
    }
}

fn edge_target(edge: Edge, models: &[&WidgetModel]) -> i32 {
    let min_of = |f: fn(&WidgetModel) -> i32| models.iter().map(|m| f(m)).min().unwrap_or(0);
    let max_of = |f: fn(&WidgetModel) -> i32| models.iter().map(|m| f(m)).max().unwrap_or(0);
    match edge {
        Edge::Left => min_of(WidgetModel::x),
        Edge::Right => max_of(WidgetModel::right),
        Edge::Top => min_of(WidgetModel::y),
        Edge::Bottom => max_of(WidgetModel::bottom),
        Edge::CenterHorizontal => midpoint(min_of(WidgetModel::x), max_of(WidgetModel::right)),
        Edge::CenterVertical => midpoint(min_of(WidgetModel::y), max_of(WidgetModel::bottom)),
    }
}

fn midpoint(low: i32, high: i32) -> i32 {
    let sum = i64::from(low) + i64::from(high);
    // Both inputs are i32, so the floored mean fits.
    i32::try_from(sum.div_euclid(2)).unwrap_or(low)
}

impl Command for EdgeAlignCommand {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        page.ensure_all(&self.group)?;
        let key = self.edge.axis().position_key();
        for id in &self.group {
            let model = page.model(id)?;
            let position = match self.edge {
                Edge::Left | Edge::Top => self.target,
                Edge::Right => self.target.saturating_sub(model.width()),
                Edge::Bottom => self.target.saturating_sub(model.height()),
                Edge::CenterHorizontal => self.target.saturating_sub(model.width().div_euclid(2)),
                Edge::CenterVertical => self.target.saturating_sub(model.height().div_euclid(2)),
            };
            page.change_value(id, key, PropertyValue::Int(position))?;
        }
        Ok(())
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.memento.restore(page)
    }

    fn describe(&self) -> String {
        format!("Align {}", self.edge.label())
    }
}

// =============================================================================
// SIZE
// =============================================================================

/// Gives every widget the width and/or height of the first-selected widget.
#[derive(Debug, Clone)]
pub struct SizeCommand {
    dimension: Dimension,
    group: Vec<WidgetId>,
    width: i32,
    height: i32,
    memento: Memento,
}

impl SizeCommand {
    /// Take the target size from the first widget in selection order.
    ///
    /// # Errors
    ///
    /// `InsufficientSelection` or `WidgetNotFound`.
    pub fn prepare(dimension: Dimension, page: &Page, selection: &[WidgetId]) -> Result<Self, CommandError> {
        let selection = unique_selection(selection, MIN_ALIGN_SELECTION)?;
        let Some(reference) = selection.first() else {
            return Err(CommandError::InsufficientSelection { selected: 0 });
        };
        let reference = page.model(reference)?;
        let (width, height) = (reference.width(), reference.height());
        let group = sorted_group(page, &selection, PropertyKey::X)?;
        let memento = Memento::capture(page, &group, dimension.keys())?;
        Ok(Self { dimension, group, width, height, memento })
    }

    /// Target `(width, height)`; only the equalized dimensions are applied.
    #[must_use]
    pub fn target(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl Command for SizeCommand {
    fn execute(&self, page: &mut Page) -> Result<(), CommandError> {
        page.ensure_all(&self.group)?;
        for id in &self.group {
            for &key in self.dimension.keys() {
                let value = if key == PropertyKey::Width { self.width } else { self.height };
                page.change_value(id, key, PropertyValue::Int(value))?;
            }
        }
        Ok(())
    }

    fn undo(&self, page: &mut Page) -> Result<(), CommandError> {
        self.memento.restore(page)
    }

    fn describe(&self) -> String {
        match self.dimension {
            Dimension::Width => format!("Equalize Width: {}", self.width),
            Dimension::Height => format!("Equalize Height: {}", self.height),
            Dimension::Both => format!("Equalize Size: {}x{}", self.width, self.height),
        }
    }
}
