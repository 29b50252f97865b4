//! Controller configuration.
//!
//! Hosts that describe lists with string attributes (`sortable`,
//! `drag-handles`) go through [`SortableConfig::from_attributes`]; everything
//! else builds the struct directly.

use crate::error::{SortableError, SortableResult};
use std::str::FromStr;
use std::time::Duration;

/// Opacity of the item being dragged while the preview is shown.
pub const DEFAULT_LIFTED_OPACITY: f32 = 0.1;

/// Opacity of items outside the affected range.
pub const DEFAULT_SETTLED_OPACITY: f32 = 0.7;

/// Opacity of items sliding to make room for the dragged item.
pub const DEFAULT_SHIFTED_OPACITY: f32 = 1.0;

/// Duration of the preview slide.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(150);

/// Which element receives the native draggable capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragHandles {
    /// The whole item is the grab target.
    #[default]
    WholeItem,
    /// Every item must carry a caller-provided `.drag-handle` child.
    Required,
    /// The controller injects a handle into every item that lacks one.
    Create,
}

impl DragHandles {
    /// Parse an attribute value, falling back to [`DragHandles::WholeItem`].
    ///
    /// An absent attribute means whole-item dragging. Unrecognized values are
    /// logged and treated the same way.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None => DragHandles::WholeItem,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("{}, dragging whole items", err);
                DragHandles::WholeItem
            }),
        }
    }

    /// Whether the grab target is a handle rather than the item itself.
    pub fn uses_handles(&self) -> bool {
        !matches!(self, DragHandles::WholeItem)
    }
}

impl FromStr for DragHandles {
    type Err = SortableError;

    fn from_str(s: &str) -> SortableResult<Self> {
        match s.trim() {
            "false" => Ok(DragHandles::WholeItem),
            "true" => Ok(DragHandles::Required),
            "create" => Ok(DragHandles::Create),
            other => Err(SortableError::UnknownDragHandles(other.to_string())),
        }
    }
}

/// Drop effect advertised to the windowing system when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    Move,
    Copy,
    Link,
    None,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::Move => "move",
            DropEffect::Copy => "copy",
            DropEffect::Link => "link",
            DropEffect::None => "none",
        }
    }
}

impl FromStr for DropEffect {
    type Err = SortableError;

    fn from_str(s: &str) -> SortableResult<Self> {
        match s.trim() {
            "move" => Ok(DropEffect::Move),
            "copy" => Ok(DropEffect::Copy),
            "link" => Ok(DropEffect::Link),
            "none" => Ok(DropEffect::None),
            other => Err(SortableError::UnknownDropEffect(other.to_string())),
        }
    }
}

/// Visual parameters of the live preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStyle {
    /// Opacity of the dragged item.
    pub lifted_opacity: f32,
    /// Opacity of items the drag does not affect.
    pub settled_opacity: f32,
    /// Opacity of items shifting one slot.
    pub shifted_opacity: f32,
    /// How long preview translations take to settle.
    pub slide_duration: Duration,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            lifted_opacity: DEFAULT_LIFTED_OPACITY,
            settled_opacity: DEFAULT_SETTLED_OPACITY,
            shifted_opacity: DEFAULT_SHIFTED_OPACITY,
            slide_duration: DEFAULT_SLIDE_DURATION,
        }
    }
}

impl PreviewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dragged item's opacity.
    pub fn lifted_opacity(mut self, opacity: f32) -> Self {
        self.lifted_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the opacity of unaffected items.
    pub fn settled_opacity(mut self, opacity: f32) -> Self {
        self.settled_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the opacity of shifting items.
    pub fn shifted_opacity(mut self, opacity: f32) -> Self {
        self.shifted_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the slide duration. Zero disables the slide.
    pub fn slide_duration(mut self, duration: Duration) -> Self {
        self.slide_duration = duration;
        self
    }
}

/// Configuration for a [`SortableList`](crate::SortableList).
#[derive(Debug, Clone, PartialEq)]
pub struct SortableConfig {
    /// Whether the controller listens for gestures.
    pub sortable: bool,
    pub drag_handles: DragHandles,
    pub drop_effect: DropEffect,
    pub preview: PreviewStyle,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            sortable: true,
            drag_handles: DragHandles::default(),
            drop_effect: DropEffect::default(),
            preview: PreviewStyle::default(),
        }
    }
}

impl SortableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from attribute-style strings.
    ///
    /// `sortable` is on unless the value is exactly `"false"`. See
    /// [`DragHandles::from_attribute`] for `drag_handles`.
    pub fn from_attributes(sortable: Option<&str>, drag_handles: Option<&str>) -> Self {
        Self {
            sortable: parse_sortable(sortable),
            drag_handles: DragHandles::from_attribute(drag_handles),
            ..Self::default()
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn drag_handles(mut self, drag_handles: DragHandles) -> Self {
        self.drag_handles = drag_handles;
        self
    }

    pub fn drop_effect(mut self, drop_effect: DropEffect) -> Self {
        self.drop_effect = drop_effect;
        self
    }

    pub fn preview(mut self, preview: PreviewStyle) -> Self {
        self.preview = preview;
        self
    }
}

/// `sortable` attribute semantics: anything but `"false"` enables sorting.
pub fn parse_sortable(value: Option<&str>) -> bool {
    value.map(str::trim) != Some("false")
}
