use crate::VisibleWindow;
use crate::WindowError;
use crate::window::{validate_item_height, window_for_valid_height};

/// A lightweight, serializable snapshot of the scroll container's viewport.
///
/// The host UI owns and mutates this on every scroll/resize event; the calculator only reads it.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Scroll position in pixels. May be transiently negative during overscroll.
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

impl ViewportState {
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// Computes the visible window for `item_count` items under `params`.
    pub fn window(&self, params: WindowParams, item_count: usize) -> VisibleWindow {
        params.window(*self, item_count)
    }
}

/// Validated windowing parameters: uniform row height and the number of buffer rows on each side.
///
/// Construction checks the row height once, so computing windows from a `WindowParams` cannot
/// fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowParams {
    item_height: f64,
    buffer_count: usize,
}

impl WindowParams {
    pub fn new(item_height: f64, buffer_count: usize) -> Result<Self, WindowError> {
        validate_item_height(item_height)?;
        Ok(Self {
            item_height,
            buffer_count,
        })
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn buffer_count(&self) -> usize {
        self.buffer_count
    }

    pub fn window(&self, viewport: ViewportState, item_count: usize) -> VisibleWindow {
        window_for_valid_height(
            viewport.scroll_offset,
            viewport.viewport_height,
            self.item_height,
            item_count,
            self.buffer_count,
        )
    }

    /// Vertical offset of the first rendered row.
    pub fn offset_of(&self, window: VisibleWindow) -> f64 {
        crate::window_offset(window, self.item_height)
    }

    pub fn total_height(&self, item_count: usize) -> f64 {
        crate::total_content_height(item_count, self.item_height)
    }
}
