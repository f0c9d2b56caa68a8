use crate::{
    ViewportState, VisibleWindow, WindowError, WindowParams, compute_visible_window,
    total_content_height,
};

pub const DEFAULT_ITEM_HEIGHT: f64 = 64.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 320.0;
pub const DEFAULT_BUFFER_COUNT: usize = 5;

/// Configuration for a fixed-height virtualized list.
///
/// This type is cheap to copy; adapters typically keep one around and rebuild the window on every
/// scroll or filter change via [`WindowOptions::compute`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Uniform row height in pixels. Must be positive and finite.
    pub item_height: f64,
    /// Height of the scrollable area in pixels.
    pub viewport_height: f64,
    /// Extra rows rendered above and below the visible range.
    pub buffer_count: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            buffer_count: DEFAULT_BUFFER_COUNT,
        }
    }
}

impl WindowOptions {
    pub fn new(item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_height,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: usize) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Checks the options without computing anything.
    ///
    /// Call this once at setup time to fail fast on misconfiguration.
    pub fn validate(&self) -> Result<(), WindowError> {
        crate::window::validate_item_height(self.item_height)
    }

    pub fn params(&self) -> Result<WindowParams, WindowError> {
        WindowParams::new(self.item_height, self.buffer_count)
    }

    pub fn viewport(&self, scroll_offset: f64) -> ViewportState {
        ViewportState::new(scroll_offset, self.viewport_height)
    }

    /// Computes the visible window for `item_count` items at `scroll_offset`.
    pub fn compute(
        &self,
        scroll_offset: f64,
        item_count: usize,
    ) -> Result<VisibleWindow, WindowError> {
        compute_visible_window(
            scroll_offset,
            self.viewport_height,
            self.item_height,
            item_count,
            self.buffer_count,
        )
    }

    pub fn total_height(&self, item_count: usize) -> f64 {
        total_content_height(item_count, self.item_height)
    }
}
