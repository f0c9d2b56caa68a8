use crate::{VisibleWindow, WindowError};

/// Computes the contiguous range of items that must be rendered for the current scroll position.
///
/// ```text
/// start_index = max(0, floor(scroll_offset / item_height) - buffer_count)
/// end_index   = min(item_count, ceil((scroll_offset + viewport_height) / item_height) + buffer_count)
/// ```
///
/// The result always satisfies `0 <= start_index <= end_index <= item_count`. When the scroll
/// offset points past the end of the content, `start_index` is clamped down to `end_index`.
///
/// Negative (or NaN) `scroll_offset` and `viewport_height` are treated as `0`; browsers report
/// transient negative offsets during momentum overscroll. A non-positive or non-finite
/// `item_height` is rejected with [`WindowError::InvalidConfiguration`].
///
/// This is a pure O(1) function: no state, no allocation, no logging.
pub fn compute_visible_window(
    scroll_offset: f64,
    viewport_height: f64,
    item_height: f64,
    item_count: usize,
    buffer_count: usize,
) -> Result<VisibleWindow, WindowError> {
    validate_item_height(item_height)?;
    Ok(window_for_valid_height(
        scroll_offset,
        viewport_height,
        item_height,
        item_count,
        buffer_count,
    ))
}

// `item_height` must already be positive and finite.
pub(crate) fn window_for_valid_height(
    scroll_offset: f64,
    viewport_height: f64,
    item_height: f64,
    item_count: usize,
    buffer_count: usize,
) -> VisibleWindow {
    let scroll_offset = clamp_non_negative(scroll_offset);
    let viewport_height = clamp_non_negative(viewport_height);

    let first = floor_index(scroll_offset / item_height);
    let last = ceil_index((scroll_offset + viewport_height) / item_height);

    let end_index = last.saturating_add(buffer_count).min(item_count);
    let start_index = first.saturating_sub(buffer_count).min(end_index);

    VisibleWindow {
        start_index,
        end_index,
    }
}

/// Total logical height of the list, used to size the scrollbar.
pub fn total_content_height(item_count: usize, item_height: f64) -> f64 {
    item_count as f64 * item_height
}

/// Vertical offset at which the rendered slice must be placed (e.g. a `translateY`).
pub fn window_offset(window: VisibleWindow, item_height: f64) -> f64 {
    window.start_index as f64 * item_height
}

pub(crate) fn validate_item_height(item_height: f64) -> Result<(), WindowError> {
    if item_height.is_finite() && item_height > 0.0 {
        Ok(())
    } else {
        Err(WindowError::item_height(item_height))
    }
}

// Also maps NaN to 0.
fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

// `f64::floor`/`ceil` live in `std`; for non-negative inputs a saturating cast truncates, which
// is the floor.
fn floor_index(value: f64) -> usize {
    value as usize
}

fn ceil_index(value: f64) -> usize {
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
