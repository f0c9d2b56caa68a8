use core::ops::Range;

/// The contiguous index range of items to render.
///
/// `end_index` is exclusive. A window produced by [`crate::compute_visible_window`] always
/// satisfies `start_index <= end_index <= item_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleWindow {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }

    /// Returns the sub-slice of `items` covered by this window.
    ///
    /// Bounds are clamped to `items.len()`, so a window computed for a longer sequence never
    /// panics here.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index.min(items.len());
        let start = self.start_index.min(end);
        &items[start..end]
    }
}
