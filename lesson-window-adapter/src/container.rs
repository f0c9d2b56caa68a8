use lesson_window::{
    Labeled, ViewportState, VisibleWindow, WindowError, WindowOptions, WindowParams,
    filter_indices, is_blank_term,
};

use crate::{LessonRecord, LessonSource};

pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    Idle,
    Scrolling,
}

/// A framework-neutral scroll container for a fixed-height, searchable list.
///
/// It owns the item sequence, the search term and the viewport state, and re-derives the visible
/// window from them on demand. It does not hold any UI objects; adapters drive it by calling:
/// - `on_scroll` / `set_viewport_height` when UI events occur
/// - `set_search` when the search input changes
/// - `update_scrolling(now_ms)` on a timer tick to debounce the `Scrolling -> Idle` transition
///
/// Rendering reads `total_height()` for the spacer, `translate_y()` for the slice offset and
/// `for_each_visible` for the rows themselves.
#[derive(Clone, Debug)]
pub struct ScrollContainer<T> {
    items: Vec<T>,
    search: String,
    filtered: Vec<usize>, // positions into `items`
    options: WindowOptions,
    params: WindowParams,
    scroll_offset: f64,
    phase: ScrollPhase,
    last_scroll_event_ms: Option<u64>,
    is_scrolling_reset_delay_ms: u64,
}

impl ScrollContainer<LessonRecord> {
    /// Builds a container from an injected lesson source.
    pub fn from_source(
        source: &mut impl LessonSource,
        options: WindowOptions,
    ) -> Result<Self, WindowError> {
        Self::new(source.lessons(), options)
    }
}

impl<T: Labeled> ScrollContainer<T> {
    /// Creates a container scrolled to the top with an empty search term.
    ///
    /// Fails fast if `options` carries an invalid item height.
    pub fn new(items: Vec<T>, options: WindowOptions) -> Result<Self, WindowError> {
        let params = options.params()?;
        wdebug!(
            items = items.len(),
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            buffer_count = options.buffer_count,
            "ScrollContainer::new"
        );
        let filtered = (0..items.len()).collect();
        Ok(Self {
            items,
            search: String::new(),
            filtered,
            options,
            params,
            scroll_offset: 0.0,
            phase: ScrollPhase::Idle,
            last_scroll_event_ms: None,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        })
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the item sequence (e.g. a data source reload) and re-applies the search term.
    pub fn set_items(&mut self, items: Vec<T>) {
        wdebug!(items = items.len(), "ScrollContainer::set_items");
        self.items = items;
        self.refilter();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search {
            return;
        }
        self.search = term;
        self.refilter();
        wdebug!(
            search = %self.search,
            matches = self.filtered.len(),
            "ScrollContainer::set_search"
        );
    }

    pub fn is_filtered(&self) -> bool {
        !is_blank_term(&self.search)
    }

    /// Number of items after filtering; this is the count the window is computed over.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The item at `position` in the filtered sequence.
    pub fn filtered_item(&self, position: usize) -> Option<&T> {
        self.filtered.get(position).map(|&i| &self.items[i])
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport(&self) -> ViewportState {
        ViewportState::new(self.scroll_offset, self.options.viewport_height)
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        if self.options.viewport_height == viewport_height {
            return;
        }
        wdebug!(viewport_height, "ScrollContainer::set_viewport_height");
        self.options.viewport_height = viewport_height;
        self.scroll_offset = self.clamp_to_content(self.scroll_offset);
    }

    /// Records a user scroll event and marks the container as scrolling.
    ///
    /// The offset is stored as reported; transient negative overscroll is clamped by the window
    /// calculator, not here.
    pub fn on_scroll(&mut self, scroll_offset: f64, now_ms: u64) {
        wtrace!(scroll_offset, now_ms, "ScrollContainer::on_scroll");
        self.scroll_offset = scroll_offset;
        self.last_scroll_event_ms = Some(now_ms);
        self.phase = ScrollPhase::Scrolling;
    }

    /// Sets the offset programmatically (e.g. restoring a saved position) without entering the
    /// scrolling phase.
    pub fn set_scroll_offset(&mut self, scroll_offset: f64) {
        self.scroll_offset = self.clamp_to_content(scroll_offset);
    }

    /// Returns to `Idle` once no scroll event has arrived for the reset delay.
    pub fn update_scrolling(&mut self, now_ms: u64) -> ScrollPhase {
        if self.phase == ScrollPhase::Idle {
            return self.phase;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return self.phase;
        };
        if now_ms.saturating_sub(last) >= self.is_scrolling_reset_delay_ms {
            wtrace!(now_ms, "ScrollContainer: scrolling -> idle");
            self.end_scroll();
        }
        self.phase
    }

    /// Forces the `Idle` phase, for hosts that have a native scroll-end event.
    pub fn end_scroll(&mut self) {
        self.phase = ScrollPhase::Idle;
        self.last_scroll_event_ms = None;
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase == ScrollPhase::Scrolling
    }

    pub fn visible_window(&self) -> VisibleWindow {
        self.params.window(self.viewport(), self.filtered.len())
    }

    /// Logical height of the filtered list, for sizing the scrollbar spacer.
    pub fn total_height(&self) -> f64 {
        self.params.total_height(self.filtered.len())
    }

    /// Offset to translate the rendered slice by.
    pub fn translate_y(&self) -> f64 {
        self.params.offset_of(self.visible_window())
    }

    pub fn max_scroll_offset(&self) -> f64 {
        let max = self.total_height() - self.viewport_extent();
        if max > 0.0 { max } else { 0.0 }
    }

    // The calculator reads negative and NaN heights as 0; the clamp must agree.
    fn viewport_extent(&self) -> f64 {
        let height = self.options.viewport_height;
        if height > 0.0 { height } else { 0.0 }
    }

    /// Calls `f(position, item, top)` for every rendered row, where `position` indexes the
    /// filtered sequence and `top` is the row's offset from the top of the content.
    pub fn for_each_visible<'a>(&'a self, mut f: impl FnMut(usize, &'a T, f64)) {
        let window = self.visible_window();
        let item_height = self.params.item_height();
        for (position, &index) in window.slice(&self.filtered).iter().enumerate() {
            let position = window.start_index + position;
            f(position, &self.items[index], position as f64 * item_height);
        }
    }

    pub fn visible_items(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.visible_window().len());
        self.for_each_visible(|_, item, _| out.push(item));
        out
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.items, &self.search);
        // A shorter list cannot stay scrolled past its end; browsers clamp the same way.
        self.scroll_offset = self.clamp_to_content(self.scroll_offset);
    }

    fn clamp_to_content(&self, scroll_offset: f64) -> f64 {
        let max = self.max_scroll_offset();
        if scroll_offset > max { max } else { scroll_offset }
    }
}
