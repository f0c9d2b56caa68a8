//! A headless viewport windowing calculator for fixed-height virtualized lists.
//!
//! For adapter-level utilities (scroll container, progress tracking, lesson data), see the
//! `lesson-window-adapter` crate.
//!
//! This crate focuses on the small amount of math needed to render long lists cheaply: given a
//! scroll offset, a uniform item height, a viewport height and an item count, it computes the
//! contiguous index range that must be rendered, plus a buffer of extra rows on each side so fast
//! scrolling does not reveal blank space.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - the (possibly filtered) item count
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod filter;
mod options;
mod state;
mod types;
mod window;


pub use error::WindowError;
pub use filter::{Labeled, filter_indices, filter_items, is_blank_term};
pub use options::{
    DEFAULT_BUFFER_COUNT, DEFAULT_ITEM_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, WindowOptions,
};
pub use state::{ViewportState, WindowParams};
pub use types::VisibleWindow;
pub use window::{compute_visible_window, total_content_height, window_offset};
