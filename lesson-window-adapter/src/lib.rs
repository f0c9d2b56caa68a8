//! Adapter utilities for the `lesson-window` crate.
//!
//! The `lesson-window` crate is UI-agnostic and only does the windowing math. This crate provides
//! the small, framework-neutral pieces a lesson list page needs around it:
//!
//! - A scroll container that owns viewport state, the search term and the filtered sequence
//! - A key-value store seam (in-memory and file-backed) for persisting progress
//! - Completed-lesson tracking and a favorites set
//! - A deterministic lesson data source for reproducible lists and tests
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod container;
mod favorites;
mod lessons;
mod progress;
mod store;

#[cfg(test)]
mod tests;

pub use container::{DEFAULT_IS_SCROLLING_RESET_DELAY_MS, ScrollContainer, ScrollPhase};
pub use favorites::FavoriteSet;
pub use lessons::{
    DEFAULT_LESSON_COUNT, Difficulty, LessonRecord, LessonSource, SeededLessons, generate_lessons,
};
pub use progress::{DEFAULT_STORAGE_KEY, LearningProgress};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
