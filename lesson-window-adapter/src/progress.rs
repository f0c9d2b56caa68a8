use serde_json::Value;

use crate::{KeyValueStore, StoreError};

pub const DEFAULT_STORAGE_KEY: &str = "angular-learning-progress";

/// Tracks which lessons are completed and persists the list through a [`KeyValueStore`].
///
/// The stored value is a JSON array of lesson ids, e.g. `["intro","signals"]`. Loading is
/// forgiving: a missing key, malformed JSON or a non-array value all start from an empty list,
/// and non-string elements are dropped.
#[derive(Debug)]
pub struct LearningProgress<S> {
    store: S,
    key: String,
    completed: Vec<String>,
    total_lessons: usize,
}

impl<S: KeyValueStore> LearningProgress<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let completed = match store.get(&key) {
            Ok(Some(raw)) => parse_completed(&raw),
            Ok(None) => Vec::new(),
            Err(_err) => {
                wwarn!(key = %key, error = %_err, "failed to read progress; starting empty");
                Vec::new()
            }
        };
        wdebug!(key = %key, completed = completed.len(), "LearningProgress::load");
        Self {
            store,
            key,
            completed,
            total_lessons: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sets the lesson count used by [`LearningProgress::completion_rate`].
    pub fn set_total_lessons(&mut self, total: usize) {
        self.total_lessons = total;
    }

    pub fn total_lessons(&self) -> usize {
        self.total_lessons
    }

    /// Marks `id` completed, or un-marks it if it already was, then persists.
    ///
    /// Returns the new completion state. If the store rejects the write, the in-memory state is
    /// rolled back and the error is returned.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        let previous = self.completed.clone();
        let now_completed = if self.is_completed(id) {
            self.completed.retain(|it| it != id);
            false
        } else {
            self.completed.push(id.to_string());
            true
        };

        if let Err(err) = self.persist() {
            wwarn!(key = %self.key, id, error = %err, "failed to persist progress");
            self.completed = previous;
            return Err(err);
        }
        wdebug!(id, completed = now_completed, "LearningProgress::toggle");
        Ok(now_completed)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|it| it == id)
    }

    /// Completed ids in the order they were completed.
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completion percentage rounded to the nearest integer; `0` when no lessons are registered.
    pub fn completion_rate(&self) -> u32 {
        if self.total_lessons == 0 {
            return 0;
        }
        let rate = self.completed.len() as f64 / self.total_lessons as f64 * 100.0;
        rate.round() as u32
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = Value::from(self.completed.clone()).to_string();
        self.store.set(&self.key, &raw)
    }
}

fn parse_completed(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            wwarn!("stored progress is not a JSON array; ignoring");
            Vec::new()
        }
        Err(_err) => {
            wwarn!(error = %_err, "stored progress is not valid JSON; ignoring");
            Vec::new()
        }
    }
}
