/// Errors returned by the window calculator.
///
/// Only misconfiguration is an error. Runtime values that naturally go out of range (negative
/// overscroll, an empty filtered list) are clamped instead.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum WindowError {
    #[error("invalid configuration: `{field}` must be a positive, finite number (got {value})")]
    InvalidConfiguration { field: &'static str, value: f64 },
}

impl WindowError {
    pub(crate) fn item_height(value: f64) -> Self {
        Self::InvalidConfiguration {
            field: "item_height",
            value,
        }
    }
}
