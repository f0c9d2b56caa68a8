use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// An item that can be matched by the list filter.
pub trait Labeled {
    /// The display text searched by [`filter_items`].
    fn label(&self) -> &str;
}

impl Labeled for str {
    fn label(&self) -> &str {
        self
    }
}

impl Labeled for String {
    fn label(&self) -> &str {
        self.as_str()
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Returns `true` when `term` is empty or whitespace-only, i.e. filtering is a no-op.
pub fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

/// Reduces `items` to those whose label contains `term`, ignoring case.
///
/// A blank term returns the input unchanged (borrowed). Matching is plain substring matching on
/// the lowercased label; order is preserved.
pub fn filter_items<'a, T>(items: &'a [T], term: &str) -> Cow<'a, [T]>
where
    T: Labeled + Clone,
{
    if is_blank_term(term) {
        return Cow::Borrowed(items);
    }
    let needle = term.to_lowercase();
    Cow::Owned(
        items
            .iter()
            .filter(|item| matches(item.label(), &needle))
            .cloned()
            .collect(),
    )
}

/// Same as [`filter_items`], but returns positions into `items` instead of cloning.
pub fn filter_indices<T: Labeled>(items: &[T], term: &str) -> Vec<usize> {
    if is_blank_term(term) {
        return (0..items.len()).collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item.label(), &needle))
        .map(|(i, _)| i)
        .collect()
}

fn matches(label: &str, needle: &str) -> bool {
    label.to_lowercase().contains(needle)
}
