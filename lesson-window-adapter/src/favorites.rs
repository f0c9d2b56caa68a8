/// An insertion-ordered set of favorited item ids.
///
/// Favorites are session state only; use [`crate::LearningProgress`] for anything that must
/// survive a reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteSet<Id> {
    ids: Vec<Id>,
}

impl<Id> Default for FavoriteSet<Id> {
    fn default() -> Self {
        Self { ids: Vec::new() }
    }
}

impl<Id: PartialEq> FavoriteSet<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: Id) -> bool {
        if let Some(pos) = self.ids.iter().position(|it| *it == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}
