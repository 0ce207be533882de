//! Insertion-ordered set of campaign ids ticked for bulk archive.

use indexmap::IndexSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignSelection {
    ids: IndexSet<String>,
}

impl CampaignSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick `id`. Re-ticking keeps the original position.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Untick `id`, keeping the order of the remaining ids.
    pub fn remove(&mut self, id: &str) {
        self.ids.shift_remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in the order they were ticked.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}
