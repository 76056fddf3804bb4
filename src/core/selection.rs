//! Selected record ids, kept independently of the filtered view

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Insertion-ordered set of selected ids
///
/// Changing filters or pages does not drop ids that scroll out of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<Id: Hash + Eq> {
    ids: IndexSet<Id>,
}

impl<Id: Hash + Eq> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }
}

impl<Id: Hash + Eq + Clone> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already selected
    pub fn select(&mut self, id: Id) -> bool {
        self.ids.insert(id)
    }

    /// Returns false if the id was not selected
    pub fn deselect(&mut self, id: &Id) -> bool {
        self.ids.shift_remove(id)
    }

    /// Checkbox semantics
    pub fn set(&mut self, id: Id, checked: bool) {
        if checked {
            self.select(id);
        } else {
            self.deselect(&id);
        }
    }

    /// Flip membership, returning the new state
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Add every visible id ("select all" on the current page)
    pub fn select_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Id>,
        Id: 'a,
    {
        self.ids.extend(visible.into_iter().cloned());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
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

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}

impl<Id: Hash + Eq> FromIterator<Id> for Selection<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
