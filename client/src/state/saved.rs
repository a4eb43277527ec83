//! Locally bookmarked job ids.
//!
//! DESIGN
//! ======
//! The saved set belongs to the browser, not the backend: ids are never
//! checked against the current job list, so a bookmark survives the job
//! disappearing from a later fetch. Persisted as a JSON array of integers.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// `localStorage` key holding the saved id array.
pub const STORAGE_KEY: &str = "savedJobs";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedJobs {
    ids: BTreeSet<i64>,
}

impl SavedJobs {
    /// Read the persisted set, empty when absent or unreadable.
    pub fn load() -> Self {
        storage::load_json::<Self>(STORAGE_KEY).unwrap_or_default()
    }

    pub fn persist(&self) {
        storage::save_json(STORAGE_KEY, self);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id`. Returns `true` if the id is now saved.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }
}

impl FromIterator<i64> for SavedJobs {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
