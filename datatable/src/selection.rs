//! Row selection state.
//!
//! Selection tracks rows by key, so it survives the rows being re-sorted or
//! replaced. The shape of the state follows the mode: a disabled selection is
//! always empty, a single selection holds at most one key, and a multi
//! selection holds any number of keys in the order they were selected.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    Multi,
}

/// Insertion-ordered set of selected keys.
///
/// Keys live in `slots` in selection order. Removal leaves a hole that is
/// compacted once holes outnumber live keys, so toggles stay O(1) amortized
/// and iteration never sorts.
#[derive(Debug, Clone)]
pub struct MultiSelection<K> {
    /// Selected keys mapped to their slot index.
    members: HashMap<K, usize>,
    slots: Vec<Option<K>>,
}

impl<K> Default for MultiSelection<K> {
    fn default() -> Self {
        Self {
            members: HashMap::new(),
            slots: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> MultiSelection<K> {
    fn contains(&self, key: &K) -> bool {
        self.members.contains_key(key)
    }

    fn insert(&mut self, key: K) {
        if self.members.contains_key(&key) {
            return;
        }
        self.members.insert(key.clone(), self.slots.len());
        self.slots.push(Some(key));
    }

    fn remove(&mut self, key: &K) -> bool {
        let Some(index) = self.members.remove(key) else {
            return false;
        };
        self.slots[index] = None;
        if self.slots.len() > 2 * self.members.len() {
            self.compact();
        }
        true
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(key) = slot {
                self.members.insert(key.clone(), index);
            }
        }
    }

    fn keys(&self) -> Vec<&K> {
        self.slots.iter().flatten().collect()
    }

    fn drain(&mut self) -> Vec<K> {
        self.members.clear();
        std::mem::take(&mut self.slots).into_iter().flatten().collect()
    }
}

/// Selected row keys, shaped by the selection mode.
#[derive(Debug, Clone)]
pub enum Selection<K> {
    /// Selection is disabled; nothing is ever selected.
    Disabled,
    /// At most one key.
    Single(Option<K>),
    /// Any number of keys, in selection order.
    Multi(MultiSelection<K>),
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Selection::Disabled
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection for `mode`.
    pub fn for_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::None => Selection::Disabled,
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multi => Selection::Multi(MultiSelection::default()),
        }
    }

    /// The mode this selection was created for.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Disabled => SelectionMode::None,
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        match self {
            Selection::Disabled => false,
            Selection::Single(current) => current.as_ref() == Some(key),
            Selection::Multi(set) => set.contains(key),
        }
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        match self {
            Selection::Disabled => 0,
            Selection::Single(current) => usize::from(current.is_some()),
            Selection::Multi(set) => set.members.len(),
        }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all selected keys in selection order.
    pub fn keys(&self) -> Vec<&K> {
        match self {
            Selection::Disabled => Vec::new(),
            Selection::Single(current) => current.iter().collect(),
            Selection::Multi(set) => set.keys(),
        }
    }

    /// Toggle selection of a key.
    ///
    /// In single mode, toggling the selected key clears the selection and
    /// toggling any other key replaces it. In multi mode the key is added or
    /// removed independently of the others. Disabled selections ignore it.
    ///
    /// Returns (added, removed) keys.
    pub fn toggle(&mut self, key: K) -> (Vec<K>, Vec<K>) {
        match self {
            Selection::Disabled => (vec![], vec![]),
            Selection::Single(current) => match current.take() {
                Some(previous) if previous == key => (vec![], vec![previous]),
                previous => {
                    *current = Some(key.clone());
                    (vec![key], previous.into_iter().collect())
                }
            },
            Selection::Multi(set) => {
                if set.remove(&key) {
                    (vec![], vec![key])
                } else {
                    set.insert(key.clone());
                    (vec![key], vec![])
                }
            }
        }
    }

    /// Clear all selection.
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<K> {
        match self {
            Selection::Disabled => Vec::new(),
            Selection::Single(current) => current.take().into_iter().collect(),
            Selection::Multi(set) => set.drain(),
        }
    }

    /// Keep only the keys for which `keep` returns true.
    /// Returns the keys that were deselected.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> Vec<K> {
        match self {
            Selection::Disabled => Vec::new(),
            Selection::Single(current) => match current.take() {
                Some(key) if !keep(&key) => vec![key],
                other => {
                    *current = other;
                    Vec::new()
                }
            },
            Selection::Multi(set) => {
                let removed: Vec<K> = set
                    .keys()
                    .into_iter()
                    .filter(|key| !keep(*key))
                    .cloned()
                    .collect();
                for key in &removed {
                    set.remove(key);
                }
                removed
            }
        }
    }
}
