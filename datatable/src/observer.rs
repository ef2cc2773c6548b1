//! Change notifications for table views.

use std::fmt;

use crate::sort::SortState;

/// A state change on a [`TableView`](crate::TableView).
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent<K> {
    /// The sort column or direction changed.
    SortChanged(SortState),
    /// Rows were selected or deselected.
    SelectionChanged {
        /// Newly selected keys.
        added: Vec<K>,
        /// Newly deselected keys.
        removed: Vec<K>,
    },
}

/// Handle returned by [`TableView::subscribe`](crate::TableView::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__subscription_{}", self.0)
    }
}

type Callback<K> = Box<dyn FnMut(&ViewEvent<K>)>;

/// Registered change callbacks, called in subscription order.
pub(crate) struct Subscribers<K> {
    callbacks: Vec<(SubscriptionId, Callback<K>)>,
    next_id: u64,
}

impl<K> Default for Subscribers<K> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> fmt::Debug for Subscribers<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<K> Subscribers<K> {
    pub fn add(&mut self, callback: Callback<K>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn notify(&mut self, event: &ViewEvent<K>) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}
