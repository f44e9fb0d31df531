#![forbid(unsafe_code)]

//! Selection store.
//!
//! Tracks the selected items across every container. The store itself is
//! insertion-ordered (decoration callbacks see items in the order the user
//! picked them), but the per-container queries always answer in the
//! container's current order: the permutation engine derives the contiguous
//! drop band from that order, never from the click order.

use crate::board::{Board, ContainerId, ItemId};

/// Set of selected items, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<ItemId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item` if absent. Returns whether the set changed.
    pub fn add(&mut self, item: ItemId) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove `item` if present. Returns whether the set changed.
    pub fn remove(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Selected items owned by `container`, in that container's order.
    #[must_use]
    pub fn in_container(&self, board: &Board, container: ContainerId) -> Vec<ItemId> {
        board
            .container(container)
            .map(|c| {
                c.children()
                    .iter()
                    .map(|item| item.id())
                    .filter(|id| self.contains(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selected items owned by any other container, in traversal order.
    #[must_use]
    pub fn outside_container(&self, board: &Board, container: ContainerId) -> Vec<ItemId> {
        board
            .containers()
            .iter()
            .filter(|c| c.id() != container)
            .flat_map(|c| c.children().iter().map(|item| item.id()))
            .filter(|id| self.contains(*id))
            .collect()
    }
}
