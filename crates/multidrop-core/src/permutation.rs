#![forbid(unsafe_code)]

//! Permutation engine.
//!
//! Maps "drop the selection at index `i` of container `C`" to a complete
//! reordering of `C`'s indexed children plus the splice of items selected in
//! other containers.
//!
//! # Algorithm
//!
//! With `M` indexed children, `S` of them selected, and the pointer on
//! index `i`:
//!
//! 1. `first = i + min(0, M - (i + S))`: pull the insertion point back so
//!    the selected block still fits before the end.
//! 2. Walk the children with two write cursors. Unselected children go to
//!    `pos_a` (starting at 0, jumping over `[first, first + S)` when it
//!    reaches `first`); selected children go to `pos_b` (starting at
//!    `first`).
//!
//! ```text
//!   pos_a:  |AA..AA|          |AA..AA|
//!   pos_b:         |BB....BB|
//!           0    first   first+S     M
//! ```
//!
//! 3. Foreign items are not part of the permutation. They are spliced at
//!    anchor `first + S`: appended when the anchor is at or past the last
//!    position, otherwise inserted right after the selected block.
//!
//! # Invariants
//!
//! 1. The permutation is a bijection over `0..M`.
//! 2. Selected items occupy exactly `[first, first + S)`, in their original
//!    relative order.
//! 3. Unselected items keep their relative order.
//! 4. Dropping a contiguous selection onto its own first item is the
//!    identity.

use std::collections::HashSet;

use crate::board::{ContainerId, ItemId};

/// Start of the selected block for a drop on `index`.
///
/// `index` is clamped to `len`; `selected_len` never exceeds `len` for a
/// well-formed selection.
#[must_use]
pub fn drop_window(len: usize, index: usize, selected_len: usize) -> usize {
    let index = index.min(len);
    index.min(len.saturating_sub(selected_len))
}

/// Destination slot of one child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the child before the drop.
    pub source_index: usize,
    pub item: ItemId,
}

/// Complete reordering of one container for a single drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropPlan {
    /// Container receiving the drop.
    pub container: ContainerId,
    /// First slot of the selected block.
    pub first: usize,
    /// Number of local selected items.
    pub selected_len: usize,
    /// New position -> previous child. Length equals the indexed child count.
    pub permutation: Vec<Placement>,
    /// Items moving in from other containers, in traversal order.
    pub foreign: Vec<ItemId>,
}

impl DropPlan {
    /// Indexed position right after the selected block.
    #[must_use]
    pub fn foreign_anchor(&self) -> usize {
        self.first + self.selected_len
    }

    /// Indexed position at which the first foreign item lands.
    ///
    /// When the anchor reaches the last position the foreign items go after
    /// every existing child.
    #[must_use]
    pub fn foreign_insert_index(&self) -> usize {
        let len = self.permutation.len();
        let anchor = self.foreign_anchor();
        if anchor + 1 >= len { len } else { anchor }
    }

    /// Container order after the permutation, before the foreign splice.
    #[must_use]
    pub fn order(&self) -> Vec<ItemId> {
        self.permutation.iter().map(|p| p.item).collect()
    }

    /// Container order after the whole drop.
    #[must_use]
    pub fn final_order(&self) -> Vec<ItemId> {
        let mut order = self.order();
        let at = self.foreign_insert_index();
        order.splice(at..at, self.foreign.iter().copied());
        order
    }

    /// Source indices in new-position order.
    #[must_use]
    pub fn source_indices(&self) -> Vec<usize> {
        self.permutation.iter().map(|p| p.source_index).collect()
    }

    /// Whether the local children keep their positions.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.permutation
            .iter()
            .enumerate()
            .all(|(pos, p)| p.source_index == pos)
    }

    /// Whether applying the plan changes nothing at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.is_identity() && self.foreign.is_empty()
    }
}

/// Compute the plan for dropping `selected` on `children[index]`.
///
/// `selected` must be the subset of `children` that is selected; its order
/// is irrelevant because the walk follows `children`.
#[must_use]
pub fn plan_drop(
    container: ContainerId,
    children: &[ItemId],
    selected: &[ItemId],
    index: usize,
    foreign: Vec<ItemId>,
) -> DropPlan {
    let len = children.len();
    let chosen: HashSet<ItemId> = selected.iter().copied().collect();
    let selected_len = children.iter().filter(|id| chosen.contains(id)).count();
    let first = drop_window(len, index, selected_len);

    let mut slots: Vec<Option<Placement>> = vec![None; len];
    let mut pos_a = 0;
    let mut pos_b = first;
    for (source_index, &item) in children.iter().enumerate() {
        if pos_a == first {
            pos_a = first + selected_len;
        }
        let placement = Placement { source_index, item };
        if chosen.contains(&item) {
            slots[pos_b] = Some(placement);
            pos_b += 1;
        } else {
            slots[pos_a] = Some(placement);
            pos_a += 1;
        }
    }

    DropPlan {
        container,
        first,
        selected_len,
        permutation: slots.into_iter().flatten().collect(),
        foreign,
    }
}
