#![forbid(unsafe_code)]

//! Lifecycle callbacks.
//!
//! [`DropEvents`] is the fixed set of hooks the engine invokes while a
//! gesture runs. Every method has a default that only logs, so implementors
//! override just the phases they care about.
//!
//! # Ordering
//!
//! For one successful gesture the engine calls, in order:
//!
//! 1. `select` (select-by-drag only, when the origin was not yet selected)
//! 2. `decorate`
//! 3. `drop`, with the board still in its pre-drop order
//! 4. `drop_after`, with the board in its new order
//! 5. `undecorate`
//! 6. `unselect` for each item (only when the selection is cleared)
//!
//! # Example
//!
//! ```
//! use multidrop_core::{Board, DropEvents, Multidrop, MultidropConfig, OrderSnapshot};
//!
//! #[derive(Default)]
//! struct Persist {
//!     saved: Vec<OrderSnapshot>,
//! }
//!
//! impl DropEvents for Persist {
//!     fn drop_after(&mut self, board: &Board) {
//!         self.saved.push(board.order_snapshot());
//!     }
//! }
//!
//! let mut board = Board::new();
//! let list = board.add_container("favorites");
//! board.push_item(list, "feed-1").unwrap();
//! let md = Multidrop::new(board, Persist::default(), MultidropConfig::default());
//! assert!(md.events().saved.is_empty());
//! ```

use crate::board::{Board, ItemId};
use crate::permutation::DropPlan;

/// Hooks invoked at each lifecycle point of a gesture.
pub trait DropEvents {
    /// `item` joined the selection.
    fn select(&mut self, _board: &Board, item: ItemId) {
        crate::debug!(%item, "select");
    }

    /// `item` left the selection.
    fn unselect(&mut self, _board: &Board, item: ItemId) {
        crate::debug!(%item, "unselect");
    }

    /// A drag started on `origin`; `selection` is what travels with it.
    fn decorate(&mut self, _board: &Board, origin: ItemId, selection: &[ItemId]) {
        crate::debug!(%origin, ?selection, "decorate");
    }

    /// The gesture that started on `origin` ended.
    fn undecorate(&mut self, _board: &Board, origin: ItemId, selection: &[ItemId]) {
        crate::debug!(%origin, ?selection, "undecorate");
    }

    /// A drop on `target` is about to be applied. `board` still shows the
    /// order from before the drop.
    fn drop(&mut self, _board: &Board, target: ItemId, plan: &DropPlan) {
        crate::debug!(
            %target,
            permutation = ?plan.source_indices(),
            transferred = plan.foreign.len(),
            "drop"
        );
    }

    /// The drop has been applied. Read the whole board here to persist it.
    fn drop_after(&mut self, _board: &Board) {
        crate::debug!("drop completed");
    }
}

/// Callbacks that only log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultEvents;

impl DropEvents for DefaultEvents {}
