#![forbid(unsafe_code)]
// Log arguments are only consumed when the `tracing` feature is on.
#![cfg_attr(not(feature = "tracing"), allow(unused_variables))]

//! Multi-select drag-and-drop reordering for ordered containers.
//!
//! The host owns rendering and native input; this crate owns the rules. It
//! keeps a [`Board`] of containers, a [`Selection`] spanning them, and turns a
//! stream of [`PointerEvent`]s into reorders and cross-container transfers,
//! calling back into [`DropEvents`] at every lifecycle point.
//!
//! # Example
//!
//! ```
//! use multidrop_core::{Board, DropEffect, Multidrop, PointerEvent};
//!
//! let mut board = Board::new();
//! let list = board.add_container("list");
//! let a = board.push_item(list, "a").unwrap();
//! let b = board.push_item(list, "b").unwrap();
//! let c = board.push_item(list, "c").unwrap();
//!
//! let mut md = Multidrop::with_defaults(board);
//! md.handle(PointerEvent::Click(a));
//! md.handle(PointerEvent::DragStart(a));
//! md.handle(PointerEvent::DragEnter(c));
//! md.handle(PointerEvent::Drop(c));
//! md.handle(PointerEvent::DragEnd(DropEffect::Move));
//!
//! let order = md.board().order_snapshot();
//! assert_eq!(order.keys_of("list"), Some(vec!["b", "c", "a"]));
//! # let _ = b;
//! ```

pub mod board;
pub mod callbacks;
pub mod config;
pub mod events;
pub mod gesture;
pub mod listeners;
pub mod logging;
pub mod marker;
pub mod permutation;
pub mod selection;
pub mod sentinel;

pub use board::{
    Board, BoardError, Container, ContainerId, ContainerOrder, Item, ItemFlags, ItemId, ItemKind,
    OrderSnapshot,
};
pub use callbacks::{DefaultEvents, DropEvents};
pub use config::{ClassNames, MultidropConfig, SelectionTrigger};
pub use events::{DropEffect, EventOutcome, PointerEvent};
pub use gesture::{Gesture, GesturePhase, Multidrop};
pub use listeners::{ListenerGroup, ListenerRegistry};
pub use marker::DragTargetMarker;
pub use permutation::{DropPlan, Placement, drop_window, plan_drop};
pub use selection::Selection;
pub use sentinel::{SentinelManager, SentinelStatus};

// Re-export tracing macros at crate root so `crate::debug!` resolves either way.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
