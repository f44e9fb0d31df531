#![forbid(unsafe_code)]

//! Drop-target highlighting.
//!
//! While the pointer travels over candidate items, the marker flags the band
//! of items a drop would occupy ([`ItemFlags::DROP_TARGET`]) and, when items
//! from other containers will be spliced in, the last item of that band
//! ([`ItemFlags::EXPAND`]).
//!
//! # Invariants
//!
//! 1. At most one mark is live. [`DragTargetMarker::mark`] removes the
//!    previous mark before applying a new one.
//! 2. [`DragTargetMarker::unmark`] only acts when called with the subject of
//!    the live mark. Hosts deliver the leave of the old item *after* the
//!    enter of its neighbour when the pointer crosses between adjacent
//!    items, so the stale leave must not clear the fresh mark.
//! 3. The final flags therefore depend only on the last enter, whatever the
//!    relative order of enter and leave notifications.

use crate::board::{Board, ItemFlags, ItemId};

/// Tracks the items flagged by the most recent mark.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragTargetMarker {
    /// Item under the pointer when the live mark was applied.
    subject: Option<ItemId>,
    /// Items flagged by the live mark (None = nothing marked).
    marked: Option<Vec<ItemId>>,
}

impl DragTargetMarker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `targets` as the drop band for `subject`.
    pub fn mark(
        &mut self,
        board: &mut Board,
        subject: Option<ItemId>,
        targets: Vec<ItemId>,
        foreign_count: usize,
    ) {
        if self.marked.is_some() {
            self.unmark(board, self.subject);
        }

        for &target in &targets {
            board.set_flags(target, ItemFlags::DROP_TARGET, true);
        }
        if foreign_count > 0
            && let Some(&last) = targets.last()
        {
            board.set_flags(last, ItemFlags::EXPAND, true);
        }

        self.subject = subject;
        self.marked = Some(targets);
    }

    /// Remove the live mark if `subject` applied it.
    ///
    /// Returns whether anything was unmarked.
    pub fn unmark(&mut self, board: &mut Board, subject: Option<ItemId>) -> bool {
        if subject != self.subject || self.marked.is_none() {
            crate::trace!(?subject, live = ?self.subject, "stale unmark ignored");
            return false;
        }
        self.release(board);
        true
    }

    /// Remove the live mark regardless of its subject.
    pub fn clear(&mut self, board: &mut Board) {
        self.release(board);
    }

    fn release(&mut self, board: &mut Board) {
        if let Some(marked) = self.marked.take() {
            for target in marked {
                board.set_flags(target, ItemFlags::DROP_TARGET | ItemFlags::EXPAND, false);
            }
        }
        self.subject = None;
    }

    /// Items flagged by the live mark.
    #[must_use]
    pub fn marked(&self) -> &[ItemId] {
        self.marked.as_deref().unwrap_or(&[])
    }

    /// Subject of the live mark.
    #[must_use]
    pub fn subject(&self) -> Option<ItemId> {
        self.subject
    }

    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.marked.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Board, Vec<ItemId>) {
        let mut board = Board::new();
        let c = board.add_container("list");
        let ids = ["a", "b", "c", "d"]
            .iter()
            .map(|k| board.push_item(c, *k).unwrap())
            .collect();
        (board, ids)
    }

    fn flagged(board: &Board, ids: &[ItemId]) -> Vec<ItemId> {
        ids.iter()
            .copied()
            .filter(|&id| board.item(id).unwrap().is_drop_target())
            .collect()
    }

    #[test]
    fn mark_flags_targets() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[1]), vec![ids[1], ids[2]], 0);
        assert_eq!(flagged(&board, &ids), vec![ids[1], ids[2]]);
        assert!(!board.item(ids[2]).unwrap().is_expansion_indicator());
    }

    #[test]
    fn foreign_items_flag_last_target() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[0]), vec![ids[0], ids[1]], 2);
        assert!(!board.item(ids[0]).unwrap().is_expansion_indicator());
        assert!(board.item(ids[1]).unwrap().is_expansion_indicator());
    }

    #[test]
    fn foreign_items_without_targets_flag_nothing() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[0]), vec![], 3);
        assert!(flagged(&board, &ids).is_empty());
        assert!(marker.is_marked());
    }

    #[test]
    fn stale_unmark_after_remark_is_ignored() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[0]), vec![ids[0]], 0);
        marker.mark(&mut board, Some(ids[2]), vec![ids[2], ids[3]], 1);
        assert!(!marker.unmark(&mut board, Some(ids[0])));
        assert_eq!(flagged(&board, &ids), vec![ids[2], ids[3]]);
        assert!(board.item(ids[3]).unwrap().is_expansion_indicator());
    }

    #[test]
    fn unmark_before_remark_gives_same_state() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[0]), vec![ids[0]], 0);
        assert!(marker.unmark(&mut board, Some(ids[0])));
        marker.mark(&mut board, Some(ids[2]), vec![ids[2], ids[3]], 1);
        assert_eq!(flagged(&board, &ids), vec![ids[2], ids[3]]);
        assert!(board.item(ids[3]).unwrap().is_expansion_indicator());
    }

    #[test]
    fn remark_same_subject_replaces_band() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[1]), vec![ids[1], ids[2]], 1);
        marker.mark(&mut board, Some(ids[1]), vec![ids[1]], 0);
        assert_eq!(flagged(&board, &ids), vec![ids[1]]);
        assert!(!board.item(ids[2]).unwrap().is_expansion_indicator());
    }

    #[test]
    fn clear_ignores_subject() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        marker.mark(&mut board, Some(ids[1]), vec![ids[1]], 1);
        marker.clear(&mut board);
        assert!(flagged(&board, &ids).is_empty());
        assert!(!board.item(ids[1]).unwrap().is_expansion_indicator());
        assert_eq!(marker.subject(), None);
        assert!(marker.marked().is_empty());
    }

    #[test]
    fn unmark_without_mark_is_noop() {
        let (mut board, ids) = setup();
        let mut marker = DragTargetMarker::new();
        assert!(!marker.unmark(&mut board, Some(ids[0])));
        assert!(!marker.unmark(&mut board, None));
    }
}
