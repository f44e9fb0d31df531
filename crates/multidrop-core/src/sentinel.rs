#![forbid(unsafe_code)]

//! Empty-container placeholders.
//!
//! When every container declares exactly one [`ItemKind::Sentinel`] child,
//! the manager shows it while the container holds nothing else and hides it
//! once real items arrive. The convention is all-or-nothing: a board where
//! only some containers declare a placeholder disables the feature for all of
//! them and logs a warning.
//!
//! [`ItemKind::Sentinel`]: crate::board::ItemKind::Sentinel

use crate::board::{Board, ItemFlags, ItemKind};

/// Outcome of placeholder detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentinelStatus {
    /// Every container declares one placeholder.
    Enabled,
    /// No container declares a placeholder.
    Disabled,
    /// Containers disagree; the feature is off.
    Inconsistent,
}

/// Keeps placeholder visibility in sync with container contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentinelManager {
    status: SentinelStatus,
}

impl SentinelManager {
    /// Inspect `board` and decide whether placeholders are managed.
    #[must_use]
    pub fn detect(board: &Board) -> Self {
        let counts: Vec<usize> = board
            .containers()
            .iter()
            .map(|c| c.sentinels().count())
            .collect();

        let status = if counts.is_empty() || counts.iter().all(|&n| n == 0) {
            SentinelStatus::Disabled
        } else if counts.iter().all(|&n| n == 1) {
            SentinelStatus::Enabled
        } else {
            crate::warn!(
                ?counts,
                "not all containers declare exactly one empty-list placeholder; placeholders disabled"
            );
            SentinelStatus::Inconsistent
        };
        crate::debug!(?status, "placeholder detection");
        Self { status }
    }

    #[must_use]
    pub fn status(&self) -> SentinelStatus {
        self.status
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status == SentinelStatus::Enabled
    }

    /// Show each placeholder iff its container holds no draggable item.
    /// Structural children do not count.
    pub fn refresh(&self, board: &mut Board) {
        if !self.is_enabled() {
            return;
        }
        let updates: Vec<_> = board
            .containers()
            .iter()
            .flat_map(|c| {
                let visible = c.children().iter().all(|i| i.kind() != ItemKind::Draggable);
                c.sentinels().map(move |s| (s.id(), visible))
            })
            .collect();
        for (id, visible) in updates {
            board.set_flags(id, ItemFlags::HIDDEN, !visible);
        }
    }
}
