#![forbid(unsafe_code)]

//! Pointer listener bookkeeping.
//!
//! The host binds native listeners to items; the engine decides *which*
//! groups are bound and to which items. Each group is acquired as a whole
//! and released as a whole: the registry remembers the exact set of items a
//! group was bound to, so release detaches precisely what was attached even
//! if items moved between containers in between.
//!
//! Drag listeners are only bound while something can be dragged. In
//! click-selection mode they are acquired on the first selection and
//! released when the selection empties again.

use crate::board::{Board, ItemId, ItemKind};

/// A group of pointer listeners acquired together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerGroup {
    /// Single-click selection.
    Click,
    /// Double-click selection.
    DoubleClick,
    /// Drag start/enter/over/leave/drop/end.
    Drag,
}

impl ListenerGroup {
    /// Every group, in release order.
    pub const ALL: [ListenerGroup; 3] = [Self::Click, Self::DoubleClick, Self::Drag];

    fn binds(self, kind: ItemKind) -> bool {
        match self {
            // Placeholders are never selected.
            Self::Click | Self::DoubleClick => kind == ItemKind::Draggable,
            // Placeholders must receive drops.
            Self::Drag => kind.is_indexed(),
        }
    }
}

/// Records which listener groups are bound, and to which items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListenerRegistry {
    click: Option<Vec<ItemId>>,
    double_click: Option<Vec<ItemId>>,
    drag: Option<Vec<ItemId>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, group: ListenerGroup) -> &Option<Vec<ItemId>> {
        match group {
            ListenerGroup::Click => &self.click,
            ListenerGroup::DoubleClick => &self.double_click,
            ListenerGroup::Drag => &self.drag,
        }
    }

    fn slot_mut(&mut self, group: ListenerGroup) -> &mut Option<Vec<ItemId>> {
        match group {
            ListenerGroup::Click => &mut self.click,
            ListenerGroup::DoubleClick => &mut self.double_click,
            ListenerGroup::Drag => &mut self.drag,
        }
    }

    /// Bind `group` to every eligible item of `board`.
    ///
    /// Returns false if the group was already registered.
    pub fn register(&mut self, group: ListenerGroup, board: &Board) -> bool {
        if self.is_registered(group) {
            return false;
        }
        let items: Vec<ItemId> = board
            .containers()
            .iter()
            .flat_map(|c| c.children().iter())
            .filter(|item| group.binds(item.kind()))
            .map(|item| item.id())
            .collect();
        crate::debug!(?group, count = items.len(), "register listeners");
        *self.slot_mut(group) = Some(items);
        true
    }

    /// Release `group`, returning the items it was bound to.
    pub fn unregister(&mut self, group: ListenerGroup) -> Option<Vec<ItemId>> {
        let released = self.slot_mut(group).take();
        if released.is_some() {
            crate::debug!(?group, "unregister listeners");
        }
        released
    }

    /// Release every group.
    pub fn detach_all(&mut self) {
        for group in ListenerGroup::ALL {
            self.unregister(group);
        }
    }

    #[must_use]
    pub fn is_registered(&self, group: ListenerGroup) -> bool {
        self.slot(group).is_some()
    }

    /// Whether `group` is currently bound to `item`.
    #[must_use]
    pub fn is_bound(&self, group: ListenerGroup, item: ItemId) -> bool {
        self.slot(group)
            .as_ref()
            .is_some_and(|items| items.contains(&item))
    }

    /// Items `group` is bound to (empty when unregistered).
    #[must_use]
    pub fn bound(&self, group: ListenerGroup) -> &[ItemId] {
        self.slot(group).as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ListenerGroup::ALL.iter().all(|&g| !self.is_registered(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> (Board, ItemId, ItemId, ItemId) {
        let mut board = Board::new();
        let c = board.add_container("list");
        let empty = board.push_sentinel(c, "empty").unwrap();
        let a = board.push_item(c, "a").unwrap();
        let head = board.push_structural(c, "head").unwrap();
        (board, empty, a, head)
    }

    #[test]
    fn click_skips_placeholders() {
        let (board, empty, a, head) = board();
        let mut reg = ListenerRegistry::new();
        assert!(reg.register(ListenerGroup::Click, &board));
        assert!(reg.is_bound(ListenerGroup::Click, a));
        assert!(!reg.is_bound(ListenerGroup::Click, empty));
        assert!(!reg.is_bound(ListenerGroup::Click, head));
    }

    #[test]
    fn drag_binds_placeholders() {
        let (board, empty, a, head) = board();
        let mut reg = ListenerRegistry::new();
        reg.register(ListenerGroup::Drag, &board);
        assert_eq!(reg.bound(ListenerGroup::Drag), &[empty, a]);
        assert!(!reg.is_bound(ListenerGroup::Drag, head));
    }

    #[test]
    fn register_is_idempotent() {
        let (board, _, _, _) = board();
        let mut reg = ListenerRegistry::new();
        assert!(reg.register(ListenerGroup::Drag, &board));
        assert!(!reg.register(ListenerGroup::Drag, &board));
    }

    #[test]
    fn unregister_returns_bound_set() {
        let (board, empty, a, _) = board();
        let mut reg = ListenerRegistry::new();
        reg.register(ListenerGroup::Drag, &board);
        assert_eq!(reg.unregister(ListenerGroup::Drag), Some(vec![empty, a]));
        assert_eq!(reg.unregister(ListenerGroup::Drag), None);
        assert!(reg.bound(ListenerGroup::Drag).is_empty());
    }

    #[test]
    fn detach_all_releases_every_branch() {
        let (board, _, _, _) = board();
        let mut reg = ListenerRegistry::new();
        reg.register(ListenerGroup::DoubleClick, &board);
        reg.register(ListenerGroup::Drag, &board);
        assert!(!reg.is_empty());
        reg.detach_all();
        assert!(reg.is_empty());
    }
}
