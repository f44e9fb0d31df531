#![forbid(unsafe_code)]

//! Containers and the items they own.
//!
//! A [`Board`] is the abstract stand-in for whatever the host renders: an
//! ordered list of [`Container`]s, each exclusively owning an ordered list of
//! [`Item`]s. The engine never touches presentation state. It writes
//! capability flags ([`ItemFlags`]) onto items and the host renders them.
//!
//! # Indexing
//!
//! Only *draggable* children are indexed. A container may also hold
//! [`ItemKind::Structural`] children (headings, separators) which keep their
//! slot through every reorder and are invisible to index arithmetic.
//! [`ItemKind::Sentinel`] children (the empty-list placeholder) are indexed
//! so that a drop can land on them, but they can never be selected nor start
//! a drag.

use std::fmt;

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Stable handle of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Stable handle of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

bitflags! {
    /// Visual capability flags maintained by the engine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is part of the selection.
        const SELECTED     = 0b0000_0001;
        /// Item is highlighted as a pending drop position.
        const DROP_TARGET  = 0b0000_0010;
        /// Foreign items will be inserted after this item.
        const EXPAND       = 0b0000_0100;
        /// Item is being dragged.
        const DRAG_STARTED = 0b0000_1000;
        /// Sentinel is currently not displayed.
        const HIDDEN       = 0b0001_0000;
    }
}

/// Role of an item inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Regular entry: indexed, selectable, may start a drag.
    Draggable,
    /// Empty-list placeholder: indexed and accepts drops, never dragged.
    Sentinel,
    /// Fixed child outside the draggable sequence.
    Structural,
}

impl ItemKind {
    /// Whether the item takes part in index arithmetic.
    #[must_use]
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Draggable | Self::Sentinel)
    }
}

/// A single orderable entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    key: String,
    kind: ItemKind,
    flags: ItemFlags,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// External identifier read back by persistence collaborators.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.kind == ItemKind::Sentinel
    }

    /// Whether a click or drag may select this item.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.kind == ItemKind::Draggable
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.flags.contains(ItemFlags::SELECTED)
    }

    #[must_use]
    pub fn is_drop_target(&self) -> bool {
        self.flags.contains(ItemFlags::DROP_TARGET)
    }

    #[must_use]
    pub fn is_expansion_indicator(&self) -> bool {
        self.flags.contains(ItemFlags::EXPAND)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(ItemFlags::HIDDEN)
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// An ordered holder of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    id: ContainerId,
    name: String,
    items: Vec<Item>,
}

impl Container {
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All children in order, structural ones included.
    #[must_use]
    pub fn children(&self) -> &[Item] {
        &self.items
    }

    /// Indexed children (draggable and sentinel) in order.
    pub fn draggable(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.kind.is_indexed())
    }

    /// Number of indexed children.
    #[must_use]
    pub fn draggable_len(&self) -> usize {
        self.draggable().count()
    }

    /// The placeholders declared by this container.
    pub fn sentinels(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_sentinel())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The container handle does not belong to this board.
    UnknownContainer(ContainerId),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownContainer(id) => write!(f, "unknown container: {id}"),
        }
    }
}

impl std::error::Error for BoardError {}

// ---------------------------------------------------------------------------
// Order snapshot
// ---------------------------------------------------------------------------

/// Current order of one container, as item keys.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerOrder {
    pub name: String,
    pub keys: Vec<String>,
}

/// Full read-back of every container's order.
///
/// Sentinels and structural children are left out: the snapshot lists the
/// entries a persistence layer would store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderSnapshot {
    pub containers: Vec<ContainerOrder>,
}

impl OrderSnapshot {
    /// Keys of the named container, if present.
    #[must_use]
    pub fn keys_of(&self, name: &str) -> Option<Vec<&str>> {
        self.containers
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.keys.iter().map(String::as_str).collect())
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Every container managed by one engine instance, in traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    containers: Vec<Container>,
    next_item: u32,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, empty container.
    pub fn add_container(&mut self, name: impl Into<String>) -> ContainerId {
        let id = ContainerId(self.containers.len() as u32);
        self.containers.push(Container {
            id,
            name: name.into(),
            items: Vec::new(),
        });
        id
    }

    /// Append a draggable item.
    pub fn push_item(
        &mut self,
        container: ContainerId,
        key: impl Into<String>,
    ) -> Result<ItemId, BoardError> {
        self.push(container, key.into(), ItemKind::Draggable)
    }

    /// Append an empty-list placeholder.
    pub fn push_sentinel(
        &mut self,
        container: ContainerId,
        key: impl Into<String>,
    ) -> Result<ItemId, BoardError> {
        self.push(container, key.into(), ItemKind::Sentinel)
    }

    /// Append a non-draggable structural child.
    pub fn push_structural(
        &mut self,
        container: ContainerId,
        key: impl Into<String>,
    ) -> Result<ItemId, BoardError> {
        self.push(container, key.into(), ItemKind::Structural)
    }

    fn push(
        &mut self,
        container: ContainerId,
        key: String,
        kind: ItemKind,
    ) -> Result<ItemId, BoardError> {
        let id = ItemId(self.next_item);
        let slot = self
            .containers
            .get_mut(container.0 as usize)
            .ok_or(BoardError::UnknownContainer(container))?;
        slot.items.push(Item {
            id,
            key,
            kind,
            flags: ItemFlags::empty(),
        });
        self.next_item += 1;
        Ok(id)
    }

    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0 as usize)
    }

    /// Container currently owning `item`.
    #[must_use]
    pub fn container_of(&self, item: ItemId) -> Option<ContainerId> {
        self.containers
            .iter()
            .find(|c| c.items.iter().any(|i| i.id == item))
            .map(|c| c.id)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == id)
    }

    /// First item carrying `key`.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<ItemId> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.key == key)
            .map(|i| i.id)
    }

    /// Indexed children of `container`, in order.
    #[must_use]
    pub fn draggable_children(&self, container: ContainerId) -> Vec<ItemId> {
        self.container(container)
            .map(|c| c.draggable().map(Item::id).collect())
            .unwrap_or_default()
    }

    /// Position of `item` among the indexed children of its container.
    #[must_use]
    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        let container = self.container(self.container_of(item)?)?;
        container.draggable().position(|i| i.id == item)
    }

    /// Read back the current key order of every container.
    #[must_use]
    pub fn order_snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            containers: self
                .containers
                .iter()
                .map(|c| ContainerOrder {
                    name: c.name.clone(),
                    keys: c
                        .items
                        .iter()
                        .filter(|i| i.kind == ItemKind::Draggable)
                        .map(|i| i.key.clone())
                        .collect(),
                })
                .collect(),
        }
    }

    // --- engine-side mutation -------------------------------------------

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .find(|i| i.id == id)
    }

    pub(crate) fn set_flags(&mut self, id: ItemId, flags: ItemFlags, on: bool) {
        if let Some(item) = self.item_mut(id) {
            item.flags.set(flags, on);
        }
    }

    /// Rewrite the indexed slots of `container` with `order`.
    ///
    /// Structural children keep their positions. `order` must be a
    /// permutation of the container's current indexed children.
    pub(crate) fn reorder(&mut self, container: ContainerId, order: &[ItemId]) {
        let Some(slot) = self.containers.get_mut(container.0 as usize) else {
            return;
        };
        let slots: Vec<usize> = slot
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind.is_indexed())
            .map(|(idx, _)| idx)
            .collect();
        debug_assert_eq!(slots.len(), order.len(), "permutation length mismatch");

        let mut pool: Vec<Option<Item>> = slots
            .iter()
            .map(|&idx| Some(slot.items[idx].clone()))
            .collect();
        for (&target, id) in slots.iter().zip(order) {
            let moved = pool
                .iter_mut()
                .find(|candidate| candidate.as_ref().is_some_and(|item| item.id == *id))
                .and_then(Option::take);
            if let Some(item) = moved {
                slot.items[target] = item;
            }
        }
    }

    /// Detach `id` from whichever container owns it.
    pub(crate) fn take_item(&mut self, id: ItemId) -> Option<Item> {
        self.containers.iter_mut().find_map(|c| {
            let pos = c.items.iter().position(|i| i.id == id)?;
            Some(c.items.remove(pos))
        })
    }

    /// Insert `items` so the first lands at indexed position `index` of
    /// `container`. `index` equal to the indexed length appends after the
    /// last child.
    pub(crate) fn splice(&mut self, container: ContainerId, index: usize, items: Vec<Item>) {
        let Some(slot) = self.containers.get_mut(container.0 as usize) else {
            return;
        };
        let at = slot
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind.is_indexed())
            .nth(index)
            .map_or(slot.items.len(), |(idx, _)| idx);
        for (offset, item) in items.into_iter().enumerate() {
            slot.items.insert(at + offset, item);
        }
    }
}
