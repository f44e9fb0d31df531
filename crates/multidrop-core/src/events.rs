#![forbid(unsafe_code)]

//! Pointer events fed into the engine by the host.

use crate::board::ItemId;
use crate::listeners::ListenerGroup;

/// Effect the host reports when a drag gesture concludes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DropEffect {
    /// Nothing was dropped (released outside any target, or aborted).
    #[default]
    None,
    /// The payload was moved.
    Move,
}

/// A pointer notification concerning one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Single click on an item.
    Click(ItemId),
    /// Double click on an item.
    DoubleClick(ItemId),
    /// A drag begins on an item.
    DragStart(ItemId),
    /// The dragged pointer enters an item.
    DragEnter(ItemId),
    /// The dragged pointer moves over an item.
    DragOver(ItemId),
    /// The dragged pointer leaves an item.
    DragLeave(ItemId),
    /// The pointer is released over an item.
    Drop(ItemId),
    /// The gesture concludes, with or without a drop.
    DragEnd(DropEffect),
    /// The host aborted the gesture (e.g. the pointer left the window).
    Cancel,
}

impl PointerEvent {
    /// Listener group that must be bound for the event to be delivered.
    #[must_use]
    pub fn group(&self) -> ListenerGroup {
        match self {
            Self::Click(_) => ListenerGroup::Click,
            Self::DoubleClick(_) => ListenerGroup::DoubleClick,
            _ => ListenerGroup::Drag,
        }
    }

    /// Item the event concerns, if any.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match *self {
            Self::Click(id)
            | Self::DoubleClick(id)
            | Self::DragStart(id)
            | Self::DragEnter(id)
            | Self::DragOver(id)
            | Self::DragLeave(id)
            | Self::Drop(id) => Some(id),
            Self::DragEnd(_) | Self::Cancel => None,
        }
    }
}

/// How the engine disposed of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event changed or confirmed engine state.
    Handled,
    /// The event does not apply (no listener bound, no gesture open, ...).
    Ignored,
    /// The event was refused; the host should cancel its native gesture.
    Rejected,
}

impl EventOutcome {
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups() {
        assert_eq!(PointerEvent::Click(ItemId(1)).group(), ListenerGroup::Click);
        assert_eq!(
            PointerEvent::DoubleClick(ItemId(1)).group(),
            ListenerGroup::DoubleClick
        );
        assert_eq!(PointerEvent::Drop(ItemId(1)).group(), ListenerGroup::Drag);
        assert_eq!(PointerEvent::Cancel.group(), ListenerGroup::Drag);
    }

    #[test]
    fn item_of_event() {
        assert_eq!(PointerEvent::DragEnter(ItemId(4)).item(), Some(ItemId(4)));
        assert_eq!(PointerEvent::DragEnd(DropEffect::Move).item(), None);
    }

    #[test]
    fn default_effect_is_none() {
        assert_eq!(DropEffect::default(), DropEffect::None);
    }
}
