#![forbid(unsafe_code)]

//! Gesture controller.
//!
//! [`Multidrop`] owns the board and runs the selection/drag state machine:
//!
//! ```text
//!            DragStart              Drop
//!   Idle ─────────────▶ Dragging ─────────▶ Dropped
//!    ▲                     │                   │
//!    └──── DragEnd/Cancel ─┴───────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. At most one gesture is open. Its transient state (origin, marker,
//!    decorated items) lives in a [`Gesture`] value that is dropped on every
//!    return to `Idle`, after its marks and decorations have been removed.
//! 2. A drop recomputes container, index and selection from the board as it
//!    is at drop time; nothing computed during enter is reused.
//! 3. The permutation and the foreign splice are applied together inside the
//!    drop transition. An aborted gesture never leaves a partial reorder.
//! 4. Events are delivered only for items whose listener group is bound.
//!
//! # Failure Modes
//!
//! | Event | Cause | Outcome |
//! |-------|-------|---------|
//! | `DragStart` on a placeholder | Placeholders cannot be dragged | `Rejected` |
//! | Stale `DragLeave` | Leave of the old item after enter of the next | `Ignored` |
//! | Any event on an unbound item | Listener group not acquired | `Ignored` |
//! | `DragStart` while dragging | Host lost the previous end | Previous gesture cancelled |

use crate::board::{Board, ContainerId, ItemFlags, ItemId};
use crate::callbacks::{DefaultEvents, DropEvents};
use crate::config::{MultidropConfig, SelectionTrigger};
use crate::events::{DropEffect, EventOutcome, PointerEvent};
use crate::listeners::{ListenerGroup, ListenerRegistry};
use crate::marker::DragTargetMarker;
use crate::permutation::{DropPlan, drop_window, plan_drop};
use crate::selection::Selection;
use crate::sentinel::SentinelManager;

// ---------------------------------------------------------------------------
// Gesture state
// ---------------------------------------------------------------------------

/// Phase of the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture open.
    Idle,
    /// A drag is in progress.
    Dragging,
    /// The drag was dropped; waiting for its end.
    Dropped,
}

/// Transient state of the open gesture.
#[derive(Clone, Debug)]
pub struct Gesture {
    origin: ItemId,
    phase: GesturePhase,
    marker: DragTargetMarker,
    decorated: Vec<ItemId>,
    last_mark: Option<(ContainerId, usize)>,
}

impl Gesture {
    fn new(origin: ItemId, decorated: Vec<ItemId>) -> Self {
        Self {
            origin,
            phase: GesturePhase::Dragging,
            marker: DragTargetMarker::new(),
            decorated,
            last_mark: None,
        }
    }

    /// Item the drag started on.
    #[must_use]
    pub fn origin(&self) -> ItemId {
        self.origin
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn marker(&self) -> &DragTargetMarker {
        &self.marker
    }

    /// Container and first slot of the most recent mark.
    #[must_use]
    pub fn last_mark(&self) -> Option<(ContainerId, usize)> {
        self.last_mark
    }

    /// Remove every flag this gesture put on the board.
    fn release(&mut self, board: &mut Board) {
        self.marker.clear(board);
        for &id in &self.decorated {
            board.set_flags(id, ItemFlags::DRAG_STARTED, false);
        }
    }
}

/// Everything a drop on one item depends on.
struct DropContext {
    container: ContainerId,
    index: usize,
    children: Vec<ItemId>,
    selected: Vec<ItemId>,
    foreign: Vec<ItemId>,
}

// ---------------------------------------------------------------------------
// Multidrop
// ---------------------------------------------------------------------------

/// Multi-select drag-and-drop engine over a [`Board`].
#[derive(Debug)]
pub struct Multidrop<E: DropEvents = DefaultEvents> {
    board: Board,
    selection: Selection,
    config: MultidropConfig,
    events: E,
    listeners: ListenerRegistry,
    sentinels: SentinelManager,
    gesture: Option<Gesture>,
}

impl Multidrop<DefaultEvents> {
    /// Engine with logging callbacks and default options.
    #[must_use]
    pub fn with_defaults(board: Board) -> Self {
        Self::new(board, DefaultEvents, MultidropConfig::default())
    }
}

impl<E: DropEvents> Multidrop<E> {
    /// Take ownership of `board` and acquire the configured listeners.
    #[must_use]
    pub fn new(mut board: Board, events: E, config: MultidropConfig) -> Self {
        let mut listeners = ListenerRegistry::new();
        match config.selection_trigger() {
            SelectionTrigger::Click => {
                listeners.register(ListenerGroup::Click, &board);
            }
            SelectionTrigger::DoubleClick => {
                listeners.register(ListenerGroup::DoubleClick, &board);
            }
            SelectionTrigger::None => {}
        }
        if config.select_by_drag {
            listeners.register(ListenerGroup::Drag, &board);
        }

        let sentinels = SentinelManager::detect(&board);
        sentinels.refresh(&mut board);
        crate::info!(
            containers = board.containers().len(),
            trigger = ?config.selection_trigger(),
            select_by_drag = config.select_by_drag,
            "multidrop ready"
        );

        Self {
            board,
            selection: Selection::new(),
            config,
            events,
            listeners,
            sentinels,
            gesture: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn config(&self) -> &MultidropConfig {
        &self.config
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    #[must_use]
    pub fn sentinels(&self) -> &SentinelManager {
        &self.sentinels
    }

    #[must_use]
    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// The open gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture
            .as_ref()
            .map_or(GesturePhase::Idle, |g| g.phase)
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> EventOutcome {
        if let Some(item) = event.item()
            && !self.listeners.is_bound(event.group(), item)
        {
            crate::trace!(?event, "no listener bound");
            return EventOutcome::Ignored;
        }

        match event {
            PointerEvent::Click(item) | PointerEvent::DoubleClick(item) => self.toggle(item),
            PointerEvent::DragStart(item) => self.start(item),
            PointerEvent::DragEnter(item) => self.enter(item),
            PointerEvent::DragOver(_) => {
                if self.phase() == GesturePhase::Dragging {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerEvent::DragLeave(item) => self.leave(item),
            PointerEvent::Drop(item) => self.drop_on(item),
            PointerEvent::DragEnd(effect) => self.finish(effect),
            PointerEvent::Cancel => self.finish(DropEffect::None),
        }
    }

    /// Release every resource acquired since construction and hand the
    /// board and callbacks back.
    pub fn dispose(mut self) -> (Board, E) {
        if let Some(mut gesture) = self.gesture.take() {
            gesture.release(&mut self.board);
        }
        self.clear_selection(false);
        self.listeners.detach_all();
        crate::debug!("multidrop disposed");
        (self.board, self.events)
    }

    // --- selection ------------------------------------------------------

    fn toggle(&mut self, item: ItemId) -> EventOutcome {
        let before = self.selection.len();

        if self.selection.contains(item) {
            self.events.unselect(&self.board, item);
            self.selection.remove(item);
            self.board.set_flags(item, ItemFlags::SELECTED, false);
        } else {
            self.selection.add(item);
            self.board.set_flags(item, ItemFlags::SELECTED, true);
            self.events.select(&self.board, item);
        }

        let after = self.selection.len();
        if !self.config.select_by_drag {
            if after > 0 && before == 0 {
                self.listeners.register(ListenerGroup::Drag, &self.board);
            } else if before > 0 && after == 0 {
                self.listeners.unregister(ListenerGroup::Drag);
            }
        }
        EventOutcome::Handled
    }

    fn clear_selection(&mut self, notify: bool) {
        for item in self.selection.items().to_vec() {
            if notify {
                self.events.unselect(&self.board, item);
            }
            self.board.set_flags(item, ItemFlags::SELECTED, false);
        }
        self.selection.clear();
        if !self.config.select_by_drag {
            self.listeners.unregister(ListenerGroup::Drag);
        }
    }

    // --- drag lifecycle -------------------------------------------------

    fn start(&mut self, origin: ItemId) -> EventOutcome {
        let Some(item) = self.board.item(origin) else {
            return EventOutcome::Ignored;
        };
        if item.is_sentinel() {
            crate::debug!(%origin, "drag start on placeholder rejected");
            return EventOutcome::Rejected;
        }
        if self.gesture.is_some() {
            crate::warn!(%origin, "drag start while a gesture is open; cancelling it");
            self.finish(DropEffect::None);
        }
        crate::debug!(%origin, "drag start");

        if self.config.select_by_drag && self.selection.add(origin) {
            self.board.set_flags(origin, ItemFlags::SELECTED, true);
            self.events.select(&self.board, origin);
        }

        let decorated = self.selection.items().to_vec();
        for &id in &decorated {
            self.board.set_flags(id, ItemFlags::DRAG_STARTED, true);
        }
        self.events.decorate(&self.board, origin, &decorated);
        self.gesture = Some(Gesture::new(origin, decorated));
        EventOutcome::Handled
    }

    fn context(&self, target: ItemId) -> Option<DropContext> {
        let container = self.board.container_of(target)?;
        let index = self.board.index_of(target)?;
        Some(DropContext {
            container,
            index,
            children: self.board.draggable_children(container),
            selected: self.selection.in_container(&self.board, container),
            foreign: self.selection.outside_container(&self.board, container),
        })
    }

    fn enter(&mut self, target: ItemId) -> EventOutcome {
        if self.phase() != GesturePhase::Dragging {
            return EventOutcome::Ignored;
        }
        let Some(ctx) = self.context(target) else {
            return EventOutcome::Ignored;
        };

        let len = ctx.children.len();
        let first = drop_window(len, ctx.index, ctx.selected.len());
        // A pure transfer still needs one visible slot.
        let extra = usize::from(!ctx.foreign.is_empty() && ctx.selected.is_empty());
        let end = (first + ctx.selected.len() + extra).min(len);
        let targets = ctx.children[first..end].to_vec();
        crate::debug!(%target, index = ctx.index, first, "drag enter");

        let Some(gesture) = self.gesture.as_mut() else {
            return EventOutcome::Ignored;
        };
        gesture
            .marker
            .mark(&mut self.board, Some(target), targets, ctx.foreign.len());
        gesture.last_mark = Some((ctx.container, first));
        EventOutcome::Handled
    }

    fn leave(&mut self, target: ItemId) -> EventOutcome {
        let Some(gesture) = self.gesture.as_mut() else {
            return EventOutcome::Ignored;
        };
        if gesture.marker.unmark(&mut self.board, Some(target)) {
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    fn drop_on(&mut self, target: ItemId) -> EventOutcome {
        if self.phase() != GesturePhase::Dragging {
            return EventOutcome::Ignored;
        }
        let Some(ctx) = self.context(target) else {
            return EventOutcome::Ignored;
        };
        let _span = crate::debug_span!("drop", target = %target).entered();

        let plan = plan_drop(
            ctx.container,
            &ctx.children,
            &ctx.selected,
            ctx.index,
            ctx.foreign,
        );
        self.events.drop(&self.board, target, &plan);
        self.apply(&plan);
        self.sentinels.refresh(&mut self.board);
        self.events.drop_after(&self.board);

        if let Some(gesture) = self.gesture.as_mut() {
            gesture.phase = GesturePhase::Dropped;
        }
        EventOutcome::Handled
    }

    fn apply(&mut self, plan: &DropPlan) {
        if !plan.is_identity() {
            self.board.reorder(plan.container, &plan.order());
        }
        if plan.foreign.is_empty() {
            return;
        }
        let at = plan.foreign_insert_index();
        let moved = plan
            .foreign
            .iter()
            .filter_map(|&id| self.board.take_item(id))
            .collect();
        self.board.splice(plan.container, at, moved);
    }

    fn finish(&mut self, effect: DropEffect) -> EventOutcome {
        let Some(mut gesture) = self.gesture.take() else {
            return EventOutcome::Ignored;
        };
        crate::debug!(?effect, phase = ?gesture.phase, "drag end");

        gesture.release(&mut self.board);
        self.events
            .undecorate(&self.board, gesture.origin, &gesture.decorated);

        if !self.config.clear_selection_after_drop {
            if effect == DropEffect::Move {
                crate::debug!(selected = self.selection.len(), "selection preserved");
            }
            return EventOutcome::Handled;
        }
        self.clear_selection(true);
        EventOutcome::Handled
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback as a log line.
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl Recorder {
        fn drain(&mut self) -> Vec<String> {
            std::mem::take(&mut self.log)
        }
    }

    fn key(board: &Board, id: ItemId) -> String {
        board.item(id).map(|i| i.key().to_string()).unwrap_or_default()
    }

    impl DropEvents for Recorder {
        fn select(&mut self, board: &Board, item: ItemId) {
            self.log.push(format!("select {}", key(board, item)));
        }

        fn unselect(&mut self, board: &Board, item: ItemId) {
            self.log.push(format!("unselect {}", key(board, item)));
        }

        fn decorate(&mut self, board: &Board, origin: ItemId, selection: &[ItemId]) {
            self.log
                .push(format!("decorate {} n={}", key(board, origin), selection.len()));
        }

        fn undecorate(&mut self, board: &Board, origin: ItemId, _selection: &[ItemId]) {
            self.log.push(format!("undecorate {}", key(board, origin)));
        }

        fn drop(&mut self, board: &Board, target: ItemId, plan: &DropPlan) {
            self.log.push(format!(
                "drop {} perm={:?} foreign={}",
                key(board, target),
                plan.source_indices(),
                plan.foreign.len()
            ));
        }

        fn drop_after(&mut self, board: &Board) {
            let snapshot = board.order_snapshot();
            let lists: Vec<String> = snapshot
                .containers
                .iter()
                .map(|c| c.keys.join(","))
                .collect();
            self.log.push(format!("drop_after {}", lists.join("|")));
        }
    }

    fn engine(lists: &[&[&str]], config: MultidropConfig) -> Multidrop<Recorder> {
        let mut board = Board::new();
        for (n, keys) in lists.iter().enumerate() {
            let c = board.add_container(format!("list{n}"));
            for k in *keys {
                board.push_item(c, *k).unwrap();
            }
        }
        Multidrop::new(board, Recorder::default(), config)
    }

    fn id(md: &Multidrop<Recorder>, key: &str) -> ItemId {
        md.board().find_by_key(key).unwrap()
    }

    fn keys(md: &Multidrop<Recorder>, n: usize) -> Vec<String> {
        md.board().order_snapshot().containers[n].keys.clone()
    }

    #[test]
    fn click_toggles_selection_and_drag_listeners() {
        let mut md = engine(&[&["a", "b"]], MultidropConfig::default());
        let a = id(&md, "a");
        assert!(!md.listeners().is_registered(ListenerGroup::Drag));

        assert!(md.handle(PointerEvent::Click(a)).is_handled());
        assert!(md.selection().contains(a));
        assert!(md.board().item(a).unwrap().is_selected());
        assert!(md.listeners().is_registered(ListenerGroup::Drag));

        md.handle(PointerEvent::Click(a));
        assert!(md.selection().is_empty());
        assert!(!md.board().item(a).unwrap().is_selected());
        assert!(!md.listeners().is_registered(ListenerGroup::Drag));
        assert_eq!(md.events_mut().drain(), vec!["select a", "unselect a"]);
    }

    #[test]
    fn drag_events_ignored_without_selection_in_click_mode() {
        let mut md = engine(&[&["a", "b"]], MultidropConfig::default());
        let a = id(&md, "a");
        assert_eq!(md.handle(PointerEvent::DragStart(a)), EventOutcome::Ignored);
        assert_eq!(md.phase(), GesturePhase::Idle);
    }

    #[test]
    fn double_click_mode_ignores_single_clicks() {
        let cfg = MultidropConfig::default()
            .with_select_by_click(false)
            .with_select_by_dblclick(true);
        let mut md = engine(&[&["a"]], cfg);
        let a = id(&md, "a");
        assert_eq!(md.handle(PointerEvent::Click(a)), EventOutcome::Ignored);
        assert!(md.handle(PointerEvent::DoubleClick(a)).is_handled());
        assert!(md.selection().contains(a));
    }

    #[test]
    fn select_by_drag_selects_origin() {
        let cfg = MultidropConfig::default()
            .with_select_by_click(false)
            .with_select_by_drag(true);
        let mut md = engine(&[&["a", "b", "c"]], cfg);
        let a = id(&md, "a");
        assert!(md.handle(PointerEvent::DragStart(a)).is_handled());
        assert_eq!(md.phase(), GesturePhase::Dragging);
        assert!(md.selection().contains(a));
        assert!(md.board().item(a).unwrap().flags().contains(ItemFlags::DRAG_STARTED));
        assert_eq!(md.events_mut().drain(), vec!["select a", "decorate a n=1"]);
    }

    #[test]
    fn full_reorder_gesture() {
        let mut md = engine(&[&["a", "b", "c", "d", "e"]], MultidropConfig::default());
        let (a, c, d) = (id(&md, "a"), id(&md, "c"), id(&md, "d"));
        md.handle(PointerEvent::Click(a));
        md.handle(PointerEvent::Click(c));
        md.events_mut().drain();

        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::DragEnter(d));
        let marked = md.gesture().unwrap().marker().marked().to_vec();
        assert_eq!(marked, vec![d, id(&md, "e")]);
        assert_eq!(md.gesture().unwrap().last_mark(), Some((ContainerId(0), 3)));

        assert!(md.handle(PointerEvent::Drop(d)).is_handled());
        assert_eq!(md.phase(), GesturePhase::Dropped);
        assert_eq!(keys(&md, 0), vec!["b", "d", "e", "a", "c"]);

        md.handle(PointerEvent::DragEnd(DropEffect::Move));
        assert_eq!(md.phase(), GesturePhase::Idle);
        assert!(md.board().containers()[0]
            .children()
            .iter()
            .all(|i| !i.is_drop_target() && !i.flags().contains(ItemFlags::DRAG_STARTED)));
        // Default policy keeps the selection.
        assert_eq!(md.selection().len(), 2);
        assert_eq!(
            md.events_mut().drain(),
            vec![
                "decorate a n=2",
                "drop d perm=[1, 3, 4, 0, 2] foreign=0",
                "drop_after b,d,e,a,c",
                "undecorate a",
            ]
        );
    }

    #[test]
    fn drop_callback_sees_pre_drop_board() {
        struct Snap(Vec<Vec<String>>);
        impl DropEvents for Snap {
            fn drop(&mut self, board: &Board, _target: ItemId, _plan: &DropPlan) {
                self.0.push(board.order_snapshot().containers[0].keys.clone());
            }
            fn drop_after(&mut self, board: &Board) {
                self.0.push(board.order_snapshot().containers[0].keys.clone());
            }
        }
        let mut board = Board::new();
        let c = board.add_container("l");
        let a = board.push_item(c, "a").unwrap();
        let b = board.push_item(c, "b").unwrap();
        let mut md = Multidrop::new(board, Snap(Vec::new()), MultidropConfig::default());
        md.handle(PointerEvent::Click(a));
        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::Drop(b));
        assert_eq!(md.events().0, vec![vec!["a", "b"], vec!["b", "a"]]);
    }

    #[test]
    fn clear_policy_unselects_everything() {
        let cfg = MultidropConfig::default().with_clear_selection_after_drop(true);
        let mut md = engine(&[&["a", "b", "c"]], cfg);
        let (a, b, c) = (id(&md, "a"), id(&md, "b"), id(&md, "c"));
        md.handle(PointerEvent::Click(b));
        md.handle(PointerEvent::Click(a));
        md.events_mut().drain();

        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::Drop(c));
        md.handle(PointerEvent::DragEnd(DropEffect::Move));

        assert!(md.selection().is_empty());
        assert!(!md.board().item(a).unwrap().is_selected());
        assert!(!md.listeners().is_registered(ListenerGroup::Drag));
        let log = md.events_mut().drain();
        assert_eq!(&log[log.len() - 2..], &["unselect b", "unselect a"]);
    }

    #[test]
    fn cancel_restores_idle_without_reorder() {
        let mut md = engine(&[&["a", "b", "c"]], MultidropConfig::default());
        let (a, c) = (id(&md, "a"), id(&md, "c"));
        md.handle(PointerEvent::Click(a));
        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::DragEnter(c));
        assert!(md.board().item(c).unwrap().is_drop_target());

        assert!(md.handle(PointerEvent::Cancel).is_handled());
        assert_eq!(md.phase(), GesturePhase::Idle);
        assert!(!md.board().item(c).unwrap().is_drop_target());
        assert_eq!(keys(&md, 0), vec!["a", "b", "c"]);
        assert_eq!(md.handle(PointerEvent::Cancel), EventOutcome::Ignored);
    }

    #[test]
    fn placeholder_cannot_start_a_drag() {
        let mut board = Board::new();
        let c = board.add_container("l");
        let empty = board.push_sentinel(c, "empty").unwrap();
        let cfg = MultidropConfig::default().with_select_by_drag(true);
        let mut md = Multidrop::new(board, Recorder::default(), cfg);
        assert_eq!(md.handle(PointerEvent::DragStart(empty)), EventOutcome::Rejected);
        assert_eq!(md.phase(), GesturePhase::Idle);
        assert!(md.selection().is_empty());
        assert!(md.events_mut().drain().is_empty());
    }

    #[test]
    fn second_start_cancels_stale_gesture() {
        let cfg = MultidropConfig::default()
            .with_select_by_click(false)
            .with_select_by_drag(true);
        let mut md = engine(&[&["a", "b", "c"]], cfg);
        let (a, b, c) = (id(&md, "a"), id(&md, "b"), id(&md, "c"));
        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::DragEnter(c));
        md.handle(PointerEvent::DragStart(b));
        assert_eq!(md.gesture().unwrap().origin(), b);
        assert!(!md.board().item(c).unwrap().is_drop_target());
    }

    #[test]
    fn events_out_of_gesture_are_ignored() {
        let cfg = MultidropConfig::default().with_select_by_drag(true);
        let mut md = engine(&[&["a", "b"]], cfg);
        let a = id(&md, "a");
        assert_eq!(md.handle(PointerEvent::DragEnter(a)), EventOutcome::Ignored);
        assert_eq!(md.handle(PointerEvent::DragOver(a)), EventOutcome::Ignored);
        assert_eq!(md.handle(PointerEvent::DragLeave(a)), EventOutcome::Ignored);
        assert_eq!(md.handle(PointerEvent::Drop(a)), EventOutcome::Ignored);
        assert_eq!(
            md.handle(PointerEvent::DragEnd(DropEffect::None)),
            EventOutcome::Ignored
        );
    }

    #[test]
    fn dispose_releases_everything() {
        let mut md = engine(&[&["a", "b"]], MultidropConfig::default());
        let (a, b) = (id(&md, "a"), id(&md, "b"));
        md.handle(PointerEvent::Click(a));
        md.handle(PointerEvent::DragStart(a));
        md.handle(PointerEvent::DragEnter(b));
        let (board, mut events) = md.dispose();
        for item in board.containers()[0].children() {
            assert!(item.flags().is_empty(), "{} still flagged", item.key());
        }
        // Disposal does not report unselects.
        assert_eq!(events.drain(), vec!["select a", "decorate a n=1"]);
    }
}
