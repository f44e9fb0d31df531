#![forbid(unsafe_code)]

//! Engine configuration.

use crate::board::ItemFlags;

/// How a pointer gesture toggles selection membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionTrigger {
    /// Single click toggles.
    Click,
    /// Double click toggles.
    DoubleClick,
    /// No click selection; only drags select.
    None,
}

/// Class names a presentation layer may use to render item flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Selected items (drag sources).
    pub selected: String,
    /// Pending drop positions.
    pub over: String,
    /// Items being dragged.
    pub drag_started: String,
    /// Position after which foreign items will be added.
    pub expand: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            selected: "drag_selected".to_string(),
            over: "drag_target".to_string(),
            drag_started: "drag_started".to_string(),
            expand: "drag_target_expand".to_string(),
        }
    }
}

impl ClassNames {
    /// Class names for every flag set in `flags`.
    ///
    /// Selected and drop-target classes can overlap on the same item.
    #[must_use]
    pub fn for_flags(&self, flags: ItemFlags) -> Vec<&str> {
        let table = [
            (ItemFlags::SELECTED, &self.selected),
            (ItemFlags::DROP_TARGET, &self.over),
            (ItemFlags::DRAG_STARTED, &self.drag_started),
            (ItemFlags::EXPAND, &self.expand),
        ];
        table
            .into_iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

/// Options recognised by [`Multidrop`](crate::Multidrop).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultidropConfig {
    /// Starting a drag selects the dragged item (default: false).
    pub select_by_drag: bool,
    /// A single click toggles selection (default: true).
    pub select_by_click: bool,
    /// A double click toggles selection (default: false).
    ///
    /// Ignored while `select_by_click` is set.
    pub select_by_dblclick: bool,
    /// Clear the selection once a gesture ends (default: false).
    pub clear_selection_after_drop: bool,
    /// Presentation class names.
    pub classes: ClassNames,
}

impl Default for MultidropConfig {
    fn default() -> Self {
        Self {
            select_by_drag: false,
            select_by_click: true,
            select_by_dblclick: false,
            clear_selection_after_drop: false,
            classes: ClassNames::default(),
        }
    }
}

impl MultidropConfig {
    /// Select the source item when a drag starts.
    #[must_use]
    pub fn with_select_by_drag(mut self, on: bool) -> Self {
        self.select_by_drag = on;
        self
    }

    /// Toggle selection with a single click.
    #[must_use]
    pub fn with_select_by_click(mut self, on: bool) -> Self {
        self.select_by_click = on;
        self
    }

    /// Toggle selection with a double click.
    #[must_use]
    pub fn with_select_by_dblclick(mut self, on: bool) -> Self {
        self.select_by_dblclick = on;
        self
    }

    /// Clear the selection when a gesture ends.
    #[must_use]
    pub fn with_clear_selection_after_drop(mut self, on: bool) -> Self {
        self.clear_selection_after_drop = on;
        self
    }

    /// Replace the presentation class names.
    #[must_use]
    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Which click gesture toggles selection. Single click wins when both
    /// click options are set.
    #[must_use]
    pub fn selection_trigger(&self) -> SelectionTrigger {
        if self.select_by_click {
            SelectionTrigger::Click
        } else if self.select_by_dblclick {
            SelectionTrigger::DoubleClick
        } else {
            SelectionTrigger::None
        }
    }
}
