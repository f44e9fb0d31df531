#![forbid(unsafe_code)]

//! JSON scenarios: a board layout plus a scripted event stream.
//!
//! ```json
//! {
//!   "config": { "clear_selection_after_drop": true },
//!   "containers": [
//!     { "name": "favorites", "items": ["a", "b", "c"], "placeholder": "fav-empty" }
//!   ],
//!   "events": [
//!     { "click": "a" },
//!     { "drag_start": "a" },
//!     { "drag_enter": "c" },
//!     { "drop": "c" },
//!     { "drag_end": "move" }
//!   ]
//! }
//! ```
//!
//! Items are addressed by key; keys must be unique across the whole board.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Error |
//! |---------|-------|-------|
//! | Unreadable file | I/O | `ScenarioError::Io` |
//! | Malformed JSON | Syntax or shape | `ScenarioError::Parse` |
//! | Key used twice | Layout | `ScenarioError::DuplicateKey` |
//! | Event names a missing key | Script | `ScenarioError::UnknownItem` |

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

use multidrop_core::{
    Board, BoardError, ContainerId, DropEffect, DropEvents, EventOutcome, Multidrop,
    MultidropConfig, OrderSnapshot, PointerEvent,
};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while loading or replaying a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// Reading the scenario failed.
    Io(std::io::Error),
    /// The scenario is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// Event `step` names a key that is not on the board.
    UnknownItem { step: usize, key: String },
    /// The board rejected an item for a container that does not exist.
    UnknownContainer(ContainerId),
    /// Two items share a key.
    DuplicateKey(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "I/O error: {e}"),
            ScenarioError::Parse(e) => write!(f, "invalid scenario: {e}"),
            ScenarioError::UnknownItem { step, key } => {
                write!(f, "event {step}: unknown item {key:?}")
            }
            ScenarioError::UnknownContainer(id) => write!(f, "unknown container: {id}"),
            ScenarioError::DuplicateKey(key) => write!(f, "duplicate item key {key:?}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(e) => Some(e),
            ScenarioError::Parse(e) => Some(e),
            ScenarioError::UnknownItem { .. } => None,
            ScenarioError::UnknownContainer(_) => None,
            ScenarioError::DuplicateKey(_) => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Parse(e)
    }
}

impl From<BoardError> for ScenarioError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::UnknownContainer(id) => ScenarioError::UnknownContainer(id),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

// ─────────────────────────────────────────────────────────────────────────────
// Scenario model
// ─────────────────────────────────────────────────────────────────────────────

/// One container of the initial layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    pub name: String,
    /// Non-draggable children placed before the items.
    pub headers: Vec<String>,
    /// Draggable item keys, in order.
    pub items: Vec<String>,
    /// Key of the empty-list placeholder, if the container declares one.
    pub placeholder: Option<String>,
}

/// A scripted pointer event, addressing items by key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptedEvent {
    Click(String),
    DoubleClick(String),
    DragStart(String),
    DragEnter(String),
    DragOver(String),
    DragLeave(String),
    Drop(String),
    DragEnd(DropEffect),
    Cancel,
}

impl ScriptedEvent {
    /// Translate keys into item ids on `board`.
    fn resolve(&self, board: &Board, step: usize) -> ScenarioResult<PointerEvent> {
        let lookup = |key: &str| {
            board
                .find_by_key(key)
                .ok_or_else(|| ScenarioError::UnknownItem {
                    step,
                    key: key.to_string(),
                })
        };
        Ok(match self {
            Self::Click(k) => PointerEvent::Click(lookup(k)?),
            Self::DoubleClick(k) => PointerEvent::DoubleClick(lookup(k)?),
            Self::DragStart(k) => PointerEvent::DragStart(lookup(k)?),
            Self::DragEnter(k) => PointerEvent::DragEnter(lookup(k)?),
            Self::DragOver(k) => PointerEvent::DragOver(lookup(k)?),
            Self::DragLeave(k) => PointerEvent::DragLeave(lookup(k)?),
            Self::Drop(k) => PointerEvent::Drop(lookup(k)?),
            Self::DragEnd(effect) => PointerEvent::DragEnd(*effect),
            Self::Cancel => PointerEvent::Cancel,
        })
    }
}

/// Layout, options and script of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config: MultidropConfig,
    pub containers: Vec<ContainerSpec>,
    pub events: Vec<ScriptedEvent>,
}

impl Scenario {
    pub fn from_json(text: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader(mut reader: impl Read) -> ScenarioResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }

    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the initial board.
    pub fn board(&self) -> ScenarioResult<Board> {
        let mut board = Board::new();
        let mut seen = HashSet::new();
        let mut claim = |key: &str| {
            if seen.insert(key.to_string()) {
                Ok(())
            } else {
                Err(ScenarioError::DuplicateKey(key.to_string()))
            }
        };

        for layout in &self.containers {
            let c = board.add_container(layout.name.clone());
            for header in &layout.headers {
                claim(header)?;
                board.push_structural(c, header.clone())?;
            }
            if let Some(placeholder) = &layout.placeholder {
                claim(placeholder)?;
                board.push_sentinel(c, placeholder.clone())?;
            }
            for key in &layout.items {
                claim(key)?;
                board.push_item(c, key.clone())?;
            }
        }
        Ok(board)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Replay
// ─────────────────────────────────────────────────────────────────────────────

/// Saves the whole board after every drop, the way a host persists group
/// orders.
#[derive(Debug, Default)]
pub struct OrderRecorder {
    pub drops: Vec<OrderSnapshot>,
}

impl DropEvents for OrderRecorder {
    fn drop_after(&mut self, board: &Board) {
        tracing::debug!(drop = self.drops.len(), "order saved");
        self.drops.push(board.order_snapshot());
    }
}

/// Serializable mirror of [`EventOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Handled,
    Ignored,
    Rejected,
}

impl From<EventOutcome> for Outcome {
    fn from(outcome: EventOutcome) -> Self {
        match outcome {
            EventOutcome::Handled => Outcome::Handled,
            EventOutcome::Ignored => Outcome::Ignored,
            EventOutcome::Rejected => Outcome::Rejected,
        }
    }
}

/// Result of replaying a scenario.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Outcome of each scripted event.
    pub outcomes: Vec<Outcome>,
    /// Board order saved after each drop.
    pub drops: Vec<OrderSnapshot>,
    /// Board order at the end of the script.
    pub final_order: OrderSnapshot,
    /// Keys still selected at the end, in selection order.
    pub selection: Vec<String>,
}

/// Run `scenario` through a fresh engine.
pub fn replay(scenario: &Scenario) -> ScenarioResult<Report> {
    let board = scenario.board()?;
    let mut md = Multidrop::new(board, OrderRecorder::default(), scenario.config.clone());

    let mut outcomes = Vec::with_capacity(scenario.events.len());
    for (step, scripted) in scenario.events.iter().enumerate() {
        let event = scripted.resolve(md.board(), step)?;
        let outcome = md.handle(event);
        tracing::trace!(step, ?event, ?outcome, "replayed");
        outcomes.push(outcome.into());
    }

    let selection = md
        .selection()
        .items()
        .iter()
        .filter_map(|&id| md.board().item(id).map(|i| i.key().to_string()))
        .collect();
    let final_order = md.board().order_snapshot();
    let (_, recorder) = md.dispose();

    Ok(Report {
        outcomes,
        drops: recorder.drops,
        final_order,
        selection,
    })
}
