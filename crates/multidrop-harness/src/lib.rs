#![forbid(unsafe_code)]

//! Headless scenario runner for `multidrop-core`.
//!
//! Loads a JSON [`Scenario`], replays its scripted pointer events through a
//! fresh engine and reports the order saved after each drop.
//!
//! ```
//! use multidrop_harness::{Scenario, replay};
//!
//! let scenario = Scenario::from_json(r#"{
//!     "containers": [{ "name": "list", "items": ["a", "b", "c"] }],
//!     "events": [
//!         { "click": "a" },
//!         { "drag_start": "a" },
//!         { "drop": "c" },
//!         { "drag_end": "move" }
//!     ]
//! }"#).unwrap();
//!
//! let report = replay(&scenario).unwrap();
//! assert_eq!(report.drops.len(), 1);
//! assert_eq!(report.final_order.keys_of("list"), Some(vec!["b", "c", "a"]));
//! ```

pub mod scenario;

pub use scenario::{
    ContainerSpec, OrderRecorder, Outcome, Report, Scenario, ScenarioError, ScenarioResult,
    ScriptedEvent, replay,
};
