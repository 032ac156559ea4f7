//! kinet-api-core: shared contract types for the kinet transition-group engine.
//!
//! This crate carries the vocabulary spoken across the crate boundary between
//! the group reconciler and per-node transition engines: attribute `Value`s,
//! the `NodeState` attribute map, transition specs/timing/easing, and the
//! `TransitionPlan` shape lifecycle callbacks return.

pub mod json;
pub mod spec;
pub mod state;
pub mod value;

pub use json::{parse_plan_json, parse_spec_json, parse_state_json, JsonError};
pub use spec::{Ease, Timing, TransitionPlan, TransitionSpec};
pub use state::NodeState;
pub use value::{Value, ValueKind};
