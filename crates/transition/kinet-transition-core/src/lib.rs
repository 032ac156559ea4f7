//! kinet Transition Core (host-agnostic)
//!
//! The per-node transition engine: each `TransitionNode` owns an attribute
//! state map and a set of scheduled tracks, advanced by the host's clock via
//! `step(now)`. Also home to the `Interval` primitive that gates the group
//! drive loop, and the interpolation seam (`Interpolation` trait + `Numeric`
//! default).

pub mod interp;
pub mod interval;
pub mod node;

pub use interp::{Interpolation, Interpolator, Numeric};
pub use interval::{Interval, IntervalState};
pub use node::TransitionNode;
pub use kinet_api_core::{Ease, NodeState, Timing, TransitionPlan, TransitionSpec, Value};
