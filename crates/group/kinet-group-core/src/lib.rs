//! kinet Group Core
//!
//! The reconciliation-and-drive engine: given the previous keyed node set and
//! a new data snapshot, classify every key as enter/update/leave, merge the
//! two key orderings into one stable display order, dispatch lifecycle
//! transitions to each node's engine, and prune settled leavers on every tick
//! until the clock can stop.
//!
//! The view layer reads the ordered node list (`GroupController::nodes`) after
//! each reconciliation and tick; it never mutates nodes.

pub mod classify;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod keys;
pub mod lifecycle;
pub mod merge;
pub mod node;
pub mod schema;
pub mod single;

pub use classify::{classify, Classification, Patch};
pub use controller::{GroupController, Snapshot};
pub use error::{CallbackError, GroupError};
pub use keys::key_index;
pub use lifecycle::Lifecycle;
pub use merge::{InterleavedMerge, KeyMerge};
pub use node::GroupNode;
pub use schema::{GroupSchema, SchemaResult};
pub use single::{SingleController, SingleSpec};
pub use kinet_api_core::{Ease, NodeState, Timing, TransitionPlan, TransitionSpec, Value};
