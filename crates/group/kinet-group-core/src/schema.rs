//! GroupSchema: the application's side of the contract.
//!
//! One schema describes how a group of data-bound nodes is keyed and how each
//! lifecycle phase should animate. `key` and `start` are required; the phase
//! callbacks default to no-op plans, and the interpolation strategy defaults
//! to component-wise numeric lerp.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use kinet_api_core::{NodeState, TransitionPlan};
use kinet_transition_core::{Interpolation, Numeric};

use crate::error::CallbackError;

/// Result of an application callback; any error aborts the dispatch pass and
/// is surfaced as `GroupError::Callback`.
pub type SchemaResult<T> = Result<T, CallbackError>;

pub trait GroupSchema {
    type Datum: Clone;
    type Key: Eq + Hash + Clone + fmt::Debug;

    /// Stable key for a datum. Must be unique within one snapshot; duplicate
    /// keys are a caller error and reconciliation rejects the snapshot.
    fn key(&self, datum: &Self::Datum, index: usize) -> Self::Key;

    /// Initial state for a node entering the group, applied immediately
    /// before its enter transition begins.
    fn start(&self, datum: &Self::Datum, index: usize) -> SchemaResult<NodeState>;

    /// Transition toward which an entering node animates. Index is the
    /// node's position in the new snapshot.
    fn enter(&self, _datum: &Self::Datum, _index: usize) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    /// Transition for a node present in both snapshots. Index is the node's
    /// position in the new snapshot.
    fn update(&self, _datum: &Self::Datum, _index: usize) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    /// Exit transition for a node absent from the new snapshot. Index is the
    /// node's position in the last snapshot that contained it.
    fn leave(&self, _datum: &Self::Datum, _index: usize) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    /// Interpolation strategy shared by every node in the group.
    fn interpolation(&self) -> Arc<dyn Interpolation> {
        Arc::new(Numeric)
    }
}
