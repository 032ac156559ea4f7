//! Singleton adapter: show/hide one conceptual node through the group
//! pipeline.
//!
//! Visibility maps to a one-element or empty snapshot bound to a constant
//! synthetic key, so hiding drives an ordinary Leave classification and the
//! exit animation runs before the node disappears.

use std::sync::Arc;

use kinet_api_core::{NodeState, TransitionPlan};
use kinet_transition_core::{Interpolation, Numeric};

use crate::controller::{GroupController, Snapshot};
use crate::error::GroupError;
use crate::node::GroupNode;
use crate::schema::{GroupSchema, SchemaResult};

const SINGLE_KEY: u8 = 0;

/// Lifecycle specs for the single node. `start` is required; the phase
/// callbacks default to no-op plans.
pub trait SingleSpec {
    fn start(&self) -> SchemaResult<NodeState>;

    fn enter(&self) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    fn update(&self) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    fn leave(&self) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::None)
    }

    fn interpolation(&self) -> Arc<dyn Interpolation> {
        Arc::new(Numeric)
    }
}

struct SingleSchema<T>(T);

impl<T: SingleSpec> GroupSchema for SingleSchema<T> {
    type Datum = ();
    type Key = u8;

    fn key(&self, _datum: &(), _index: usize) -> u8 {
        SINGLE_KEY
    }

    fn start(&self, _datum: &(), _index: usize) -> SchemaResult<NodeState> {
        self.0.start()
    }

    fn enter(&self, _datum: &(), _index: usize) -> SchemaResult<TransitionPlan> {
        self.0.enter()
    }

    fn update(&self, _datum: &(), _index: usize) -> SchemaResult<TransitionPlan> {
        self.0.update()
    }

    fn leave(&self, _datum: &(), _index: usize) -> SchemaResult<TransitionPlan> {
        self.0.leave()
    }

    fn interpolation(&self) -> Arc<dyn Interpolation> {
        self.0.interpolation()
    }
}

pub struct SingleController<T: SingleSpec> {
    inner: GroupController<SingleSchema<T>>,
    visible: bool,
}

impl<T: SingleSpec> SingleController<T> {
    pub fn new(spec: T) -> Self {
        Self {
            inner: GroupController::new(SingleSchema(spec)),
            visible: false,
        }
    }

    /// Show or hide the node. Every call is a fresh snapshot, so repeating
    /// `true` re-dispatches the update phase, as a repeated datum would in a
    /// group.
    pub fn set_visible(&mut self, visible: bool, now: f64) -> Result<(), GroupError> {
        self.visible = visible;
        let snapshot: Snapshot<()> = if visible {
            Arc::from(vec![()])
        } else {
            Arc::from(Vec::new())
        };
        self.inner.set_data(snapshot, now).map(|_| ())
    }

    pub fn tick(&mut self, now: f64) {
        self.inner.tick(now);
    }

    /// The node while it is live (visible, or leaving and still animating).
    pub fn node(&self) -> Option<&GroupNode<u8, ()>> {
        self.inner.nodes().next()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.inner.is_torn_down()
    }
}
