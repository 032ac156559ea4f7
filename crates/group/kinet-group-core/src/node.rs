//! GroupNode: one animated element tracked by key across reconciliations.
//!
//! The controller owns key/data/lifecycle bookkeeping; the embedded
//! `TransitionNode` owns the interpolated state. Mutation of either side
//! funnels through the controller and dispatcher, so the view layer only
//! ever sees `&GroupNode`.

use std::sync::Arc;

use kinet_api_core::{NodeState, TransitionPlan};
use kinet_transition_core::{Interpolation, TransitionNode};

use crate::lifecycle::Lifecycle;

#[derive(Debug)]
pub struct GroupNode<K, D> {
    pub key: K,
    pub data: D,
    pub lifecycle: Lifecycle,
    engine: TransitionNode,
}

impl<K, D> GroupNode<K, D> {
    /// Current interpolated state, for rendering.
    #[inline]
    pub fn state(&self) -> &NodeState {
        self.engine.state()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_transitioning()
    }

    pub(crate) fn set_state(&mut self, patch: NodeState) {
        self.engine.set_state(patch);
    }

    pub(crate) fn transition(&mut self, plan: TransitionPlan, now: f64) {
        self.engine.transition(plan, now);
    }

    pub(crate) fn step(&mut self, now: f64) {
        self.engine.step(now);
    }

    pub(crate) fn stop_transitions(&mut self) {
        self.engine.stop_transitions();
    }
}

/// Builds nodes with the group's interpolation strategy held as a field, so
/// every node shares one strategy without any per-node type machinery.
#[derive(Clone)]
pub(crate) struct NodeFactory {
    interpolation: Arc<dyn Interpolation>,
}

impl NodeFactory {
    pub(crate) fn new(interpolation: Arc<dyn Interpolation>) -> Self {
        Self { interpolation }
    }

    pub(crate) fn node<K, D>(&self, key: K, data: D) -> GroupNode<K, D> {
        GroupNode {
            key,
            data,
            lifecycle: Lifecycle::Enter,
            engine: TransitionNode::new(Arc::clone(&self.interpolation)),
        }
    }
}
