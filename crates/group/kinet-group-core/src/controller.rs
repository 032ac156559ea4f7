//! GroupController: orchestration and the per-tick drive loop.
//!
//! On every new snapshot: identity check, classify, merge, apply patches,
//! dispatch, and make sure the interval is running. On every admitted tick:
//! advance all engines, prune leavers that settled, and stop the interval
//! once nothing is pending. All node-map mutation happens here.

use std::sync::Arc;

use hashbrown::HashMap;
use log::{debug, trace};

use kinet_transition_core::Interval;

use crate::classify::{classify, Patch};
use crate::dispatch::dispatch;
use crate::error::GroupError;
use crate::keys::key_index;
use crate::lifecycle::Lifecycle;
use crate::merge::{InterleavedMerge, KeyMerge};
use crate::node::{GroupNode, NodeFactory};
use crate::schema::GroupSchema;

/// A data snapshot. Reconciliation is keyed on snapshot identity
/// (`Arc::ptr_eq`), not contents: mutating a buffer behind the same `Arc`
/// does not retrigger reconciliation; callers hand over a new snapshot.
pub type Snapshot<D> = Arc<[D]>;

pub struct GroupController<S: GroupSchema> {
    schema: S,
    factory: NodeFactory,
    merge: Box<dyn KeyMerge<S::Key>>,

    keys: Vec<S::Key>,
    nodes: HashMap<S::Key, GroupNode<S::Key, S::Datum>>,
    data: Option<Snapshot<S::Datum>>,

    interval: Interval,
    torn_down: bool,
}

impl<S: GroupSchema> GroupController<S> {
    pub fn new(schema: S) -> Self {
        Self::with_merge(schema, Box::new(InterleavedMerge))
    }

    /// Substitute the key order merge policy.
    pub fn with_merge(schema: S, merge: Box<dyn KeyMerge<S::Key>>) -> Self {
        let factory = NodeFactory::new(schema.interpolation());
        Self {
            schema,
            factory,
            merge,
            keys: Vec::new(),
            nodes: HashMap::new(),
            data: None,
            interval: Interval::new(),
            torn_down: false,
        }
    }

    /// Reconcile against a new snapshot. Returns `Ok(false)` when nothing was
    /// done: the controller is torn down, or the snapshot is the one already
    /// processed. A callback fault propagates after the bookkeeping for this
    /// cycle is in place; already-dispatched transitions keep running.
    pub fn set_data(&mut self, snapshot: Snapshot<S::Datum>, now: f64) -> Result<bool, GroupError> {
        if self.torn_down {
            return Ok(false);
        }
        if let Some(prev) = &self.data {
            if Arc::ptr_eq(prev, &snapshot) {
                return Ok(false);
            }
        }

        let prev_index = key_index(&self.keys);
        let classification = classify(&self.schema, &self.keys, &prev_index, &snapshot)?;

        for patch in classification.patches {
            match patch {
                Patch::Create { key, data } => {
                    self.nodes.insert(key.clone(), self.factory.node(key, data));
                }
                Patch::Update { key, data } => {
                    if let Some(node) = self.nodes.get_mut(&key) {
                        node.data = data;
                        node.lifecycle = Lifecycle::Update;
                    }
                }
                Patch::Leave { key } => {
                    if let Some(node) = self.nodes.get_mut(&key) {
                        node.lifecycle = Lifecycle::Leave;
                    }
                }
            }
        }

        let merged = self.merge.merge(
            &self.keys,
            &prev_index,
            &classification.next_keys,
            &classification.next_index,
        );
        debug!(
            "reconciled: {} prev keys, {} next keys, {} merged",
            self.keys.len(),
            classification.next_keys.len(),
            merged.len()
        );
        self.keys = merged;
        self.data = Some(snapshot);

        // New work arrived: Idle -> Running, or refresh the running epoch so
        // this cycle gets a fresh tick without double-scheduling.
        self.interval.restart(now);

        dispatch(
            &self.schema,
            &mut self.nodes,
            &self.keys,
            &prev_index,
            &classification.next_index,
            now,
        )?;
        Ok(true)
    }

    /// One drive-loop tick. No-op while torn down or Idle. Advances every
    /// engine to `now`, prunes leavers whose transitions settled, and stops
    /// the interval when no node is transitioning.
    pub fn tick(&mut self, now: f64) {
        if self.torn_down || !self.interval.tick() {
            return;
        }

        let mut pending = false;
        let mut retained = Vec::with_capacity(self.keys.len());
        for key in std::mem::take(&mut self.keys) {
            let Some(node) = self.nodes.get_mut(&key) else {
                continue;
            };
            node.step(now);
            let transitioning = node.is_transitioning();
            if transitioning {
                pending = true;
            }
            if node.lifecycle == Lifecycle::Leave && !transitioning {
                trace!("pruned settled leaver {key:?}");
                self.nodes.remove(&key);
            } else {
                retained.push(key);
            }
        }
        self.keys = retained;

        if !pending {
            self.interval.stop();
        }
    }

    /// The published list: live nodes in display order. Refreshed by every
    /// reconciliation and every tick; read-only for the view layer.
    pub fn nodes(&self) -> impl Iterator<Item = &GroupNode<S::Key, S::Datum>> {
        self.keys.iter().filter_map(|k| self.nodes.get(k))
    }

    /// Current display order.
    #[inline]
    pub fn keys(&self) -> &[S::Key] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether the drive loop clock is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.interval.is_running()
    }

    /// Terminal: stop the clock, cancel every in-flight transition, and
    /// ignore all later reconciliations and ticks.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.interval.stop();
        for node in self.nodes.values_mut() {
            node.stop_transitions();
        }
        debug!("torn down with {} live nodes", self.keys.len());
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
