//! Transition dispatcher: one lifecycle call per live key per cycle.
//!
//! Walks the merged order and issues the matching engine calls. Enter and
//! update callbacks receive the node's index in the new order; leave
//! callbacks receive the index from the previous order, since the key is
//! absent from the new one. A callback error aborts the remainder of the
//! pass; transitions already dispatched keep running.

use hashbrown::HashMap;

use crate::error::GroupError;
use crate::lifecycle::Lifecycle;
use crate::node::GroupNode;
use crate::schema::GroupSchema;

pub fn dispatch<S: GroupSchema>(
    schema: &S,
    nodes: &mut HashMap<S::Key, GroupNode<S::Key, S::Datum>>,
    merged_keys: &[S::Key],
    prev_index: &HashMap<S::Key, usize>,
    next_index: &HashMap<S::Key, usize>,
    now: f64,
) -> Result<(), GroupError> {
    for key in merged_keys {
        let Some(node) = nodes.get_mut(key) else {
            continue;
        };
        let fault = |source| GroupError::Callback {
            key: format!("{key:?}"),
            source,
        };

        match node.lifecycle {
            Lifecycle::Enter => {
                let Some(&i) = next_index.get(key) else {
                    continue;
                };
                let initial = schema.start(&node.data, i).map_err(fault)?;
                node.set_state(initial);
                let plan = schema.enter(&node.data, i).map_err(fault)?;
                node.transition(plan, now);
            }
            Lifecycle::Leave => {
                let Some(&i) = prev_index.get(key) else {
                    continue;
                };
                let plan = schema.leave(&node.data, i).map_err(fault)?;
                node.transition(plan, now);
            }
            Lifecycle::Update => {
                let Some(&i) = next_index.get(key) else {
                    continue;
                };
                let plan = schema.update(&node.data, i).map_err(fault)?;
                node.transition(plan, now);
            }
        }
    }
    Ok(())
}
