//! Key order merge: one display order from two key orderings.
//!
//! The merge is a pluggable policy behind `KeyMerge`; the engine only relies
//! on the postcondition: the result is a permutation of `prev ∪ next` with
//! each key exactly once, deterministic for identical inputs, with entering
//! keys at their next-order position and leaving keys held near where they
//! last stood so exit animations do not make neighbors jump.

use std::hash::Hash;

use hashbrown::HashMap;

pub trait KeyMerge<K> {
    fn merge(
        &self,
        prev_keys: &[K],
        prev_index: &HashMap<K, usize>,
        next_keys: &[K],
        next_index: &HashMap<K, usize>,
    ) -> Vec<K>;
}

/// Default policy: walk the next order; before each surviving key, emit the
/// leaving keys whose nearest surviving successor in the previous order it
/// is. Leaving keys with no surviving successor trail at the end, in their
/// previous relative order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InterleavedMerge;

impl<K: Eq + Hash + Clone> KeyMerge<K> for InterleavedMerge {
    fn merge(
        &self,
        prev_keys: &[K],
        _prev_index: &HashMap<K, usize>,
        next_keys: &[K],
        next_index: &HashMap<K, usize>,
    ) -> Vec<K> {
        // Anchor each leaver to its nearest surviving successor, found with a
        // single reverse sweep over the previous order.
        let mut anchored: HashMap<K, Vec<K>> = HashMap::new();
        let mut tail: Vec<K> = Vec::new();
        let mut successor: Option<&K> = None;
        for key in prev_keys.iter().rev() {
            if next_index.contains_key(key) {
                successor = Some(key);
            } else {
                match successor {
                    Some(anchor) => anchored
                        .entry(anchor.clone())
                        .or_default()
                        .insert(0, key.clone()),
                    None => tail.insert(0, key.clone()),
                }
            }
        }

        let mut merged = Vec::with_capacity(prev_keys.len() + next_keys.len());
        for key in next_keys {
            if let Some(leavers) = anchored.remove(key) {
                merged.extend(leavers);
            }
            merged.push(key.clone());
        }
        merged.extend(tail);
        merged
    }
}
