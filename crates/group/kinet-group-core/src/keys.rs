//! Key index: position lookup for a key order.

use std::hash::Hash;

use hashbrown::HashMap;

/// Map each key to its position in `keys`. Pure; rebuilt every
/// reconciliation so positional context stays consistent with the order it
/// was derived from.
pub fn key_index<K: Eq + Hash + Clone>(keys: &[K]) -> HashMap<K, usize> {
    let mut index = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        index.insert(key.clone(), i);
    }
    index
}
