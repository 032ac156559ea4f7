//! Key classifier: split a snapshot change into enter/update/leave patches.
//!
//! Classification is pure: it only computes the next key order, its index,
//! and the patch list. The controller applies patches to the node map, which
//! keeps the single-owner invariant on node bookkeeping explicit.

use hashbrown::HashMap;

use crate::error::GroupError;
use crate::schema::GroupSchema;

/// One bookkeeping change for a node, keyed by its stable key.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch<K, D> {
    /// Key appears for the first time: create a node with this datum,
    /// lifecycle Enter.
    Create { key: K, data: D },
    /// Key persists: refresh the datum, lifecycle Update.
    Update { key: K, data: D },
    /// Key is gone from the new snapshot: lifecycle Leave, datum untouched.
    Leave { key: K },
}

#[derive(Debug)]
pub struct Classification<K, D> {
    pub next_keys: Vec<K>,
    pub next_index: HashMap<K, usize>,
    pub patches: Vec<Patch<K, D>>,
}

/// Classify `next_data` against the previous key order. `prev_index` must be
/// the index of `prev_keys` (the controller reuses it for dispatch).
///
/// Precondition: the schema's key accessor must produce unique keys within
/// one snapshot; a collision returns `GroupError::DuplicateKey`.
pub fn classify<S: GroupSchema>(
    schema: &S,
    prev_keys: &[S::Key],
    prev_index: &HashMap<S::Key, usize>,
    next_data: &[S::Datum],
) -> Result<Classification<S::Key, S::Datum>, GroupError> {
    let mut next_keys = Vec::with_capacity(next_data.len());
    let mut next_index: HashMap<S::Key, usize> = HashMap::with_capacity(next_data.len());
    let mut patches = Vec::new();

    for (i, datum) in next_data.iter().enumerate() {
        let key = schema.key(datum, i);
        if next_index.insert(key.clone(), i).is_some() {
            return Err(GroupError::DuplicateKey {
                key: format!("{key:?}"),
            });
        }
        next_keys.push(key.clone());

        if !prev_index.contains_key(&key) {
            patches.push(Patch::Create {
                key,
                data: datum.clone(),
            });
        }
    }

    for key in prev_keys {
        match next_index.get(key) {
            Some(&i) => patches.push(Patch::Update {
                key: key.clone(),
                data: next_data[i].clone(),
            }),
            None => patches.push(Patch::Leave { key: key.clone() }),
        }
    }

    Ok(Classification {
        next_keys,
        next_index,
        patches,
    })
}
