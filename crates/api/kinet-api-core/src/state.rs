//! NodeState: the attribute map a transition engine owns and mutates.
//!
//! Keys are attribute names ("x", "opacity", "fill", ...); values are the
//! current interpolated `Value` for that attribute. The group controller never
//! writes attributes directly; it hands whole-state patches to the engine.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeState {
    attrs: HashMap<String, Value>,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one attribute.
    #[inline]
    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.attrs.get(attr)
    }

    /// Write one attribute, returning the previous value if any.
    #[inline]
    pub fn set(&mut self, attr: impl Into<String>, value: Value) -> Option<Value> {
        self.attrs.insert(attr.into(), value)
    }

    /// Merge a patch into this state; attributes in `patch` overwrite,
    /// attributes absent from `patch` are left untouched.
    pub fn apply(&mut self, patch: NodeState) {
        for (attr, value) in patch.attrs {
            self.attrs.insert(attr, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<S: Into<String>, const N: usize> From<[(S, Value); N]> for NodeState {
    fn from(pairs: [(S, Value); N]) -> Self {
        let mut state = NodeState::new();
        for (attr, value) in pairs {
            state.set(attr, value);
        }
        state
    }
}

impl FromIterator<(String, Value)> for NodeState {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}
