//! JSON helpers for specs and states.
//!
//! Hosts frequently author lifecycle specs as JSON blobs. The plan shape is
//! polymorphic on the wire (a single spec object, an array of staged specs, or
//! null), so it is normalized here into the `TransitionPlan` tagged variant
//! instead of leaking shape inspection into the engine.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::spec::{TransitionPlan, TransitionSpec};
use crate::state::NodeState;

/// Errors produced while parsing spec/state JSON blobs.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid node state: {0}")]
    State(String),
    #[error("invalid transition spec: {0}")]
    Spec(String),
    #[error("invalid transition plan: expected object, array, or null, got {0}")]
    PlanShape(&'static str),
}

/// Parse a `NodeState` from a JSON object of attribute -> tagged value.
pub fn parse_state_json(raw: &str) -> Result<NodeState, JsonError> {
    serde_json::from_str(raw).map_err(|e| JsonError::State(e.to_string()))
}

/// Parse a single `TransitionSpec`.
pub fn parse_spec_json(raw: &str) -> Result<TransitionSpec, JsonError> {
    serde_json::from_str(raw).map_err(|e| JsonError::Spec(e.to_string()))
}

/// Parse a `TransitionPlan` from its polymorphic wire shape.
pub fn parse_plan_json(raw: &str) -> Result<TransitionPlan, JsonError> {
    let value: JsonValue =
        serde_json::from_str(raw).map_err(|e| JsonError::Spec(e.to_string()))?;
    match value {
        JsonValue::Null => Ok(TransitionPlan::None),
        JsonValue::Object(_) => {
            let spec: TransitionSpec =
                serde_json::from_value(value).map_err(|e| JsonError::Spec(e.to_string()))?;
            Ok(TransitionPlan::Single(spec))
        }
        JsonValue::Array(items) => {
            let mut specs = Vec::with_capacity(items.len());
            for item in items {
                let spec: TransitionSpec =
                    serde_json::from_value(item).map_err(|e| JsonError::Spec(e.to_string()))?;
                specs.push(spec);
            }
            Ok(TransitionPlan::Staged(specs))
        }
        JsonValue::Bool(_) => Err(JsonError::PlanShape("bool")),
        JsonValue::Number(_) => Err(JsonError::PlanShape("number")),
        JsonValue::String(_) => Err(JsonError::PlanShape("string")),
    }
}
