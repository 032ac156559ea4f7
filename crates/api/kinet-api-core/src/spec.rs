//! Transition specs: what a lifecycle callback asks a node's engine to do.
//!
//! A spec names target attribute values plus timing (delay, duration, ease).
//! Callbacks may return one spec or a staged sequence of them; the engine is
//! the only component that interprets the shape, so the plan is modeled as an
//! explicit tagged variant rather than by inspecting dynamic shapes.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Easing applied to a track's normalized progress.
/// The cubic presets are the usual CSS control points; `Bezier` takes
/// (x1, y1, x2, y2) directly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    CubicIn,
    CubicOut,
    CubicInOut,
    Bezier([f32; 4]),
}

impl Ease {
    /// Cubic-bezier control points for this ease, or `None` for linear.
    #[inline]
    pub fn control_points(&self) -> Option<[f32; 4]> {
        match self {
            Ease::Linear => None,
            Ease::CubicIn => Some([0.55, 0.055, 0.675, 0.19]),
            Ease::CubicOut => Some([0.215, 0.61, 0.355, 1.0]),
            Ease::CubicInOut => Some([0.645, 0.045, 0.355, 1.0]),
            Ease::Bezier(ctrl) => Some(*ctrl),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

/// Timing for one spec, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default)]
    pub delay: f32,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub ease: Ease,
}

fn default_duration() -> f32 {
    250.0
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: default_duration(),
            ease: Ease::Linear,
        }
    }
}

/// One transition request: drive each named attribute toward its target value
/// under a shared timing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    #[serde(default)]
    pub targets: HashMap<String, Value>,
    #[serde(default)]
    pub timing: Timing,
}

impl TransitionSpec {
    pub fn new(timing: Timing) -> Self {
        Self {
            targets: HashMap::new(),
            timing,
        }
    }

    /// Builder-style target insertion.
    pub fn target(mut self, attr: impl Into<String>, value: Value) -> Self {
        self.targets.insert(attr.into(), value);
        self
    }
}

/// What a lifecycle callback returns: nothing, a single spec, or a staged
/// sequence where each stage starts once the previous one has finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransitionPlan {
    #[default]
    None,
    Single(TransitionSpec),
    Staged(Vec<TransitionSpec>),
}

impl TransitionPlan {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, TransitionPlan::None) || matches!(self, TransitionPlan::Staged(v) if v.is_empty())
    }

    /// Flatten into the ordered stage list.
    pub fn into_stages(self) -> Vec<TransitionSpec> {
        match self {
            TransitionPlan::None => Vec::new(),
            TransitionPlan::Single(spec) => vec![spec],
            TransitionPlan::Staged(specs) => specs,
        }
    }
}

impl From<TransitionSpec> for TransitionPlan {
    fn from(spec: TransitionSpec) -> Self {
        TransitionPlan::Single(spec)
    }
}

impl From<Vec<TransitionSpec>> for TransitionPlan {
    fn from(specs: Vec<TransitionSpec>) -> Self {
        TransitionPlan::Staged(specs)
    }
}
