//! TransitionNode: owns one node's interpolated state and in-flight tracks.
//!
//! The node is entirely host-driven: `transition` schedules tracks against the
//! caller's clock and `step(now)` advances them. A track's interpolator is
//! built lazily the first time the track is stepped at or after its begin
//! time, so delayed and staged tracks capture the state that is actually
//! current when they start, not the state at scheduling time.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use kinet_api_core::{Ease, NodeState, TransitionPlan, Value};

use crate::interp::{functions, Interpolation, Interpolator};

struct Track {
    attr: String,
    target: Value,
    begin_at: f64,
    end_at: f64,
    ease: Ease,
    interp: Option<Interpolator>,
}

pub struct TransitionNode {
    state: NodeState,
    tracks: Vec<Track>,
    interpolation: Arc<dyn Interpolation>,
}

impl fmt::Debug for TransitionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionNode")
            .field("state", &self.state)
            .field("tracks", &self.tracks.len())
            .finish()
    }
}

impl TransitionNode {
    /// The interpolation strategy is a constructor parameter stored as a
    /// field; every track this node ever runs is built through it.
    pub fn new(interpolation: Arc<dyn Interpolation>) -> Self {
        Self {
            state: NodeState::new(),
            tracks: Vec::new(),
            interpolation,
        }
    }

    #[inline]
    pub fn state(&self) -> &NodeState {
        &self.state
    }

    /// Immediately merge a patch into the state, outside any transition.
    pub fn set_state(&mut self, patch: NodeState) {
        self.state.apply(patch);
    }

    /// Schedule a plan against the caller's clock. Stages run back to back:
    /// each later stage starts after the delays and durations of all stages
    /// before it. A fresh plan supersedes in-flight tracks on every attribute
    /// it names; attributes it does not name keep their current tracks.
    pub fn transition(&mut self, plan: TransitionPlan, now: f64) {
        let stages = plan.into_stages();
        if stages.is_empty() {
            return;
        }

        let mut fresh: Vec<Track> = Vec::new();
        let mut offset = 0.0f64;
        for spec in stages {
            let delay = spec.timing.delay.max(0.0) as f64;
            let duration = spec.timing.duration.max(0.0) as f64;
            let begin_at = now + offset + delay;
            let end_at = begin_at + duration;
            for (attr, target) in spec.targets {
                fresh.push(Track {
                    attr,
                    target,
                    begin_at,
                    end_at,
                    ease: spec.timing.ease,
                    interp: None,
                });
            }
            offset += delay + duration;
        }

        let named: HashSet<String> = fresh.iter().map(|t| t.attr.clone()).collect();
        self.tracks.retain(|t| !named.contains(&t.attr));
        self.tracks.extend(fresh);
    }

    /// Advance all tracks to `now`, writing interpolated values into the
    /// state. Finished tracks land exactly on their target before removal.
    pub fn step(&mut self, now: f64) {
        if self.tracks.is_empty() {
            return;
        }
        // Apply in schedule order so a later stage on the same attribute wins.
        self.tracks.sort_by(|a, b| a.begin_at.total_cmp(&b.begin_at));

        for i in 0..self.tracks.len() {
            if now < self.tracks[i].begin_at {
                continue;
            }
            if self.tracks[i].interp.is_none() {
                let begin = self
                    .state
                    .get(&self.tracks[i].attr)
                    .cloned()
                    .unwrap_or_else(|| self.tracks[i].target.clone());
                let interp =
                    self.interpolation
                        .interpolator(&begin, &self.tracks[i].target, &self.tracks[i].attr);
                self.tracks[i].interp = Some(interp);
            }

            let track = &self.tracks[i];
            let span = track.end_at - track.begin_at;
            let u = if span <= 0.0 {
                1.0
            } else {
                ((now - track.begin_at) / span).clamp(0.0, 1.0) as f32
            };
            let eased = functions::ease_t(track.ease, u);
            let value = match &track.interp {
                Some(f) => f(eased),
                None => continue,
            };
            let attr = self.tracks[i].attr.clone();
            self.state.set(attr, value);
        }

        self.tracks.retain(|t| now < t.end_at);
    }

    /// True while any track is scheduled or in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Cancel everything in flight; the state freezes at its current values.
    pub fn stop_transitions(&mut self) {
        self.tracks.clear();
    }
}
