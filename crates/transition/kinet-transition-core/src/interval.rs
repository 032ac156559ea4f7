//! Interval: the Idle/Running clock gate for a drive loop.
//!
//! The host owns the real frame source (requestAnimationFrame, a game loop, a
//! test harness) and calls the controller's tick every frame; this state
//! machine decides whether a tick is admitted. `restart` keeps an already
//! Running interval Running with a fresh epoch, so a new reconciliation cycle
//! never double-schedules.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntervalState {
    Idle,
    Running,
}

#[derive(Debug)]
pub struct Interval {
    state: IntervalState,
    started_at: Option<f64>,
    ticks: u64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::new()
    }
}

impl Interval {
    pub fn new() -> Self {
        Self {
            state: IntervalState::Idle,
            started_at: None,
            ticks: 0,
        }
    }

    /// Idle -> Running. Starting an already Running interval is equivalent to
    /// `restart`.
    pub fn start(&mut self, now: f64) {
        self.state = IntervalState::Running;
        self.started_at = Some(now);
    }

    /// Refresh the epoch, entering Running if Idle.
    pub fn restart(&mut self, now: f64) {
        self.start(now);
    }

    /// Running -> Idle. Idempotent.
    pub fn stop(&mut self) {
        self.state = IntervalState::Idle;
        self.started_at = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == IntervalState::Running
    }

    /// Admit one tick: returns true (and counts it) only while Running.
    pub fn tick(&mut self) -> bool {
        if self.state == IntervalState::Running {
            self.ticks = self.ticks.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Total admitted ticks over the interval's lifetime.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Epoch of the current run, if Running.
    #[inline]
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }
}
