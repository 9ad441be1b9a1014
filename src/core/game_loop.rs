//! Fixed-timestep frame driver.
//!
//! The terminal loop calls `run_frame` once per rendered frame with the wall
//! time that elapsed. Buffered triggers are applied first, in arrival order,
//! then the accumulated time is consumed in whole `TICK_INTERVAL_MS` ticks so
//! the tuned per-tick constants keep their feel regardless of frame timing.

use super::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};
use super::game_state::GameState;
use super::physics::{step, Collision};
use super::state_machine::{dispatch, Trigger};
use rand::Rng;

/// Triggers captured between two frames.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    pending: Vec<Trigger>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, trigger: Trigger) {
        self.pending.push(trigger);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending trigger, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Trigger> {
        std::mem::take(&mut self.pending)
    }
}

/// Everything that happened during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Physics ticks stepped.
    pub ticks: u32,
    /// A Start (or restarting Jump) began a new run this frame.
    pub run_started: bool,
    pub points: u32,
    pub collision: Option<Collision>,
    pub new_high_score: Option<u32>,
}

/// Converts wall-clock frame time into fixed logical ticks.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    tick_ms: u64,
    accumulated_ms: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}

impl FrameDriver {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    /// Apply buffered input, then step as many whole ticks as `dt_ms` covers.
    ///
    /// `dt_ms` is clamped to `MAX_FRAME_DT_MS` so a stall (terminal resize,
    /// suspended process) doesn't replay seconds of physics at once.
    pub fn run_frame<R: Rng>(
        &mut self,
        mut state: GameState,
        input: &mut InputBuffer,
        dt_ms: u64,
        rng: &mut R,
    ) -> (GameState, FrameReport) {
        let mut report = FrameReport::default();

        for trigger in input.drain() {
            let was_playing = state.is_playing();
            state = dispatch(state, trigger);
            if !was_playing && state.is_playing() {
                report.run_started = true;
                // A fresh run starts with a fresh clock
                self.accumulated_ms = 0;
            }
        }

        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);

        while self.accumulated_ms >= self.tick_ms {
            self.accumulated_ms -= self.tick_ms;
            let (next, result) = step(state, rng);
            state = next;
            report.ticks += 1;
            report.points += result.points;
            if result.collision.is_some() {
                report.collision = result.collision;
            }
            if result.new_high_score.is_some() {
                report.new_high_score = result.new_high_score;
            }
        }

        (state, report)
    }
}
