//! Per-tick simulation: bird physics, pipe scrolling, collision, scoring.

use super::constants::{DEATH_MAX_ROTATION, DEATH_SPIN_PER_TICK};
use super::game_state::{GameMode, GameState, Pipe};
use super::generator::generate;
use rand::Rng;

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ceiling,
    Floor,
    Pipe,
    /// Position or velocity stopped being a finite number.
    NonFinite,
}

impl Collision {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Ceiling => "hit the ceiling",
            Self::Floor => "hit the ground",
            Self::Pipe => "hit a pipe",
            Self::NonFinite => "left the world",
        }
    }
}

/// Result of one tick: what happened, for the driver to log and persist.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickResult {
    /// A pipe was spawned this tick.
    pub spawned: bool,
    /// Pipes scored this tick.
    pub points: u32,
    /// Set on the tick that ended the run.
    pub collision: Option<Collision>,
    /// New best score to persist. Only set on the terminal tick.
    pub new_high_score: Option<u32>,
}

/// Advance the game by one logical tick.
///
/// Playing runs the full simulation. Ended only advances the death animation.
/// Menu does nothing.
pub fn step<R: Rng>(mut state: GameState, rng: &mut R) -> (GameState, TickResult) {
    let result = match state.mode {
        GameMode::Playing => step_playing(&mut state, rng),
        GameMode::Ended => {
            step_death_animation(&mut state);
            TickResult::default()
        }
        GameMode::Menu => TickResult::default(),
    };
    (state, result)
}

fn step_playing<R: Rng>(state: &mut GameState, rng: &mut R) -> TickResult {
    let config = state.config;
    let mut result = TickResult::default();
    let mut collision = None;

    // 1. Consume buffered jump as this tick's starting velocity
    if state.jump_queued {
        state.bird.velocity = config.jump_impulse;
        state.jump_queued = false;
    }

    // 2. Integrate
    let start_y = state.bird.y;
    state.bird.velocity += config.gravity;
    state.bird.y += state.bird.velocity;

    // 3. Boundaries, swept over the tick so resting on an edge counts
    if !state.bird.y.is_finite() || !state.bird.velocity.is_finite() {
        collision = Some(Collision::NonFinite);
    } else if state.bird.y.max(start_y) + state.bird.height >= config.play_height {
        collision = Some(Collision::Floor);
    } else if state.bird.y.min(start_y) <= 0.0 {
        collision = Some(Collision::Ceiling);
    }

    if collision != Some(Collision::NonFinite) {
        // 4. Spawn
        if state.tick_count % config.spawn_interval == 0 {
            let gap = generate(&config, state.last_gap_center, rng);
            state.pipes.push(Pipe {
                x: config.play_width,
                top_height: gap.top_height,
                bottom_y: gap.bottom_y,
                passed: false,
            });
            state.last_gap_center = Some(gap.center);
            result.spawned = true;
        }

        // 5. Scroll, collide, score
        let bird = state.bird;
        for pipe in &mut state.pipes {
            pipe.x -= config.scroll_speed;

            let overlaps = bird.right() > pipe.x && bird.x < pipe.x + config.pipe_width;
            if overlaps
                && (bird.y < pipe.top_height || bird.bottom() > pipe.bottom_y)
                && collision.is_none()
            {
                collision = Some(Collision::Pipe);
            }

            if !pipe.passed && pipe.x + config.pipe_width < bird.x {
                pipe.passed = true;
                result.points += 1;
            }
        }
        state.score += result.points;

        // Cull pipes fully off the left edge
        state.pipes.retain(|p| p.x + config.pipe_width >= 0.0);
    }

    // 6. Terminal transition
    if let Some(cause) = collision {
        state.mode = GameMode::Ended;
        result.collision = Some(cause);
        if state.score > state.high_score {
            state.high_score = state.score;
            result.new_high_score = Some(state.score);
        }
    }

    // 7. Tick counter
    state.tick_count += 1;

    result
}

/// Tumble the dead bird to the floor. Cosmetic only.
fn step_death_animation(state: &mut GameState) {
    let floor_offset = (state.config.play_height - state.bird.bottom()).max(0.0);
    let gravity = state.config.gravity;
    let death = &mut state.death;
    death.rotation = (death.rotation + DEATH_SPIN_PER_TICK).min(DEATH_MAX_ROTATION);

    if death.offset < floor_offset {
        death.fall_velocity += gravity;
        death.offset = (death.offset + death.fall_velocity).min(floor_offset);
    } else {
        death.fall_velocity = 0.0;
    }
}
