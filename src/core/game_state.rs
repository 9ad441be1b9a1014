//! Simulation state: bird, pipes, score, mode.
//!
//! One `GameState` value is owned by the driver loop and threaded through
//! `dispatch` and `step`. Nothing here touches the terminal or the disk.

use super::config::{ConfigError, GameConfig};

/// Overall mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Before the first run.
    Menu,
    /// The only mode in which physics, collision and scoring advance.
    Playing,
    /// After a collision, until the next start.
    Ended,
}

/// The player avatar. `x` never changes during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rows per tick, positive = downward.
    pub velocity: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.start_y(),
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A top + bottom barrier pair with a gap between `top_height` and `bottom_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Bottom edge of the upper barrier.
    pub top_height: f64,
    /// Top edge of the lower barrier.
    pub bottom_y: f64,
    /// Already scored.
    pub passed: bool,
}

impl Pipe {
    pub fn gap(&self) -> f64 {
        self.bottom_y - self.top_height
    }

    pub fn gap_center(&self) -> f64 {
        (self.top_height + self.bottom_y) / 2.0
    }
}

/// Post-collision tumble. Drawn only; never read by physics or scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeathAnimation {
    /// Radians, clockwise, eased toward a nose-down 90°.
    pub rotation: f64,
    /// Extra downward offset added to the bird's last y.
    pub offset: f64,
    pub fall_velocity: f64,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub mode: GameMode,

    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    /// Center of the most recently spawned gap. `None` at the start of a run.
    pub last_gap_center: Option<f64>,

    pub score: u32,
    /// Best score across runs, seeded from persistence.
    pub high_score: u32,
    /// Ticks stepped while Playing in the current run.
    pub tick_count: u64,

    /// Jump waiting to be consumed next physics tick.
    pub jump_queued: bool,

    pub death: DeathAnimation,
}

impl GameState {
    /// Create a new game in Menu mode. Refuses an invalid configuration.
    pub fn new(config: GameConfig, high_score: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            mode: GameMode::Menu,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            last_gap_center: None,
            score: 0,
            high_score,
            tick_count: 0,
            jump_queued: false,
            death: DeathAnimation::default(),
        })
    }

    /// Clear everything belonging to a run. Keeps config and high score.
    pub fn reset_run(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.last_gap_center = None;
        self.score = 0;
        self.tick_count = 0;
        self.jump_queued = false;
        self.death = DeathAnimation::default();
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    pub fn is_over(&self) -> bool {
        self.mode == GameMode::Ended
    }
}
