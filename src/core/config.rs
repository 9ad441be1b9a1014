//! Tunable game parameters and their validation.
//!
//! Every value is fixed once a run starts. Defaults come from `constants`;
//! a `config.json` may override any subset of fields at start-up.

use super::constants::*;
use crate::utils::persistence::load_json_if_exists;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A rejected configuration. Fatal at initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Play area width or height is not a positive finite number.
    InvalidPlayArea { width: f64, height: f64 },
    /// Bird box is empty, starts on the floor, or cannot fit through the
    /// narrowest gap.
    InvalidBird,
    /// Gravity must pull down and the jump must push up.
    InvalidPhysics { gravity: f64, jump_impulse: f64 },
    /// Scroll speed or pipe width is not positive.
    InvalidPipes,
    SpawnIntervalZero,
    /// Gap bounds are inverted or outside (0, 1).
    GapBoundsInverted { min: f64, max: f64 },
    /// Center band is inverted or outside (0, 1).
    CenterBandInverted { min: f64, max: f64 },
    /// A gap at the edge of the center band would leave less than the
    /// minimum barrier visible above or below.
    BandTooWide,
    /// Movement bound, center pull or barrier fraction outside [0, 1).
    InvalidFraction(&'static str),
    /// Config file exists but could not be read or parsed.
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayArea { width, height } => {
                write!(f, "play area must be positive, got {}x{}", width, height)
            }
            Self::InvalidBird => write!(f, "bird size must be positive and fit the play area"),
            Self::InvalidPhysics {
                gravity,
                jump_impulse,
            } => write!(
                f,
                "gravity must be > 0 and jump impulse < 0, got {} / {}",
                gravity, jump_impulse
            ),
            Self::InvalidPipes => write!(f, "pipe width and scroll speed must be positive"),
            Self::SpawnIntervalZero => write!(f, "spawn interval must be at least one tick"),
            Self::GapBoundsInverted { min, max } => {
                write!(f, "gap bounds invalid: min {} max {}", min, max)
            }
            Self::CenterBandInverted { min, max } => {
                write!(f, "center band invalid: min {} max {}", min, max)
            }
            Self::BandTooWide => write!(
                f,
                "center band leaves no room for the minimum barrier at the largest gap"
            ),
            Self::InvalidFraction(name) => write!(f, "{} must be in [0, 1)", name),
            Self::Malformed(e) => write!(f, "could not read config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game tuning. All lengths are logical pixels, all rates are per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub play_width: f64,
    pub play_height: f64,

    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub gravity: f64,
    pub jump_impulse: f64,

    pub pipe_width: f64,
    pub scroll_speed: f64,
    pub spawn_interval: u64,
    /// Preferred gap size; clamped into the gap bounds.
    pub pipe_gap: f64,

    pub min_gap_fraction: f64,
    pub max_gap_fraction: f64,
    pub first_center_fraction: f64,
    pub center_min_fraction: f64,
    pub center_max_fraction: f64,
    pub max_movement_fraction: f64,
    pub center_pull: f64,
    pub min_barrier_fraction: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            scroll_speed: SCROLL_SPEED,
            spawn_interval: SPAWN_INTERVAL_TICKS,
            pipe_gap: PIPE_GAP,
            min_gap_fraction: MIN_GAP_FRACTION,
            max_gap_fraction: MAX_GAP_FRACTION,
            first_center_fraction: FIRST_CENTER_FRACTION,
            center_min_fraction: CENTER_MIN_FRACTION,
            center_max_fraction: CENTER_MAX_FRACTION,
            max_movement_fraction: MAX_MOVEMENT_FRACTION,
            center_pull: CENTER_PULL,
            min_barrier_fraction: MIN_BARRIER_FRACTION,
        }
    }
}

fn is_unit_fraction(v: f64) -> bool {
    v.is_finite() && (0.0..1.0).contains(&v)
}

impl GameConfig {
    /// Check every rule a run depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.play_width) || !positive(self.play_height) {
            return Err(ConfigError::InvalidPlayArea {
                width: self.play_width,
                height: self.play_height,
            });
        }
        if !positive(self.bird_width)
            || !positive(self.bird_height)
            || !self.bird_x.is_finite()
            || self.bird_x < 0.0
            || self.bird_x + self.bird_width > self.play_width
            || self.start_y() + self.bird_height >= self.play_height
        {
            return Err(ConfigError::InvalidBird);
        }
        if !positive(self.gravity) || !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::InvalidPhysics {
                gravity: self.gravity,
                jump_impulse: self.jump_impulse,
            });
        }
        if !positive(self.pipe_width) || !positive(self.scroll_speed) || !positive(self.pipe_gap)
        {
            return Err(ConfigError::InvalidPipes);
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::SpawnIntervalZero);
        }

        let (gmin, gmax) = (self.min_gap_fraction, self.max_gap_fraction);
        if !(positive(gmin) && gmax.is_finite() && gmin <= gmax && gmax < 1.0) {
            return Err(ConfigError::GapBoundsInverted {
                min: gmin,
                max: gmax,
            });
        }
        // The bird must fit through the narrowest gap
        if self.bird_height > self.min_gap() {
            return Err(ConfigError::InvalidBird);
        }

        let (cmin, cmax) = (self.center_min_fraction, self.center_max_fraction);
        if !(positive(cmin) && cmax.is_finite() && cmin <= cmax && cmax < 1.0)
            || !(cmin..=cmax).contains(&self.first_center_fraction)
        {
            return Err(ConfigError::CenterBandInverted {
                min: cmin,
                max: cmax,
            });
        }

        if !is_unit_fraction(self.max_movement_fraction) {
            return Err(ConfigError::InvalidFraction("max_movement_fraction"));
        }
        if !is_unit_fraction(self.center_pull) {
            return Err(ConfigError::InvalidFraction("center_pull"));
        }
        if !is_unit_fraction(self.min_barrier_fraction) {
            return Err(ConfigError::InvalidFraction("min_barrier_fraction"));
        }

        // Tolerance for float noise at the band edge
        let half = gmax / 2.0;
        let eps = 1e-9;
        if cmin - half + eps < self.min_barrier_fraction
            || 1.0 - (cmax + half) + eps < self.min_barrier_fraction
        {
            return Err(ConfigError::BandTooWide);
        }

        Ok(())
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap_fraction * self.play_height
    }

    pub fn max_gap(&self) -> f64 {
        self.max_gap_fraction * self.play_height
    }

    /// Gap size actually used for every pipe.
    pub fn gap_size(&self) -> f64 {
        self.pipe_gap.clamp(self.min_gap(), self.max_gap())
    }

    pub fn center_band(&self) -> (f64, f64) {
        (
            self.center_min_fraction * self.play_height,
            self.center_max_fraction * self.play_height,
        )
    }

    /// Bird y at the start of every run.
    pub fn start_y(&self) -> f64 {
        self.play_height / 2.0
    }
}

/// Load and validate a config file. A missing file means the defaults.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let config = load_json_if_exists::<GameConfig>(path)
        .map_err(|e| ConfigError::Malformed(e.to_string()))?
        .unwrap_or_default();
    config.validate()?;
    Ok(config)
}
