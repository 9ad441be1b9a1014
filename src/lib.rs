//! Flapper - terminal arcade game library.
//!
//! Exposes the simulation, persistence and input mapping for testing and
//! external drivers. The terminal loop lives in `main.rs`.

pub mod core;
pub mod high_score;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;

pub use crate::core::config::{load_config, ConfigError, GameConfig};
pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::game_loop::{FrameDriver, FrameReport, InputBuffer};
pub use crate::core::game_state::{Bird, DeathAnimation, GameMode, GameState, Pipe};
pub use crate::core::generator::{generate, GapPlacement};
pub use crate::core::physics::{step, Collision, TickResult};
pub use crate::core::state_machine::{dispatch, Trigger};
pub use high_score::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};
