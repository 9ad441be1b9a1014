//! Core game state and logic.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod generator;
pub mod physics;
pub mod state_machine;

pub use config::*;
pub use constants::*;
pub use game_loop::*;
pub use game_state::*;
pub use generator::*;
pub use physics::*;
pub use state_machine::*;
