//! Routing of the two player triggers across game modes.

use super::game_state::{GameMode, GameState};

/// Player triggers. Edge-triggered: one event per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Jump,
    Start,
}

/// Apply one trigger to the game.
///
/// | mode    | Jump              | Start             |
/// |---------|-------------------|-------------------|
/// | Menu    | no-op             | reset, Playing    |
/// | Playing | queue a jump      | no-op             |
/// | Ended   | reset, Playing    | reset, Playing    |
pub fn dispatch(mut state: GameState, trigger: Trigger) -> GameState {
    match (state.mode, trigger) {
        (GameMode::Menu, Trigger::Jump) => {}
        (GameMode::Playing, Trigger::Jump) => state.jump_queued = true,
        (GameMode::Playing, Trigger::Start) => {}
        (GameMode::Menu | GameMode::Ended, _) => {
            state.reset_run();
            state.mode = GameMode::Playing;
        }
    }
    state
}
