pub mod game_common;
pub mod game_scene;

use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the game screen fits in.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 14;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &GameState) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
        frame.render_widget(msg, Rect { height: 1, ..size });
        return;
    }

    game_scene::render_game(frame, size, game);
}
