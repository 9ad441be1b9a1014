//! Terminal rendering of the play area, status bar and info panel.

use crate::core::game_state::{GameMode, GameState};
use crate::ui::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    /// Open cell on the rim of a gap.
    GapEdge,
    Bird,
}

/// Sample the world at the center of each terminal cell.
///
/// The logical play area is stretched to fill `width` x `height` cells.
pub fn play_area_cells(game: &GameState, width: usize, height: usize) -> Vec<Vec<CellKind>> {
    let config = &game.config;
    let cell_w = config.play_width / width.max(1) as f64;
    let cell_h = config.play_height / height.max(1) as f64;

    let bird_y = game.bird.y + game.death.offset;

    (0..height)
        .map(|row| {
            let y = (row as f64 + 0.5) * cell_h;
            (0..width)
                .map(|col| {
                    let x = (col as f64 + 0.5) * cell_w;

                    if x >= game.bird.x
                        && x < game.bird.right()
                        && y >= bird_y
                        && y < bird_y + game.bird.height
                    {
                        return CellKind::Bird;
                    }

                    for pipe in &game.pipes {
                        if x >= pipe.x && x < pipe.x + config.pipe_width {
                            if y < pipe.top_height || y >= pipe.bottom_y {
                                return CellKind::Pipe;
                            }
                            if y < pipe.top_height + cell_h || y >= pipe.bottom_y - cell_h {
                                return CellKind::GapEdge;
                            }
                            return CellKind::Sky;
                        }
                    }
                    CellKind::Sky
                })
                .collect()
        })
        .collect()
}

/// Bird glyph: nose-down while dead, otherwise by direction of travel.
fn bird_glyph(game: &GameState) -> &'static str {
    if game.mode == GameMode::Ended {
        return if game.death.rotation > 1.0 { "▼" } else { "◢" };
    }
    if game.bird.velocity < -2.0 {
        "▲"
    } else if game.bird.velocity > 4.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the full game screen.
pub fn render_game(frame: &mut Frame, area: Rect, game: &GameState) {
    let layout = create_game_layout(frame, area, " Flapper ", Color::Cyan, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    match game.mode {
        GameMode::Menu => render_banner(
            frame,
            layout.content,
            Color::Yellow,
            "FLAPPER",
            &[
                String::new(),
                "Fly through the gaps.".to_string(),
                format!("Best: {}", game.high_score),
                String::new(),
                "[Enter] to start".to_string(),
            ],
        ),
        GameMode::Ended => render_banner(
            frame,
            layout.content,
            Color::Red,
            "GAME OVER",
            &[
                String::new(),
                format!("Score: {}", game.score),
                format!("Best:  {}", game.high_score),
                String::new(),
                "[Space/Enter] to retry".to_string(),
            ],
        ),
        GameMode::Playing => {}
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &GameState) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let glyph = bird_glyph(game);
    let lines: Vec<Line> = play_area_cells(game, width, height)
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| match cell {
                        CellKind::Bird => Span::styled(
                            glyph,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        CellKind::GapEdge => {
                            Span::styled("░", Style::default().fg(Color::DarkGray))
                        }
                        CellKind::Sky => Span::raw(" "),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &GameState) {
    let controls = [
        ("[Space/Up]", "Flap"),
        ("[Enter]", "Start"),
        ("[Q/Esc]", "Quit"),
    ];
    match game.mode {
        GameMode::Menu => {
            render_status_bar(frame, area, "Press Enter to start!", Color::Yellow, &controls)
        }
        GameMode::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &controls,
        ),
        GameMode::Ended => {
            render_status_bar(frame, area, "Crashed!", Color::Red, &controls)
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GameState) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mode = match game.mode {
        GameMode::Menu => ("Menu", Color::Yellow),
        GameMode::Playing => ("Flying", Color::Green),
        GameMode::Ended => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                format!("{}", game.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(mode.0, Style::default().fg(mode.1)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(format!("{}", game.pipes.len()), Style::default().fg(Color::Green)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
