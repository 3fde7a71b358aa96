//! UI rendering for the Game Over screen.

use super::game_common::{
    create_screen_layout, render_playfield, render_status_bar, render_text_at, render_title_at,
    render_too_small,
};
use crate::config::GameConfig;
use crate::screen::GameOverScreen;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    game_over: &GameOverScreen,
    config: &GameConfig,
) {
    let (viewport, status_area) =
        create_screen_layout(area, config.playfield_width, config.playfield_height);
    if viewport.is_too_small() {
        render_too_small(frame, area);
        return;
    }

    render_playfield(frame, &viewport, &[]);

    render_title_at(frame, &viewport, 200.0, "GAME OVER", Color::White);
    render_text_at(
        frame,
        &viewport,
        260.0,
        &format!("Score: {}", game_over.score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    render_text_at(
        frame,
        &viewport,
        330.0,
        "Press Space to play again",
        Style::default().fg(Color::White),
    );

    render_status_bar(
        frame,
        status_area,
        &format!("Fries cleared: {}", game_over.score),
        Color::Red,
        "Retry",
    );
}
