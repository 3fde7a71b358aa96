//! UI rendering for the Start screen.

use super::game_common::{
    create_screen_layout, render_playfield, render_status_bar, render_text_at, render_title_at,
    render_too_small, Blit,
};
use super::logo_blit;
use crate::assets::Assets;
use crate::config::GameConfig;
use crate::game::Rect as FieldRect;
use crate::screen::StartScreen;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    Frame,
};

const TITLE_COLOR: Color = Color::Rgb(150, 60, 255);

pub fn render_start(
    frame: &mut Frame,
    area: Rect,
    start: &StartScreen,
    config: &GameConfig,
    assets: &Assets,
) {
    let (viewport, status_area) =
        create_screen_layout(area, config.playfield_width, config.playfield_height);
    if viewport.is_too_small() {
        render_too_small(frame, area);
        return;
    }

    // The burger bobs around its resting spot under the title.
    let burger = FieldRect::new(
        (config.playfield_width / 2.0 - config.player_size / 2.0).floor(),
        140.0 + start.float_offset,
        config.player_size,
        config.player_size,
    );
    let blits = [Blit::new(&assets.burger, burger), logo_blit(assets)];
    render_playfield(frame, &viewport, &blits);

    render_title_at(frame, &viewport, 40.0, "FLAPPY BURGER", TITLE_COLOR);

    let white = Style::default().fg(Color::White);
    render_text_at(frame, &viewport, 300.0, "Score 50", white);
    render_text_at(frame, &viewport, 325.0, "for free fries!!", white);
    if start.prompt_visible() {
        render_text_at(frame, &viewport, 420.0, "Press Space to start", white);
    }

    render_status_bar(
        frame,
        status_area,
        "Get ready!",
        Color::Yellow,
        "Start",
    );
}
