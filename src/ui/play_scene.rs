//! UI rendering for the Play screen.

use super::game_common::{
    create_screen_layout, render_playfield, render_status_bar, render_title_at, render_too_small,
    Blit,
};
use super::logo_blit;
use crate::assets::Assets;
use crate::config::GameConfig;
use crate::game::{Rect as FieldRect, Session};
use ratatui::{layout::Rect, style::Color, Frame};

/// Render the playfield with barriers, the burger, and the running score.
pub fn render_play(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    config: &GameConfig,
    assets: &Assets,
) {
    let (viewport, status_area) =
        create_screen_layout(area, config.playfield_width, config.playfield_height);
    if viewport.is_too_small() {
        render_too_small(frame, area);
        return;
    }

    let mut blits = Vec::with_capacity(session.obstacles.len() * 2 + 2);
    for obstacle in &session.obstacles {
        blits.push(Blit::flipped(&assets.barrier, obstacle.top_rect(config)));
        blits.push(Blit::new(&assets.barrier, obstacle.bottom_rect(config)));
    }
    blits.push(Blit::new(
        &assets.burger,
        FieldRect::new(
            config.player_x,
            session.player.position_y.floor(),
            config.player_size,
            config.player_size,
        ),
    ));
    blits.push(logo_blit(assets));

    render_playfield(frame, &viewport, &blits);
    render_title_at(frame, &viewport, 20.0, &session.score.to_string(), Color::White);

    let status = if session.tick_count == 0 {
        "Jump to stay in the air!".to_string()
    } else {
        format!("Score: {}", session.score)
    };
    render_status_bar(
        frame,
        status_area,
        &status,
        Color::Green,
        "Jump",
    );
}
