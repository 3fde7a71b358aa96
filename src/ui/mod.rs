pub mod game_common;
pub mod game_over_scene;
pub mod play_scene;
pub mod start_scene;

use crate::assets::Assets;
use crate::config::GameConfig;
use crate::game::Rect as FieldRect;
use crate::screen::{Screen, ScreenController};
use game_common::Blit;
use ratatui::Frame;

/// Logo in the top-left corner, shown on every screen.
fn logo_blit(assets: &Assets) -> Blit<'_> {
    Blit::new(&assets.logo, FieldRect::new(10.0, 10.0, 80.0, 100.0))
}

/// Main UI drawing function: renders whichever screen is active.
pub fn draw(frame: &mut Frame, controller: &ScreenController, config: &GameConfig, assets: &Assets) {
    let area = frame.size();
    match controller.screen() {
        Screen::Start(start) => start_scene::render_start(frame, area, start, config, assets),
        Screen::Play(session) => play_scene::render_play(frame, area, session, config, assets),
        Screen::GameOver(game_over) => {
            game_over_scene::render_game_over(frame, area, game_over, config)
        }
    }
}
