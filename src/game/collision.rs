//! Axis-aligned rectangle overlap and playfield containment.

use super::types::{Obstacle, Player};
use crate::config::GameConfig;

/// An axis-aligned rectangle in playfield coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    /// Non-strict overlap test: rectangles that share an edge intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// True if the player's hitbox touches either barrier of `obstacle`.
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle, config: &GameConfig) -> bool {
    let hitbox = player.hitbox(config);
    hitbox.intersects(&obstacle.top_rect(config)) || hitbox.intersects(&obstacle.bottom_rect(config))
}

/// True if the sprite has left the playfield by at least the boundary tolerance.
pub fn out_of_bounds(player: &Player, config: &GameConfig) -> bool {
    player.position_y <= -config.boundary_tolerance
        || player.position_y + config.player_size
            >= config.playfield_height + config.boundary_tolerance
}

/// Full collision check for one tick.
pub fn detect_collision(player: &Player, obstacles: &[Obstacle], config: &GameConfig) -> bool {
    obstacles
        .iter()
        .any(|obstacle| hits_obstacle(player, obstacle, config))
        || out_of_bounds(player, config)
}
