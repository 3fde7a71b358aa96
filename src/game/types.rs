//! Flappy Burger play-session data structures.

use super::collision::Rect;
use crate::config::GameConfig;

/// The burger. Its horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top edge of the sprite (y grows downward).
    pub position_y: f64,
    /// Current vertical velocity per tick (positive = downward).
    pub velocity_y: f64,
}

impl Player {
    pub fn new(position_y: f64) -> Self {
        Self {
            position_y,
            velocity_y: 0.0,
        }
    }

    /// The visual sprite bounds.
    pub fn sprite_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            config.player_x,
            self.position_y,
            config.player_size,
            config.player_size,
        )
    }

    /// Collision rectangle: the sprite bounds shrunk by the hitbox inset.
    pub fn hitbox(&self, config: &GameConfig) -> Rect {
        self.sprite_rect(config).inset(config.hitbox_inset)
    }
}

/// A top/bottom barrier pair with a fixed-height gap between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge.
    pub x: f64,
    /// Bottom edge of the top barrier, i.e. the top of the gap.
    pub gap_top_y: f64,
    /// Whether this obstacle has already been counted in the score.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_top_y: f64) -> Self {
        Self {
            x,
            gap_top_y,
            scored: false,
        }
    }

    pub fn trailing_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.obstacle_width
    }

    pub fn gap_bottom_y(&self, config: &GameConfig) -> f64 {
        self.gap_top_y + config.gap_height
    }

    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            self.gap_top_y - config.barrier_height,
            config.obstacle_width,
            config.barrier_height,
        )
    }

    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            self.gap_bottom_y(config),
            config.obstacle_width,
            config.barrier_height,
        )
    }
}

/// State of one Play screen run, from the first frame to the crash.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub player: Player,
    /// Active obstacles in spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    /// Obstacles cleared so far.
    pub score: u32,
    pub spawn_timer: u32,
    /// Ticks processed since the session started.
    pub tick_count: u64,
    /// Jump input waiting to be consumed by the next tick.
    pub jump_queued: bool,
    /// Set by the tick that detects a collision; the session is over.
    pub collided: bool,
}

impl Session {
    /// Fresh session with the player at the vertical midpoint.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config.start_y()),
            obstacles: Vec::new(),
            score: 0,
            spawn_timer: 0,
            tick_count: 0,
            jump_queued: false,
            collided: false,
        }
    }
}
