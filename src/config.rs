//! Game tuning, built once at startup and shared by reference.
//!
//! Every field has a default tuned to the arcade feel of the game,
//! so a partial `config.json` only needs to list the values it overrides.

use crate::constants::*;
use crate::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Immutable tuning context for one run of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f64,
    pub playfield_height: f64,

    /// Fixed horizontal position of the player's left edge.
    pub player_x: f64,
    /// Side length of the (square) player sprite.
    pub player_size: f64,
    /// Amount the hitbox is shrunk on every side of the sprite box.
    pub hitbox_inset: f64,
    /// How far the sprite may leave the playfield vertically before it counts as a crash.
    pub boundary_tolerance: f64,

    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_velocity: f64,

    pub obstacle_width: f64,
    pub barrier_height: f64,
    pub gap_height: f64,
    /// Minimum distance between the gap and the top/bottom edge.
    pub gap_margin: f64,
    /// Horizontal distance every obstacle travels per tick.
    pub obstacle_speed: f64,
    /// A new obstacle spawns once the spawn timer exceeds this value.
    pub spawn_threshold: u32,

    pub frames_per_second: u32,
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            hitbox_inset: HITBOX_INSET,
            boundary_tolerance: BOUNDARY_TOLERANCE,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            obstacle_width: OBSTACLE_WIDTH,
            barrier_height: BARRIER_HEIGHT,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_threshold: SPAWN_THRESHOLD,
            frames_per_second: FRAMES_PER_SECOND,
            sound_enabled: true,
        }
    }
}

impl GameConfig {
    /// Vertical position the player starts each session at.
    pub fn start_y(&self) -> f64 {
        (self.playfield_height / 2.0).floor()
    }

    /// Lowest allowed `gap_top_y`.
    pub fn min_gap_top(&self) -> f64 {
        self.gap_margin
    }

    /// Highest allowed `gap_top_y`.
    pub fn max_gap_top(&self) -> f64 {
        self.playfield_height - self.gap_height - self.gap_margin
    }

    /// Wall-clock length of one tick.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frames_per_second.max(1)))
    }

    /// Check that the geometry describes a playable game.
    pub fn validate(&self) -> Result<(), String> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err("playfield dimensions must be positive".to_string());
        }
        if self.player_size <= 0.0 {
            return Err("player_size must be positive".to_string());
        }
        if self.hitbox_inset * 2.0 >= self.player_size {
            return Err(format!(
                "hitbox_inset {} leaves no hitbox for player_size {}",
                self.hitbox_inset, self.player_size
            ));
        }
        if self.obstacle_width <= 0.0 || self.barrier_height <= 0.0 || self.gap_height <= 0.0 {
            return Err("obstacle dimensions must be positive".to_string());
        }
        if self.obstacle_speed <= 0.0 {
            return Err("obstacle_speed must be positive".to_string());
        }
        if self.max_gap_top() < self.min_gap_top() {
            return Err(format!(
                "gap of {} with margin {} does not fit a playfield of height {}",
                self.gap_height, self.gap_margin, self.playfield_height
            ));
        }
        if self.spawn_threshold > MAX_SPAWN_THRESHOLD {
            return Err(format!(
                "spawn_threshold {} is above the limit of {}",
                self.spawn_threshold, MAX_SPAWN_THRESHOLD
            ));
        }
        if self.frames_per_second == 0 || self.frames_per_second > MAX_FRAMES_PER_SECOND {
            return Err(format!(
                "frames_per_second must be between 1 and {}",
                MAX_FRAMES_PER_SECOND
            ));
        }
        Ok(())
    }

    /// Read a config file. Missing fields take their default values.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `config.json` in the data directory.
    ///
    /// Any failure is logged and the defaults are used instead; a missing
    /// default file is not worth a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match persistence::data_path(CONFIG_FILE_NAME) {
                Ok(p) => (p, false),
                Err(e) => {
                    log::warn!("no data directory, using default config: {}", e);
                    return Self::default();
                }
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("could not load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
