//! Flappy Burger - terminal arcade game library
//!
//! This module exposes the game logic for testing and the replay tool.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod replay;
pub mod runner;
pub mod screen;
pub mod ui;

pub use config::GameConfig;
pub use game::{Obstacle, Player, Session, TickEvent};
pub use screen::{FrameOutcome, Screen, ScreenController};
