//! Flappy Burger play session.
//!
//! The burger falls under constant gravity and jumps on input while fry
//! barriers scroll in from the right. Clearing a barrier scores a point;
//! touching one, or leaving the playfield, ends the run.

pub mod collision;
pub mod logic;
pub mod types;

pub use collision::*;
pub use logic::*;
pub use types::*;
