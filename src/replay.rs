//! Headless session runs for reproducing a game from a seed and a jump script.
//!
//! Uses the exact same `process_tick()` as the interactive game.

use crate::config::GameConfig;
use crate::game::{process_tick, queue_jump, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One line of a replay trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub tick: u64,
    pub player_y: f64,
    pub score: u32,
    pub collided: bool,
}

impl TraceRow {
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{}",
            self.tick, self.player_y, self.score, self.collided
        )
    }
}

/// Which ticks press jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpScript {
    Never,
    /// Jump on every tick that is a multiple of N (N > 0).
    Every(u64),
    /// Jump on exactly these ticks (1-based).
    At(Vec<u64>),
}

impl JumpScript {
    pub fn jumps_on(&self, tick: u64) -> bool {
        match self {
            JumpScript::Never => false,
            JumpScript::Every(n) => *n > 0 && tick % n == 0,
            JumpScript::At(ticks) => ticks.contains(&tick),
        }
    }
}

/// Play a session for up to `max_ticks`, stopping at the first collision.
pub fn run_session(
    config: &GameConfig,
    seed: u64,
    script: &JumpScript,
    max_ticks: u64,
) -> Vec<TraceRow> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(config);
    let mut trace = Vec::new();

    for tick in 1..=max_ticks {
        if script.jumps_on(tick) {
            queue_jump(&mut session);
        }
        process_tick(&mut session, config, &mut rng);
        trace.push(TraceRow {
            tick,
            player_y: session.player.position_y,
            score: session.score,
            collided: session.collided,
        });
        if session.collided {
            break;
        }
    }

    trace
}
