//! Per-tick game logic for a Flappy Burger play session.

use super::collision::detect_collision;
use super::types::{Obstacle, Player, Session};
use crate::config::GameConfig;
use rand::Rng;

/// Something worth reacting to (sound, log line) that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// A new obstacle entered at the right edge.
    ObstacleSpawned { gap_top_y: f64 },
    /// An obstacle's trailing edge passed the player.
    Scored { score: u32 },
    /// The run is over.
    Collided { score: u32 },
}

/// Record a jump; it takes effect on the next tick.
pub fn queue_jump(session: &mut Session) {
    if !session.collided {
        session.jump_queued = true;
    }
}

/// Integrate one tick of vertical motion.
///
/// Gravity accumulates first; a jump then overrides the velocity outright,
/// so after a jump tick the velocity equals the jump constant exactly.
pub fn step_player(player: &mut Player, config: &GameConfig, jumped: bool) {
    player.velocity_y += config.gravity;
    if jumped {
        player.velocity_y = config.jump_velocity;
    }
    player.position_y += player.velocity_y;
}

/// Pick a gap position so the gap fits with `gap_margin` to spare on both sides.
///
/// Draws a whole number when the range holds one. A fractional range too
/// narrow for that yields its lower bound, which still fits.
pub fn random_gap_top<R: Rng>(config: &GameConfig, rng: &mut R) -> f64 {
    let lowest = config.min_gap_top();
    let highest = config.max_gap_top();
    let min = lowest.ceil() as i64;
    let max = highest.floor() as i64;
    if max >= min {
        rng.gen_range(min..=max) as f64
    } else {
        lowest.min(highest)
    }
}

/// Advance the spawn timer, appending an obstacle once it passes the threshold.
pub fn tick_spawner<R: Rng>(
    session: &mut Session,
    config: &GameConfig,
    rng: &mut R,
) -> Option<Obstacle> {
    session.spawn_timer += 1;
    if session.spawn_timer <= config.spawn_threshold {
        return None;
    }

    session.spawn_timer = 0;
    let obstacle = Obstacle::new(config.playfield_width, random_gap_top(config, rng));
    session.obstacles.push(obstacle);
    Some(obstacle)
}

/// Scroll every obstacle left and drop the ones that are fully off screen.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, config: &GameConfig) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= config.obstacle_speed;
    }
    obstacles.retain(|o| o.trailing_edge(config) >= 0.0);
}

/// Count obstacles whose trailing edge has crossed the player's x position.
///
/// Each obstacle carries a `scored` flag so it is counted on its crossing
/// tick and never again.
pub fn update_score(session: &mut Session, config: &GameConfig) -> u32 {
    let mut newly_scored = 0;
    for obstacle in &mut session.obstacles {
        if !obstacle.scored && obstacle.trailing_edge(config) <= config.player_x {
            obstacle.scored = true;
            newly_scored += 1;
        }
    }
    session.score += newly_scored;
    newly_scored
}

/// Process one tick: physics, spawning, scrolling, scoring, then collision.
///
/// Does nothing once the session has collided.
pub fn process_tick<R: Rng>(
    session: &mut Session,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if session.collided {
        return events;
    }

    session.tick_count += 1;

    let jumped = std::mem::take(&mut session.jump_queued);
    step_player(&mut session.player, config, jumped);

    if let Some(obstacle) = tick_spawner(session, config, rng) {
        log::debug!(
            "tick {}: obstacle spawned with gap at {}",
            session.tick_count,
            obstacle.gap_top_y
        );
        events.push(TickEvent::ObstacleSpawned {
            gap_top_y: obstacle.gap_top_y,
        });
    }

    advance_obstacles(&mut session.obstacles, config);

    let before = session.score;
    for score in (before + 1)..=(before + update_score(session, config)) {
        log::debug!("tick {}: score {}", session.tick_count, score);
        events.push(TickEvent::Scored { score });
    }

    if detect_collision(&session.player, &session.obstacles, config) {
        session.collided = true;
        events.push(TickEvent::Collided {
            score: session.score,
        });
    }

    events
}
