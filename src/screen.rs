//! Top-level screen state machine: Start → Play → GameOver → Start.
//!
//! The program only ends on a quit input; game logic never exits by itself.

use crate::audio::{AudioSink, SoundEffect};
use crate::config::GameConfig;
use crate::constants::{BLINK_PERIOD_FRAMES, FLOAT_LIMIT, FLOAT_STEP};
use crate::game::{process_tick, queue_jump, Session, TickEvent};
use crate::input::GameInput;
use rand::Rng;

/// Title screen animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct StartScreen {
    /// Vertical bob of the burger, within ±`FLOAT_LIMIT` (overshooting by one step).
    pub float_offset: f64,
    /// +1.0 while sinking, -1.0 while rising.
    pub float_direction: f64,
    /// Frames shown so far; drives the blinking prompt.
    pub blink_timer: u32,
}

impl StartScreen {
    pub fn new() -> Self {
        Self {
            float_offset: 0.0,
            float_direction: 1.0,
            blink_timer: 0,
        }
    }

    /// Advance the idle animation by one frame.
    pub fn animate(&mut self) {
        self.float_offset += self.float_direction * FLOAT_STEP;
        if self.float_offset > FLOAT_LIMIT {
            self.float_direction = -1.0;
        }
        if self.float_offset < -FLOAT_LIMIT {
            self.float_direction = 1.0;
        }
        self.blink_timer += 1;
    }

    pub fn prompt_visible(&self) -> bool {
        (self.blink_timer / BLINK_PERIOD_FRAMES) % 2 == 0
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverScreen {
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Start(StartScreen),
    Play(Session),
    GameOver(GameOverScreen),
}

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct ScreenController {
    screen: Screen,
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Start(StartScreen::new()),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Run one frame with the inputs gathered since the previous frame.
    ///
    /// On the Start and GameOver screens the first jump or quit decides the
    /// frame. During play any quit wins and every jump is applied. The tick
    /// that crashes stays on Play so it gets drawn; the next frame moves to
    /// GameOver. A frame that changes screens does not also advance the new
    /// screen.
    pub fn step<R: Rng>(
        &mut self,
        inputs: &[GameInput],
        config: &GameConfig,
        rng: &mut R,
        audio: &mut dyn AudioSink,
    ) -> FrameOutcome {
        let next = match &mut self.screen {
            Screen::Start(start) => match first_decisive(inputs) {
                Some(GameInput::Quit) => return FrameOutcome::Quit,
                Some(_) => {
                    log::info!("session started");
                    Some(Screen::Play(Session::new(config)))
                }
                None => {
                    start.animate();
                    None
                }
            },
            Screen::Play(session) => {
                if inputs.contains(&GameInput::Quit) {
                    log::info!("quit during play at score {}", session.score);
                    return FrameOutcome::Quit;
                }
                // The crash frame has been drawn; now leave for the game over screen.
                if session.collided {
                    audio.play(SoundEffect::Hit);
                    Some(Screen::GameOver(GameOverScreen {
                        score: session.score,
                    }))
                } else {
                    for input in inputs {
                        if *input == GameInput::Jump {
                            queue_jump(session);
                        }
                    }

                    for event in process_tick(session, config, rng) {
                        match event {
                            TickEvent::Scored { .. } => audio.play(SoundEffect::Score),
                            TickEvent::Collided { score } => log::info!(
                                "session ended after {} ticks with score {}",
                                session.tick_count,
                                score
                            ),
                            TickEvent::ObstacleSpawned { .. } => {}
                        }
                    }
                    None
                }
            }
            Screen::GameOver(_) => match first_decisive(inputs) {
                Some(GameInput::Quit) => return FrameOutcome::Quit,
                Some(_) => Some(Screen::Start(StartScreen::new())),
                None => None,
            },
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
        FrameOutcome::Continue
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

/// The first input that means something on a menu-like screen.
fn first_decisive(inputs: &[GameInput]) -> Option<GameInput> {
    inputs
        .iter()
        .copied()
        .find(|input| matches!(input, GameInput::Jump | GameInput::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn step(
        controller: &mut ScreenController,
        inputs: &[GameInput],
        audio: &mut Vec<SoundEffect>,
    ) -> FrameOutcome {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        controller.step(inputs, &config, &mut rng, audio)
    }

    #[test]
    fn test_starts_on_start_screen() {
        let controller = ScreenController::new();
        assert!(matches!(controller.screen(), Screen::Start(_)));
    }

    #[test]
    fn test_start_idles_without_input() {
        let mut controller = ScreenController::new();
        let mut audio = Vec::new();
        let outcome = step(&mut controller, &[GameInput::Other], &mut audio);
        assert_eq!(outcome, FrameOutcome::Continue);
        match controller.screen() {
            Screen::Start(start) => {
                assert!((start.float_offset - 0.4).abs() < 1e-9);
                assert_eq!(start.blink_timer, 1);
            }
            other => panic!("expected start screen, got {:?}", other),
        }
    }

    #[test]
    fn test_jump_starts_fresh_session() {
        let mut controller = ScreenController::new();
        let mut audio = Vec::new();
        step(&mut controller, &[GameInput::Jump], &mut audio);
        match controller.screen() {
            Screen::Play(session) => {
                assert_eq!(*session, Session::new(&GameConfig::default()));
            }
            other => panic!("expected play screen, got {:?}", other),
        }
    }

    #[test]
    fn test_first_decisive_input_wins_on_start() {
        let mut controller = ScreenController::new();
        let mut audio = Vec::new();
        let outcome = step(
            &mut controller,
            &[GameInput::Other, GameInput::Quit, GameInput::Jump],
            &mut audio,
        );
        assert_eq!(outcome, FrameOutcome::Quit);

        let mut controller = ScreenController::new();
        let outcome = step(
            &mut controller,
            &[GameInput::Jump, GameInput::Quit],
            &mut audio,
        );
        assert_eq!(outcome, FrameOutcome::Continue);
        assert!(matches!(controller.screen(), Screen::Play(_)));
    }

    #[test]
    fn test_quit_wins_during_play() {
        let mut controller = ScreenController::new();
        let mut audio = Vec::new();
        step(&mut controller, &[GameInput::Jump], &mut audio);
        let outcome = step(
            &mut controller,
            &[GameInput::Jump, GameInput::Quit],
            &mut audio,
        );
        assert_eq!(outcome, FrameOutcome::Quit);
    }

    #[test]
    fn test_collision_moves_to_game_over_with_hit_sound() {
        let mut controller = ScreenController::new();
        let mut audio = Vec::new();
        step(&mut controller, &[GameInput::Jump], &mut audio);

        let mut frames = 0;
        while matches!(controller.screen(), Screen::Play(_)) {
            step(&mut controller, &[], &mut audio);
            frames += 1;
            assert!(frames < 1000, "free fall never ended the run");
        }

        assert_eq!(
            *controller.screen(),
            Screen::GameOver(GameOverScreen { score: 0 })
        );
        assert_eq!(audio, vec![SoundEffect::Hit]);
    }

    #[test]
    fn test_crash_frame_stays_on_play_until_next_frame() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.player.position_y = 600.0;
        let mut controller = ScreenController {
            screen: Screen::Play(session),
        };
        let mut audio = Vec::new();

        step(&mut controller, &[], &mut audio);
        match controller.screen() {
            Screen::Play(session) => assert!(session.collided),
            other => panic!("expected crash frame on play screen, got {:?}", other),
        }
        assert!(audio.is_empty());

        // Jumps on the crash frame do not revive the burger.
        step(&mut controller, &[GameInput::Jump], &mut audio);
        assert_eq!(
            *controller.screen(),
            Screen::GameOver(GameOverScreen { score: 0 })
        );
        assert_eq!(audio, vec![SoundEffect::Hit]);
    }

    #[test]
    fn test_game_over_retry_and_quit() {
        let mut audio = Vec::new();
        let mut controller = ScreenController {
            screen: Screen::GameOver(GameOverScreen { score: 7 }),
        };

        assert_eq!(
            step(&mut controller, &[GameInput::Other], &mut audio),
            FrameOutcome::Continue
        );
        assert!(matches!(controller.screen(), Screen::GameOver(_)));

        step(&mut controller, &[GameInput::Jump], &mut audio);
        assert_eq!(*controller.screen(), Screen::Start(StartScreen::new()));

        let mut controller = ScreenController {
            screen: Screen::GameOver(GameOverScreen { score: 7 }),
        };
        assert_eq!(
            step(&mut controller, &[GameInput::Quit], &mut audio),
            FrameOutcome::Quit
        );
    }

    #[test]
    fn test_float_bounces_between_limits() {
        let mut start = StartScreen::new();
        let mut min: f64 = 0.0;
        let mut max: f64 = 0.0;
        for _ in 0..500 {
            start.animate();
            min = min.min(start.float_offset);
            max = max.max(start.float_offset);
        }
        assert!(max > FLOAT_LIMIT && max <= FLOAT_LIMIT + FLOAT_STEP + 1e-9);
        assert!(min < -FLOAT_LIMIT && min >= -FLOAT_LIMIT - FLOAT_STEP - 1e-9);
    }

    #[test]
    fn test_prompt_blinks_every_half_second() {
        let mut start = StartScreen::new();
        assert!(start.prompt_visible());
        start.blink_timer = 29;
        assert!(start.prompt_visible());
        start.blink_timer = 30;
        assert!(!start.prompt_visible());
        start.blink_timer = 60;
        assert!(start.prompt_visible());
    }
}
