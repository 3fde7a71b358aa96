//! Integration test: screen controller orchestration
//!
//! Drives the Start → Play → GameOver → Start cycle frame by frame the way
//! the terminal loop does, checking sound cues and quit handling.

use flappy_burger::audio::SoundEffect;
use flappy_burger::input::GameInput;
use flappy_burger::screen::{GameOverScreen, StartScreen};
use flappy_burger::{FrameOutcome, GameConfig, Screen, ScreenController};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Tuning where the gap spans the whole playfield, so only the bounds can end a run.
fn open_sky_config() -> GameConfig {
    GameConfig {
        gap_height: 600.0,
        gap_margin: 0.0,
        ..Default::default()
    }
}

/// Jump whenever the burger sinks below the midpoint.
fn hover_input(controller: &ScreenController) -> Vec<GameInput> {
    match controller.screen() {
        Screen::Play(session) if session.player.position_y > 300.0 => vec![GameInput::Jump],
        _ => Vec::new(),
    }
}

#[test]
fn test_full_cycle_with_scoring() {
    let config = open_sky_config();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut audio: Vec<SoundEffect> = Vec::new();
    let mut controller = ScreenController::new();

    // Idle on the title screen for a while.
    for _ in 0..45 {
        let outcome = controller.step(&[], &config, &mut rng, &mut audio);
        assert_eq!(outcome, FrameOutcome::Continue);
    }
    match controller.screen() {
        Screen::Start(start) => {
            assert_eq!(start.blink_timer, 45);
            assert!(!start.prompt_visible());
        }
        other => panic!("expected start screen, got {:?}", other),
    }

    controller.step(&[GameInput::Jump], &config, &mut rng, &mut audio);
    assert!(matches!(controller.screen(), Screen::Play(_)));

    // Hover until three obstacles have been cleared.
    let mut frames = 0;
    loop {
        let inputs = hover_input(&controller);
        controller.step(&inputs, &config, &mut rng, &mut audio);
        frames += 1;
        match controller.screen() {
            Screen::Play(session) if session.score >= 3 => break,
            Screen::Play(_) => {}
            other => panic!("run ended early: {:?}", other),
        }
        assert!(frames < 2_000, "never scored three points");
    }
    assert_eq!(audio, vec![SoundEffect::Score; 3]);

    // Stop jumping and let the burger drop out of the playfield.
    while matches!(controller.screen(), Screen::Play(_)) {
        controller.step(&[], &config, &mut rng, &mut audio);
        frames += 1;
        assert!(frames < 4_000, "never crashed");
    }
    assert_eq!(
        *controller.screen(),
        Screen::GameOver(GameOverScreen { score: 3 })
    );
    assert_eq!(audio.last(), Some(&SoundEffect::Hit));

    // Retry returns to a fresh title screen.
    controller.step(&[GameInput::Other, GameInput::Jump], &config, &mut rng, &mut audio);
    assert_eq!(*controller.screen(), Screen::Start(StartScreen::new()));

    let outcome = controller.step(&[GameInput::Quit], &config, &mut rng, &mut audio);
    assert_eq!(outcome, FrameOutcome::Quit);
}

#[test]
fn test_new_session_after_retry_starts_clean() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut audio: Vec<SoundEffect> = Vec::new();
    let mut controller = ScreenController::new();

    for _ in 0..2 {
        controller.step(&[GameInput::Jump], &config, &mut rng, &mut audio);
        match controller.screen() {
            Screen::Play(session) => {
                assert_eq!(session.tick_count, 0);
                assert_eq!(session.score, 0);
                assert_eq!(session.player.position_y, config.start_y());
            }
            other => panic!("expected play screen, got {:?}", other),
        }

        while matches!(controller.screen(), Screen::Play(_)) {
            controller.step(&[], &config, &mut rng, &mut audio);
        }
        controller.step(&[GameInput::Jump], &config, &mut rng, &mut audio);
        assert!(matches!(controller.screen(), Screen::Start(_)));
    }

    assert_eq!(audio, vec![SoundEffect::Hit, SoundEffect::Hit]);
}

#[test]
fn test_quit_from_every_screen() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut audio: Vec<SoundEffect> = Vec::new();

    let mut controller = ScreenController::new();
    assert_eq!(
        controller.step(&[GameInput::Quit], &config, &mut rng, &mut audio),
        FrameOutcome::Quit
    );

    let mut controller = ScreenController::new();
    controller.step(&[GameInput::Jump], &config, &mut rng, &mut audio);
    assert_eq!(
        controller.step(&[GameInput::Quit], &config, &mut rng, &mut audio),
        FrameOutcome::Quit
    );

    let mut controller = ScreenController::new();
    controller.step(&[GameInput::Jump], &config, &mut rng, &mut audio);
    while matches!(controller.screen(), Screen::Play(_)) {
        controller.step(&[], &config, &mut rng, &mut audio);
    }
    assert_eq!(
        controller.step(&[GameInput::Quit, GameInput::Jump], &config, &mut rng, &mut audio),
        FrameOutcome::Quit
    );
}
