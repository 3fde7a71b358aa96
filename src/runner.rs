//! Fixed-timestep frame pacing.
//!
//! The host loop waits for input until the next frame is due, then runs
//! exactly one controller step. A late frame is not caught up: the schedule
//! restarts from the moment it was noticed.

use crate::input::GameInput;
use std::io;
use std::time::{Duration, Instant};

pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: Instant::now() + interval,
        }
    }

    pub fn time_until_next_frame(&self) -> Duration {
        self.next_frame.saturating_duration_since(Instant::now())
    }

    pub fn frame_due(&self) -> bool {
        Instant::now() >= self.next_frame
    }

    /// Schedule the following frame.
    pub fn advance(&mut self) {
        let now = Instant::now();
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }
}

/// Collect inputs until the current frame is due.
///
/// `poll` waits at most the given duration and returns the input that
/// arrived, if any.
pub fn gather_inputs<F>(clock: &FrameClock, mut poll: F) -> io::Result<Vec<GameInput>>
where
    F: FnMut(Duration) -> io::Result<Option<GameInput>>,
{
    let mut inputs = Vec::new();
    loop {
        if let Some(input) = poll(clock.time_until_next_frame())? {
            inputs.push(input);
        }
        if clock.frame_due() {
            return Ok(inputs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_frame_not_due_immediately() {
        let clock = FrameClock::new(Duration::from_secs(60));
        assert!(!clock.frame_due());
        assert!(clock.time_until_next_frame() > Duration::from_secs(59));
    }

    #[test]
    fn test_late_frame_does_not_catch_up() {
        let mut clock = FrameClock::new(Duration::from_millis(1));
        thread::sleep(Duration::from_millis(10));
        assert!(clock.frame_due());
        clock.advance();
        // One frame scheduled from now, not nine overdue ones.
        assert!(!clock.frame_due());
    }

    #[test]
    fn test_gather_inputs_keeps_order_until_due() {
        let clock = FrameClock::new(Duration::from_millis(20));
        let mut script = vec![GameInput::Jump, GameInput::Other, GameInput::Quit].into_iter();

        let inputs = gather_inputs(&clock, |timeout| match script.next() {
            Some(input) => Ok(Some(input)),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        })
        .unwrap();

        assert_eq!(
            inputs,
            vec![GameInput::Jump, GameInput::Other, GameInput::Quit]
        );
        assert!(clock.frame_due());
    }

    #[test]
    fn test_gather_inputs_propagates_errors() {
        let clock = FrameClock::new(Duration::from_millis(20));
        let result = gather_inputs(&clock, |_| {
            Err(io::Error::new(io::ErrorKind::Other, "terminal gone"))
        });
        assert!(result.is_err());
    }
}
