//! Fire-and-forget sound cues.
//!
//! Game logic only reports *which* cue to play. A sink that cannot play it
//! simply drops it.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// An obstacle was cleared.
    Score,
    /// The run ended in a crash.
    Hit,
}

pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Plays nothing. Used with `--mute` and `sound_enabled = false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Rings the terminal bell. A crash rings twice.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        let bell: &[u8] = match effect {
            SoundEffect::Score => b"\x07",
            SoundEffect::Hit => b"\x07\x07",
        };
        // A failed bell must never affect the game.
        let _ = self.out.write_all(bell).and_then(|_| self.out.flush());
    }
}

/// Records cues in order; useful for headless runs and tests.
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}
