use std::io::Write;
use tracing::trace;

use crate::game::AudioCue;

/// Fire-and-forget sink for the core's sound cues
///
/// A terminal has no mixer, so the loud cues ring the bell and the rest are
/// only traced.
pub struct AudioPlayer<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> AudioPlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out, muted: false }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        trace!(muted = self.muted, "toggled audio");
    }

    pub fn play(&mut self, cue: AudioCue) {
        trace!(%cue, mode = ?cue.mode(), muted = self.muted, "audio cue");
        if self.muted {
            return;
        }

        if matches!(
            cue,
            AudioCue::Die(_) | AudioCue::EnterTronMode | AudioCue::NewHighScore
        ) {
            // Playback failures never reach the game
            let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mode;

    #[test]
    fn test_loud_cues_ring_bell() {
        let mut player = AudioPlayer::new(Vec::new());
        player.play(AudioCue::Move(Mode::Snake));
        player.play(AudioCue::Die(Mode::Snake));
        player.play(AudioCue::EatFood(Mode::Tron));
        player.play(AudioCue::NewHighScore);
        assert_eq!(player.out, b"\x07\x07");
    }

    #[test]
    fn test_muted_player_is_silent() {
        let mut player = AudioPlayer::new(Vec::new());
        player.toggle_mute();
        assert!(player.is_muted());
        player.play(AudioCue::Die(Mode::Snake));
        assert!(player.out.is_empty());

        player.toggle_mute();
        assert!(!player.is_muted());
    }
}
