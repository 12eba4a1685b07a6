use std::fmt;

use super::state::Mode;

/// Named sound cue emitted by the core
///
/// The core only reports cues; playing them is up to the driver. Cues whose
/// sound differs per movement mode carry the mode that was active when they
/// were raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Move(Mode),
    EatFood(Mode),
    EatBuggyBug,
    EnterTronMode,
    Die(Mode),
    PassGlitchedWall,
    NewHighScore,
}

impl AudioCue {
    /// Mode the cue was raised in, for cues that depend on it
    pub fn mode(&self) -> Option<Mode> {
        match self {
            AudioCue::Move(mode) | AudioCue::EatFood(mode) | AudioCue::Die(mode) => Some(*mode),
            _ => None,
        }
    }
}

impl fmt::Display for AudioCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioCue::Move(_) => "move",
            AudioCue::EatFood(_) => "eatFood",
            AudioCue::EatBuggyBug => "eatBuggyBug",
            AudioCue::EnterTronMode => "enterTronMode",
            AudioCue::Die(_) => "die",
            AudioCue::PassGlitchedWall => "passGlitchedWall",
            AudioCue::NewHighScore => "newHighScore",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_dependent_cues() {
        assert_eq!(AudioCue::Move(Mode::Tron).mode(), Some(Mode::Tron));
        assert_eq!(AudioCue::EatFood(Mode::Sticky).mode(), Some(Mode::Sticky));
        assert_eq!(AudioCue::Die(Mode::Snake).mode(), Some(Mode::Snake));
        assert_eq!(AudioCue::EatBuggyBug.mode(), None);
        assert_ne!(AudioCue::Move(Mode::Snake), AudioCue::Move(Mode::Tron));
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(AudioCue::Move(Mode::Tron).to_string(), "move");
        assert_eq!(AudioCue::NewHighScore.to_string(), "newHighScore");
    }
}
