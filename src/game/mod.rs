//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The driver owns a [`GameState`], feeds actions through
//! [`GameEngine::handle_input`], calls [`GameEngine::tick`] once per frame and
//! lets the engine resolve deferred actions with [`GameEngine::advance_timers`].

pub mod action;
pub mod audio;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod placement;
pub mod scoring;
pub mod snake;
pub mod state;
pub mod timer;

// Re-export commonly used types
pub use action::{Direction, InputAction};
pub use audio::AudioCue;
pub use board::{Board, BugPart, BuggyBug, Cell, Tile};
pub use config::{BorderOffset, GameConfig};
pub use engine::{CollisionType, GameEngine, InputOutcome, StepInfo, StepResult};
pub use error::{GameError, GameResult};
pub use placement::EdibleKind;
pub use snake::{Segment, Snake};
pub use state::{GameState, Mode, Phase, Position};
pub use timer::{TimerPurpose, Timers};
