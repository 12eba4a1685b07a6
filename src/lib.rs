//! Glitch Snake - a terminal snake game with sticky and tron modes
//!
//! This library provides:
//! - Core game logic (game module): board, placement, movement, scoring, state machine
//! - High score persistence (persistence module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod persistence;
pub mod render;
