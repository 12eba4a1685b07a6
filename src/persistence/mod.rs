//! High score persistence
//!
//! The game reads the stored high score once at startup and writes it on
//! every new record. Storage problems never interrupt play: reads fall back
//! to 0 and failed writes are logged and dropped.

pub mod store;

pub use store::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
