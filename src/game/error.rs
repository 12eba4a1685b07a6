use thiserror::Error;

/// Errors raised by the simulation core
///
/// Collisions are not errors; they end the game through the normal state
/// machine. These variants only cover boards the core cannot run on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The configuration describes a board the game cannot be played on
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every candidate cell for an edible is excluded
    #[error("no free cell left to place {0}")]
    NoFreeCell(&'static str),
}

pub type GameResult<T> = Result<T, GameError>;
