//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a session.
///
/// Bad player input is never an error; it is answered with text.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
