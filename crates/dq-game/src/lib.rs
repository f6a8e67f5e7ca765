//! Game engine for Dicequest.
//!
//! Runs the setup flow (language, start confirmation, name) and the command
//! loop with its five commands: `Help`, `Dice`, `Money`, `Inventory`, and
//! `Quit`. Terminal I/O goes through any `BufRead`/`Write` pair so sessions
//! can be scripted.

pub mod command;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod pacing;
pub mod player;

pub use command::Command;
pub use config::GameConfig;
pub use dice::DiceOutcome;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use pacing::{NoPacer, Pacer, SleepPacer};
pub use player::PlayerRecord;
