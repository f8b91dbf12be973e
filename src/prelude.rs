//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, GameEngine, InputProvider, MoveError, Outcome, Player, PlayerId, COLS, ROWS,
};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, ConsoleRenderer, GameSession, Renderer, SessionEnd};
