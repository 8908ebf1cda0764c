//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Cell, Game, GameError, Headless, NoPacing, Outcome, Player, Players, Role,
    Screen, Seats, ShipClass, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, SleepPacing, TerminalScreen};
