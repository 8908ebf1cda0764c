//! Common types: board and game errors.

use crate::ship::ShipClass;

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship span leaves the board.
    ShipOutOfBounds,
    /// Ship span covers a cell that is not water.
    ShipOverlaps,
    /// Random placement ran out of attempts.
    UnableToPlaceShip(ShipClass),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip(class) => write!(f, "Unable to place {}", class),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors that stop a game.
#[derive(Debug)]
pub enum GameError {
    /// A side's board could not be generated.
    Placement(BoardError),
    /// No board is stored for this entity.
    MissingEntity(usize),
    /// The human player's input ended.
    InputClosed,
    /// The human player quit.
    Abandoned,
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Placement(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Placement(e) => write!(f, "Board setup failed: {}", e),
            GameError::MissingEntity(entity) => write!(f, "No board for entity {}", entity),
            GameError::InputClosed => write!(f, "Input closed before a coordinate was chosen"),
            GameError::Abandoned => write!(f, "Game abandoned"),
            #[cfg(feature = "std")]
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Placement(e) => Some(e),
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}
