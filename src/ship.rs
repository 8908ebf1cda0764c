//! Ship classes and placement orientation.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map a position along the ship (`pos1`) and its fixed lane (`pos2`)
    /// to board `(x, y)`.
    pub fn point(self, pos1: usize, pos2: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (pos1, pos2),
            Orientation::Vertical => (pos2, pos1),
        }
    }
}

/// Class of ship. The discriminant is the cell code an untouched segment of
/// that class carries on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ShipClass {
    PatrolBoat = 3,
    Submarine = 4,
    Destroyer = 5,
    Battleship = 6,
    Carrier = 7,
}

impl ShipClass {
    /// Cell code of an untouched segment.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(ShipClass::PatrolBoat),
            4 => Some(ShipClass::Submarine),
            5 => Some(ShipClass::Destroyer),
            6 => Some(ShipClass::Battleship),
            7 => Some(ShipClass::Carrier),
            _ => None,
        }
    }

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipClass::PatrolBoat => 2,
            ShipClass::Submarine | ShipClass::Destroyer => 3,
            ShipClass::Battleship => 4,
            ShipClass::Carrier => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::PatrolBoat => "Patrol Boat",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Battleship => "Battleship",
            ShipClass::Carrier => "Carrier",
        }
    }

    /// Letter shown on a revealed board.
    pub const fn glyph(self) -> char {
        match self {
            ShipClass::PatrolBoat => 'P',
            ShipClass::Submarine => 'S',
            ShipClass::Destroyer => 'D',
            ShipClass::Battleship => 'B',
            ShipClass::Carrier => 'C',
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.size())
    }
}
