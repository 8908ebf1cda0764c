//! Board state: a flat row-major grid of cell codes, plus random fleet placement.

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, CELL_COUNT, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipClass};
use core::fmt;
use rand::Rng;

/// State of a single grid cell.
///
/// Only two transitions are legal once a game is running: water to miss, and
/// an untouched ship segment to hit. Hit and miss are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Water,
    Hit,
    Miss,
    Ship(ShipClass),
}

impl Cell {
    /// Integer code of the cell: 0 water, 1 hit, 2 miss, 3..=7 ship classes.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Water => 0,
            Cell::Hit => 1,
            Cell::Miss => 2,
            Cell::Ship(class) => class.code(),
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Water),
            1 => Some(Cell::Hit),
            2 => Some(Cell::Miss),
            _ => match ShipClass::from_code(code) {
                Some(class) => Some(Cell::Ship(class)),
                None => None,
            },
        }
    }

    pub const fn is_ship(self) -> bool {
        matches!(self, Cell::Ship(_))
    }
}

/// Offset of `(x, y)` in the flat cell array.
#[inline]
pub const fn index(x: usize, y: usize) -> usize {
    y * BOARD_SIZE + x
}

/// One side's grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board of open water.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Water; CELL_COUNT],
        }
    }

    /// Create a board with the whole fleet placed at random.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for class in FLEET {
            board.place_randomly(rng, class)?;
        }
        Ok(board)
    }

    /// Cell at `(x, y)`. Coordinates must be on the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE, "({x}, {y}) is off the board");
        self.cells[index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`. Coordinates must be on the board.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE, "({x}, {y}) is off the board");
        self.cells[index(x, y)] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    /// Number of untouched ship segments left.
    pub fn ship_cells(&self) -> usize {
        self.count(Cell::is_ship)
    }

    /// Place `class` with its first segment at `pos1` along `orientation`,
    /// in lane `pos2`.
    ///
    /// The span is checked in full before anything is written, so a rejected
    /// placement leaves the board untouched.
    pub fn place(
        &mut self,
        class: ShipClass,
        orientation: Orientation,
        pos1: usize,
        pos2: usize,
    ) -> Result<(), BoardError> {
        let size = class.size();
        if pos1 > BOARD_SIZE - size || pos2 >= BOARD_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        let span = || (pos1..pos1 + size).map(|p| orientation.point(p, pos2));
        if span().any(|(x, y)| self.get(x, y) != Cell::Water) {
            return Err(BoardError::ShipOverlaps);
        }
        for (x, y) in span() {
            self.set(x, y, Cell::Ship(class));
        }
        Ok(())
    }

    /// Place `class` at a uniformly random orientation and anchor, retrying
    /// the whole draw until the span is clear.
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(), BoardError> {
        let size = class.size();
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let pos1 = rng.random_range(0..=BOARD_SIZE - size);
            let pos2 = rng.random_range(0..BOARD_SIZE);
            match self.place(class, orientation, pos1, pos2) {
                Ok(()) => {
                    log::debug!(
                        "placed {} {:?} at ({}, {}) after {} attempt(s)",
                        class,
                        orientation,
                        pos1,
                        pos2,
                        attempt
                    );
                    return Ok(());
                }
                Err(BoardError::ShipOverlaps) => {
                    log::trace!("{} overlaps at ({}, {}), retrying", class, pos1, pos2);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip(class))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.chunks(BOARD_SIZE) {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{}", cell.code())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
