use crate::ship::ShipClass;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const NUM_SHIPS: usize = 5;
/// Fleet each side places, in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::PatrolBoat,
    ShipClass::Submarine,
    ShipClass::Destroyer,
    ShipClass::Battleship,
    ShipClass::Carrier,
];

/// Total number of ship segments in the standard fleet.
pub const FLEET_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Attempts per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Delays between visible steps, in milliseconds.
pub mod pacing {
    pub const TURN_MS: u64 = 750;
    pub const THINKING_MS: u64 = 750;
    pub const AFTER_THINKING_MS: u64 = 1250;
    pub const SHIP_SUNK_MS: u64 = 500;
    pub const GAME_OVER_MS: u64 = 1000;
    pub const REDRAW_MS: u64 = 1500;
}
