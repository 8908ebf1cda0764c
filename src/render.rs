//! Text form of a board.

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;
use crate::players::Role;
use alloc::string::String;

/// Character shown for `cell` on a board owned by `owner`. Ships are only
/// revealed on the human side's own board.
pub fn tile(cell: Cell, owner: Role) -> char {
    match (cell, owner) {
        (Cell::Water, _) => ' ',
        (Cell::Hit, _) => '*',
        (Cell::Miss, _) => '_',
        (Cell::Ship(class), Role::Human) => class.glyph(),
        (Cell::Ship(_), Role::Automated) => ' ',
    }
}

/// One `|c|c|...|c|` line per row, each terminated by a newline.
pub fn grid_text(board: &Board, owner: Role) -> String {
    let mut out = String::with_capacity((BOARD_SIZE * 2 + 2) * BOARD_SIZE);
    for y in 0..BOARD_SIZE {
        out.push('|');
        for x in 0..BOARD_SIZE {
            out.push(tile(board.get(x, y), owner));
            out.push('|');
        }
        out.push('\n');
    }
    out
}
