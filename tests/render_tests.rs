use text_battleship::{grid_text, tile, Board, Cell, Orientation, Role, ShipClass, BOARD_SIZE};

#[test]
fn empty_board_is_ten_rows_of_ten_cells() {
    let text = grid_text(&Board::new(), Role::Human);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), BOARD_SIZE);
    for row in rows {
        assert_eq!(row, "| | | | | | | | | | |");
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn ships_are_revealed_only_to_their_human_owner() {
    let mut board = Board::new();
    board
        .place(ShipClass::Carrier, Orientation::Horizontal, 0, 0)
        .unwrap();
    board.set(0, 0, Cell::Hit);
    board.set(9, 9, Cell::Miss);

    let human = grid_text(&board, Role::Human);
    assert_eq!(human.lines().next().unwrap(), "|*|C|C|C|C| | | | | |");
    assert!(human.lines().last().unwrap().ends_with("|_|"));

    let ai = grid_text(&board, Role::Automated);
    assert_eq!(ai.lines().next().unwrap(), "|*| | | | | | | | | |");
}

#[test]
fn glyphs_per_class() {
    let glyphs: String = [
        ShipClass::PatrolBoat,
        ShipClass::Submarine,
        ShipClass::Destroyer,
        ShipClass::Battleship,
        ShipClass::Carrier,
    ]
    .into_iter()
    .map(|c| tile(Cell::Ship(c), Role::Human))
    .collect();
    assert_eq!(glyphs, "PSDBC");
}
