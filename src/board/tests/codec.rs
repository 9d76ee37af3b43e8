//! Cell numbering, raw board codes and wire move format.

use crate::board::{
    cell_to_col, cell_to_row, is_dark, row_col_to_cell, Board, BoardBuilder, BoardError, Cell,
    EndReason, Move, MoveParseError, Piece, Side, CELL_INVALID, CELL_KING, CELL_OTHER, CELL_OWN,
    NUM_CELLS,
};

// ============================================================================
// Cell numbering
// ============================================================================

#[test]
fn cell_numbering_matches_layout() {
    assert_eq!((cell_to_row(0), cell_to_col(0)), (0, 1));
    assert_eq!((cell_to_row(3), cell_to_col(3)), (0, 7));
    assert_eq!((cell_to_row(4), cell_to_col(4)), (1, 0));
    assert_eq!((cell_to_row(31), cell_to_col(31)), (7, 6));
}

#[test]
fn every_cell_is_dark_and_round_trips() {
    for cell in 0..NUM_CELLS {
        let (row, col) = (cell_to_row(cell), cell_to_col(cell));
        assert!(is_dark(row as i32, col as i32), "cell {cell} on a light square");
        assert_eq!(row_col_to_cell(row, col), cell);
    }
}

#[test]
fn light_and_off_board_squares_are_invalid() {
    let board = Board::new();
    assert_eq!(board.at(0, 0), Cell::Invalid);
    assert_eq!(board.at(-1, 0), Cell::Invalid);
    assert_eq!(board.at(8, 1), Cell::Invalid);
    assert_eq!(board.at(3, 8), Cell::Invalid);
    assert_eq!(board.at(0, 0).code(), CELL_INVALID);
    assert_eq!(board.at(0, 1), Cell::Occupied(Piece::man(Side::Own)));
    assert_eq!(board.at(3, 0), Cell::Empty);
}

// ============================================================================
// Raw board codes
// ============================================================================

#[test]
fn raw_cells_round_trip() {
    let board = BoardBuilder::starting_position()
        .king(14, Side::Own)
        .king(17, Side::Other)
        .side_to_move(Side::Other)
        .build();
    let codes = board.to_cells();
    assert_eq!(codes[14], CELL_OWN | CELL_KING);
    assert_eq!(codes[17], CELL_OTHER | CELL_KING);

    let restored = Board::from_cells(&codes, Side::Other).expect("valid codes");
    assert_eq!(restored, board);
    assert_eq!(restored.piece_count(), 26);
}

#[test]
fn raw_cells_reject_bad_input() {
    assert_eq!(
        Board::from_cells(&[0; 31], Side::Own),
        Err(BoardError::CellCount { found: 31 })
    );
    let mut codes = [0u8; NUM_CELLS];
    codes[5] = CELL_OWN | CELL_OTHER;
    assert_eq!(
        Board::from_cells(&codes, Side::Own),
        Err(BoardError::InvalidCellCode { cell: 5, code: 3 })
    );
}

#[test]
fn starting_position_layout() {
    let board = Board::new();
    assert_eq!(board.piece_count(), 24);
    assert_eq!(board.count(Side::Own), 12);
    assert_eq!(board.count(Side::Other), 12);
    assert!((0..12).all(|c| board.piece_at(c) == Some(Piece::man(Side::Own))));
    assert!((12..20).all(|c| board.piece_at(c).is_none()));
    assert!((20..32).all(|c| board.piece_at(c) == Some(Piece::man(Side::Other))));
}

#[test]
fn key_distinguishes_side_to_move() {
    let own = Board::starting(Side::Own);
    let other = Board::starting(Side::Other);
    assert_ne!(own.key(), other.key());
    assert_eq!(own.key(), Board::new().key());
}

#[test]
fn flipped_board_swaps_sides() {
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .king(20, Side::Other)
        .build();
    let flipped = board.flipped();
    assert_eq!(flipped.side_to_move(), Side::Other);
    assert_eq!(flipped.piece_at(22), Some(Piece::man(Side::Other)));
    assert_eq!(flipped.piece_at(11), Some(Piece::king(Side::Own)));
    assert_eq!(flipped.flipped(), board);
}

#[test]
fn display_draws_rows_top_down() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    // row 7 first, columns 7..0: cell 31 (7,6) is the second square
    assert_eq!(lines[1], "  rr  rr  rr  rr");
    assert_eq!(lines[4], "..  ..  ..  ..  ");
    assert_eq!(lines[8], "ww  ww  ww  ww  ");
    assert!(text.ends_with("own to move"));
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn encode_each_move_type() {
    assert_eq!(Move::normal(9, 13).to_string(), "0 9 13");
    assert_eq!(Move::jump(&[1, 8, 17]).to_string(), "2 1 8 17");
    assert_eq!(Move::end_of_game(EndReason::Loss).to_string(), "-1 2");
    assert_eq!(Move::BeginOfGame.to_string(), "-2");
    assert_eq!(Move::Null.to_string(), "-3");
}

#[test]
fn decode_each_move_type() {
    assert_eq!(Move::decode("0 9 13"), Move::normal(9, 13));
    assert_eq!(Move::decode("2 1 8 17\n"), Move::jump(&[1, 8, 17]));
    assert_eq!(Move::decode("-1 1\r\n"), Move::end_of_game(EndReason::Win));
    assert_eq!(Move::decode("-2"), Move::BeginOfGame);
    assert_eq!(Move::decode("-3"), Move::Null);
    assert_eq!(Move::decode("-1 9"), Move::EndOfGame(EndReason::Invalid(9)));
}

#[test]
fn malformed_lines_decode_to_null() {
    for line in [
        "", "   ", "x", "0 9", "0 9 13 17", "1 9", "0 9 32", "0 -1 4", "-4", "-1", "2 1 8 17 26",
        "13 0 0 0 0 0 0 0 0 0 0 0 0 0", "0 9 1.5",
    ] {
        assert_eq!(Move::decode(line), Move::Null, "line {line:?}");
    }
}

#[test]
fn strict_decoding_explains_failures() {
    assert_eq!("".parse::<Move>(), Err(MoveParseError::Empty));
    assert_eq!(
        "0 a".parse::<Move>(),
        Err(MoveParseError::InvalidToken {
            token: "a".to_string()
        })
    );
    assert_eq!(
        "-7".parse::<Move>(),
        Err(MoveParseError::UnknownType { found: -7 })
    );
    assert_eq!(
        "0 4 40".parse::<Move>(),
        Err(MoveParseError::CellOutOfRange { cell: 40 })
    );
    assert_eq!(
        "12 0 0 0 0 0 0 0 0 0 0 0 0 0".parse::<Move>(),
        Err(MoveParseError::TooLong { cells: 13 })
    );
    assert_eq!(
        "1 9".parse::<Move>(),
        Err(MoveParseError::LengthMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn longest_wire_chain_is_eleven_captures() {
    let cells: Vec<u8> = (0..12).collect();
    let line = format!(
        "11 {}",
        cells.iter().map(u8::to_string).collect::<Vec<_>>().join(" ")
    );
    let mv = Move::decode(&line);
    assert_eq!(mv.number_of_jumps(), 11);
    assert_eq!(mv.to_string(), line);
}

#[test]
fn move_accessors() {
    let mv = Move::jump(&[1, 8, 17]);
    assert!(mv.is_jump() && !mv.is_normal());
    assert_eq!(mv.move_type(), 2);
    assert_eq!(mv.len(), 3);
    assert_eq!(mv.get(1), Some(8));
    assert_eq!(mv.get(3), None);
    assert_eq!(mv.from(), Some(1));
    assert_eq!(mv.to(), Some(17));
    assert_eq!(mv.iter().collect::<Vec<_>>(), vec![1, 8, 17]);

    let eog = Move::end_of_game(EndReason::Draw);
    assert!(eog.is_eog());
    assert_eq!(eog.get(0), Some(3));
    assert_eq!(eog.from(), None);
    assert!(Move::BeginOfGame.is_bog());
    assert!(Move::Null.is_null() && Move::Null.is_empty());
}
