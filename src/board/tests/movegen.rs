//! Legal move generation: forced captures, chains and directions.

use crate::board::{Board, BoardBuilder, Move, Side};

fn sorted(mut moves: Vec<Move>) -> Vec<String> {
    let mut out: Vec<String> = moves.drain(..).map(|m| m.to_string()).collect();
    out.sort();
    out
}

#[test]
fn starting_position_has_seven_moves_each_side() {
    let own = Board::starting(Side::Own).find_possible_moves();
    assert_eq!(
        own,
        vec![
            Move::normal(8, 12),
            Move::normal(8, 13),
            Move::normal(9, 13),
            Move::normal(9, 14),
            Move::normal(10, 14),
            Move::normal(10, 15),
            Move::normal(11, 15),
        ]
    );

    let other = Board::starting(Side::Other).find_possible_moves();
    assert_eq!(
        sorted(other),
        vec!["0 20 16", "0 21 16", "0 21 17", "0 22 17", "0 22 18", "0 23 18", "0 23 19"]
    );
}

#[test]
fn capture_is_forced() {
    // own man on (2,3), other man on (3,2), landing square (4,1) free
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .man(13, Side::Other)
        .build();
    assert_eq!(board.find_possible_moves(), vec![Move::jump(&[9, 16])]);
}

#[test]
fn capture_blocked_by_occupied_landing() {
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .man(13, Side::Other)
        .man(16, Side::Other)
        .build();
    assert_eq!(board.find_possible_moves(), vec![Move::normal(9, 14)]);
}

#[test]
fn chains_are_maximal() {
    let board = BoardBuilder::new()
        .man(1, Side::Own)
        .man(5, Side::Other)
        .man(13, Side::Other)
        .build();
    assert_eq!(board.find_possible_moves(), vec![Move::jump(&[1, 8, 17])]);
}

#[test]
fn shorter_chains_come_first() {
    let board = BoardBuilder::new()
        .man(1, Side::Own)
        .man(5, Side::Other)
        .man(6, Side::Other)
        .man(13, Side::Other)
        .build();
    assert_eq!(
        board.find_possible_moves(),
        vec![Move::jump(&[1, 10]), Move::jump(&[1, 8, 17])]
    );
}

#[test]
fn every_piece_with_a_capture_is_listed() {
    let board = BoardBuilder::new()
        .man(8, Side::Own)
        .man(9, Side::Own)
        .man(10, Side::Own)
        .man(13, Side::Other)
        .build();
    assert_eq!(
        sorted(board.find_possible_moves()),
        vec!["1 8 17", "1 9 16"]
    );
}

#[test]
fn men_do_not_capture_backward() {
    let board = BoardBuilder::new()
        .man(17, Side::Own)
        .man(13, Side::Other)
        .build();
    assert_eq!(
        board.find_possible_moves(),
        vec![Move::normal(17, 21), Move::normal(17, 22)]
    );
}

#[test]
fn kings_capture_backward() {
    let board = BoardBuilder::new()
        .king(17, Side::Own)
        .man(13, Side::Other)
        .build();
    assert_eq!(board.find_possible_moves(), vec![Move::jump(&[17, 8])]);
}

#[test]
fn kings_step_in_four_directions() {
    let board = BoardBuilder::new().king(17, Side::Own).build();
    assert_eq!(
        sorted(board.find_possible_moves()),
        vec!["0 17 13", "0 17 14", "0 17 21", "0 17 22"]
    );
}

#[test]
fn other_men_move_toward_row_zero() {
    let board = BoardBuilder::new()
        .man(17, Side::Other)
        .side_to_move(Side::Other)
        .build();
    assert_eq!(
        board.find_possible_moves(),
        vec![Move::normal(17, 13), Move::normal(17, 14)]
    );

    let capture = BoardBuilder::new()
        .man(17, Side::Other)
        .man(13, Side::Own)
        .side_to_move(Side::Other)
        .build();
    assert_eq!(capture.find_possible_moves(), vec![Move::jump(&[17, 8])]);
}

#[test]
fn king_loop_cannot_land_on_its_origin() {
    // Four men around (2,3): a full loop would end on the start cell.
    let board = BoardBuilder::new()
        .king(9, Side::Own)
        .man(13, Side::Other)
        .man(14, Side::Other)
        .man(21, Side::Other)
        .man(22, Side::Other)
        .build();
    let moves = board.find_possible_moves();
    assert_eq!(
        moves,
        vec![Move::jump(&[9, 16, 25, 18]), Move::jump(&[9, 18, 25, 16])]
    );
    assert!(moves.iter().all(|m| m.to() != Some(9)));
}

#[test]
fn move_generation_leaves_board_untouched() {
    let board = BoardBuilder::new()
        .king(9, Side::Own)
        .man(13, Side::Other)
        .man(14, Side::Other)
        .man(21, Side::Other)
        .build();
    let before = board.clone();
    let _ = board.find_possible_moves();
    assert_eq!(board, before);
}

#[test]
fn no_moves_means_game_over() {
    let blocked = BoardBuilder::new()
        .man(0, Side::Own)
        .man(4, Side::Other)
        .man(5, Side::Other)
        .man(9, Side::Other)
        .build();
    assert!(blocked.game_over());
    assert!(blocked.game_over_with(&blocked.find_possible_moves()));

    let empty = BoardBuilder::new().man(20, Side::Other).build();
    assert!(empty.game_over());
    assert!(!Board::new().game_over());
}
