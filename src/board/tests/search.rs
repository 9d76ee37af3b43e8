//! Search algorithm tests.
//!
//! Tests for alpha-beta, the depth-1 fallback, cancellation and the memo.

use std::thread;
use std::time::{Duration, Instant};

use crate::board::search::{search, search_fixed_depth, SearchConfig, SearchState};
use crate::board::{Board, BoardBuilder, Move, Side, LOSS, WIN};
use crate::sync::StopFlag;

// ============================================================================
// Alpha-beta search tests
// ============================================================================

#[test]
fn avoids_stepping_into_a_capture() {
    // 9->14 lets the man on (4,5) jump back to (2,3)
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .man(18, Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search_fixed_depth(&board, &mut state, 2).expect("has moves");
    assert_eq!(result.best_move, Move::normal(9, 13));
    assert!(result.value > LOSS);
}

#[test]
fn deeper_search_keeps_the_safe_move() {
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .man(18, Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search(&board, &mut state, &SearchConfig::depth(6), &StopFlag::new())
        .expect("has moves");
    assert_eq!(result.best_move, Move::normal(9, 13));
}

#[test]
fn winning_capture_ends_search_early() {
    // either capture removes the last enemy piece
    let board = BoardBuilder::new()
        .man(8, Side::Own)
        .man(9, Side::Own)
        .man(13, Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search(&board, &mut state, &SearchConfig::depth(20), &StopFlag::new())
        .expect("has moves");
    assert_eq!(result.value, WIN);
    assert_eq!(result.depth, 1);
    assert!(result.best_move.is_jump());
}

#[test]
fn lost_positions_are_recognised() {
    // the only piece steps next to a king that takes it either way
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .king(18, Side::Other)
        .king(17, Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search(&board, &mut state, &SearchConfig::depth(8), &StopFlag::new())
        .expect("has moves");
    assert_eq!(result.value, LOSS);
}

#[test]
fn search_from_the_other_side() {
    // mirror image of the hanging-man position
    let board = BoardBuilder::new()
        .man(22, Side::Other)
        .man(13, Side::Own)
        .side_to_move(Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search_fixed_depth(&board, &mut state, 2).expect("has moves");
    assert_eq!(result.best_move, Move::normal(22, 18));
}

// ============================================================================
// Driver: fallback, cancellation, shortcuts
// ============================================================================

#[test]
fn no_moves_gives_no_result() {
    let board = BoardBuilder::new().man(20, Side::Other).build();
    let mut state = SearchState::default();
    assert!(search(&board, &mut state, &SearchConfig::depth(4), &StopFlag::new()).is_none());
    assert!(search_fixed_depth(&board, &mut state, 4).is_none());
}

#[test]
fn single_move_is_returned_without_searching() {
    let board = BoardBuilder::new()
        .man(9, Side::Own)
        .man(13, Side::Other)
        .man(30, Side::Other)
        .build();
    let mut state = SearchState::default();
    let result = search(&board, &mut state, &SearchConfig::depth(10), &StopFlag::new())
        .expect("has moves");
    assert_eq!(result.best_move, Move::jump(&[9, 16]));
    assert_eq!(result.depth, 0);
    assert_eq!(result.nodes, 0);
}

#[test]
fn expired_deadline_returns_depth_one_result() {
    let board = Board::new();
    let mut state = SearchState::default();
    let config = SearchConfig::until(Instant::now());
    let result = search(&board, &mut state, &config, &StopFlag::new()).expect("has moves");
    assert_eq!(result.depth, 1);

    let reference = search_fixed_depth(&board, &mut SearchState::default(), 1).expect("has moves");
    assert_eq!(result.best_move, reference.best_move);
    assert_eq!(result.value, reference.value);
}

#[test]
fn raised_stop_flag_returns_depth_one_result() {
    let board = Board::new();
    let mut state = SearchState::default();
    let config = SearchConfig::depth(30);
    let result = search(&board, &mut state, &config, &StopFlag::stopped()).expect("has moves");
    assert_eq!(result.depth, 1);
    assert!(board.find_possible_moves().contains(&result.best_move));
}

#[test]
fn stop_mid_round_keeps_the_last_completed_round() {
    let board = Board::new();
    let mut state = SearchState::default();
    let stop = StopFlag::new();
    let remote = stop.clone();
    let raiser = thread::spawn(move || {
        thread::sleep(Duration::from_millis(40));
        remote.stop();
    });
    let result = search(&board, &mut state, &SearchConfig::depth(64), &stop).expect("has moves");
    raiser.join().expect("stop thread panicked");
    assert!(result.depth >= 1 && result.depth < 64, "depth {}", result.depth);
    assert!(board.find_possible_moves().contains(&result.best_move));

    // the half-searched round must not leak into the answer
    let reference =
        search_fixed_depth(&board, &mut SearchState::default(), result.depth).expect("has moves");
    assert_eq!(result.value, reference.value);
}

#[test]
fn search_respects_the_deadline() {
    let board = Board::new();
    let mut state = SearchState::default();
    state.params_mut().move_overhead_ms = 0;
    let started = Instant::now();
    let config = SearchConfig::until(started + Duration::from_millis(200));
    let result = search(&board, &mut state, &config, &StopFlag::new()).expect("has moves");
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(result.depth >= 1);
}

#[test]
fn depth_cap_is_honoured() {
    let board = Board::new();
    let mut state = SearchState::default();
    let result = search(&board, &mut state, &SearchConfig::depth(3), &StopFlag::new())
        .expect("has moves");
    assert!(result.depth <= 3);
    assert!(result.nodes > 0);

    state.params_mut().max_depth = 2;
    let result = search(&board, &mut state, &SearchConfig::default(), &StopFlag::new())
        .expect("has moves");
    assert!(result.depth <= 2);
}

#[test]
fn fixed_depth_reports_its_depth() {
    let board = Board::new();
    let mut state = SearchState::default();
    let result = search_fixed_depth(&board, &mut state, 4).expect("has moves");
    assert_eq!(result.depth, 4);
    assert!((0.0..=1.0).contains(&result.value));
}

// ============================================================================
// Memo
// ============================================================================

#[test]
fn memo_is_filled_and_reused_across_rounds() {
    let board = Board::new();
    let mut state = SearchState::default();
    let first = search(&board, &mut state, &SearchConfig::depth(5), &StopFlag::new())
        .expect("has moves");
    assert!(!state.memo.is_empty());

    let second = search(&board, &mut state, &SearchConfig::depth(5), &StopFlag::new())
        .expect("has moves");
    assert_eq!(first.value, second.value);
}

#[test]
fn memo_stays_within_its_capacity() {
    let board = Board::new();
    let mut state = SearchState::default();
    state.params_mut().memo_capacity = 2_000;
    let result = search(&board, &mut state, &SearchConfig::depth(7), &StopFlag::new())
        .expect("has moves");
    assert_eq!(result.depth, 7);
    assert!(state.memo.len() <= 2_000, "memo holds {}", state.memo.len());

    let reference = search_fixed_depth(&board, &mut SearchState::default(), 7).expect("has moves");
    assert_eq!(result.value, reference.value);
}

#[test]
fn memo_drops_unreachable_positions() {
    let board = Board::new();
    let child = board.copy_and_move(&Move::normal(9, 13));
    let mut state = SearchState::default();
    search_fixed_depth(&board, &mut state, 3);
    assert!(state.memo.lookup(24, child.key()).is_some());

    // fewer pieces on the board: the 24-piece bucket can never be reached
    let later = BoardBuilder::starting_position().clear(0).build();
    search(&later, &mut state, &SearchConfig::depth(2), &StopFlag::new());
    assert!(state.memo.lookup(24, child.key()).is_none());
}

#[test]
fn results_do_not_depend_on_memo_history() {
    let board = BoardBuilder::starting_position()
        .clear(9)
        .clear(22)
        .man(13, Side::Own)
        .man(18, Side::Other)
        .build();
    let mut warm = SearchState::default();
    search_fixed_depth(&board, &mut warm, 2);
    search_fixed_depth(&board, &mut warm, 3);
    let warm_result = search_fixed_depth(&board, &mut warm, 4).expect("has moves");

    let cold_result =
        search_fixed_depth(&board, &mut SearchState::default(), 4).expect("has moves");
    assert_eq!(warm_result.value, cold_result.value);
}

// ============================================================================
// History heuristic
// ============================================================================

#[test]
fn cutoff_moves_are_tried_first_afterwards() {
    let board = Board::new();
    let mut state = SearchState::default();
    search_fixed_depth(&board, &mut state, 5);

    let best = (0..32u8)
        .flat_map(|from| (0..32u8).map(move |to| Move::normal(from, to)))
        .max_by_key(|mv| state.history.score(mv))
        .expect("non-empty");
    assert!(state.history.score(&best) > 0, "no cutoff was credited");

    let never_played = Move::normal(0, 31);
    let mut moves = vec![never_played, best];
    state.history.order(&mut moves);
    assert_eq!(moves, vec![best, never_played]);

    state.clear();
    assert_eq!(state.history.score(&best), 0);
}

#[test]
fn history_does_not_change_values() {
    let board = BoardBuilder::starting_position()
        .clear(10)
        .clear(21)
        .man(14, Side::Own)
        .man(17, Side::Other)
        .build();
    let mut trained = SearchState::default();
    search(&Board::new(), &mut trained, &SearchConfig::depth(6), &StopFlag::new());
    trained.memo.clear();
    let trained_result = search_fixed_depth(&board, &mut trained, 5).expect("has moves");

    let fresh_result =
        search_fixed_depth(&board, &mut SearchState::default(), 5).expect("has moves");
    assert_eq!(trained_result.value, fresh_result.value);
}
