//! En passant timing, capture mechanics and king safety.

use super::{destinations, find_move, play, pos, squares};
use crate::board::{Color, GameState, PieceKind};

#[test]
fn test_double_push_sets_target_for_one_ply() {
    let mut state = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut state, "d7d5");
    let target = state.en_passant().unwrap();
    assert_eq!(target.square(), pos("d6"));
    assert_eq!(target.color(), Color::Black);

    let mv = find_move(&state, "e5", "d6").unwrap();
    assert!(mv.is_en_passant() && mv.is_capture());
}

#[test]
fn test_capture_removes_pawn_behind_target() {
    let mut state = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut state, "d7d5");
    play(&mut state, "e5d6");

    let board = state.board();
    assert!(board.is_empty(pos("d5")));
    assert!(board.is_empty(pos("e5")));
    assert!(board
        .piece_at(pos("d6"))
        .unwrap()
        .is(Color::White, PieceKind::Pawn));
    assert_eq!(board.piece_count(), 3);
    assert_eq!(state.en_passant(), None);
    assert_eq!(state.halfmove_clock(), 0);
}

#[test]
fn test_opportunity_expires_after_another_move() {
    let mut state = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut state, "d7d5");
    play(&mut state, "e1e2");
    assert_eq!(state.en_passant(), None);
    play(&mut state, "e8e7");
    assert!(find_move(&state, "e5", "d6").is_none());
    assert_eq!(destinations(&state, "e5"), squares(&["e6"]));
}

#[test]
fn test_only_adjacent_pawn_may_capture() {
    let mut state = GameState::new();
    play(&mut state, "e2e4");
    let target = state.en_passant().unwrap();
    assert_eq!(target.square(), pos("e3"));
    // No black pawn stands next to e4.
    assert!(state
        .all_legal_moves()
        .iter()
        .all(|(_, mv)| !mv.is_en_passant()));

    let mut state =
        GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 3");
    play(&mut state, "e2e4");
    assert!(find_move(&state, "d4", "e3").unwrap().is_en_passant());
    assert_eq!(destinations(&state, "d4"), squares(&["d3", "e3"]));
}

#[test]
fn test_horizontal_discovered_check_forbids_capture() {
    let state = GameState::from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1");
    assert!(state.en_passant().is_some());
    assert_eq!(destinations(&state, "b5"), squares(&["b6"]));
}

#[test]
fn test_capturing_the_checking_pawn() {
    let state = GameState::from_fen("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    assert!(state.is_in_check(Color::Black));
    let moves = state.legal_moves(pos("e4"));
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_en_passant());
    assert_eq!(moves[0].destination(), pos("d3"));
}

#[test]
fn test_pinned_pawn_cannot_capture_off_the_pin() {
    // a7-e3 diagonal: capturing onto d6 would open it.
    let state = GameState::from_fen("7k/b7/8/2Pp4/8/4K3/8/8 w - d6 0 1");
    assert!(state.analyze(Color::White).pin_line(pos("c5")).is_some());
    assert!(find_move(&state, "c5", "d6").is_none());
    assert_eq!(destinations(&state, "c5"), Vec::new());
}

#[test]
fn test_target_without_capturable_pawn_is_ignored() {
    let state = GameState::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1");
    assert_eq!(state.en_passant(), None);
}
