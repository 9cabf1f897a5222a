//! Check, double check and pin filtering.

use super::{destinations, pos, squares};
use crate::board::{Color, GameState, PieceKind};

const ROOK_CHECK: &str = "4r2k/8/8/1Q6/R7/8/3N4/4K3 w - - 0 1";

#[test]
fn test_single_check_restricts_to_check_ray() {
    let state = GameState::from_fen(ROOK_CHECK);
    assert!(state.is_in_check(Color::White));
    assert!(!state.is_in_check(Color::Black));

    assert_eq!(destinations(&state, "a4"), squares(&["e4"]));
    assert_eq!(destinations(&state, "d2"), squares(&["e4"]));
    assert_eq!(destinations(&state, "b5"), squares(&["e2", "e5", "e8"]));
}

#[test]
fn test_king_steps_off_the_checking_file() {
    let state = GameState::from_fen(ROOK_CHECK);
    assert_eq!(destinations(&state, "e1"), squares(&["d1", "f1", "f2"]));
}

#[test]
fn test_king_cannot_retreat_along_check_line() {
    let state = GameState::from_fen("4k3/8/8/8/4K3/8/8/4r3 w - - 0 1");
    let dests = destinations(&state, "e4");
    assert!(!dests.contains(&pos("e5")));
    assert!(!dests.contains(&pos("e3")));
    assert!(dests.contains(&pos("d5")));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let state = GameState::from_fen("4r2k/8/8/8/8/8/4q3/4K3 w - - 0 1");
    // The queen is defended by the rook; every flight square is covered.
    assert!(destinations(&state, "e1").is_empty());
    assert!(!state.has_any_legal_move(Color::White));
}

#[test]
fn test_double_check_only_king_moves() {
    let state = GameState::from_fen("4r2k/8/8/8/8/5n2/3N4/4K3 w - - 0 1");
    let analysis = state.analyze(Color::White);
    assert!(analysis.is_double_check());
    assert!(destinations(&state, "d2").is_empty());
    assert_eq!(destinations(&state, "e1"), squares(&["d1", "f1", "f2"]));
}

#[test]
fn test_knight_check_can_be_captured_not_blocked() {
    let state = GameState::from_fen("6k1/8/8/8/8/3n4/8/B3K3 w - - 0 1");
    assert!(state.is_in_check(Color::White));
    // The bishop on a1 can not interpose against a knight.
    assert!(destinations(&state, "a1").is_empty());

    let state = GameState::from_fen("7k/8/8/8/8/3n4/8/3QK3 w - - 0 1");
    assert_eq!(destinations(&state, "d1"), squares(&["d3"]));
}

#[test]
fn test_pinned_rook_moves_along_pin() {
    let state = GameState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
    assert_eq!(
        destinations(&state, "e2"),
        squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn test_pinned_bishop_stays_on_diagonal() {
    let state = GameState::from_fen("7k/8/8/q7/8/8/3B4/4K3 w - - 0 1");
    assert_eq!(destinations(&state, "d2"), squares(&["a5", "b4", "c3"]));
}

#[test]
fn test_pinned_knight_is_frozen() {
    let state = GameState::from_fen("7k/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
    assert!(destinations(&state, "d2").is_empty());
    assert!(state.analyze(Color::White).pin_line(pos("d2")).is_some());
}

#[test]
fn test_pin_is_recomputed_after_pinner_leaves() {
    let mut state = GameState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 b - - 0 1");
    assert!(state.analyze(Color::White).pin_line(pos("e2")).is_some());
    let rook = state.board().piece_at(pos("e8")).unwrap();
    state.apply_move(rook, pos("e8"), pos("a8"), None).unwrap();
    assert!(state.analyze(Color::White).pin_line(pos("e2")).is_none());
    assert!(destinations(&state, "e2").contains(&pos("a2")));
}

#[test]
fn test_pawn_gives_check() {
    let state = GameState::from_fen("8/8/8/3k4/4P3/8/8/4K3 b - - 0 1");
    assert!(state.is_in_check(Color::Black));
    let analysis = state.analyze(Color::Black);
    assert!(analysis.checkers().contains(pos("e4")));
    assert_eq!(
        state
            .board()
            .piece_at(pos("e4"))
            .map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );
}
