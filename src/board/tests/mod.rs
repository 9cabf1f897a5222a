//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `check.rs` - Check rays, double check and pins
//! - `movegen.rs` - Per-piece generation, promotion and game status
//! - `castling.rs` - Castling preconditions and rights revocation
//! - `en_passant.rs` - En passant timing and king safety
//! - `perft.rs` - Node counts on reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod check;
mod en_passant;

use crate::board::{GameState, LegalMove, Position};

pub(super) fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

/// Destinations of `legal_moves(from)`, sorted
pub(super) fn destinations(state: &GameState, from: &str) -> Vec<Position> {
    let mut dests: Vec<Position> = state
        .legal_moves(pos(from))
        .iter()
        .map(|mv| mv.destination())
        .collect();
    dests.sort();
    dests
}

pub(super) fn squares(list: &[&str]) -> Vec<Position> {
    let mut out: Vec<Position> = list.iter().map(|s| pos(s)).collect();
    out.sort();
    out
}

pub(super) fn find_move(state: &GameState, from: &str, to: &str) -> Option<LegalMove> {
    state
        .legal_moves(pos(from))
        .into_iter()
        .find(|mv| mv.destination() == pos(to))
}

/// Apply a move given as `e2e4`, taking the piece from the board
pub(super) fn play(state: &mut GameState, uci: &str) -> LegalMove {
    let from = pos(&uci[0..2]);
    let to = pos(&uci[2..4]);
    let piece = state.board().piece_at(from).unwrap();
    state.apply_move(piece, from, to, None).unwrap()
}
