//! Board representation and chess rules.
//!
//! A mailbox board of 64 squares, each carrying its distances to the edge,
//! plus the state needed to decide legality: side to move, castling rights,
//! the en passant target, king records and clocks.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Position};
//!
//! let state = GameState::new();
//! let e2: Position = "e2".parse().unwrap();
//! assert_eq!(state.legal_moves(e2).len(), 2);
//! assert_eq!(state.all_legal_moves().len(), 20);
//! ```

mod builder;
mod check;
mod error;
mod fen;
pub mod geometry;
mod grid;
mod make_move;
mod movegen;
mod perft;
mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use check::{attacked_squares, is_attacked, CheckAnalysis, Pin};
pub use error::{GameError, PositionError, SquareError};
pub use fen::STARTING_FEN;
pub use geometry::{Direction, EdgeDistances};
pub use grid::{Board, Ray, Square};
pub use state::{GameState, GameStatus, FIFTY_MOVE_HALFMOVES};
pub use types::{
    king_home, CastlingRights, CastlingSide, Color, EnPassantTarget, KingRecord, LegalMove, Piece,
    PieceKind, Position, SquareSet,
};
