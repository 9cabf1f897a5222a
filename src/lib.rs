//! Chess rules core: board model, legal move generation with check and pin
//! analysis, and move application including castling, en passant and
//! promotion.
//!
//! [`Game`] is the entry point for a user interface: it answers legality
//! queries, applies moves and notifies subscribers. [`GameState`] is the
//! plain clonable rules state underneath it.

#[macro_use]
mod logging;

pub mod board;
pub mod game;

pub use board::{
    CastlingRights, CastlingSide, Color, GameError, GameState, GameStatus, LegalMove, Piece,
    PieceKind, Position, PositionBuilder, PositionError,
};
pub use game::{Game, Subscription};
