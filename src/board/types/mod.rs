//! Core chess value types.
//!
//! - `Piece`, `PieceKind` and `Color`
//! - `Position` - a board coordinate
//! - `SquareSet` - 64-bit set of positions
//! - `LegalMove` - one legal destination with its move-kind flags
//! - `CastlingRights`, `EnPassantTarget`, `KingRecord` - per-side state records

mod moves;
mod piece;
mod position;
mod rights;
mod square_set;

pub use moves::LegalMove;
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
pub use rights::{king_home, CastlingRights, CastlingSide, EnPassantTarget, KingRecord};
pub use square_set::{SquareSet, SquareSetIter};
