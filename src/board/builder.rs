//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing a
//! position string.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Piece, PieceKind, PositionBuilder};
//!
//! let state = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King))
//!     .piece("e8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King))
//!     .piece("a2".parse().unwrap(), Piece::new(Color::White, PieceKind::Pawn))
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.board().piece_count(), 3);
//! ```

use super::error::PositionError;
use super::grid::Board;
use super::state::BACK_RANK;
use super::types::{CastlingRights, CastlingSide, Color, EnPassantTarget, Piece, PieceKind, Position};
use super::GameState;

/// A fluent builder for [`GameState`] positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Position, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Position>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board with White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in Color::BOTH {
                builder
                    .pieces
                    .push((Position::at(file, color.back_rank()), Piece::new(color, kind)));
                builder.pieces.push((
                    Position::at(file, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                ));
            }
        }
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, pos: Position, piece: Piece) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self.pieces.push((pos, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub const fn castle(mut self, color: Color, side: CastlingSide) -> Self {
        self.castling = self.castling.with(color, side);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Set the square skipped by the last two-square pawn advance.
    #[must_use]
    pub const fn en_passant(mut self, square: Position) -> Self {
        self.en_passant = Some(square);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// Fails when a side does not have exactly one king or the en passant
    /// square is not on rank 3 or 6.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut board = Board::empty();
        for (pos, piece) in self.pieces {
            board.place(pos, piece);
        }

        let en_passant = match self.en_passant {
            None => None,
            Some(square) => {
                let color = match square.rank() {
                    2 => Color::White,
                    5 => Color::Black,
                    _ => {
                        return Err(PositionError::InvalidEnPassant {
                            found: square.to_string(),
                        })
                    }
                };
                Some(EnPassantTarget::new(square, color))
            }
        };

        GameState::assemble(
            board,
            self.side_to_move,
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn kings() -> PositionBuilder {
        PositionBuilder::new()
            .piece(pos("e1"), Piece::new(Color::White, PieceKind::King))
            .piece(pos("e8"), Piece::new(Color::Black, PieceKind::King))
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        assert_eq!(built, GameState::new());
    }

    #[test]
    fn test_only_kings() {
        let state = kings().build().unwrap();
        assert!(state.board().piece_at(pos("e1")).is_some());
        assert!(state.board().piece_at(pos("e8")).is_some());
        assert!(state.board().piece_at(pos("a1")).is_none());
    }

    #[test]
    fn test_castling_rights() {
        let state = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, CastlingSide::Kingside)
            .build()
            .unwrap();
        let rights = state.castling_rights();
        assert!(rights.has(Color::White, CastlingSide::Kingside));
        assert!(!rights.has(Color::White, CastlingSide::Queenside));
        assert!(!rights.has(Color::Black, CastlingSide::Kingside));
        assert!(!rights.has(Color::Black, CastlingSide::Queenside));
    }

    #[test]
    fn test_side_to_move() {
        let state = kings().side_to_move(Color::Black).build().unwrap();
        assert_eq!(state.turn(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let state = PositionBuilder::starting_position()
            .clear(pos("a1"))
            .build()
            .unwrap();
        assert!(state.board().piece_at(pos("a1")).is_none());
        assert!(state.board().piece_at(pos("b1")).is_some());
        assert!(!state
            .castling_rights()
            .has(Color::White, CastlingSide::Queenside));
    }

    #[test]
    fn test_missing_king_fails() {
        let err = PositionBuilder::new()
            .piece(pos("e1"), Piece::new(Color::White, PieceKind::King))
            .build()
            .unwrap_err();
        assert!(matches!(err, PositionError::KingCount { color: Color::Black, .. }));
    }

    #[test]
    fn test_en_passant_rank_is_checked() {
        assert!(kings().en_passant(pos("d4")).build().is_err());
        let state = kings()
            .piece(pos("d5"), Piece::new(Color::Black, PieceKind::Pawn))
            .piece(pos("e5"), Piece::new(Color::White, PieceKind::Pawn))
            .en_passant(pos("d6"))
            .build()
            .unwrap();
        assert_eq!(state.en_passant().map(|t| t.color()), Some(Color::Black));
    }
}
