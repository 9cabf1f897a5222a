//! The complete rules state of a game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::check::CheckAnalysis;
use super::error::PositionError;
use super::grid::Board;
use super::types::{
    king_home, CastlingRights, CastlingSide, Color, EnPassantTarget, KingRecord, Piece, PieceKind,
    Position,
};

/// Back rank layout shared by both colors, file a first
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Halfmoves without a capture or pawn move that allow a fifty-move claim
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Board, side to move, castling and en passant state, king records and clocks.
///
/// Only [`GameState::apply_move`] advances a state once it is built, so every
/// reachable state satisfies the invariants checked at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) kings: [KingRecord; 2],
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl GameState {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in Color::BOTH {
                board.place(Position::at(file, color.back_rank()), Piece::new(color, kind));
                board.place(
                    Position::at(file, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        GameState {
            board,
            turn: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            kings: Color::BOTH.map(|color| KingRecord {
                position: king_home(color),
                in_check: false,
            }),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Validate and normalize a position assembled from external input.
    ///
    /// Fails when a side does not have exactly one king, or when the side
    /// not to move is in check and its king could be captured. Castling
    /// rights without king and rook on their home squares are dropped, as is
    /// an en passant target with no capturable pawn behind it. Has-moved
    /// flags are derived from the placement.
    pub(crate) fn assemble(
        mut board: Board,
        turn: Color,
        mut castling: CastlingRights,
        en_passant: Option<EnPassantTarget>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Result<Self, PositionError> {
        let mut kings = [Position::at(0, 0); 2];
        for color in Color::BOTH {
            let found: Vec<Position> = board.find(color, PieceKind::King).collect();
            if found.len() != 1 {
                return Err(PositionError::KingCount {
                    color,
                    found: found.len(),
                });
            }
            kings[color.index()] = found[0];
        }

        for color in Color::BOTH {
            for side in CastlingSide::BOTH {
                if castling.has(color, side) && !castling_pieces_home(&board, color, side) {
                    debug_log!("dropping {color} {side:?} castling right: pieces not on home squares");
                    castling.revoke(color, side);
                }
            }
        }

        let en_passant = en_passant.filter(|target| {
            let valid = target.color() != turn
                && board.is_empty(target.square())
                && board
                    .piece_at(target.captured_square())
                    .is_some_and(|p| p.is(target.color(), PieceKind::Pawn));
            if !valid {
                debug_log!("dropping en passant target {}: no capturable pawn", target.square());
            }
            valid
        });

        mark_moved_pieces(&mut board, castling);

        let mut state = GameState {
            board,
            turn,
            castling,
            en_passant,
            kings: kings.map(|position| KingRecord {
                position,
                in_check: false,
            }),
            halfmove_clock,
            fullmove_number: fullmove_number.max(1),
        };
        state.refresh_check_flags();
        let waiting = turn.opponent();
        if state.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(state)
    }

    /// Recompute both kings' check flags from the current placement
    pub(crate) fn refresh_check_flags(&mut self) {
        for color in Color::BOTH {
            let in_check = self.analyze(color).in_check();
            self.kings[color.index()].in_check = in_check;
        }
    }

    /// Check and pin analysis for the `color` king
    #[must_use]
    pub fn analyze(&self, color: Color) -> CheckAnalysis {
        CheckAnalysis::analyze(&self.board, color, self.kings[color.index()].position)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn king(&self, color: Color) -> KingRecord {
        self.kings[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.kings[color.index()].in_check
    }

    /// Halfmoves since the last capture or pawn move
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move
    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// True once a fifty-move draw could be claimed
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }

    /// Checkmate, stalemate or still going, for the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_any_legal_move(self.turn) {
            GameStatus::Ongoing
        } else if self.is_in_check(self.turn) {
            GameStatus::Checkmate {
                winner: self.turn.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

fn castling_pieces_home(board: &Board, color: Color, side: CastlingSide) -> bool {
    board
        .piece_at(king_home(color))
        .is_some_and(|p| p.is(color, PieceKind::King))
        && board
            .piece_at(side.rook_home(color))
            .is_some_and(|p| p.is(color, PieceKind::Rook))
}

/// Pawns off their start rank have moved. A king or rook has moved unless a
/// surviving castling right says otherwise.
fn mark_moved_pieces(board: &mut Board, castling: CastlingRights) {
    for pos in Position::all() {
        let Some(piece) = board.piece_at_mut(pos) else {
            continue;
        };
        let color = piece.color();
        let moved = match piece.kind() {
            PieceKind::Pawn => pos.rank() != color.pawn_start_rank(),
            PieceKind::King => {
                pos != king_home(color)
                    || !CastlingSide::BOTH
                        .iter()
                        .any(|&side| castling.has(color, side))
            }
            PieceKind::Rook => !CastlingSide::from_rook_home(color, pos)
                .is_some_and(|side| castling.has(color, side)),
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
        if moved {
            piece.mark_moved();
        }
    }
}
