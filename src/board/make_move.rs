//! Validating and applying moves.

use super::error::GameError;
use super::types::{CastlingSide, Color, EnPassantTarget, LegalMove, Piece, PieceKind, Position};
use super::GameState;

impl GameState {
    /// Validate a move against the legal set and apply it.
    ///
    /// `piece` must match the occupant of `from` and belong to the side to
    /// move. For a promotion `promotion` picks the new piece and defaults to
    /// a queen; it is ignored for every other move. On error the state is
    /// left untouched.
    pub fn apply_move(
        &mut self,
        piece: Piece,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<LegalMove, GameError> {
        let illegal = GameError::IllegalMove { from, to };

        let occupant = match self.board.piece_at(from) {
            Some(occupant) => occupant,
            None => {
                debug_log!("rejected {from}{to}: no piece on {from}");
                return Err(illegal);
            }
        };
        if occupant.color() != self.turn || !occupant.is(piece.color(), piece.kind()) {
            debug_log!("rejected {from}{to}: {occupant} on {from} cannot be moved as {piece}");
            return Err(illegal);
        }

        let analysis = self.analyze(self.turn);
        let Some(mv) = self
            .legal_moves_for(from, occupant, &analysis)
            .into_iter()
            .find(|mv| mv.destination() == to)
        else {
            debug_log!("rejected {from}{to}: not a legal destination");
            return Err(illegal);
        };

        let promote_to = if mv.is_promotion() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotion_target() {
                debug_log!("rejected {from}{to}: cannot promote to {kind}");
                return Err(illegal);
            }
            Some(kind)
        } else {
            None
        };

        self.play(from, mv, promote_to);
        debug_log!("{} played {from}{to} ({mv:?})", self.turn.opponent());
        Ok(mv)
    }

    /// Apply a move already known to be legal for the side to move.
    pub(crate) fn play(&mut self, from: Position, mv: LegalMove, promote_to: Option<PieceKind>) {
        let color = self.turn;
        let to = mv.destination();
        let Some(mut piece) = self.board.take(from) else {
            debug_assert!(false, "play called with empty origin {from}");
            return;
        };

        let captured = if mv.is_en_passant() {
            self.en_passant
                .and_then(|target| self.board.take(target.captured_square()))
        } else {
            self.board.take(to)
        };
        if let Some(victim) = captured {
            if victim.kind() == PieceKind::Rook {
                if let Some(side) = CastlingSide::from_rook_home(victim.color(), to) {
                    self.castling.revoke(victim.color(), side);
                }
            }
        }

        if mv.is_castling() {
            let side = if to.file() > from.file() {
                CastlingSide::Kingside
            } else {
                CastlingSide::Queenside
            };
            if let Some(mut rook) = self.board.take(side.rook_home(color)) {
                rook.mark_moved();
                self.board
                    .place(Position::at(side.transit_file(), from.rank()), rook);
            }
        }

        match piece.kind() {
            PieceKind::King => {
                self.kings[color.index()].position = to;
                self.castling.revoke_all(color);
            }
            PieceKind::Rook => {
                if let Some(side) = CastlingSide::from_rook_home(color, from) {
                    self.castling.revoke(color, side);
                }
            }
            _ => {}
        }

        let is_pawn = piece.kind() == PieceKind::Pawn;
        piece.mark_moved();
        if let Some(kind) = promote_to {
            piece.promote(kind);
        }
        self.board.place(to, piece);

        self.en_passant = if mv.is_double_pawn_push() {
            Some(EnPassantTarget::new(
                from.shifted(0, color.pawn_direction()),
                color,
            ))
        } else {
            None
        };

        if is_pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.turn = color.opponent();
        self.refresh_check_flags();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::CastlingRights;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Color::White, kind)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(Color::Black, kind)
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let mut state = GameState::new();
        let mv = state
            .apply_move(white(PieceKind::Pawn), pos("e2"), pos("e4"), None)
            .unwrap();
        assert!(mv.is_double_pawn_push());
        let target = state.en_passant().unwrap();
        assert_eq!(target.square(), pos("e3"));
        assert_eq!(target.color(), Color::White);
        assert_eq!(state.turn(), Color::Black);

        state
            .apply_move(black(PieceKind::Knight), pos("g8"), pos("f6"), None)
            .unwrap();
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = GameState::new();
        let before = state.clone();
        let err = state
            .apply_move(white(PieceKind::Pawn), pos("e2"), pos("e5"), None)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: pos("e2"),
                to: pos("e5")
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_piece_or_turn_is_rejected() {
        let mut state = GameState::new();
        assert!(state
            .apply_move(white(PieceKind::Knight), pos("e2"), pos("e4"), None)
            .is_err());
        assert!(state
            .apply_move(black(PieceKind::Pawn), pos("e7"), pos("e5"), None)
            .is_err());
        assert!(state
            .apply_move(white(PieceKind::Pawn), pos("e4"), pos("e5"), None)
            .is_err());
    }

    #[test]
    fn test_clocks() {
        let mut state = GameState::new();
        state
            .apply_move(white(PieceKind::Knight), pos("g1"), pos("f3"), None)
            .unwrap();
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.fullmove_number(), 1);
        state
            .apply_move(black(PieceKind::Knight), pos("g8"), pos("f6"), None)
            .unwrap();
        assert_eq!(state.halfmove_clock(), 2);
        assert_eq!(state.fullmove_number(), 2);
        state
            .apply_move(white(PieceKind::Pawn), pos("e2"), pos("e3"), None)
            .unwrap();
        assert_eq!(state.halfmove_clock(), 0);
    }

    #[test]
    fn test_clocks_saturate_at_maximum() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 4294967295 4294967295");
        state
            .apply_move(black(PieceKind::King), pos("e8"), pos("d8"), None)
            .unwrap();
        assert_eq!(state.halfmove_clock(), u32::MAX);
        assert_eq!(state.fullmove_number(), u32::MAX);
        assert!(state.is_fifty_move_draw());
    }

    #[test]
    fn test_moving_marks_piece_moved() {
        let mut state = GameState::new();
        state
            .apply_move(white(PieceKind::Knight), pos("b1"), pos("c3"), None)
            .unwrap();
        assert!(state.board().piece_at(pos("c3")).unwrap().has_moved());
        assert_eq!(state.castling_rights(), CastlingRights::all());
    }
}
