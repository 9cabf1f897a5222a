//! Legal move generation.
//!
//! Each piece kind produces pseudo-legal destinations, which are then
//! filtered against the side's check analysis: a double check leaves only
//! king moves, a single check confines other pieces to the check ray, and a
//! pinned piece stays on its pin line. En passant is checked by playing it
//! on a scratch board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::check::{is_attacked, CheckAnalysis};
use super::types::{Color, LegalMove, Piece, PieceKind, Position};
use super::GameState;

impl GameState {
    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> Vec<LegalMove> {
        match self.board.piece_at(from) {
            Some(piece) if piece.color() == self.turn => {
                let analysis = self.analyze(self.turn);
                self.legal_moves_for(from, piece, &analysis)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move of the side to move, grouped by origin square
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Position, LegalMove)> {
        let analysis = self.analyze(self.turn);
        let mut all = Vec::with_capacity(48);
        for (from, piece) in self.board.pieces(self.turn) {
            all.extend(
                self.legal_moves_for(from, piece, &analysis)
                    .into_iter()
                    .map(|mv| (from, mv)),
            );
        }
        all
    }

    /// Whether `color` has at least one legal move, ignoring whose turn it is
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let analysis = self.analyze(color);
        self.board
            .pieces(color)
            .any(|(from, piece)| !self.legal_moves_for(from, piece, &analysis).is_empty())
    }

    pub(crate) fn legal_moves_for(
        &self,
        from: Position,
        piece: Piece,
        analysis: &CheckAnalysis,
    ) -> Vec<LegalMove> {
        let color = piece.color();
        let mut moves = Vec::new();
        match piece.kind() {
            PieceKind::King => {
                self.generate_king_moves(from, color, analysis, &mut moves);
                return moves;
            }
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(from, color, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_sliding_moves(from, piece, &mut moves);
            }
        }
        self.retain_legal(from, color, analysis, &mut moves);
        moves
    }

    fn retain_legal(
        &self,
        from: Position,
        color: Color,
        analysis: &CheckAnalysis,
        moves: &mut Vec<LegalMove>,
    ) {
        if analysis.is_double_check() {
            moves.clear();
            return;
        }
        let pin_line = analysis.pin_line(from);
        moves.retain(|&mv| {
            if mv.is_en_passant() {
                return self.en_passant_keeps_king_safe(from, mv, color);
            }
            let to = mv.destination();
            if analysis.in_check() && !analysis.check_ray().contains(to) {
                return false;
            }
            pin_line.map_or(true, |line| line.contains(to))
        });
    }

    /// En passant removes two pieces from the capturing side's view at once,
    /// which ray-based pin detection does not see, so play it on a copy.
    fn en_passant_keeps_king_safe(&self, from: Position, mv: LegalMove, color: Color) -> bool {
        let Some(target) = self.en_passant else {
            return false;
        };
        let mut scratch = self.board.clone();
        if let Some(pawn) = scratch.take(from) {
            scratch.place(mv.destination(), pawn);
        }
        scratch.take(target.captured_square());
        let king = self.kings[color.index()].position;
        !is_attacked(&scratch, king, color.opponent())
    }
}
