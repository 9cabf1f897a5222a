use super::super::geometry::Direction;
use super::super::types::{LegalMove, Piece, Position};
use super::super::GameState;

impl GameState {
    /// Single and double advances, diagonal captures, promotions and en passant.
    ///
    /// Promotions are reported once per destination; the piece chosen is
    /// supplied when the move is applied.
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Position,
        pawn: Piece,
        moves: &mut Vec<LegalMove>,
    ) {
        let color = pawn.color();
        let dir = color.pawn_direction();
        let promotion_rank = color.promotion_rank();

        if let Some(one) = from.offset(0, dir) {
            if self.board.is_empty(one) {
                if one.rank() == promotion_rank {
                    moves.push(LegalMove::promotion(one, false));
                } else {
                    moves.push(LegalMove::quiet(one));
                    if !pawn.has_moved() {
                        if let Some(two) = one.offset(0, dir) {
                            if self.board.is_empty(two) {
                                moves.push(LegalMove::double_pawn_push(two));
                            }
                        }
                    }
                }
            }
        }

        for capture_dir in Direction::pawn_captures(color) {
            let Some(to) = self.board.neighbor(from, capture_dir) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some(target) if target.color() != color => {
                    if to.rank() == promotion_rank {
                        moves.push(LegalMove::promotion(to, true));
                    } else {
                        moves.push(LegalMove::capture(to));
                    }
                }
                Some(_) => {}
                None => {
                    if self
                        .en_passant
                        .is_some_and(|target| target.square() == to && target.color() != color)
                    {
                        moves.push(LegalMove::en_passant(to));
                    }
                }
            }
        }
    }
}
