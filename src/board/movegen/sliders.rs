use super::super::geometry::Direction;
use super::super::types::{LegalMove, Piece, Position};
use super::super::GameState;

impl GameState {
    /// Bishop, rook and queen moves: walk each ray until the edge or the
    /// first occupied square, which is included when it holds an opponent.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Position,
        piece: Piece,
        moves: &mut Vec<LegalMove>,
    ) {
        for &dir in Direction::for_slider(piece.kind()) {
            for to in self.board.ray(from, dir) {
                match self.board.color_on(to) {
                    None => moves.push(LegalMove::quiet(to)),
                    Some(occupant) => {
                        if occupant != piece.color() {
                            moves.push(LegalMove::capture(to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
