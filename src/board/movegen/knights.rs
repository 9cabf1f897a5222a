use super::super::geometry::KNIGHT_OFFSETS;
use super::super::types::{Color, LegalMove, Position};
use super::super::GameState;

impl GameState {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Position,
        color: Color,
        moves: &mut Vec<LegalMove>,
    ) {
        for (df, dr) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.board.color_on(to) {
                Some(occupant) if occupant == color => {}
                occupant => moves.push(LegalMove::step(to, occupant.is_some())),
            }
        }
    }
}
