use super::super::check::CheckAnalysis;
use super::super::geometry::Direction;
use super::super::types::{king_home, CastlingSide, Color, LegalMove, PieceKind, Position};
use super::super::GameState;

impl GameState {
    /// King steps onto unattacked squares, plus castling.
    ///
    /// Already legal: the attacked set treats the king as transparent, so
    /// no further filtering is applied.
    pub(crate) fn generate_king_moves(
        &self,
        from: Position,
        color: Color,
        analysis: &CheckAnalysis,
        moves: &mut Vec<LegalMove>,
    ) {
        let attacked = analysis.attacked();
        for dir in Direction::ALL {
            let Some(to) = self.board.neighbor(from, dir) else {
                continue;
            };
            let occupant = self.board.color_on(to);
            if occupant == Some(color) || attacked.contains(to) {
                continue;
            }
            moves.push(LegalMove::step(to, occupant.is_some()));
        }

        if analysis.in_check() {
            return;
        }
        for side in CastlingSide::BOTH {
            if self.can_castle(from, color, side, analysis) {
                moves.push(LegalMove::castling(Position::at(
                    side.king_target_file(),
                    color.back_rank(),
                )));
            }
        }
    }

    /// Right held, king and rook home, path empty, transit and landing safe.
    /// The caller has already ruled out check.
    fn can_castle(
        &self,
        from: Position,
        color: Color,
        side: CastlingSide,
        analysis: &CheckAnalysis,
    ) -> bool {
        let rank = color.back_rank();
        let attacked = analysis.attacked();
        self.castling.has(color, side)
            && from == king_home(color)
            && self
                .board
                .piece_at(side.rook_home(color))
                .is_some_and(|rook| rook.is(color, PieceKind::Rook))
            && side
                .between_files()
                .iter()
                .all(|&file| self.board.is_empty(Position::at(file, rank)))
            && !attacked.contains(Position::at(side.transit_file(), rank))
            && !attacked.contains(Position::at(side.king_target_file(), rank))
    }
}
