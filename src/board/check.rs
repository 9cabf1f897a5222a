//! Check and pin analysis for one side's king.
//!
//! Rays are cast outward from the king. Along each ray the first friendly
//! piece is a pin candidate; the first opponent piece either gives check,
//! pins the candidate, or blocks nothing at all if it cannot slide that way.

use super::geometry::{Direction, KNIGHT_OFFSETS};
use super::grid::Board;
use super::types::{Color, Piece, PieceKind, Position, SquareSet};

/// A friendly piece that may only move along `line` without exposing its king.
///
/// `line` runs from the king (exclusive) to the pinning slider (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub piece: Position,
    pub line: SquareSet,
}

/// Everything move filtering needs to know about threats to one king.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckAnalysis {
    king: Position,
    attacked: SquareSet,
    checkers: SquareSet,
    check_ray: SquareSet,
    pins: Vec<Pin>,
}

impl CheckAnalysis {
    /// Analyze threats against the `color` king standing on `king`.
    #[must_use]
    pub fn analyze(board: &Board, color: Color, king: Position) -> Self {
        let enemy = color.opponent();
        let mut analysis = CheckAnalysis {
            king,
            attacked: attacked_squares(board, enemy, Some(king)),
            checkers: SquareSet::EMPTY,
            check_ray: SquareSet::EMPTY,
            pins: Vec::new(),
        };

        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(pos) = king.offset(df, dr) {
                if board.piece_at(pos).is_some_and(|p| p.is(enemy, PieceKind::Knight)) {
                    analysis.record_check(pos, SquareSet::from_position(pos));
                }
            }
        }

        for dir in Direction::pawn_captures(color) {
            if let Some(pos) = board.neighbor(king, dir) {
                if board.piece_at(pos).is_some_and(|p| p.is(enemy, PieceKind::Pawn)) {
                    analysis.record_check(pos, SquareSet::from_position(pos));
                }
            }
        }

        for dir in Direction::ALL {
            if analysis.is_double_check() {
                break;
            }
            analysis.scan_ray(board, color, dir);
        }

        analysis
    }

    fn scan_ray(&mut self, board: &Board, color: Color, dir: Direction) {
        let mut line = SquareSet::EMPTY;
        let mut shield: Option<Position> = None;

        for pos in board.ray(self.king, dir) {
            line.insert(pos);
            let Some(piece) = board.piece_at(pos) else {
                continue;
            };
            if piece.color() == color {
                if shield.is_some() {
                    return;
                }
                shield = Some(pos);
                continue;
            }
            if slides_along(piece, dir) {
                match shield {
                    None => self.record_check(pos, line),
                    Some(pinned) => self.pins.push(Pin {
                        piece: pinned,
                        line,
                    }),
                }
            }
            return;
        }
    }

    fn record_check(&mut self, checker: Position, ray: SquareSet) {
        self.checkers.insert(checker);
        self.check_ray |= ray;
    }

    /// Square of the analyzed king
    #[inline]
    #[must_use]
    pub fn king(&self) -> Position {
        self.king
    }

    /// Squares the opponent attacks, with the king itself treated as transparent
    #[inline]
    #[must_use]
    pub fn attacked(&self) -> SquareSet {
        self.attacked
    }

    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        !self.checkers.is_empty()
    }

    /// Two pieces give check at once; only king moves can help
    #[inline]
    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.checkers.len() >= 2
    }

    /// Positions of the checking pieces
    #[inline]
    #[must_use]
    pub fn checkers(&self) -> SquareSet {
        self.checkers
    }

    /// Squares that resolve a single check by capture or interposition.
    ///
    /// Empty when not in check.
    #[inline]
    #[must_use]
    pub fn check_ray(&self) -> SquareSet {
        self.check_ray
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// The line a pinned piece on `pos` is confined to, if it is pinned
    #[must_use]
    pub fn pin_line(&self, pos: Position) -> Option<SquareSet> {
        self.pins.iter().find(|pin| pin.piece == pos).map(|pin| pin.line)
    }
}

fn slides_along(piece: Piece, dir: Direction) -> bool {
    if dir.is_diagonal() {
        piece.kind().slides_diagonally()
    } else {
        piece.kind().slides_straight()
    }
}

/// Every square a piece of color `by` attacks.
///
/// Defended pieces count as attacked. Sliders see through `transparent`,
/// which lets a king in check avoid stepping back along the checking line.
#[must_use]
pub fn attacked_squares(board: &Board, by: Color, transparent: Option<Position>) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    for (from, piece) in board.pieces(by) {
        attacked |= attacks_from(board, from, piece, transparent);
    }
    attacked
}

/// Whether any piece of color `by` attacks `target`
#[must_use]
pub fn is_attacked(board: &Board, target: Position, by: Color) -> bool {
    attacked_squares(board, by, None).contains(target)
}

fn attacks_from(
    board: &Board,
    from: Position,
    piece: Piece,
    transparent: Option<Position>,
) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    match piece.kind() {
        PieceKind::Pawn => {
            for dir in Direction::pawn_captures(piece.color()) {
                if let Some(to) = board.neighbor(from, dir) {
                    set.insert(to);
                }
            }
        }
        PieceKind::Knight => {
            for (df, dr) in KNIGHT_OFFSETS {
                if let Some(to) = from.offset(df, dr) {
                    set.insert(to);
                }
            }
        }
        PieceKind::King => {
            for dir in Direction::ALL {
                if let Some(to) = board.neighbor(from, dir) {
                    set.insert(to);
                }
            }
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            for &dir in Direction::for_slider(piece.kind()) {
                for to in board.ray(from, dir) {
                    set.insert(to);
                    if !board.is_empty(to) && Some(to) != transparent {
                        break;
                    }
                }
            }
        }
    }
    set
}
