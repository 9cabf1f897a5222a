//! The 8x8 grid of squares.
//!
//! Pure occupancy plus neighbor lookups; nothing here knows the rules.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::{Direction, EdgeDistances};
use super::types::{Color, Piece, PieceKind, Position};

/// A single cell: its coordinate, its occupant and its distances to the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    position: Position,
    occupant: Option<Piece>,
    edges: EdgeDistances,
}

impl Square {
    fn empty(position: Position) -> Self {
        Square {
            position,
            occupant: None,
            edges: EdgeDistances::of(position),
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn edge_distances(&self) -> EdgeDistances {
        self.edges
    }
}

/// The board, stored as `squares[rank][file]`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        let squares = std::array::from_fn(|rank| {
            std::array::from_fn(|file| Square::empty(Position::at(file as u8, rank as u8)))
        });
        Board { squares }
    }

    #[inline]
    #[must_use]
    pub fn square(&self, pos: Position) -> &Square {
        &self.squares[pos.rank() as usize][pos.file() as usize]
    }

    #[inline]
    fn square_mut(&mut self, pos: Position) -> &mut Square {
        &mut self.squares[pos.rank() as usize][pos.file() as usize]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.square(pos).occupant
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos).is_empty()
    }

    /// Color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(Piece::color)
    }

    /// Put a piece on a square, returning whatever stood there.
    pub(crate) fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.square_mut(pos).occupant.replace(piece)
    }

    /// Empty a square, returning its occupant.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        self.square_mut(pos).occupant.take()
    }

    pub(crate) fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.square_mut(pos).occupant.as_mut()
    }

    /// One step from `pos` in `dir`, or `None` at the edge
    #[inline]
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        if self.square(pos).edges.get(dir) == 0 {
            return None;
        }
        let (df, dr) = dir.delta();
        Some(pos.shifted(df, dr))
    }

    /// Positions from `from` (exclusive) to the edge in `dir`
    #[inline]
    #[must_use]
    pub fn ray(&self, from: Position, dir: Direction) -> Ray {
        Ray {
            current: from,
            delta: dir.delta(),
            remaining: self.square(from).edges.get(dir),
        }
    }

    /// Iterate every square, a1 first
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Occupied squares of one color with their pieces
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares()
            .filter_map(|sq| sq.occupant.map(|piece| (sq.position, piece)))
            .filter(move |(_, piece)| piece.color() == color)
    }

    /// Positions of all pieces of a color and kind
    pub fn find(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Position> + '_ {
        self.pieces(color)
            .filter(move |(_, piece)| piece.kind() == kind)
            .map(|(pos, _)| pos)
    }

    /// Total number of pieces on the board
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares().filter(|sq| !sq.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file]
                    .occupant
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    abcdefgh")?;
        write!(f, "}}")
    }
}

/// Walks a ray outward, bounded by the precomputed edge distance so no
/// per-step bounds check is needed.
#[derive(Clone, Debug)]
pub struct Ray {
    current: Position,
    delta: (i8, i8),
    remaining: u8,
}

impl Iterator for Ray {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.shifted(self.delta.0, self.delta.1);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Ray {}
