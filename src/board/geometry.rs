//! Fixed board geometry: the eight ray directions, per-square distances
//! to the board edge, and knight offsets.
//!
//! The edge-distance table is computed once on first use and shared by
//! every board.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, PieceKind, Position};

/// The eight ray directions. North points towards rank 8, east towards file h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions, orthogonals first
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// (file delta, rank delta) of one step
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::NorthWest | Direction::SouthEast | Direction::SouthWest
        )
    }

    /// Directions a sliding piece of `kind` moves along; empty for non-sliders
    #[must_use]
    pub const fn for_slider(kind: PieceKind) -> &'static [Direction] {
        match kind {
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Queen => &Direction::ALL,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
        }
    }

    /// The two diagonals a pawn of `color` captures along
    #[must_use]
    pub const fn pawn_captures(color: Color) -> [Direction; 2] {
        match color {
            Color::White => [Direction::NorthEast, Direction::NorthWest],
            Color::Black => [Direction::SouthEast, Direction::SouthWest],
        }
    }
}

/// Number of steps from a square to the board edge in each direction,
/// indexed by [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeDistances([u8; 8]);

impl EdgeDistances {
    const fn compute(pos: Position) -> Self {
        let north = 7 - pos.rank();
        let south = pos.rank();
        let east = 7 - pos.file();
        let west = pos.file();
        EdgeDistances([
            north,
            south,
            east,
            west,
            min(north, east),
            min(north, west),
            min(south, east),
            min(south, west),
        ])
    }

    /// Steps available in `dir` before leaving the board
    #[inline]
    #[must_use]
    pub const fn get(self, dir: Direction) -> u8 {
        self.0[dir.index()]
    }

    /// Look up the shared table entry for `pos`
    #[inline]
    #[must_use]
    pub fn of(pos: Position) -> Self {
        EDGE_DISTANCES[pos.index()]
    }
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

static EDGE_DISTANCES: Lazy<[EdgeDistances; 64]> = Lazy::new(|| {
    let mut table = [EdgeDistances([0; 8]); 64];
    for pos in Position::all() {
        table[pos.index()] = EdgeDistances::compute(pos);
    }
    table
});

/// (file delta, rank delta) of the eight knight jumps
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_distances_sum_to_seven() {
        for pos in Position::all() {
            let edges = EdgeDistances::of(pos);
            assert_eq!(edges.get(Direction::North) + edges.get(Direction::South), 7);
            assert_eq!(edges.get(Direction::East) + edges.get(Direction::West), 7);
        }
    }

    #[test]
    fn test_diagonals_take_the_shorter_arm() {
        for pos in Position::all() {
            let e = EdgeDistances::of(pos);
            let n = e.get(Direction::North);
            let s = e.get(Direction::South);
            let east = e.get(Direction::East);
            let w = e.get(Direction::West);
            assert_eq!(e.get(Direction::NorthEast), n.min(east));
            assert_eq!(e.get(Direction::NorthWest), n.min(w));
            assert_eq!(e.get(Direction::SouthEast), s.min(east));
            assert_eq!(e.get(Direction::SouthWest), s.min(w));
        }
    }

    #[test]
    fn test_stepping_to_edge_stays_on_board() {
        for pos in Position::all() {
            let edges = EdgeDistances::of(pos);
            for dir in Direction::ALL {
                let (df, dr) = dir.delta();
                let n = edges.get(dir) as i8;
                assert!(pos.offset(df * n, dr * n).is_some());
                assert!(pos.offset(df * (n + 1), dr * (n + 1)).is_none());
            }
        }
    }

    #[test]
    fn test_corner_values() {
        let a1 = EdgeDistances::of("a1".parse().unwrap());
        assert_eq!(a1.get(Direction::North), 7);
        assert_eq!(a1.get(Direction::NorthEast), 7);
        assert_eq!(a1.get(Direction::SouthWest), 0);
        let d5 = EdgeDistances::of("d5".parse().unwrap());
        assert_eq!(d5.get(Direction::NorthWest), 3);
        assert_eq!(d5.get(Direction::SouthEast), 4);
    }
}
