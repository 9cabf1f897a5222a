//! Compact set of board positions.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::position::Position;

/// A 64-bit set of positions: attacked squares, check rays, pin lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set containing a single position
    #[inline]
    #[must_use]
    pub const fn from_position(pos: Position) -> Self {
        SquareSet(1 << pos.index())
    }

    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.index();
    }

    /// Returns true if the given position is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of positions in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate positions in index order (a1 first)
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Position> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

/// Iterator over the positions in a [`SquareSet`]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Position::from_index(idx))
    }
}

impl IntoIterator for SquareSet {
    type Item = Position;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
