//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::{GameError, SquareError};

/// A coordinate on the board, (file, rank) with a1 = (0, 0) and h8 = (7, 7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPosition")
)]
pub struct Position {
    file: u8,
    rank: u8,
}

/// Unchecked wire form of a [`Position`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    file: u8,
    rank: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_from((usize::from(raw.file), usize::from(raw.rank)))
    }
}

impl Position {
    /// Create a position with bounds checking
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Position { file, rank })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are below 8.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Position { file, rank }
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Index 0-63 with a1=0, b1=1, ..., h8=63
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Inverse of [`Position::index`]; `idx` must be below 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position::at((idx % 8) as u8, (idx / 8) as u8)
    }

    /// The position shifted by a file and rank delta, or `None` off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Position::at(file as u8, rank as u8))
        }
    }

    /// Shift without bounds checks. Only valid when an edge-distance
    /// lookup has already established the target is on the board.
    #[inline]
    pub(crate) const fn shifted(self, file_delta: i8, rank_delta: i8) -> Self {
        Position::at(
            (self.file as i8 + file_delta) as u8,
            (self.rank as i8 + rank_delta) as u8,
        )
    }

    /// All 64 positions in index order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = GameError;

    /// Build from `(file, rank)`.
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 || rank >= 8 {
            return Err(GameError::OutOfBounds { file, rank });
        }
        Ok(Position::at(file as u8, rank as u8))
    }
}

impl FromStr for Position {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Position::at(f - b'a', r - b'1')),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
