//! Castling rights, en-passant target and king records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::position::Position;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The wing a king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    /// Short castling, towards the h-file
    Kingside,
    /// Long castling, towards the a-file
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// File of the rook that takes part
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// File the king crosses on its way (and where the rook lands)
    #[inline]
    #[must_use]
    pub const fn transit_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Files strictly between the king and the rook that must be empty
    #[must_use]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastlingSide::Kingside => &[5, 6],
            CastlingSide::Queenside => &[1, 2, 3],
        }
    }

    /// Home square of this side's rook for `color`
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Position {
        Position::at(self.rook_file(), color.back_rank())
    }

    /// The side whose rook starts on `pos`, if `pos` is a rook home of `color`
    #[must_use]
    pub fn from_rook_home(color: Color, pos: Position) -> Option<CastlingSide> {
        CastlingSide::BOTH
            .into_iter()
            .find(|side| side.rook_home(color) == pos)
    }
}

/// Home square of the king for `color` (e1 / e8)
#[inline]
#[must_use]
pub const fn king_home(color: Color) -> Position {
    Position::at(4, color.back_rank())
}

/// Castling rights represented as a bitmask.
///
/// Rights can be granted while a position is being set up; once play
/// starts they are only ever revoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// A copy with one more right granted (position setup only)
    #[must_use]
    pub const fn with(self, color: Color, side: CastlingSide) -> Self {
        CastlingRights(self.0 | Self::bit_for(color, side))
    }

    /// Remove a specific castling right
    #[inline]
    pub(crate) fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub(crate) fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastlingSide::Kingside);
        self.revoke(color, CastlingSide::Queenside);
    }

    /// Returns true if no right remains for either color
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

/// The square a pawn skipped with a two-square advance.
///
/// Valid for exactly one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassantTarget {
    square: Position,
    color: Color,
}

impl EnPassantTarget {
    /// `color` is the color of the pawn that advanced and may be captured.
    #[must_use]
    pub const fn new(square: Position, color: Color) -> Self {
        EnPassantTarget { square, color }
    }

    /// The skipped square, where the capturing pawn lands
    #[inline]
    #[must_use]
    pub const fn square(self) -> Position {
        self.square
    }

    /// Color of the pawn that may be captured
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Square of the pawn that is removed by the capture
    #[inline]
    #[must_use]
    pub const fn captured_square(self) -> Position {
        self.square.shifted(0, self.color.pawn_direction())
    }
}

/// Where a king stands and whether it is attacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KingRecord {
    pub position: Position,
    pub in_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoke_is_per_side() {
        let mut rights = CastlingRights::all();
        rights.revoke(Color::White, CastlingSide::Queenside);
        assert!(rights.has(Color::White, CastlingSide::Kingside));
        assert!(!rights.has(Color::White, CastlingSide::Queenside));
        assert!(rights.has(Color::Black, CastlingSide::Queenside));
    }

    #[test]
    fn test_revoke_all() {
        let mut rights = CastlingRights::all();
        rights.revoke_all(Color::Black);
        assert!(!rights.has(Color::Black, CastlingSide::Kingside));
        assert!(!rights.has(Color::Black, CastlingSide::Queenside));
        assert!(rights.has(Color::White, CastlingSide::Kingside));
        rights.revoke_all(Color::White);
        assert!(rights.is_empty());
    }

    #[test]
    fn test_with_grants() {
        let rights = CastlingRights::none().with(Color::Black, CastlingSide::Kingside);
        assert!(rights.has(Color::Black, CastlingSide::Kingside));
        assert!(!rights.has(Color::White, CastlingSide::Kingside));
    }

    #[test]
    fn test_rook_homes() {
        assert_eq!(CastlingSide::Kingside.rook_home(Color::White).to_string(), "h1");
        assert_eq!(CastlingSide::Queenside.rook_home(Color::Black).to_string(), "a8");
        assert_eq!(
            CastlingSide::from_rook_home(Color::Black, "h8".parse().unwrap()),
            Some(CastlingSide::Kingside)
        );
        assert_eq!(CastlingSide::from_rook_home(Color::White, "h8".parse().unwrap()), None);
        assert_eq!(king_home(Color::Black).to_string(), "e8");
    }

    #[test]
    fn test_en_passant_captured_square() {
        let target = EnPassantTarget::new("e3".parse().unwrap(), Color::White);
        assert_eq!(target.captured_square().to_string(), "e4");
        let target = EnPassantTarget::new("d6".parse().unwrap(), Color::Black);
        assert_eq!(target.captured_square().to_string(), "d5");
    }
}
