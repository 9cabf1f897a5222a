//! Legal move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;

const FLAG_CAPTURE: u8 = 1 << 0;
const FLAG_CASTLING: u8 = 1 << 1;
const FLAG_EN_PASSANT: u8 = 1 << 2;
const FLAG_PROMOTION: u8 = 1 << 3;
const FLAG_DOUBLE_PAWN: u8 = 1 << 4;

/// One legal destination for the piece on some origin square.
///
/// The origin is implied by the query that produced the record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegalMove {
    destination: Position,
    flags: u8,
}

impl LegalMove {
    /// Move to an empty square
    #[inline]
    #[must_use]
    pub(crate) const fn quiet(to: Position) -> Self {
        LegalMove::with_flags(to, 0)
    }

    /// Move onto an opponent piece
    #[inline]
    #[must_use]
    pub(crate) const fn capture(to: Position) -> Self {
        LegalMove::with_flags(to, FLAG_CAPTURE)
    }

    /// Quiet move or capture depending on `is_capture`
    #[inline]
    #[must_use]
    pub(crate) const fn step(to: Position, is_capture: bool) -> Self {
        if is_capture {
            LegalMove::capture(to)
        } else {
            LegalMove::quiet(to)
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn double_pawn_push(to: Position) -> Self {
        LegalMove::with_flags(to, FLAG_DOUBLE_PAWN)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(to: Position) -> Self {
        LegalMove::with_flags(to, FLAG_EN_PASSANT | FLAG_CAPTURE)
    }

    /// King move of a castling; `to` is the king's landing square
    #[inline]
    #[must_use]
    pub(crate) const fn castling(to: Position) -> Self {
        LegalMove::with_flags(to, FLAG_CASTLING)
    }

    /// Pawn move onto the last rank
    #[inline]
    #[must_use]
    pub(crate) const fn promotion(to: Position, is_capture: bool) -> Self {
        let flags = if is_capture {
            FLAG_PROMOTION | FLAG_CAPTURE
        } else {
            FLAG_PROMOTION
        };
        LegalMove::with_flags(to, flags)
    }

    #[inline]
    const fn with_flags(destination: Position, flags: u8) -> Self {
        LegalMove { destination, flags }
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn destination(self) -> Position {
        self.destination
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    /// Returns true if this is a castling king move
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    /// Returns true if this move is a two-square pawn advance
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN != 0
    }
}

impl fmt::Debug for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LegalMove({}", self.destination)?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_promotion() {
            write!(f, " promo")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.destination)
    }
}
