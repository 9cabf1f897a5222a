//! Error types for position setup and move application.

use std::error::Error;
use std::fmt;

use super::types::{Color, Position};

/// Why a position description or builder could not be turned into a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Wrong number of whitespace-separated fields (4 to 6 accepted)
    WrongFieldCount { found: usize },
    /// Piece placement does not have exactly 8 ranks
    RankCount { found: usize },
    /// A rank does not add up to 8 files
    RankWidth { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { field: &'static str, found: String },
    /// Each color needs exactly one king
    KingCount { color: Color, found: usize },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongFieldCount { found } => {
                write!(f, "Position needs 4 to 6 fields, found {found}")
            }
            PositionError::RankCount { found } => {
                write!(f, "Piece placement needs 8 ranks, found {found}")
            }
            PositionError::RankWidth { rank, files } => {
                write!(f, "Rank {rank} covers {files} files instead of 8")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            PositionError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PositionError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in position")
            }
            PositionError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            PositionError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
            PositionError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s turn")
            }
        }
    }
}

impl Error for PositionError {}

/// Errors returned by the public game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed construction input
    InvalidPosition(PositionError),
    /// The requested move is not in the legal set for the current position
    IllegalMove { from: Position, to: Position },
    /// A coordinate outside the 8x8 board
    OutOfBounds { file: usize, rank: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
            GameError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            GameError::OutOfBounds { file, rank } => {
                write!(f, "Coordinate ({file}, {rank}) is off the board")
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for GameError {
    fn from(err: PositionError) -> Self {
        GameError::InvalidPosition(err)
    }
}

/// Error type for algebraic square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl Error for SquareError {}
