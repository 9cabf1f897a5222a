//! Building a [`GameState`] from a FEN-style position description.
//!
//! Six whitespace-separated fields: piece placement, side to move, castling
//! rights, en passant target, halfmove clock and fullmove number. The two
//! clocks may be omitted and default to 0 and 1.

use std::str::FromStr;

use super::error::PositionError;
use super::grid::Board;
use super::types::{CastlingRights, CastlingSide, Color, EnPassantTarget, Piece, Position};
use super::GameState;

/// The standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse a position description.
    ///
    /// Returns an error if the string is malformed, a side does not have
    /// exactly one king, or the side not to move is in check.
    pub fn try_from_fen(fen: &str) -> Result<Self, PositionError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(PositionError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;
        let turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PositionError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let castling = parse_castling(fields[2])?;
        let en_passant = parse_en_passant(fields[3])?;
        let halfmove_clock = match fields.get(4) {
            Some(field) => parse_counter("halfmove clock", field)?,
            None => 0,
        };
        let fullmove_number = match fields.get(5) {
            Some(field) => parse_counter("fullmove number", field)?,
            None => 1,
        };

        debug_log!(
            "position loaded: {turn} to move, castling {}, en passant {}, clocks {halfmove_clock}/{fullmove_number}",
            fields[2],
            fields[3]
        );

        GameState::assemble(
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        )
    }

    /// Parse a position description.
    ///
    /// # Panics
    /// Panics if the description is invalid. Use [`GameState::try_from_fen`]
    /// for untrusted input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match GameState::try_from_fen(fen) {
            Ok(state) => state,
            Err(err) => panic!("invalid position '{fen}': {err}"),
        }
    }
}

impl FromStr for GameState {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}

fn parse_placement(placement: &str) -> Result<Board, PositionError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::RankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut files = 0usize;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                files += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
                if files < 8 {
                    board.place(Position::at(files as u8, rank), piece);
                }
                files += 1;
            }
            if files > 8 {
                return Err(PositionError::RankWidth {
                    rank: rank as usize + 1,
                    files,
                });
            }
        }
        if files != 8 {
            return Err(PositionError::RankWidth {
                rank: rank as usize + 1,
                files,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, PositionError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        rights = match c {
            'K' => rights.with(Color::White, CastlingSide::Kingside),
            'Q' => rights.with(Color::White, CastlingSide::Queenside),
            'k' => rights.with(Color::Black, CastlingSide::Kingside),
            'q' => rights.with(Color::Black, CastlingSide::Queenside),
            _ => return Err(PositionError::InvalidCastling { char: c }),
        };
    }
    Ok(rights)
}

/// A target on rank 3 was skipped by a white pawn, one on rank 6 by a black pawn.
fn parse_en_passant(field: &str) -> Result<Option<EnPassantTarget>, PositionError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || PositionError::InvalidEnPassant {
        found: field.to_string(),
    };
    let square: Position = field.parse().map_err(|_| invalid())?;
    let color = match square.rank() {
        2 => Color::White,
        5 => Color::Black,
        _ => return Err(invalid()),
    };
    Ok(Some(EnPassantTarget::new(square, color)))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u32, PositionError> {
    value.parse().map_err(|_| PositionError::InvalidCounter {
        field,
        found: value.to_string(),
    })
}
