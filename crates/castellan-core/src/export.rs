//! One-line text form of a board: piece placement and side to move.
//!
//! Ranks run from 7 down to 0 separated by `/`; White pieces are uppercase,
//! Black lowercase, and runs of empty squares are written as a digit. The
//! side to move follows as `w` or `b`, e.g.
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_flags::{CastleFlags, CastleSide};
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Text form of the standard starting position.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0u8..8).rev() {
            let mut empty = 0u8;
            for x in 0u8..8 {
                match self.piece_at(Position::new_unchecked(x, y)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if y > 0 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.turn())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the one-line form back into a board.
    ///
    /// The text carries no castling or en passant state: a castling is
    /// treated as lost when its king or rook is off its home square, and no
    /// en passant target is set.
    fn from_str(s: &str) -> Result<Board, BoardError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(BoardError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::WrongRankCount { found: ranks.len() });
        }

        let mut pieces = Vec::with_capacity(32);
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let y = 7 - rank_index as u8;
            let mut x: u8 = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(BoardError::InvalidPieceChar { character: c });
                    }
                    x += digit as u8;
                    if x > 8 {
                        return Err(BoardError::BadRankLength {
                            rank_index,
                            length: x as usize,
                        });
                    }
                    continue;
                }
                let kind =
                    PieceKind::from_letter(c).ok_or(BoardError::InvalidPieceChar { character: c })?;
                if x >= 8 {
                    return Err(BoardError::BadRankLength {
                        rank_index,
                        length: x as usize + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                pieces.push(Piece::new(color, kind, Position::new_unchecked(x, y)));
                x += 1;
            }
            if x != 8 {
                return Err(BoardError::BadRankLength {
                    rank_index,
                    length: x as usize,
                });
            }
        }

        let turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(BoardError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        let flags = derive_castle_flags(&pieces);
        Board::from_pieces(pieces, turn, flags, None)
    }
}

fn derive_castle_flags(pieces: &[Piece]) -> CastleFlags {
    let at_home = |color: Color, kind: PieceKind, file: u8| {
        let home = Position::new_unchecked(file, color.home_rank());
        pieces
            .iter()
            .any(|p| p.position() == home && p.is(color, kind))
    };

    let mut flags = CastleFlags::NONE;
    for color in Color::ALL {
        if !at_home(color, PieceKind::King, CastleSide::KING_FILE) {
            flags = flags.set_color(color);
            continue;
        }
        for side in CastleSide::ALL {
            if !at_home(color, PieceKind::Rook, side.rook_file()) {
                flags = flags.set(color, side);
            }
        }
    }
    flags
}
