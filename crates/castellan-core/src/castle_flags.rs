//! Castling eligibility flags, stored as a 4-bit field within a `u8`.

use std::fmt;

use crate::color::Color;

/// Which wing of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both wings, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the king starts castling from.
    pub const KING_FILE: u8 = 4;

    /// File the castling rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king crosses or lands on; none may be attacked.
    #[inline]
    pub const fn king_path_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }

    /// The wing whose king target file is `file`, if any.
    #[inline]
    pub const fn from_king_target(file: u8) -> Option<CastleSide> {
        match file {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// The wing whose rook starts on `file`, if any.
    #[inline]
    pub const fn from_rook_file(file: u8) -> Option<CastleSide> {
        match file {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Flags recording which castlings are no longer available.
///
/// A set bit means "no longer eligible" (the king or that rook has moved).
/// Bits are only ever added: there is no way to clear one.
/// Bit 0 = white king side, 1 = white queen side, 2 = black king side,
/// 3 = black queen side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleFlags(u8);

impl CastleFlags {
    /// Nothing has moved: every castling is still possible.
    pub const NONE: CastleFlags = CastleFlags(0);
    /// Every castling is lost.
    pub const ALL: CastleFlags = CastleFlags(0b1111);

    /// Return `true` if `color` may no longer castle toward `side`.
    #[inline]
    pub const fn is_set(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Mark castling toward `side` as lost for `color`.
    #[inline]
    pub const fn set(self, color: Color, side: CastleSide) -> CastleFlags {
        CastleFlags(self.0 | Self::bit(color, side))
    }

    /// Mark both castlings as lost for `color`.
    #[inline]
    pub const fn set_color(self, color: Color) -> CastleFlags {
        self.set(color, CastleSide::KingSide)
            .set(color, CastleSide::QueenSide)
    }

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }
}

impl fmt::Debug for CastleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Letters name the castlings still available, as in FEN.
        let mut s = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if !self.is_set(color, side) {
                s.push(c);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        write!(f, "CastleFlags({s})")
    }
}
