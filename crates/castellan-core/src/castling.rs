//! Castling eligibility.

use crate::board::Board;
use crate::castle_flags::CastleSide;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Return `true` if `color` may castle toward `side` right now.
    ///
    /// Requires: the flag for that wing is not set; king and rook stand on
    /// their home squares; every square between them is empty; the side is
    /// not in check; and no square the king crosses or lands on is attacked.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if self.castle_flags().is_set(color, side) {
            return false;
        }

        let home = color.home_rank();
        let on_home = |file: u8, kind: PieceKind| {
            self.piece_at(Position::new_unchecked(file, home))
                .is_some_and(|p| p.is(color, kind))
        };
        if !on_home(CastleSide::KING_FILE, PieceKind::King) || !on_home(side.rook_file(), PieceKind::Rook) {
            return false;
        }

        if side
            .between_files()
            .iter()
            .any(|&file| !self.is_empty(Position::new_unchecked(file, home)))
        {
            return false;
        }

        if self.is_check(color) {
            return false;
        }

        let them = color.flip();
        !side
            .king_path_files()
            .iter()
            .any(|&file| self.is_square_attacked(Position::new_unchecked(file, home), them))
    }

    /// King destinations for every castling currently available to `color`.
    pub(crate) fn castling_destinations(&self, color: Color) -> Vec<Position> {
        CastleSide::ALL
            .into_iter()
            .filter(|&side| self.can_castle(color, side))
            .map(|side| Position::new_unchecked(side.king_target_file(), color.home_rank()))
            .collect()
    }
}
