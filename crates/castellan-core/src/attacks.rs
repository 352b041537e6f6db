//! Attack scanning and check detection.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pawns::capture_squares;
use crate::movegen::pseudo_legal_destinations;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Return `true` if any piece of `by_color` attacks `sq` on the current board.
    ///
    /// Pieces other than pawns attack exactly their pseudo-legal
    /// destinations. A pawn attacks its two forward diagonals even when they
    /// are empty, since it would capture anything that stepped there, and it
    /// never attacks its push squares, since a push cannot capture. For an
    /// occupied king square this agrees with the destination set; it differs
    /// on the empty squares a castling king crosses, where a pawn diagonal
    /// must count as attacked.
    pub fn is_square_attacked(&self, sq: Position, by_color: Color) -> bool {
        self.pieces_of(by_color).any(|piece| attacks(self, piece, sq))
    }

    /// Return `true` if `color`'s king is attacked by the other side.
    ///
    /// A side without a king is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(king) => self.is_square_attacked(king, color.flip()),
            None => false,
        }
    }
}

fn attacks(board: &Board, piece: &Piece, sq: Position) -> bool {
    match piece.kind() {
        PieceKind::Pawn => capture_squares(piece).any(|to| to == sq),
        _ => pseudo_legal_destinations(board, piece).contains(&sq),
    }
}
