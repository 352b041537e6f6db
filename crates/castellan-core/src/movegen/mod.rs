//! Pseudo-legal destination generation, one rule per piece kind.
//!
//! Everything here is a pure read of the board: the mover's own king
//! safety is not considered (see [`Board::destinations_of`](crate::Board::destinations_of)),
//! and neither castling nor en passant is produced, since both depend on
//! state carried across turns.

mod king;
mod knights;
pub(crate) mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Return the pseudo-legal destinations of `piece` on `board`.
pub(crate) fn pseudo_legal_destinations(board: &Board, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, &mut out),
        PieceKind::Knight => gen_knight(board, piece, &mut out),
        PieceKind::Bishop => gen_slider(board, piece, &BISHOP_DIRECTIONS, &mut out),
        PieceKind::Rook => gen_slider(board, piece, &ROOK_DIRECTIONS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, piece, &ROOK_DIRECTIONS, &mut out);
            gen_slider(board, piece, &BISHOP_DIRECTIONS, &mut out);
        }
        PieceKind::King => gen_king(board, piece, &mut out),
    }
    out
}

/// Push each on-board square at `offsets` from `piece` that is empty or
/// holds an enemy piece.
fn gen_steps(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<Position>) {
    let from = piece.position();
    for &(dx, dy) in offsets {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if board.color_at(to) != Some(piece.color()) {
            out.push(to);
        }
    }
}
