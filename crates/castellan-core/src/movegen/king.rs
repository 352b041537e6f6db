//! King step destinations. Castling is added by the board.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

use super::gen_steps;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(super) fn gen_king(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    gen_steps(board, piece, &KING_OFFSETS, out);
}
