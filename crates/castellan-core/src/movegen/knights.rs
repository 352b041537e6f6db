//! Knight destinations.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

use super::gen_steps;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, -1),
];

pub(super) fn gen_knight(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    gen_steps(board, piece, &KNIGHT_OFFSETS, out);
}
