//! Sliding piece (bishop, rook, queen) destinations.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Orthogonal rays: up, down, right, left.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal rays.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Walk each ray from `piece` one square at a time. A ray ends at the
/// board edge or at the first occupied square, which is included only if it
/// holds an enemy piece.
pub(super) fn gen_slider(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(dx, dy) in directions {
        let mut cursor = piece.position();
        while let Some(next) = cursor.offset(dx, dy) {
            match board.color_at(next) {
                None => out.push(next),
                Some(color) => {
                    if color != piece.color() {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}
