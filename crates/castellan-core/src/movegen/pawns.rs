//! Pawn destinations.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Generate pushes and captures for a pawn.
///
/// - one square forward onto an empty square;
/// - two squares forward from the starting rank when both squares are empty;
/// - one square diagonally forward onto an enemy piece.
pub(super) fn gen_pawn(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    let color = piece.color();
    let from = piece.position();
    let forward = color.forward();

    if let Some(one) = from.offset(0, forward)
        && board.is_empty(one)
    {
        out.push(one);
        if from.y() == color.pawn_rank()
            && let Some(two) = from.offset(0, 2 * forward)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    for to in capture_squares(piece) {
        if board.color_at(to) == Some(color.flip()) {
            out.push(to);
        }
    }
}

/// The (up to two) squares a pawn attacks, whether or not anything stands there.
pub(crate) fn capture_squares(piece: &Piece) -> impl Iterator<Item = Position> {
    let from = piece.position();
    let forward = piece.color().forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |dx| from.offset(dx, forward))
}
