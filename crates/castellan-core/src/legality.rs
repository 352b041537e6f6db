//! Legal destinations: pseudo-legal moves plus castling and en passant,
//! filtered by simulating each candidate on a cloned board.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::pseudo_legal_destinations;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Legal destinations of the piece on `source`.
    ///
    /// Computed afresh on every call; an empty `source` yields nothing.
    /// Each item is produced by executing the candidate on a private clone
    /// of the board and discarding those that leave the mover's king in check.
    pub fn destinations_of(&self, source: Position) -> impl Iterator<Item = Position> + '_ {
        self.candidate_destinations(source)
            .into_iter()
            .flatten()
            .filter(move |&to| !self.leaves_king_in_check(source, to))
    }

    /// Every legal move of the side to move. Pawn moves onto the last rank
    /// appear once per promotion kind.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces_of(self.turn()) {
            let from = piece.position();
            for to in self.destinations_of(from) {
                if piece.kind() == PieceKind::Pawn && to.y() == piece.color().promotion_rank() {
                    moves.extend(
                        PieceKind::PROMOTIONS
                            .into_iter()
                            .map(|kind| Move::with_promotion(from, to, kind)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Return `true` if some piece of `color` has a legal destination.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|piece| self.destinations_of(piece.position()).next().is_some())
    }

    /// Pseudo-legal destinations plus the castling and en passant targets
    /// that apply to the piece on `source`.
    fn candidate_destinations(&self, source: Position) -> Option<Vec<Position>> {
        let piece = self.piece_at(source)?;
        let mut out = pseudo_legal_destinations(self, piece);
        match piece.kind() {
            PieceKind::King => out.extend(self.castling_destinations(piece.color())),
            PieceKind::Pawn => out.extend(self.en_passant_destination(piece)),
            _ => {}
        }
        Some(out)
    }

    /// The en passant target, if `pawn` stands diagonally behind it next to
    /// the enemy pawn that just advanced two squares.
    fn en_passant_destination(&self, pawn: &Piece) -> Option<Position> {
        let target = self.en_passant()?;
        let from = pawn.position();
        let forward = pawn.color().forward();
        if from.offset(-1, forward) != Some(target) && from.offset(1, forward) != Some(target) {
            return None;
        }
        let victim = self.piece_at(Position::new_unchecked(target.x(), from.y()))?;
        victim
            .is(pawn.color().flip(), PieceKind::Pawn)
            .then_some(target)
    }

    /// Clone the board, play `source -> destination` on the clone and
    /// report whether the mover's king ends up attacked.
    fn leaves_king_in_check(&self, source: Position, destination: Position) -> bool {
        let Some(mover) = self.piece_at(source) else {
            return true;
        };
        let color = mover.color();
        let mut simulated = self.clone();
        if simulated.execute(Move::new(source, destination)).is_err() {
            return true;
        }
        simulated.is_check(color)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn dests(board: &Board, square: &str) -> Vec<String> {
        let mut out: Vec<String> = board
            .destinations_of(pos(square))
            .map(|p| p.to_string())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn starting_position_has_20_moves() {
        assert_eq!(Board::starting_position().legal_moves().len(), 20);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let board = Board::starting_position();
        assert_eq!(board.destinations_of(pos("e4")).count(), 0);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        assert!(dests(&board, "e2").is_empty());
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let board: Board = "4r2k/8/8/8/8/8/4R3/4K3 w".parse().unwrap();
        assert_eq!(
            dests(&board, "e2"),
            ["e3", "e4", "e5", "e6", "e7", "e8"]
        );
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board: Board = "3rk3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        assert_eq!(dests(&board, "e1"), ["e2", "f1", "f2"]);
    }

    #[test]
    fn check_must_be_answered() {
        // Only moves that deal with the rook on e8 survive.
        let board: Board = "4r2k/8/8/8/8/8/3B4/R3K3 w".parse().unwrap();
        assert_eq!(dests(&board, "d2"), ["e3"]);
        assert!(dests(&board, "a1").is_empty());
        assert_eq!(dests(&board, "e1"), ["d1", "f1", "f2"]);
    }

    #[test]
    fn en_passant_needs_adjacent_enemy_pawn() {
        let board: Board = "4k3/8/8/2Pp4/8/8/8/4K3 w".parse().unwrap();
        let pieces = board.pieces().to_vec();
        let with_target = Board::from_pieces(
            pieces,
            Color::White,
            board.castle_flags(),
            Some(pos("d6")),
        )
        .unwrap();
        assert_eq!(dests(&with_target, "c5"), ["c6", "d6"]);
    }

    #[test]
    fn en_passant_not_backwards() {
        // A white pawn already past the target may not capture backwards.
        let board: Board = "4k3/2P5/8/3p4/8/8/8/4K3 w".parse().unwrap();
        let pieces = board.pieces().to_vec();
        let board = Board::from_pieces(
            pieces,
            Color::White,
            board.castle_flags(),
            Some(pos("d6")),
        )
        .unwrap();
        assert_eq!(dests(&board, "c7"), ["c8"]);
    }

    #[test]
    fn en_passant_exposing_king_is_filtered() {
        // Taking on c6 would clear the fifth rank between a5 and h5.
        let board: Board = "4k3/8/8/KPp4r/8/8/8/8 w".parse().unwrap();
        let pieces = board.pieces().to_vec();
        let board = Board::from_pieces(
            pieces,
            Color::White,
            board.castle_flags(),
            Some(pos("c6")),
        )
        .unwrap();
        assert_eq!(dests(&board, "b5"), ["b6"]);
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        let board: Board = "4k3/P7/8/8/8/8/8/4K3 w".parse().unwrap();
        let promos = board
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.promotion().is_some())
            .count();
        assert_eq!(promos, 4);
    }

    #[test]
    fn destinations_are_recomputed() {
        let mut board = Board::starting_position();
        let before: Vec<_> = board.destinations_of(pos("f1")).collect();
        assert!(before.is_empty());
        assert!(board.add_move(crate::chess_move::Move::new(pos("e2"), pos("e4"))));
        let after: Vec<_> = board.destinations_of(pos("f1")).collect();
        assert_eq!(after.len(), 5);
    }
}
