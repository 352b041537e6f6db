//! Move validation and the commit sequence.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_flags::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Validate `mv` against the current position and commit it.
    ///
    /// Returns `true` if the move was legal and has been applied; any
    /// rejection leaves the board untouched and returns `false`.
    pub fn add_move(&mut self, mv: Move) -> bool {
        match self.try_add_move(mv) {
            Ok(()) => true,
            Err(err) => {
                debug!(%mv, error = %err, "move rejected");
                false
            }
        }
    }

    /// Like [`add_move`](Board::add_move), but reports why a move was refused.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the source is empty, the destination is
    /// not among [`destinations_of`](Board::destinations_of) the source, the
    /// promotion is missing or not allowed, or (with
    /// [`RulesConfig::enforce_turn`](crate::RulesConfig)) the mover is not on move.
    pub fn try_add_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let mover = *self
            .piece_at(mv.source())
            .ok_or(MoveError::EmptySource { square: mv.source() })?;

        if self.config().enforce_turn && mover.color() != self.turn() {
            return Err(MoveError::NotOnMove {
                color: mover.color(),
            });
        }

        if !self
            .destinations_of(mv.source())
            .any(|to| to == mv.destination())
        {
            return Err(MoveError::IllegalDestination { mv });
        }

        check_promotion(&mover, mv)?;
        self.execute(mv)
    }

    /// Apply `mv` without any legality check.
    ///
    /// Steps run in a fixed order: capture, castling rook, en passant
    /// capture (against the target from before this move), castling flags,
    /// new en passant target, relocation and promotion, turn.
    pub(crate) fn execute(&mut self, mv: Move) -> Result<(), MoveError> {
        let src = mv.source();
        let dst = mv.destination();
        let mover = *self
            .piece_at(src)
            .ok_or(MoveError::EmptySource { square: src })?;
        let us = mover.color();
        let home = us.home_rank();
        let mut flags = self.castle_flags();

        let captured = self.take_piece(dst);
        if let Some(victim) = captured
            && victim.kind() == PieceKind::Rook
            && let Some(side) = rook_home_side(&victim)
        {
            flags = flags.set(victim.color(), side);
        }

        if mover.kind() == PieceKind::King
            && src.x() == CastleSide::KING_FILE
            && src.y() == home
            && dst.y() == home
            && let Some(side) = CastleSide::from_king_target(dst.x())
        {
            let rook_from = Position::new_unchecked(side.rook_file(), home);
            let rook_to = Position::new_unchecked(side.rook_target_file(), home);
            if let Some(rook) = self.piece_at_mut(rook_from) {
                rook.relocate(rook_to);
                trace!(%rook_from, %rook_to, "castling rook relocated");
            }
        }

        if mover.kind() == PieceKind::Pawn
            && src.x() != dst.x()
            && self.en_passant() == Some(dst)
        {
            let passed = Position::new_unchecked(dst.x(), src.y());
            if let Some(victim) = self.take_piece(passed) {
                trace!(square = %passed, ?victim, "captured en passant");
            }
        }

        match mover.kind() {
            PieceKind::King => flags = flags.set_color(us),
            PieceKind::Rook => {
                if let Some(side) = rook_home_side(&mover) {
                    flags = flags.set(us, side);
                }
            }
            _ => {}
        }
        self.set_castle_flags(flags);

        let double_push = mover.kind() == PieceKind::Pawn && src.y().abs_diff(dst.y()) == 2;
        self.set_en_passant(
            double_push.then(|| Position::new_unchecked(src.x(), (src.y() + dst.y()) / 2)),
        );

        if let Some(piece) = self.piece_at_mut(src) {
            piece.relocate(dst);
            if let Some(kind) = mv.promotion() {
                piece.promote(kind);
            }
        }

        self.set_turn(self.turn().flip());
        trace!(%mv, ?captured, "move committed");
        Ok(())
    }
}

/// The wing whose corner `rook` stands on, if it is on its own home corner.
fn rook_home_side(rook: &Piece) -> Option<CastleSide> {
    let at = rook.position();
    if at.y() != rook.color().home_rank() {
        return None;
    }
    CastleSide::from_rook_file(at.x())
}

/// A promotion is required for a pawn arriving on its last rank and
/// forbidden everywhere else.
fn check_promotion(mover: &Piece, mv: Move) -> Result<(), MoveError> {
    let promotes = mover.kind() == PieceKind::Pawn
        && mv.destination().y() == mover.color().promotion_rank();
    match (promotes, mv.promotion()) {
        (true, None) => Err(MoveError::MissingPromotion { mv }),
        (true, Some(kind)) if !kind.is_promotion_target() => {
            Err(MoveError::InvalidPromotion { mv, kind })
        }
        (false, Some(kind)) => Err(MoveError::InvalidPromotion { mv, kind }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_flags::{CastleFlags, CastleSide};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::config::RulesConfig;
    use crate::error::MoveError;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_coordinate(s).unwrap()
    }

    #[test]
    fn quiet_move_flips_turn() {
        let mut board = Board::starting_position();
        assert!(board.add_move(mv("g1f3")));
        assert_eq!(board.turn(), Color::Black);
        assert!(board.is_empty(pos("g1")));
        assert!(board.piece_at(pos("f3")).unwrap().is(Color::White, PieceKind::Knight));
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn double_push_sets_target_and_next_move_clears_it() {
        let mut board = Board::starting_position();
        assert!(board.add_move(mv("e2e4")));
        assert_eq!(board.en_passant(), Some(pos("e3")));
        assert!(board.add_move(mv("g8f6")));
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn capture_removes_piece() {
        let mut board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w".parse().unwrap();
        assert!(board.add_move(mv("e4d5")));
        assert_eq!(board.pieces().len(), 3);
        assert_eq!(board.color_at(pos("d5")), Some(Color::White));
    }

    #[test]
    fn rejected_move_leaves_board_unchanged() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert!(!board.add_move(mv("e2e5")));
        assert!(!board.add_move(mv("e4e5")));
        assert!(!board.add_move(mv("a1a3")));
        assert_eq!(board, before);
    }

    #[test]
    fn try_add_move_reports_reason() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.try_add_move(mv("e4e5")),
            Err(MoveError::EmptySource { square: pos("e4") })
        );
        assert_eq!(
            board.try_add_move(mv("e2e5")),
            Err(MoveError::IllegalDestination { mv: mv("e2e5") })
        );
        assert_eq!(
            board.try_add_move(mv("e2e4q")),
            Err(MoveError::InvalidPromotion {
                mv: mv("e2e4q"),
                kind: PieceKind::Queen
            })
        );
    }

    #[test]
    fn turn_is_not_enforced_by_default() {
        let mut board = Board::starting_position();
        assert!(board.add_move(mv("e7e5")));
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn strict_config_enforces_turn() {
        let mut board = Board::starting_position().with_config(RulesConfig::strict());
        assert_eq!(
            board.try_add_move(mv("e7e5")),
            Err(MoveError::NotOnMove { color: Color::Black })
        );
        assert!(board.add_move(mv("e2e4")));
        assert!(board.add_move(mv("e7e5")));
    }

    #[test]
    fn promotion_required_and_applied() {
        let mut board: Board = "4k3/P7/8/8/8/8/8/4K3 w".parse().unwrap();
        assert_eq!(
            board.try_add_move(mv("a7a8")),
            Err(MoveError::MissingPromotion { mv: mv("a7a8") })
        );
        assert!(!board.add_move(mv("a7a8k")));
        assert!(board.add_move(mv("a7a8n")));
        assert!(board.piece_at(pos("a8")).unwrap().is(Color::White, PieceKind::Knight));
    }

    #[test]
    fn king_move_sets_both_flags() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w".parse().unwrap();
        assert!(board.add_move(mv("e1e2")));
        assert_eq!(board.castle_flags(), CastleFlags::NONE.set_color(Color::White));
        assert!(board.add_move(mv("e2e1")));
        assert_eq!(board.castle_flags(), CastleFlags::NONE.set_color(Color::White));
    }

    #[test]
    fn rook_move_sets_one_flag() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w".parse().unwrap();
        assert!(board.add_move(mv("a1a2")));
        let flags = board.castle_flags();
        assert!(flags.is_set(Color::White, CastleSide::QueenSide));
        assert!(!flags.is_set(Color::White, CastleSide::KingSide));
        assert!(board.add_move(mv("a2a1")));
        assert!(board.castle_flags().is_set(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn capturing_home_rook_sets_its_flag() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w".parse().unwrap();
        assert!(board.add_move(mv("h1h8")));
        assert!(board.castle_flags().is_set(Color::Black, CastleSide::KingSide));
        assert!(board.castle_flags().is_set(Color::White, CastleSide::KingSide));
        assert!(!board.castle_flags().is_set(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn queen_side_castle_moves_rook() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R b".parse().unwrap();
        assert!(board.add_move(mv("e8c8")));
        assert!(board.piece_at(pos("c8")).unwrap().is(Color::Black, PieceKind::King));
        assert!(board.piece_at(pos("d8")).unwrap().is(Color::Black, PieceKind::Rook));
        assert!(board.is_empty(pos("a8")));
        assert!(board.is_empty(pos("e8")));
        assert_eq!(board.castle_flags(), CastleFlags::NONE.set_color(Color::Black));
    }

    #[test]
    fn pinned_piece_move_is_illegal_destination() {
        let mut board: Board = "4r1k1/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        let before = board.clone();
        assert_eq!(
            board.try_add_move(mv("e2c3")),
            Err(MoveError::IllegalDestination { mv: mv("e2c3") })
        );
        assert_eq!(board, before);
    }
}
