//! Error types for board setup and move rejection.

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Errors from building a [`Board`](crate::Board) out of an explicit
/// piece list or from its one-line text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two pieces claim the same square.
    #[error("two pieces on {square}")]
    OccupiedTwice {
        /// The contested square.
        square: Position,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Position,
    },
    /// The text does not have exactly 2 space-separated fields.
    #[error("expected placement and side to move, found {found} fields")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based index in the text (0 = top rank).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid field.
        found: String,
    },
}

/// Reasons a move is refused by [`Board::try_add_move`](crate::Board::try_add_move).
///
/// [`Board::add_move`](crate::Board::add_move) turns every one of these
/// into `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No piece stands on the source square.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Position,
    },
    /// The source piece belongs to the side not on move.
    #[error("{color} is not on move")]
    NotOnMove {
        /// Color of the piece that tried to move.
        color: Color,
    },
    /// The destination is not among the legal destinations of the source.
    #[error("{mv} is not legal")]
    IllegalDestination {
        /// The refused move.
        mv: Move,
    },
    /// A pawn reached its last rank without saying what it becomes.
    #[error("{mv} must name a promotion piece")]
    MissingPromotion {
        /// The refused move.
        mv: Move,
    },
    /// A promotion was supplied where none is allowed, or to a forbidden kind.
    #[error("{mv} cannot promote to {kind:?}")]
    InvalidPromotion {
        /// The refused move.
        mv: Move,
        /// The requested kind.
        kind: PieceKind,
    },
}
