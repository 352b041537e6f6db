//! The board aggregate: pieces, side to move, castling flags, en passant target.

use std::fmt;

use crate::castle_flags::CastleFlags;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Back-rank layout from file 0 to file 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state.
///
/// `Clone` is a deep copy: the clone owns its own piece list, so a move
/// executed on it never touches the original. Legality filtering relies
/// on this.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Every piece on the board; positions are pairwise distinct.
    pieces: Vec<Piece>,
    /// Which side moves next.
    turn: Color,
    /// Castlings that are no longer available.
    castle_flags: CastleFlags,
    /// Square passed over by a pawn's two-square advance on the previous move.
    en_passant: Option<Position>,
    config: RulesConfig,
}

impl Board {
    /// Return the standard starting position, White to move.
    pub fn starting_position() -> Board {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::ALL {
            for (x, kind) in BACK_RANK.into_iter().enumerate() {
                let at = Position::new_unchecked(x as u8, color.home_rank());
                pieces.push(Piece::new(color, kind, at));
            }
            for x in 0u8..8 {
                let at = Position::new_unchecked(x, color.pawn_rank());
                pieces.push(Piece::new(color, PieceKind::Pawn, at));
            }
        }

        Board {
            pieces,
            turn: Color::White,
            castle_flags: CastleFlags::NONE,
            en_passant: None,
            config: RulesConfig::default(),
        }
    }

    /// Build a board from an explicit piece list.
    ///
    /// # Errors
    ///
    /// Fails if two pieces share a square, a side does not have exactly one
    /// king, or a pawn stands on a back rank.
    pub fn from_pieces(
        pieces: Vec<Piece>,
        turn: Color,
        castle_flags: CastleFlags,
        en_passant: Option<Position>,
    ) -> Result<Board, BoardError> {
        let board = Board {
            pieces,
            turn,
            castle_flags,
            en_passant,
            config: RulesConfig::default(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Replace the rules config.
    pub fn with_config(mut self, config: RulesConfig) -> Board {
        self.config = config;
        self
    }

    /// Return the piece on `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == pos)
    }

    /// Return the piece at coordinates `(x, y)`; off-board coordinates yield `None`.
    pub fn piece_on(&self, x: i8, y: i8) -> Option<&Piece> {
        self.piece_at(Position::new(x, y)?)
    }

    /// Return the color of the piece on `pos`, if any.
    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|p| p.color())
    }

    /// Return `true` if no piece stands on `pos`.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// All pieces, in no particular order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color() == color)
    }

    /// Square of `color`'s king, or `None` if it has none.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces
            .iter()
            .find(|p| p.is(color, PieceKind::King))
            .map(|p| p.position())
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castle_flags(&self) -> CastleFlags {
        self.castle_flags
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub(crate) fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.position() == pos)
    }

    /// Remove and return the piece on `pos`, if any.
    pub(crate) fn take_piece(&mut self, pos: Position) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.position() == pos)?;
        Some(self.pieces.remove(index))
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, target: Option<Position>) {
        self.en_passant = target;
    }

    #[inline]
    pub(crate) fn set_castle_flags(&mut self, flags: CastleFlags) {
        self.castle_flags = flags;
    }

    #[inline]
    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = [false; Position::COUNT];
        for piece in &self.pieces {
            let pos = piece.position();
            let slot = &mut seen[pos.y() as usize * 8 + pos.x() as usize];
            if *slot {
                return Err(BoardError::OccupiedTwice { square: pos });
            }
            *slot = true;
        }

        for color in Color::ALL {
            let count = self
                .pieces
                .iter()
                .filter(|p| p.is(color, PieceKind::King))
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        if let Some(pawn) = self
            .pieces
            .iter()
            .find(|p| p.kind() == PieceKind::Pawn && matches!(p.position().y(), 0 | 7))
        {
            return Err(BoardError::PawnOnBackRank {
                square: pawn.position(),
            });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in (0u8..8).rev() {
            write!(f, "{}  ", y + 1)?;
            for x in 0u8..8 {
                let c = board
                    .piece_at(Position::new_unchecked(x, y))
                    .map_or('.', |p| p.letter());
                if x < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
