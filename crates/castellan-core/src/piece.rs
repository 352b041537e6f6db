//! Piece records held by the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A piece standing on the board.
///
/// Only the [`Board`](crate::Board) mutates a piece, and only while
/// committing a move (relocation and promotion). Move generation reads it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    position: Position,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, position: Position) -> Piece {
        Piece {
            color,
            kind,
            position,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Export letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(&self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return `true` if this is a `kind` piece of `color`.
    #[inline]
    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    #[inline]
    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub(crate) fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter(), self.position)
    }
}
