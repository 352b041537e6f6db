//! Proposed moves: the candidate checked for legality and the payload committed.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A single move from `source` to `destination`, with an optional promotion.
///
/// Castling is expressed as the king's two-file move; en passant as the
/// pawn's diagonal move onto the passed-over square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Position,
    destination: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(source: Position, destination: Position) -> Move {
        Move {
            source,
            destination,
            promotion: None,
        }
    }

    /// Create a pawn move that promotes on arrival.
    #[inline]
    pub const fn with_promotion(source: Position, destination: Position, kind: PieceKind) -> Move {
        Move {
            source,
            destination,
            promotion: Some(kind),
        }
    }

    /// Parse coordinate notation: `e2e4`, or `e7e8q` with a promotion letter.
    pub fn from_coordinate(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let source = Position::from_algebraic(&s[0..2])?;
        let destination = Position::from_algebraic(&s[2..4])?;
        match s[4..].chars().next() {
            None => Some(Move::new(source, destination)),
            Some(c) => {
                let kind = PieceKind::from_letter(c)?;
                Some(Move::with_promotion(source, destination, kind))
            }
        }
    }

    #[inline]
    pub const fn source(self) -> Position {
        self.source
    }

    #[inline]
    pub const fn destination(self) -> Position {
        self.destination
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)?;
        if let Some(kind) = self.promotion {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn accessors() {
        let mv = Move::new(pos("e2"), pos("e4"));
        assert_eq!(mv.source(), pos("e2"));
        assert_eq!(mv.destination(), pos("e4"));
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn parse_plain_and_promotion() {
        assert_eq!(
            Move::from_coordinate("g1f3"),
            Some(Move::new(pos("g1"), pos("f3")))
        );
        assert_eq!(
            Move::from_coordinate("a7a8n"),
            Some(Move::with_promotion(pos("a7"), pos("a8"), PieceKind::Knight))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Move::from_coordinate("").is_none());
        assert!(Move::from_coordinate("e2").is_none());
        assert!(Move::from_coordinate("e2e9").is_none());
        assert!(Move::from_coordinate("e7e8x").is_none());
        assert!(Move::from_coordinate("e7e8qq").is_none());
        assert!(Move::from_coordinate("é2e4").is_none());
    }

    #[test]
    fn display_matches_parse() {
        let mv = Move::with_promotion(pos("e7"), pos("e8"), PieceKind::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
        assert_eq!(format!("{:?}", Move::new(pos("d2"), pos("d4"))), "Move(d2d4)");
    }
}
