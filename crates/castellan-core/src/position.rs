//! Board coordinates.

use std::fmt;

/// A square on the board as an `(x, y)` pair: `x` is the file (0 = a),
/// `y` the rank (0 = White's back rank). Both are always within `0..=7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a position, returning `None` when either coordinate is off the board.
    ///
    /// Move generation builds candidates from arithmetic through this
    /// constructor and drops the `None`s.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Position> {
        if x < 0 || x > 7 || y < 0 || y > 7 {
            None
        } else {
            Some(Position {
                x: x as u8,
                y: y as u8,
            })
        }
    }

    /// Create a position from coordinates known to be on the board.
    #[inline]
    pub(crate) const fn new_unchecked(x: u8, y: u8) -> Position {
        debug_assert!(x < 8 && y < 8);
        Position { x, y }
    }

    /// Parse an algebraic square name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1]) {
            return None;
        }
        Some(Position::new_unchecked(bytes[0] - b'a', bytes[1] - b'1'))
    }

    /// File coordinate (0..7).
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Rank coordinate (0..7).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The square `(dx, dy)` away, or `None` if that falls off the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Position> {
        Position::new(self.x as i8 + dx, self.y as i8 + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.x, self.y)
    }
}
