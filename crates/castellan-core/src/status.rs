//! Checkmate and stalemate, derived from check detection and legal destinations.

use crate::board::Board;
use crate::color::Color;

/// State of the game for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check and at least one legal move.
    Ongoing,
    /// In check with at least one legal move.
    Check,
    /// In check with no legal move.
    Checkmate,
    /// Not in check but no legal move.
    Stalemate,
}

impl Board {
    /// Return `true` if `color` is in check and none of its pieces can move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    /// Return `true` if `color` is not in check and none of its pieces can move.
    ///
    /// This is a per-color query and ignores whose turn it is; a stalemate
    /// only ends the game for the side to move, which is what
    /// [`status`](Board::status) reports.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_move(color)
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let us = self.turn();
        match (self.is_check(us), self.has_legal_move(us)) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }
}
