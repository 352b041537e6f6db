//! Rule switches carried by a board.

/// Knobs that change how strictly [`Board::add_move`](crate::Board::add_move)
/// screens its input.
///
/// The default accepts any legal destination of any piece, leaving turn
/// order to the caller. Simulated boards inherit the config of the board
/// they were cloned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    /// Reject moves whose source piece is not of the side to move.
    pub enforce_turn: bool,
}

impl RulesConfig {
    /// Config that also enforces turn order.
    pub const fn strict() -> RulesConfig {
        RulesConfig { enforce_turn: true }
    }
}
