//! Perft (performance test) for checking move generation against known node counts.

use crate::board::Board;
use crate::chess_move::Move;

/// Count the leaf nodes of the legal move tree at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|mv| child(board, mv))
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = board
        .legal_moves()
        .into_iter()
        .filter_map(|mv| {
            let next = child(board, mv)?;
            let count = if depth <= 1 { 1 } else { perft(&next, depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// Play an already-legal move on a copy of `board`.
fn child(board: &Board, mv: Move) -> Option<Board> {
    let mut next = board.clone();
    next.execute(mv).ok()?;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    // --- Position 1: starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::starting_position(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::starting_position(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::starting_position(), 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::starting_position(), 4), 197_281);
    }

    // --- Position 2: "Kiwipete", all four castlings available ---

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w";

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&board(KIWIPETE), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&board(KIWIPETE), 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&board(KIWIPETE), 3), 97_862);
    }

    // --- Position 3: sparse endgame with en passant and discovered checks ---

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w";

    #[test]
    fn perft_position_3_depth_1() {
        assert_eq!(perft(&board(POSITION_3), 1), 14);
    }

    #[test]
    fn perft_position_3_depth_2() {
        assert_eq!(perft(&board(POSITION_3), 2), 191);
    }

    #[test]
    fn perft_position_3_depth_3() {
        assert_eq!(perft(&board(POSITION_3), 3), 2_812);
    }

    // --- Position 4: promotions and castling under pressure ---

    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w";

    #[test]
    fn perft_position_4_depth_1() {
        assert_eq!(perft(&board(POSITION_4), 1), 6);
    }

    #[test]
    fn perft_position_4_depth_2() {
        assert_eq!(perft(&board(POSITION_4), 2), 264);
    }

    #[test]
    #[ignore] // slow
    fn perft_position_4_depth_3() {
        assert_eq!(perft(&board(POSITION_4), 3), 9_467);
    }

    // --- Position 5 ---

    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w";

    #[test]
    fn perft_position_5_depth_1() {
        assert_eq!(perft(&board(POSITION_5), 1), 44);
    }

    #[test]
    fn perft_position_5_depth_2() {
        assert_eq!(perft(&board(POSITION_5), 2), 1_486);
    }

    #[test]
    #[ignore] // slow
    fn perft_position_5_depth_3() {
        assert_eq!(perft(&board(POSITION_5), 3), 62_379);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let split = divide(&board, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, n)| *n == 20));
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&board, 2));
        assert_eq!(split[0].0, "a2a3");
    }
}
