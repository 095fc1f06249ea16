use crate::board::{Board, Color};

// Bounds for alpha-beta windows; disc differences never leave [-64, 64].
pub const SCORE_INF: i32 = 10_000;

/// Disc-count advantage for `root`. Always taken from the color that started
/// the search, whatever ply it is evaluated at.
pub fn utility(board: &Board, root: Color) -> i32 {
    board.count_of(root) as i32 - board.count_of(root.opponent()) as i32
}
