use crate::board::{Board, Color};
use crate::rules::{Rules, TerminalRule};

/// Count leaves of the legal-move tree `depth` plies deep, starting with
/// `color` to move. Finished positions count as one leaf; under
/// `BothSides` a forced pass consumes a ply like a move does.
pub fn perft(board: &Board, color: Color, depth: u32, rules: &Rules) -> u64 {
    if depth == 0 || rules.is_terminal(board, color) { return 1; }
    let moves = rules.legal_moves(board, color);
    if moves.is_empty() {
        if rules.terminal == TerminalRule::BothSides {
            let mut child = board.clone();
            child.pass_turn();
            return perft(&child, color.opponent(), depth - 1, rules);
        }
        return 1;
    }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = board.clone();
        rules.apply_move(&mut child, color, m);
        nodes += perft(&child, color.opponent(), depth - 1, rules);
    }
    nodes
}
