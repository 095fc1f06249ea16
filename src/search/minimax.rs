//! Plain minimax without pruning. Same node semantics and tie-break as
//! [`crate::search::alphabeta`]; exists to cross-check it.

use crate::board::{Board, Color, Move};
use crate::rules::{Rules, TerminalRule};
use crate::search::alphabeta::SearchResult;
use crate::search::eval::{utility, SCORE_INF};

pub fn minimax(board: &Board, color: Color, depth: u32, rules: &Rules) -> SearchResult {
    let mut nodes = 0u64;
    let (score, bestmove) = visit(board, color, color, depth, true, rules, &mut nodes);
    SearchResult { bestmove, score, nodes }
}

fn visit(
    board: &Board,
    root: Color,
    to_move: Color,
    depth: u32,
    maximizing: bool,
    rules: &Rules,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;
    if depth == 0 || rules.is_terminal(board, to_move) {
        return (utility(board, root), None);
    }
    let moves = rules.legal_moves(board, to_move);
    if moves.is_empty() {
        if rules.terminal == TerminalRule::BothSides {
            let mut child = board.clone();
            child.pass_turn();
            let (score, _) = visit(&child, root, to_move.opponent(), depth - 1, !maximizing, rules, nodes);
            return (score, None);
        }
        return (utility(board, root), None);
    }

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    let mut best_move = None;
    for m in moves {
        let mut child = board.clone();
        rules.apply_move(&mut child, to_move, m);
        let (score, _) = visit(&child, root, to_move.opponent(), depth - 1, !maximizing, rules, nodes);
        let better = if maximizing { score > best } else { score < best };
        if better { best = score; best_move = Some(m); }
    }
    (best, best_move)
}
