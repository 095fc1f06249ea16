use log::debug;

use crate::board::{Board, Color, Move};
use crate::rules::{Rules, TerminalRule};
use crate::search::eval::{utility, SCORE_INF};

#[derive(Default, Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    pub rules: Rules,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Scores are always disc differences from the root color's side. Each branch
/// works on its own clone of the board.
#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
    rules: Rules,
}

impl Searcher {
    pub fn new(rules: Rules) -> Self {
        Self { nodes: 0, rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// One-off search under `params.rules`; the searcher's own rules are
    /// left as they were.
    pub fn search_with_params(&mut self, board: &Board, color: Color, params: SearchParams) -> SearchResult {
        self.run(board, color, params.depth, params.rules)
    }

    /// Search `depth` plies ahead for `color`. `bestmove` is `None` at depth 0
    /// or when `color` has nothing to play.
    pub fn search_depth(&mut self, board: &Board, color: Color, depth: u32) -> SearchResult {
        self.run(board, color, depth, self.rules)
    }

    fn run(&mut self, board: &Board, color: Color, depth: u32, rules: Rules) -> SearchResult {
        self.nodes = 0;
        let (score, bestmove) = self.alphabeta(&rules, board, color, color, depth, -SCORE_INF, SCORE_INF, true);
        debug!(
            "search {} depth={} best={} score={} nodes={}",
            color,
            depth,
            bestmove.map_or_else(|| "none".to_string(), |m| m.to_string()),
            score,
            self.nodes
        );
        SearchResult { bestmove, score, nodes: self.nodes }
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        rules: &Rules,
        board: &Board,
        root: Color,
        to_move: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || rules.is_terminal(board, to_move) {
            return (utility(board, root), None);
        }

        let moves = rules.legal_moves(board, to_move);
        if moves.is_empty() {
            // Only reachable under BothSides: the stuck side passes.
            if rules.terminal == TerminalRule::BothSides {
                let mut child = board.clone();
                child.pass_turn();
                let (score, _) = self.alphabeta(rules, &child, root, to_move.opponent(), depth - 1, alpha, beta, !maximizing);
                return (score, None);
            }
            return (utility(board, root), None);
        }

        let mut best_move: Option<Move> = None;
        if maximizing {
            let mut best = -SCORE_INF;
            for m in moves {
                let mut child = board.clone();
                rules.apply_move(&mut child, to_move, m);
                let (score, _) = self.alphabeta(rules, &child, root, to_move.opponent(), depth - 1, alpha, beta, false);
                if score > best { best = score; best_move = Some(m); }
                alpha = alpha.max(score);
                if beta <= alpha { break; }
            }
            (best, best_move)
        } else {
            let mut best = SCORE_INF;
            for m in moves {
                let mut child = board.clone();
                rules.apply_move(&mut child, to_move, m);
                let (score, _) = self.alphabeta(rules, &child, root, to_move.opponent(), depth - 1, alpha, beta, true);
                if score < best { best = score; best_move = Some(m); }
                beta = beta.min(score);
                if beta <= alpha { break; }
            }
            (best, best_move)
        }
    }
}

/// Best move for `color` under the default rules, or `None` if it must pass.
pub fn choose_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    Searcher::default().search_depth(board, color, depth).bestmove
}
