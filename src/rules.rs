//! Move legality, disc flipping and the end-of-game test.
//!
//! Every operation takes the acting color explicitly. The board's own `turn`
//! field is only consulted by the game driver, never by the search.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color, Move, SIZE};
use crate::error::Result;

/// Disc total at which the game is declared over regardless of mobility.
pub const FULL_BOARD_THRESHOLD: usize = 60;

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Which lines are scanned for captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Directions {
    /// Up, down, left, right only.
    #[default]
    Orthogonal,
    /// Orthogonals plus the four diagonals (tournament rules).
    All,
}

impl Directions {
    fn deltas(self) -> &'static [(isize, isize)] {
        match self {
            Directions::Orthogonal => &ORTHOGONAL,
            Directions::All => &ALL_DIRECTIONS,
        }
    }
}

/// When a position counts as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalRule {
    /// Over once the side to move has no legal placement.
    #[default]
    SideToMove,
    /// Over only when neither side can move; a stuck side passes instead.
    BothSides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub directions: Directions,
    #[serde(default)]
    pub terminal: TerminalRule,
}

impl Rules {
    pub fn new(directions: Directions, terminal: TerminalRule) -> Self {
        Self { directions, terminal }
    }

    pub fn is_legal(&self, board: &Board, color: Color, row: usize, col: usize) -> Result<bool> {
        let mv = Move::new(row, col)?;
        Ok(self.is_legal_move(board, color, mv))
    }

    pub fn is_legal_move(&self, board: &Board, color: Color, mv: Move) -> bool {
        if board.cell(mv) != Cell::Empty {
            return false;
        }
        self.directions
            .deltas()
            .iter()
            .any(|&(dr, dc)| capture_run(board, color, mv, dr, dc).is_some())
    }

    /// Legal placements in row-major order. The search relies on this order
    /// for tie-breaking.
    pub fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let mv = Move::at(row, col);
                if self.is_legal_move(board, color, mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    pub fn has_legal_move(&self, board: &Board, color: Color) -> bool {
        (0..SIZE * SIZE).any(|i| self.is_legal_move(board, color, Move::at(i / SIZE, i % SIZE)))
    }

    /// Place `color` at (row, col) and flip every capped run. Returns
    /// `Ok(false)` with the board untouched when the placement is illegal.
    pub fn apply(&self, board: &mut Board, color: Color, row: usize, col: usize) -> Result<bool> {
        let mv = Move::new(row, col)?;
        Ok(self.apply_move(board, color, mv).is_some())
    }

    /// Same as [`Rules::apply`] for an in-range move; returns the number of
    /// flipped discs on success.
    pub fn apply_move(&self, board: &mut Board, color: Color, mv: Move) -> Option<usize> {
        if !self.is_legal_move(board, color, mv) {
            return None;
        }
        let runs: Vec<Vec<Move>> = self
            .directions
            .deltas()
            .iter()
            .filter_map(|&(dr, dc)| capture_run(board, color, mv, dr, dc))
            .collect();
        board.set(mv, color.to_cell());
        let mut flipped = 0;
        for cell in runs.into_iter().flatten() {
            board.set(cell, color.to_cell());
            flipped += 1;
        }
        board.set_turn(color.opponent());
        Some(flipped)
    }

    pub fn is_terminal(&self, board: &Board, to_move: Color) -> bool {
        if board.total_discs() >= FULL_BOARD_THRESHOLD {
            return true;
        }
        match self.terminal {
            TerminalRule::SideToMove => !self.has_legal_move(board, to_move),
            TerminalRule::BothSides => {
                !self.has_legal_move(board, to_move) && !self.has_legal_move(board, to_move.opponent())
            }
        }
    }
}

/// Walk from `origin` along (dr, dc) collecting opponent discs. Returns the
/// run only when it is non-empty and capped by a `color` disc.
fn capture_run(board: &Board, color: Color, origin: Move, dr: isize, dc: isize) -> Option<Vec<Move>> {
    let own = color.to_cell();
    let opp = color.opponent().to_cell();
    let mut run = Vec::new();
    let mut r = origin.row() as isize + dr;
    let mut c = origin.col() as isize + dc;
    while (0..SIZE as isize).contains(&r) && (0..SIZE as isize).contains(&c) {
        let here = Move::at(r as usize, c as usize);
        match board.cell(here) {
            cell if cell == opp => run.push(here),
            cell if cell == own => return if run.is_empty() { None } else { Some(run) },
            _ => return None,
        }
        r += dr;
        c += dc;
    }
    None
}
