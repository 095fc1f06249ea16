//! Console turn loop: prompts the human, asks the searcher for the computer's
//! move and reports the result. Generic over reader/writer so whole games can
//! be driven in-process.

use std::io::{BufRead, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move};
use crate::error::{Error, Result};
use crate::rules::Rules;
use crate::search::Searcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    Computer { depth: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub black: Controller,
    pub white: Controller,
    #[serde(default)]
    pub rules: Rules,
}

impl GameConfig {
    pub fn human_vs_computer(human: Color, depth: u32, rules: Rules) -> Self {
        let computer = Controller::Computer { depth };
        match human {
            Color::Black => Self { black: Controller::Human, white: computer, rules },
            Color::White => Self { black: computer, white: Controller::Human, rules },
        }
    }

    pub fn computer_vs_computer(black_depth: u32, white_depth: u32, rules: Rules) -> Self {
        Self {
            black: Controller::Computer { depth: black_depth },
            white: Controller::Computer { depth: white_depth },
            rules,
        }
    }

    pub fn controller(&self, color: Color) -> Controller {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::human_vs_computer(Color::Black, crate::difficulty::Difficulty::Medium.depth(), Rules::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Winner(Color),
    Tie,
}

impl Outcome {
    pub fn from_counts(black: usize, white: usize) -> Self {
        if black > white {
            Outcome::Winner(Color::Black)
        } else if white > black {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Tie
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Winner(Color::Black) => "Black wins!",
            Outcome::Winner(Color::White) => "White wins!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

/// One committed turn; `mv` is `None` for a pass or forfeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub color: Color,
    pub mv: Option<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub black: usize,
    pub white: usize,
    pub turns: Vec<TurnRecord>,
    pub final_board: String,
}

pub struct Game {
    board: Board,
    config: GameConfig,
    searcher: Searcher,
    turns: Vec<TurnRecord>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), config)
    }

    /// Continue from an arbitrary position; `board.turn()` moves first.
    pub fn from_position(board: Board, config: GameConfig) -> Self {
        Self { board, config, searcher: Searcher::new(config.rules), turns: Vec::new() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn is_over(&self) -> bool {
        self.config.rules.is_terminal(&self.board, self.board.turn())
    }

    /// Run turns until the position is terminal, then print the final board
    /// and result.
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<GameSummary> {
        while !self.is_over() {
            self.play_turn(input, out)?;
        }
        self.finish(out)
    }

    /// Print the board and the result for the current position and summarize
    /// it. Scores are taken as they stand, whether or not the game is over.
    pub fn finish<W: Write>(&self, out: &mut W) -> Result<GameSummary> {
        write!(out, "{}", self.board)?;
        let black = self.board.count_of(Color::Black);
        let white = self.board.count_of(Color::White);
        let outcome = Outcome::from_counts(black, white);
        writeln!(out, "{}", outcome.message())?;
        info!("game over: black={} white={} ({})", black, white, outcome.message());

        Ok(GameSummary {
            outcome,
            black,
            white,
            turns: self.turns.clone(),
            final_board: self.board.to_compact(),
        })
    }

    /// One prompt/search cycle for the side to move. An invalid human entry
    /// consumes the cycle without changing the board.
    pub fn play_turn<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let rules = self.config.rules;
        let color = self.board.turn();
        writeln!(
            out,
            "Black Score: {} / White Score: {}",
            self.board.count_of(Color::Black),
            self.board.count_of(Color::White)
        )?;
        write!(out, "{}", self.board)?;
        writeln!(out, "Player {}'s turn", color.symbol())?;

        let moves = rules.legal_moves(&self.board, color);
        let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        writeln!(out, "Possible moves: [{}]", listed.join(", "))?;

        if moves.is_empty() {
            writeln!(out, "Player {} has no legal move and passes.", color.symbol())?;
            self.pass(color);
            return Ok(());
        }

        match self.config.controller(color) {
            Controller::Human => match read_human_move(input, out)? {
                Some(mv) if rules.apply_move(&mut self.board, color, mv).is_some() => {
                    info!("{} plays {}", color, mv);
                    self.turns.push(TurnRecord { color, mv: Some(mv) });
                    writeln!(out)?;
                }
                _ => writeln!(out, "Invalid move, try again.")?,
            },
            Controller::Computer { depth } => {
                let result = self.searcher.search_depth(&self.board, color, depth.max(1));
                match result.bestmove {
                    Some(mv) => {
                        rules.apply_move(&mut self.board, color, mv);
                        info!("{} (computer) plays {} score={} nodes={}", color, mv, result.score, result.nodes);
                        self.turns.push(TurnRecord { color, mv: Some(mv) });
                        writeln!(out, "Computer ({}) plays {}", color.symbol(), mv)?;
                    }
                    None => {
                        writeln!(out, "Computer ({}) has no move and forfeits the turn.", color.symbol())?;
                        self.pass(color);
                    }
                }
            }
        }
        Ok(())
    }

    fn pass(&mut self, color: Color) {
        info!("{} passes", color);
        self.board.pass_turn();
        self.turns.push(TurnRecord { color, mv: None });
    }
}

/// Prompt for row then column. `Ok(None)` for anything that is not an
/// on-board coordinate; `InputClosed` on EOF.
fn read_human_move<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Move>> {
    let row = prompt(input, out, "Enter row: ")?;
    let col = prompt(input, out, "Enter column: ")?;
    let (Ok(row), Ok(col)) = (row.trim().parse::<usize>(), col.trim().parse::<usize>()) else {
        debug!("unparsable coordinate: row={:?} col={:?}", row.trim(), col.trim());
        return Ok(None);
    };
    match Move::new(row, col) {
        Ok(mv) => Ok(Some(mv)),
        Err(e) => {
            debug!("{e}");
            Ok(None)
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_counts() {
        assert_eq!(Outcome::from_counts(10, 3), Outcome::Winner(Color::Black));
        assert_eq!(Outcome::from_counts(3, 10), Outcome::Winner(Color::White));
        assert_eq!(Outcome::from_counts(7, 7), Outcome::Tie);
        assert_eq!(Outcome::Tie.message(), "It's a tie!");
    }

    #[test]
    fn default_config_is_human_black_medium() {
        let c = GameConfig::default();
        assert_eq!(c.black, Controller::Human);
        assert_eq!(c.white, Controller::Computer { depth: 3 });
        assert_eq!(c.rules, Rules::default());
    }
}
