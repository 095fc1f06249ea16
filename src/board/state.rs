use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Cell, Color, Move};
use super::SIZE;
use crate::error::{Error, Result};

/// The 8x8 grid plus the side to move.
///
/// Only [`crate::rules::Rules::apply`] changes cells. `Clone` is a full copy of
/// the grid, so search branches never share state with the live game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    turn: Color,
}

impl Board {
    /// Standard starting position: White on (3,3)/(4,4), Black on (3,4)/(4,3),
    /// Black to move.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells, turn: Color::Black }
    }

    /// Parse 64 cells of `.`/`B`/`W` in row-major order. Whitespace is ignored,
    /// so both an 8-line grid and a single 64-char line are accepted.
    pub fn from_text(text: &str, turn: Color) -> Result<Self> {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIZE * SIZE {
            return Err(Error::ParseBoard {
                message: format!("expected {} cells, got {}", SIZE * SIZE, chars.len()),
            });
        }
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| Error::ParseBoard {
                message: format!("invalid character '{}' at cell {}", c, i),
            })?;
            cells[i / SIZE][i % SIZE] = cell;
        }
        Ok(Self { cells, turn })
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Hand the move to the other side without touching any cell. Used when
    /// the side to move has nothing to play.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn count_of(&self, color: Color) -> usize {
        let target = color.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    pub fn total_discs(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != Cell::Empty).count()
    }

    /// 64-char `.`/`B`/`W` string; round-trips through [`Board::from_text`].
    pub fn to_compact(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0 1 2 3 4 5 6 7")?;
        writeln!(f, "    _ _ _ _ _ _ _ _")?;
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|c| match c.color() {
                    Some(color) => color.symbol().to_string(),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(f, "{} | {}", r, line.join(" "))?;
        }
        Ok(())
    }
}
