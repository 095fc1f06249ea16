use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SIZE;
use crate::error::{Error, Result};

/// A side in the game. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Single-letter tag used by the console output.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(Error::ParseColor { input: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// A placement coordinate. Only built through [`Move::new`] (deserializing
/// included), so it is always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = Error;

    fn try_from(raw: RawMove) -> Result<Self> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Caller guarantees `row < 8 && col < 8`.
    pub(crate) fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Accepts `"r c"`, `"r,c"` or `"(r, c)"`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::ParseMove { input: s.to_string() };
        let cleaned: String = s
            .chars()
            .map(|c| if c == ',' || c == '(' || c == ')' { ' ' } else { c })
            .collect();
        let mut parts = cleaned.split_whitespace();
        let row = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(bad)?;
        let col = parts.next().and_then(|p| p.parse::<usize>().ok()).ok_or_else(bad)?;
        if parts.next().is_some() {
            return Err(bad());
        }
        Move::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent().opponent(), Color::White);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("B".parse::<Color>().unwrap(), Color::Black);
        assert_eq!(" white ".parse::<Color>().unwrap(), Color::White);
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn test_move_parse_formats() {
        let m = Move::new(2, 3).unwrap();
        assert_eq!("2 3".parse::<Move>().unwrap(), m);
        assert_eq!("2,3".parse::<Move>().unwrap(), m);
        assert_eq!("(2, 3)".parse::<Move>().unwrap(), m);
        assert_eq!(m.to_string(), "(2, 3)");
    }

    #[test]
    fn test_move_parse_rejects_garbage() {
        assert!(matches!("x y".parse::<Move>(), Err(Error::ParseMove { .. })));
        assert!(matches!("1 2 3".parse::<Move>(), Err(Error::ParseMove { .. })));
        assert!(matches!("8 0".parse::<Move>(), Err(Error::OutOfBounds { row: 8, col: 0 })));
    }

    #[test]
    fn test_move_json_goes_through_bounds_check() {
        let m: Move = serde_json::from_str(r#"{"row":2,"col":3}"#).unwrap();
        assert_eq!(m, Move::new(2, 3).unwrap());
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"row":2,"col":3}"#);

        let err = serde_json::from_str::<Move>(r#"{"row":9,"col":9}"#).unwrap_err();
        assert!(err.to_string().contains("out of bounds"), "{err}");
        assert!(serde_json::from_str::<Move>(r#"{"row":0,"col":8}"#).is_err());
    }

    #[test]
    fn test_move_index_row_major() {
        assert_eq!(Move::new(0, 0).unwrap().index(), 0);
        assert_eq!(Move::new(3, 4).unwrap().index(), 28);
        assert_eq!(Move::new(7, 7).unwrap().index(), 63);
    }
}
