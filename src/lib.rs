// Othello engine: board, capture rules and alpha-beta search
pub mod board;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Color, Move};
pub use error::{Error, Result};
pub use rules::Rules;
pub use search::choose_move;
