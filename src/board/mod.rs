//! Board representation: colors, cells, coordinates and the 8x8 grid.

mod state;
mod types;

pub use state::Board;
pub use types::{Cell, Color, Move};

/// Board edge length. Fixed for the lifetime of a game.
pub const SIZE: usize = 8;
