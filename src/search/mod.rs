pub mod alphabeta;
pub mod eval;
pub mod minimax;

pub use alphabeta::{choose_move, SearchParams, SearchResult, Searcher};
