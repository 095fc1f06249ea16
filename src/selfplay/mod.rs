use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move};
use crate::error::{Error, Result};
use crate::game::{Game, GameConfig, Outcome, TurnRecord};
use crate::rules::{Rules, TerminalRule};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub black_depth: u32,
    pub white_depth: u32,
    pub random_plies: usize, // random opening moves before the engines take over
    pub max_plies: usize,    // opening plus engine turns, passes included
    pub seed: u64,
    pub rules: Rules,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, black_depth: 3, white_depth: 3, random_plies: 4, max_plies: 128, seed: 42, rules: Rules::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub index: usize,
    pub opening: Vec<Option<Move>>,
    pub turns: Vec<TurnRecord>,
    pub black: usize,
    pub white: usize,
    pub outcome: Outcome,
    pub final_board: String,
    /// Stopped at `max_plies` before reaching a terminal position.
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub ties: usize,
}

/// Play game `index`. The opening is drawn from `SmallRng(seed ^ index)`, so
/// a game depends only on the params and its index. The game is cut off after
/// `max_plies` recorded turns and scored as it stands.
pub fn play_game(params: &SelfPlayParams, index: usize) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ index as u64);
    let rules = params.rules;
    let mut board = Board::new();
    let mut opening = Vec::with_capacity(params.random_plies);
    for _ in 0..params.random_plies.min(params.max_plies) {
        let color = board.turn();
        if rules.is_terminal(&board, color) { break; }
        let moves = rules.legal_moves(&board, color);
        if moves.is_empty() {
            if rules.terminal == TerminalRule::BothSides {
                board.pass_turn();
                opening.push(None);
                continue;
            }
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        rules.apply_move(&mut board, color, mv);
        opening.push(Some(mv));
    }

    let config = GameConfig::computer_vs_computer(params.black_depth, params.white_depth, rules);
    let mut game = Game::from_position(board, config);
    let (mut input, mut out) = (io::empty(), io::sink());
    while !game.is_over() && opening.len() + game.turns().len() < params.max_plies {
        game.play_turn(&mut input, &mut out)?;
    }
    let truncated = !game.is_over();
    let summary = game.finish(&mut out)?;
    debug!(
        "selfplay game {} finished: {:?} {}-{}{}",
        index,
        summary.outcome,
        summary.black,
        summary.white,
        if truncated { " (truncated)" } else { "" }
    );
    Ok(GameRecord {
        index,
        opening,
        turns: summary.turns,
        black: summary.black,
        white: summary.white,
        outcome: summary.outcome,
        final_board: summary.final_board,
        truncated,
    })
}

/// Play all games in parallel; results come back in index order.
pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    (0..params.games).into_par_iter().map(|i| play_game(params, i)).collect()
}

pub fn tally(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for g in games {
        match g.outcome {
            Outcome::Winner(Color::Black) => t.black_wins += 1,
            Outcome::Winner(Color::White) => t.white_wins += 1,
            Outcome::Tie => t.ties += 1,
        }
    }
    t
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Io {
            operation: format!("create {}", parent.display()),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut w = BufWriter::new(file);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })?;
    let mut out = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
