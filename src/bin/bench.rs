use clap::Parser;
use discbot::board::{Board, Color};
use discbot::difficulty::Difficulty;
use discbot::rules::{Directions, Rules, TerminalRule};
use discbot::search::{SearchParams, Searcher};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "discbot-bench", version, about = "Benchmark DiscBot search speed")]
struct Args {
    /// 64-char board ('.', 'B', 'W') or 'startpos'
    #[arg(long, default_value = "startpos")]
    board: String,

    /// Side to move
    #[arg(long, default_value = "black")]
    color: String,

    /// Named depth; ignored when --depth is set
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Fixed search depth (overrides difficulty when > 0)
    #[arg(long, default_value_t = 0)]
    depth: u32,

    #[arg(long, value_enum, default_value_t = Directions::Orthogonal)]
    directions: Directions,

    #[arg(long, value_enum, default_value_t = TerminalRule::SideToMove)]
    terminal: TerminalRule,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let color: Color = args.color.parse()?;
    let board = if args.board == "startpos" { Board::new() } else { Board::from_text(&args.board, color)? };
    let depth = if args.depth > 0 { args.depth } else { args.difficulty.depth() };
    let rules = Rules::new(args.directions, args.terminal);

    let mut s = Searcher::new(rules);
    let p = SearchParams { depth, rules };
    let t0 = Instant::now();
    let res = s.search_with_params(&board, color, p);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}",
        res.bestmove.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
        res.score,
        res.nodes,
        dt.as_secs_f64(),
        nps
    );
    Ok(())
}
