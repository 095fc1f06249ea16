use clap::Parser;
use discbot::board::{Board, Color};
use discbot::perft::perft;
use discbot::rules::{Directions, Rules, TerminalRule};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "discbot-perft", about = "Perft driver for DiscBot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// 64-char board ('.', 'B', 'W') or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Side to move, for startpos as well as a given BOARD
    #[arg(long, default_value = "black")]
    color: String,
    #[arg(long, value_enum, default_value_t = Directions::Orthogonal)]
    directions: Directions,
    #[arg(long, value_enum, default_value_t = TerminalRule::SideToMove)]
    terminal: TerminalRule,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let color: Color = args.color.parse()?;
    let text = if args.board == "startpos" { Board::new().to_compact() } else { args.board.clone() };
    let base = Board::from_text(&text, color)?;
    let rules = Rules::new(args.directions, args.terminal);
    let depth = args.depth;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let root_moves = rules.legal_moves(&base, color);
        let nodes = if args.threads <= 1 || depth == 0 || root_moves.is_empty() {
            perft(&base, color, depth, &rules)
        } else {
            root_moves.par_iter().map(|&mv| {
                let mut b = base.clone();
                rules.apply_move(&mut b, color, mv);
                perft(&b, color.opponent(), depth - 1, &rules)
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
