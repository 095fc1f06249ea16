use clap::Parser;
use discbot::rules::{Directions, Rules, TerminalRule};
use discbot::selfplay::{play_game, tally, write_jsonl, SelfPlayParams};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "discbot-selfplay", about = "Play engine-vs-engine games and write them as JSONL")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 3)]
    black_depth: u32,
    #[arg(long, default_value_t = 3)]
    white_depth: u32,
    /// Random opening moves before the engines take over
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    /// Stop a game after this many plies and score it as it stands
    #[arg(long, default_value_t = 128)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, value_enum, default_value_t = Directions::Orthogonal)]
    directions: Directions,
    #[arg(long, value_enum, default_value_t = TerminalRule::SideToMove)]
    terminal: TerminalRule,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        black_depth: a.black_depth,
        white_depth: a.white_depth,
        random_plies: a.random_plies,
        max_plies: a.max_plies,
        seed: a.seed,
        rules: Rules::new(a.directions, a.terminal),
    };
    eprintln!(
        "Generating {} games (black depth={}, white depth={}, random plies={}, threads={})",
        a.games, a.black_depth, a.white_depth, a.random_plies, a.threads
    );

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} games")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let games = pool.install(|| {
        (0..params.games)
            .into_par_iter()
            .map(|i| {
                let g = play_game(&params, i);
                pb.inc(1);
                g
            })
            .collect::<discbot::Result<Vec<_>>>()
    })?;
    pb.finish_and_clear();

    let t = tally(&games);
    eprintln!("Black wins: {}  White wins: {}  Ties: {}", t.black_wins, t.white_wins, t.ties);
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
