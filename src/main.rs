use anyhow::Result;
use clap::Parser;
use discbot::board::Color;
use discbot::config::SessionConfig;
use discbot::difficulty::{self, Difficulty};
use discbot::game::Game;
use discbot::rules::{Directions, TerminalRule};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello against the alpha-beta engine", long_about = None)]
struct Args {
    /// Difficulty (easy, medium, hard); prompted for when omitted
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Your color: 'b' for black, 'w' for white
    #[arg(long)]
    human: Option<String>,

    /// Capture directions
    #[arg(long, value_enum)]
    directions: Option<Directions>,

    /// End-of-game test
    #[arg(long, value_enum)]
    terminal: Option<TerminalRule>,

    /// JSON session config; flags above override it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(h) = &args.human {
        session.human = h.parse::<Color>()?;
    }
    if let Some(d) = args.directions { session.rules.directions = d; }
    if let Some(t) = args.terminal { session.rules.terminal = t; }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    session.difficulty = match args.difficulty {
        Some(d) => d,
        None if args.config.is_some() => session.difficulty,
        None => difficulty::prompt(&mut input, &mut out)?,
    };
    log::info!("starting game: {:?}", session);

    let mut game = Game::new(session.game_config());
    game.play(&mut input, &mut out)?;
    Ok(())
}
