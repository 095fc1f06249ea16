use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Named search depths offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

/// Ask for a difficulty on `out` and read one line. Anything unrecognized
/// prints a notice and falls back to Medium; EOF is `InputClosed`.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Difficulty> {
    write!(out, "Choose difficulty level (Easy, Medium, Hard): ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    match line.parse() {
        Ok(d) => Ok(d),
        Err(e) => {
            warn!("{e}");
            writeln!(out, "Invalid difficulty level. Defaulting to Medium.")?;
            Ok(Difficulty::Medium)
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::ParseDifficulty { input: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}
