//! Session settings for the interactive binary, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::game::GameConfig;
use crate::rules::Rules;

fn default_human() -> Color {
    Color::Black
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_human")]
    pub human: Color,
    #[serde(default)]
    pub rules: Rules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { difficulty: Difficulty::default(), human: default_human(), rules: Rules::default() }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::human_vs_computer(self.human, self.difficulty.depth(), self.rules)
    }
}
