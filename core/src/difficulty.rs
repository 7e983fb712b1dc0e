use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::*;

/// Board presets offered to the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 2] = [Self::Easy, Self::Hard];

    pub const fn game_config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked((4, 3), 6),
            Hard => GameConfig::new_unchecked((6, 4), 12),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Hard => "hard",
        }
    }

    /// Lenient parse, anything unrecognized falls back to the easiest preset.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown difficulty {:?}, using {}", name, Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
