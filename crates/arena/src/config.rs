//! Arena configuration, loadable from TOML.

use serde::Deserialize;

/// Settings for a series of games.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,
    /// Plies per game before the runner declares a draw.
    pub max_plies: u32,
    /// Swap which engine takes White each game.
    pub alternate_colors: bool,
    /// Seed for the engines; absent means OS entropy.
    pub seed: Option<u64>,
    /// Print a progress line per game.
    pub verbose: bool,
    /// Print the board after every reply.
    pub show_boards: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            alternate_colors: true,
            seed: None,
            verbose: true,
            show_boards: false,
        }
    }
}

impl ArenaConfig {
    /// Load settings from a TOML file.
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ArenaConfig = toml::from_str("games = 3\nseed = 42\n").unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_plies, 200);
        assert!(config.alternate_colors);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config.games, 10);
        assert_eq!(config.seed, None);
        assert!(config.verbose);
        assert!(!config.show_boards);
    }
}
