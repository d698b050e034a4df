use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::board::{Mark, TOTAL_CELLS};
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Who sits at the two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans sharing the mouse and keyboard
    Pvp,
    /// Human against the computer
    Pvai,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Pvai => "Player vs AI",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Pvp => "pvp",
            GameMode::Pvai => "pvai",
        })
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "pvai" => Ok(GameMode::Pvai),
            other => Err(ConfigError::Validation(format!(
                "unknown mode '{}' (expected 'pvp' or 'pvai')",
                other
            ))),
        }
    }
}

/// Parse a mark name as written in config files and on the command line.
pub fn parse_mark(s: &str) -> Result<Mark, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "red" => Ok(Mark::Red),
        "yellow" => Ok(Mark::Yellow),
        other => Err(ConfigError::Validation(format!(
            "unknown mark '{}' (expected 'red' or 'yellow')",
            other
        ))),
    }
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies searched per computer move
    pub search_depth: u32,
    /// Mark the computer plays in Player vs AI games
    pub ai_mark: Mark,
    /// Pause before the computer's move is shown
    pub ai_move_delay_ms: u64,
    /// Start straight into this mode; `None` shows the mode selection screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            search_depth: DEFAULT_DEPTH,
            ai_mark: Mark::Yellow,
            ai_move_delay_ms: 1000,
            mode: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(
                "search_depth must be >= 1".into(),
            ));
        }
        if self.search_depth as usize > TOTAL_CELLS {
            return Err(ConfigError::Validation(format!(
                "search_depth must be <= {}",
                TOTAL_CELLS
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&GameConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.ai_mark, Mark::Yellow);
        assert_eq!(config.ai_move_delay_ms, 1000);
        assert_eq!(config.mode, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
search_depth = 6
mode = "pvai"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search_depth, 6);
        assert_eq!(config.mode, Some(GameMode::Pvai));
        // Other fields should be defaults
        assert_eq!(config.ai_mark, Mark::Yellow);
        assert_eq!(config.ai_move_delay_ms, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let config = GameConfig {
            search_depth: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_depth_past_board() {
        let mut config = GameConfig::default();
        config.search_depth = 42;
        assert!(config.validate().is_ok());
        config.search_depth = 43;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mark_is_parse_error() {
        let result: Result<GameConfig, _> = toml::from_str("ai_mark = \"green\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
ai_mark = "red"
ai_move_delay_ms = 0
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.ai_mark, Mark::Red);
        assert_eq!(config.ai_move_delay_ms, 0);
        assert_eq!(config.search_depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "search_depth = 0\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "search_depth = \"deep\"\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml().unwrap();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(toml_str.contains("ai_mark = \"yellow\""));
    }

    #[test]
    fn test_mode_and_mark_parsing() {
        assert_eq!("pvp".parse::<GameMode>().unwrap(), GameMode::Pvp);
        assert_eq!("PvAI".parse::<GameMode>().unwrap(), GameMode::Pvai);
        assert!("solo".parse::<GameMode>().is_err());
        assert_eq!(parse_mark("Red").unwrap(), Mark::Red);
        assert_eq!(parse_mark("yellow").unwrap(), Mark::Yellow);
        assert!(parse_mark("blue").is_err());
        assert_eq!(GameMode::Pvai.to_string(), "pvai");
    }
}
