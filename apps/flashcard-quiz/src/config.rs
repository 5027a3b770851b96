//! Configuration for flashcard quiz.

use crate::models::QuizOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the config file. A missing file yields the defaults; a file that
    /// fails to parse is an error so the caller can report it.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("malformed config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("", "", "flashcard-quiz")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|d| d.config_dir().join("config.toml"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|d| d.data_dir().join("flashcard-quiz.log"))
    }

    pub fn to_quiz_options(&self) -> QuizOptions {
        QuizOptions {
            shuffle: self.quiz.shuffle,
            randomize_sides: self.quiz.random_sides,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Deck file to use instead of the bundled word list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub random_sides: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_title() -> String { "Spanish Flashcards".to_string() }
fn default_true() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_progress: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.title, "Spanish Flashcards");
        assert!(config.display.show_progress);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.to_quiz_options(), QuizOptions::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [quiz]
            shuffle = true
            deck = "/tmp/words.json"

            [display]
            show_progress = false
            "#,
        )
        .unwrap();

        assert_eq!(config.quiz.deck, Some(PathBuf::from("/tmp/words.json")));
        assert!(!config.display.show_progress);
        assert_eq!(config.display.title, "Spanish Flashcards");
        assert_eq!(
            config.to_quiz_options(),
            QuizOptions { shuffle: true, randomize_sides: false }
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.quiz.random_sides = true;
        config.display.title = "Colores".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_save_to_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.quiz.shuffle = true;

        config.save_to(&path).unwrap();
        let saved = Config::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, config);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(Config::parse("[quiz]\nshuffle = \"yes\"").is_err());
    }
}
