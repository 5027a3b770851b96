//! Card source loading.

use crate::models::Card;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_DECK: &str = include_str!("../data/spanish_words.json");

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DeckResult<T> = Result<T, DeckError>;

/// The Spanish word list shipped with the binary.
pub fn bundled() -> DeckResult<Vec<Card>> {
    parse(BUNDLED_DECK)
}

/// Load a deck from a JSON file holding an array of `{"front", "back"}` objects.
pub fn load(path: &Path) -> DeckResult<Vec<Card>> {
    let content = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse(&content)?;
    tracing::info!(path = %path.display(), cards = cards.len(), "loaded deck");
    Ok(cards)
}

/// Load the deck at `path`, or the bundled one when no path is given.
pub fn load_or_bundled(path: Option<&Path>) -> DeckResult<Vec<Card>> {
    match path {
        Some(path) => load(path),
        None => bundled(),
    }
}

pub fn parse(json: &str) -> DeckResult<Vec<Card>> {
    Ok(serde_json::from_str(json)?)
}
