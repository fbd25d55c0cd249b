//! Match settings: gameplay constants, dictionary table and the roster.
//!
//! Settings come from three layers, lowest priority first: built-in
//! defaults, an optional JSON file, and command-line overrides applied by
//! the driver. `validate` runs once all layers are merged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{GhostError, GhostResult};
use crate::games::ghost::PlayerKind;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
pub const DEFAULT_GHOST_WORD: &str = "GHOST";
pub const DEFAULT_DICTIONARY: &str = "scrabble";

/// Maps dictionary names to newline-delimited word files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryTable {
    entries: BTreeMap<String, PathBuf>,
}

impl DictionaryTable {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Default for DictionaryTable {
    fn default() -> Self {
        Self::new()
            .with_entry("scrabble", "data/scrabble.txt")
            .with_entry("webster", "data/webster.txt")
    }
}

/// One roster entry. Missing fields fall back to a human with a generic name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub player_type: Option<PlayerKind>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self { player_type: Some(PlayerKind::Human), name: Some(name.into()) }
    }

    pub fn kind(&self) -> PlayerKind {
        self.player_type.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub min_word_length: usize,
    pub ghost_word: String,
    pub dictionary: String,
    pub dictionaries: DictionaryTable,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            ghost_word: DEFAULT_GHOST_WORD.to_string(),
            dictionary: DEFAULT_DICTIONARY.to_string(),
            dictionaries: DictionaryTable::default(),
            players: Vec::new(),
        }
    }
}

impl GameSettings {
    pub fn from_json(text: &str) -> GhostResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> GhostResult<Self> {
        let text = std::fs::read_to_string(path).map_err(GhostError::SettingsIo)?;
        Self::from_json(&text)
    }

    /// Number of round losses that eliminate a player.
    pub fn num_strikes_allowed(&self) -> usize {
        self.ghost_word.trim().chars().count()
    }

    /// The ghost word, trimmed and upper-cased.
    pub fn checked_ghost_word(&self) -> GhostResult<String> {
        let ghost = self.ghost_word.trim();
        if ghost.is_empty() || !ghost.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GhostError::InvalidGhostWord(self.ghost_word.clone()));
        }
        Ok(ghost.to_uppercase())
    }

    pub fn validate(&self) -> GhostResult<()> {
        self.checked_ghost_word()?;
        if !self.dictionaries.contains(&self.dictionary) {
            return Err(GhostError::UnknownDictionary {
                name: self.dictionary.clone(),
                known: self.dictionaries.names(),
            });
        }
        Ok(())
    }
}
