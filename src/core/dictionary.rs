use std::collections::{BTreeMap, HashSet};

use crate::core::config::DictionaryTable;
use crate::core::error::{GhostError, GhostResult};

/// Set of playable words, lowercased and filtered by minimum length.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from raw entries: trimmed, lowercased, shorter words dropped.
    pub fn from_words<I, S>(entries: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().count() >= min_word_length)
            .collect();
        Self { words }
    }

    /// Build from newline-delimited text.
    pub fn from_text(text: &str, min_word_length: usize) -> Self {
        Self::from_words(text.lines(), min_word_length)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Source of named word lists.
pub trait WordListProvider {
    /// Load the dictionary called `name`, keeping words of at least
    /// `min_word_length` characters.
    fn load(&self, name: &str, min_word_length: usize) -> GhostResult<Dictionary>;
}

/// Reads word lists from the files named in a [`DictionaryTable`].
pub struct FileWordList {
    table: DictionaryTable,
}

impl FileWordList {
    pub fn new(table: DictionaryTable) -> Self {
        Self { table }
    }
}

impl WordListProvider for FileWordList {
    fn load(&self, name: &str, min_word_length: usize) -> GhostResult<Dictionary> {
        let path = self.table.get(name).ok_or_else(|| GhostError::UnknownDictionary {
            name: name.to_string(),
            known: self.table.names(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| GhostError::WordListIo {
            name: name.to_string(),
            source,
        })?;
        let dictionary = Dictionary::from_text(&content, min_word_length);

        tracing::info!(dictionary = name, words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }
}

/// In-memory word lists, for tests and for embedding the game without
/// word-list files.
#[derive(Debug, Clone, Default)]
pub struct StaticWordList {
    lists: BTreeMap<String, Vec<String>>,
}

impl StaticWordList {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_list<I, S>(mut self, name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists.insert(name.into(), words.into_iter().map(Into::into).collect());
        self
    }
}

impl WordListProvider for StaticWordList {
    fn load(&self, name: &str, min_word_length: usize) -> GhostResult<Dictionary> {
        let words = self.lists.get(name).ok_or_else(|| GhostError::UnknownDictionary {
            name: name.to_string(),
            known: self.lists.keys().cloned().collect(),
        })?;
        Ok(Dictionary::from_words(words, min_word_length))
    }
}
