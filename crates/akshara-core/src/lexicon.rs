//! Dictionary entry shape consumed by the morphology matcher and reader.
//!
//! The word list itself lives outside this crate; `MemoryLexicon` is a plain
//! in-memory index over whatever entries the caller supplies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Pronoun,
    Adverb,
    Number,
    Question,
    Particle,
    Phrase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub target_lang: String,
    pub target_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_script: Option<String>,
    #[serde(default)]
    pub english_meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar: Option<Grammar>,
}

impl WordEntry {
    pub fn new(target_word: impl Into<String>, pos: Option<PartOfSpeech>) -> Self {
        Self {
            id: String::new(),
            target_lang: String::new(),
            target_word: target_word.into(),
            phonetic_script: None,
            english_meaning: String::new(),
            grammar: pos.map(|pos| Grammar {
                pos,
                tense: None,
                formality: None,
            }),
        }
    }

    pub fn pos(&self) -> Option<PartOfSpeech> {
        self.grammar.as_ref().map(|g| g.pos)
    }
}

/// What the matcher needs from a dictionary root.
pub trait RootWord {
    /// Literal surface form stored in the dictionary.
    fn target_word(&self) -> &str;
    fn is_verb(&self) -> bool;
}

impl RootWord for WordEntry {
    fn target_word(&self) -> &str {
        &self.target_word
    }

    fn is_verb(&self) -> bool {
        self.pos() == Some(PartOfSpeech::Verb)
    }
}

pub trait Lexicon: Send + Sync {
    /// Exact surface lookup.
    fn lookup(&self, surface: &str) -> Option<&WordEntry>;

    /// Entries whose surface is a prefix of `token`, longest first.
    fn prefix_candidates(&self, token: &str) -> Vec<&WordEntry>;
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("entry {index} has an empty target_word")]
    EmptySurface { index: usize },
}

#[derive(Deserialize)]
struct LexiconFile {
    #[serde(default)]
    words: Vec<WordEntry>,
}

/// In-memory lexicon keyed by surface form.
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    entries: Vec<WordEntry>,
    by_surface: HashMap<String, usize>,
    /// Entry indices ordered by surface length (chars), longest first.
    by_length: Vec<usize>,
}

impl MemoryLexicon {
    /// Build from entries. A later entry with the same surface replaces the
    /// earlier one for exact lookup.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let by_surface = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.target_word.clone(), i))
            .collect();
        let mut by_length: Vec<usize> = (0..entries.len()).collect();
        by_length.sort_by_key(|&i| std::cmp::Reverse(entries[i].target_word.chars().count()));
        Self {
            entries,
            by_surface,
            by_length,
        }
    }

    /// Parse a `[[words]]` TOML list.
    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;
        if let Some(index) = file.words.iter().position(|w| w.target_word.is_empty()) {
            return Err(LexiconError::EmptySurface { index });
        }
        Ok(Self::new(file.words))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, surface: &str) -> Option<&WordEntry> {
        self.by_surface.get(surface).map(|&i| &self.entries[i])
    }

    fn prefix_candidates(&self, token: &str) -> Vec<&WordEntry> {
        self.by_length
            .iter()
            .map(|&i| &self.entries[i])
            .filter(|e| !e.target_word.is_empty() && token.starts_with(&e.target_word))
            .collect()
    }
}
