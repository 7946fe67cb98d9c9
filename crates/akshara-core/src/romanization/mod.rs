//! Codepoint-to-romanization lookup built from the shared reference table.
//!
//! The reference table is TOML embedded at compile time. `PhoneticMap::global`
//! builds one immutable map per script on first use (`OnceLock`); callers that
//! want injected configuration build their own with `PhoneticMap::build`.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

pub use config::{
    parse_romanization_toml, ReferenceTable, RomanizationEntry, RomanizationError,
};

use crate::unicode::Script;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romanization.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static REFERENCE_TABLE: OnceLock<ReferenceTable> = OnceLock::new();

/// Set a custom reference table before the first `reference_table()` or
/// `PhoneticMap::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), RomanizationError> {
    parse_romanization_toml(&toml_content)?;
    if REFERENCE_TABLE.get().is_some() {
        return Err(RomanizationError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| RomanizationError::AlreadyInitialized)
}

/// Returns the embedded default reference table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// The process-wide reference table (custom if set, otherwise the default).
pub fn reference_table() -> &'static ReferenceTable {
    REFERENCE_TABLE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        parse_romanization_toml(toml_str).expect("romanization TOML must be valid")
    })
}

/// Per-script consonant and vowel romanizations.
#[derive(Debug, Clone)]
pub struct PhoneticMap {
    script: Script,
    consonants: HashMap<char, String>,
    vowels: HashMap<char, String>,
}

impl PhoneticMap {
    /// Build the map for `script`. When a letter appears in several rows the
    /// last row wins.
    pub fn build(script: Script, table: &ReferenceTable) -> Self {
        let collect = |entries: &[RomanizationEntry]| -> HashMap<char, String> {
            entries
                .iter()
                .filter_map(|e| {
                    let mut chars = e.letter(script)?.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some((c, e.roman.clone())),
                        _ => None,
                    }
                })
                .collect()
        };
        let map = Self {
            script,
            consonants: collect(&table.consonants),
            vowels: collect(&table.vowels),
        };
        debug!(
            script = script.code(),
            consonants = map.consonants.len(),
            vowels = map.vowels.len(),
            "phonetic map built"
        );
        map
    }

    /// Get or build the map for `script` from the global reference table.
    pub fn global(script: Script) -> &'static PhoneticMap {
        static KANNADA: OnceLock<PhoneticMap> = OnceLock::new();
        static MALAYALAM: OnceLock<PhoneticMap> = OnceLock::new();
        static BANGLA: OnceLock<PhoneticMap> = OnceLock::new();
        let cell = match script {
            Script::Kannada => &KANNADA,
            Script::Malayalam => &MALAYALAM,
            Script::Bangla => &BANGLA,
        };
        cell.get_or_init(|| Self::build(script, reference_table()))
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Romanization of a consonant letter, inherent vowel included.
    /// Empty when the letter is not in the table.
    pub fn consonant(&self, c: char) -> &str {
        self.consonants.get(&c).map_or("", String::as_str)
    }

    /// Romanization of an independent vowel letter, empty when unknown.
    pub fn vowel(&self, c: char) -> &str {
        self.vowels.get(&c).map_or("", String::as_str)
    }
}
