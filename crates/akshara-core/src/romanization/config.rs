use serde::Deserialize;

use crate::unicode::Script;

/// One phoneme row of the shared reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct RomanizationEntry {
    pub roman: String,
    #[serde(default)]
    pub kn: Option<String>,
    #[serde(default)]
    pub ml: Option<String>,
    #[serde(default)]
    pub bn: Option<String>,
}

impl RomanizationEntry {
    /// The letter this phoneme is written with in `script`, if any.
    pub fn letter(&self, script: Script) -> Option<&str> {
        match script {
            Script::Kannada => self.kn.as_deref(),
            Script::Malayalam => self.ml.as_deref(),
            Script::Bangla => self.bn.as_deref(),
        }
    }
}

/// Vowel and consonant rows shared by every configured script.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTable {
    pub vowels: Vec<RomanizationEntry>,
    pub consonants: Vec<RomanizationEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomanizationError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[{0}]] table is empty")]
    Empty(&'static str),
    #[error("empty roman value for {0}")]
    EmptyRoman(String),
    #[error("consonant roman must end in the inherent vowel 'a': {0}")]
    MissingInherentVowel(String),
    #[error("{script} letter {letter:?} for {roman} is outside the script's {kind} range")]
    OutOfRange {
        script: Script,
        letter: String,
        roman: String,
        kind: &'static str,
    },
    #[error("romanization table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a romanization reference table.
pub fn parse_romanization_toml(toml_str: &str) -> Result<ReferenceTable, RomanizationError> {
    let table: ReferenceTable =
        toml::from_str(toml_str).map_err(|e| RomanizationError::Parse(e.to_string()))?;

    if table.vowels.is_empty() {
        return Err(RomanizationError::Empty("vowels"));
    }
    if table.consonants.is_empty() {
        return Err(RomanizationError::Empty("consonants"));
    }

    for entry in table.vowels.iter().chain(&table.consonants) {
        if entry.roman.is_empty() {
            let letter = Script::ALL
                .into_iter()
                .find_map(|s| entry.letter(s))
                .unwrap_or_default();
            return Err(RomanizationError::EmptyRoman(letter.to_string()));
        }
    }

    for entry in &table.consonants {
        if !entry.roman.ends_with('a') {
            return Err(RomanizationError::MissingInherentVowel(entry.roman.clone()));
        }
    }

    for script in Script::ALL {
        let range = script.range();
        check_letters(script, &table.vowels, "vowel", |c| range.is_vowel(c))?;
        check_letters(script, &table.consonants, "consonant", |c| {
            range.is_consonant(c)
        })?;
    }

    Ok(table)
}

fn check_letters(
    script: Script,
    entries: &[RomanizationEntry],
    kind: &'static str,
    in_range: impl Fn(char) -> bool,
) -> Result<(), RomanizationError> {
    for entry in entries {
        let Some(letter) = entry.letter(script) else {
            continue;
        };
        let mut chars = letter.chars();
        let ok = matches!((chars.next(), chars.next()), (Some(c), None) if in_range(c));
        if !ok {
            return Err(RomanizationError::OutOfRange {
                script,
                letter: letter.to_string(),
                roman: entry.roman.clone(),
                kind,
            });
        }
    }
    Ok(())
}
