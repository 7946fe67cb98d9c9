use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::suffix::{SuffixEntry, SuffixTable};
use crate::unicode::{CharClass, Script};

#[derive(Deserialize)]
struct RawScriptTable {
    #[serde(default)]
    glides: Vec<String>,
    #[serde(default)]
    suffixes: Vec<SuffixEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum SuffixTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no script tables defined")]
    Empty,
    #[error("unknown script table: [{0}]")]
    UnknownScript(String),
    #[error("[{0}] has an empty suffix")]
    EmptySuffix(Script),
    #[error("[{0}] has an empty glide")]
    EmptyGlide(Script),
    #[error("[{script}] {text:?} contains characters outside the script")]
    ForeignCharacter { script: Script, text: String },
    #[error("suffix tables already initialized")]
    AlreadyInitialized,
}

/// Parse per-script suffix tables. Each table is sorted longest-first.
pub fn parse_suffix_toml(toml_str: &str) -> Result<HashMap<Script, SuffixTable>, SuffixTableError> {
    let raw: BTreeMap<String, RawScriptTable> =
        toml::from_str(toml_str).map_err(|e| SuffixTableError::Parse(e.to_string()))?;

    if raw.is_empty() {
        return Err(SuffixTableError::Empty);
    }

    let mut tables = HashMap::with_capacity(raw.len());
    for (code, table) in raw {
        let script =
            Script::from_code(&code).ok_or_else(|| SuffixTableError::UnknownScript(code.clone()))?;

        for glide in &table.glides {
            if glide.is_empty() {
                return Err(SuffixTableError::EmptyGlide(script));
            }
            check_script(script, glide)?;
        }
        for entry in &table.suffixes {
            if entry.suffix.is_empty() {
                return Err(SuffixTableError::EmptySuffix(script));
            }
            check_script(script, &entry.suffix)?;
        }

        tables.insert(script, SuffixTable::new(table.suffixes, table.glides));
    }
    Ok(tables)
}

fn check_script(script: Script, text: &str) -> Result<(), SuffixTableError> {
    let range = script.range();
    if text.chars().any(|c| range.classify(c) == CharClass::Other) {
        return Err(SuffixTableError::ForeignCharacter {
            script,
            text: text.to_string(),
        });
    }
    Ok(())
}
