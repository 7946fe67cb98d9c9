//! Morphology matcher: explains an inflected token as root + suffix.
//!
//! Matching is exact on the remainder after the root, first directly and then
//! behind one of the script's linking glides. A suffix's category must agree
//! with the root's part of speech (verb endings on verbs, case markers on
//! everything else).
//!
//! ```text
//! ಮನೆಗೆ    = ಮನೆ + ಗೆ          (dative)
//! ಮನೆಯಲ್ಲಿ = ಮನೆ + ಯ + ಲ್ಲಿ     (locative, glide ಯ)
//! ಹೋಗುತ್ತೇನೆ = ಹೋಗು + ತ್ತೇನೆ   (present, 1st sg)
//! ```

mod config;
mod suffix;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, debug_span};

pub use config::{parse_suffix_toml, SuffixTableError};
pub use suffix::{SuffixCategory, SuffixEntry, SuffixTable};

use crate::lexicon::RootWord;
use crate::unicode::Script;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_suffixes.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static TABLES: OnceLock<HashMap<Script, SuffixTable>> = OnceLock::new();

/// Set custom suffix tables before the first `SuffixTable::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), SuffixTableError> {
    parse_suffix_toml(&toml_content)?;
    if TABLES.get().is_some() {
        return Err(SuffixTableError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SuffixTableError::AlreadyInitialized)
}

/// Returns the embedded default suffix tables TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

fn global_tables() -> &'static HashMap<Script, SuffixTable> {
    TABLES.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        parse_suffix_toml(toml_str).expect("suffix TOML must be valid")
    })
}

impl SuffixTable {
    /// The process-wide table for `script`; empty when none is configured.
    pub fn global(script: Script) -> &'static SuffixTable {
        static EMPTY: SuffixTable = SuffixTable::EMPTY;
        global_tables().get(&script).unwrap_or(&EMPTY)
    }
}

/// A token explained as root + optional glide + suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphBreakdown<'a, R> {
    pub root: &'a R,
    /// The literal part of the token matching the root.
    pub root_part: String,
    pub glide: Option<String>,
    pub suffix: &'a SuffixEntry,
    /// Everything after the root, glide included.
    pub suffix_part: String,
}

/// Matcher bound to one suffix table.
#[derive(Debug, Clone, Copy)]
pub struct MorphMatcher<'t> {
    table: &'t SuffixTable,
}

impl MorphMatcher<'static> {
    pub fn global(script: Script) -> Self {
        Self::new(SuffixTable::global(script))
    }
}

impl<'t> MorphMatcher<'t> {
    pub fn new(table: &'t SuffixTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t SuffixTable {
        self.table
    }

    /// Explain `token` as an inflection of `root`.
    ///
    /// `None` when the token does not strictly extend the root, or when no
    /// suffix (directly or behind a glide) matches the remainder.
    pub fn decompose<'a, R: RootWord>(
        &self,
        token: &str,
        root: &'a R,
    ) -> Option<MorphBreakdown<'a, R>>
    where
        't: 'a,
    {
        let root_str = root.target_word();
        let _span = debug_span!("morph_decompose", token, root = root_str).entered();

        let remainder = token.strip_prefix(root_str).filter(|r| !r.is_empty())?;
        let is_verb = root.is_verb();
        let table = self.table;

        if let Some(suffix) = table.find_exact(remainder, is_verb) {
            debug!(suffix = suffix.suffix.as_str(), "direct match");
            return Some(MorphBreakdown {
                root,
                root_part: root_str.to_string(),
                glide: None,
                suffix,
                suffix_part: remainder.to_string(),
            });
        }

        for glide in table.glides() {
            let Some(rest) = remainder.strip_prefix(glide.as_str()) else {
                continue;
            };
            if let Some(suffix) = table.find_exact(rest, is_verb) {
                debug!(
                    glide = glide.as_str(),
                    suffix = suffix.suffix.as_str(),
                    "glide match"
                );
                return Some(MorphBreakdown {
                    root,
                    root_part: root_str.to_string(),
                    glide: Some(glide.clone()),
                    suffix,
                    suffix_part: remainder.to_string(),
                });
            }
        }

        debug!(remainder, "no suffix match");
        None
    }
}

/// Explain `token` as an inflection of `root` using the global suffix table
/// for `script`.
pub fn decompose<'a, R: RootWord>(
    token: &str,
    root: &'a R,
    script: Script,
) -> Option<MorphBreakdown<'a, R>> {
    MorphMatcher::global(script).decompose(token, root)
}
