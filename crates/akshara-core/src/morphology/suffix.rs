use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixCategory {
    /// Noun case marker; only attaches to non-verb roots.
    Case,
    /// Conjugation ending; only attaches to verb roots.
    Verb,
    Postposition,
}

impl SuffixCategory {
    /// Whether a suffix of this category may follow a root of the given kind.
    pub fn admits(self, root_is_verb: bool) -> bool {
        match self {
            SuffixCategory::Case => !root_is_verb,
            SuffixCategory::Verb => root_is_verb,
            SuffixCategory::Postposition => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixEntry {
    /// Exact surface string of the morpheme.
    pub suffix: String,
    pub roman: String,
    /// Grammatical gloss, e.g. "dative · to/for".
    pub label: String,
    pub category: SuffixCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marathi_equiv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi_equiv: Option<String>,
}

/// Suffix entries for one script, sorted longest-first, plus its glides.
#[derive(Debug, Clone, Default)]
pub struct SuffixTable {
    entries: Vec<SuffixEntry>,
    glides: Vec<String>,
}

impl SuffixTable {
    pub const EMPTY: SuffixTable = SuffixTable {
        entries: Vec::new(),
        glides: Vec::new(),
    };

    /// Sorts `entries` by descending length in chars. The sort is stable, so
    /// equal-length entries keep their given order.
    pub fn new(mut entries: Vec<SuffixEntry>, glides: Vec<String>) -> Self {
        entries.sort_by_key(|e| std::cmp::Reverse(e.suffix.chars().count()));
        Self { entries, glides }
    }

    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    pub fn glides(&self) -> &[String] {
        &self.glides
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry equal to `text` whose category admits the root.
    pub fn find_exact(&self, text: &str, root_is_verb: bool) -> Option<&SuffixEntry> {
        self.entries
            .iter()
            .find(|e| e.suffix == text && e.category.admits(root_is_verb))
    }
}
