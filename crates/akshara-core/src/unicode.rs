//! Codepoint classification for the supported Brahmic scripts.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A configured Brahmic script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Script {
    #[serde(rename = "kn")]
    Kannada,
    #[serde(rename = "ml")]
    Malayalam,
    #[serde(rename = "bn")]
    Bangla,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown script: {0}")]
pub struct UnknownScript(pub String);

impl Script {
    pub const ALL: [Script; 3] = [Script::Kannada, Script::Malayalam, Script::Bangla];

    /// Short language code used by tables and callers ("kn", "ml", "bn").
    pub fn code(self) -> &'static str {
        match self {
            Script::Kannada => "kn",
            Script::Malayalam => "ml",
            Script::Bangla => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn range(self) -> &'static ScriptRange {
        match self {
            Script::Kannada => &KANNADA,
            Script::Malayalam => &MALAYALAM,
            Script::Bangla => &BANGLA,
        }
    }

    /// First script whose ranges contain a character of `word`.
    pub fn detect(word: &str) -> Option<Self> {
        word.chars().find_map(|c| {
            Self::ALL
                .into_iter()
                .find(|s| s.range().classify(c) != CharClass::Other)
        })
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Script {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownScript(s.to_string()))
    }
}

/// Structural role of a codepoint within one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
    Matra,
    Virama,
    Anusvara,
    Visarga,
    Nukta,
    /// Outside every configured range: spaces, punctuation, digits, other scripts.
    Other,
}

/// Codepoint layout of one script block. Ranges never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRange {
    pub vowels: RangeInclusive<char>,
    pub consonants: RangeInclusive<char>,
    /// Dependent vowel signs. The sign at offset `n` corresponds to the
    /// independent vowel at offset `n + 1` (the inherent vowel has no sign).
    pub matras: RangeInclusive<char>,
    pub virama: char,
    pub anusvara: char,
    pub visarga: char,
    pub nukta: Option<char>,
}

pub static KANNADA: ScriptRange = ScriptRange {
    vowels: '\u{0C85}'..='\u{0C94}',     // ಅ..ಔ
    consonants: '\u{0C95}'..='\u{0CB9}', // ಕ..ಹ
    matras: '\u{0CBE}'..='\u{0CCC}',     // ಾ..ೌ
    virama: '\u{0CCD}',
    anusvara: '\u{0C82}',
    visarga: '\u{0C83}',
    nukta: None,
};

pub static MALAYALAM: ScriptRange = ScriptRange {
    vowels: '\u{0D05}'..='\u{0D14}',     // അ..ഔ
    consonants: '\u{0D15}'..='\u{0D39}', // ക..ഹ
    matras: '\u{0D3E}'..='\u{0D4C}',     // ാ..ൌ
    virama: '\u{0D4D}',
    anusvara: '\u{0D02}',
    visarga: '\u{0D03}',
    nukta: None,
};

pub static BANGLA: ScriptRange = ScriptRange {
    vowels: '\u{0985}'..='\u{0994}',     // অ..ঔ
    consonants: '\u{0995}'..='\u{09B9}', // ক..হ
    matras: '\u{09BE}'..='\u{09CC}',     // া..ৌ
    virama: '\u{09CD}',
    anusvara: '\u{0982}',
    visarga: '\u{0983}',
    nukta: Some('\u{09BC}'),
};

impl ScriptRange {
    pub fn classify(&self, c: char) -> CharClass {
        if self.vowels.contains(&c) {
            CharClass::Vowel
        } else if self.consonants.contains(&c) {
            CharClass::Consonant
        } else if self.matras.contains(&c) {
            CharClass::Matra
        } else if c == self.virama {
            CharClass::Virama
        } else if c == self.anusvara {
            CharClass::Anusvara
        } else if c == self.visarga {
            CharClass::Visarga
        } else if self.nukta == Some(c) {
            CharClass::Nukta
        } else {
            CharClass::Other
        }
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    pub fn is_matra(&self, c: char) -> bool {
        self.matras.contains(&c)
    }

    /// Independent vowel that a dependent vowel sign stands for.
    pub fn matra_vowel(&self, matra: char) -> Option<char> {
        if !self.is_matra(matra) {
            return None;
        }
        let offset = matra as u32 - *self.matras.start() as u32;
        char::from_u32(*self.vowels.start() as u32 + 1 + offset)
    }
}
