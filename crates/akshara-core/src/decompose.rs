//! Akshara decomposition: splits a word into orthographic syllables.
//!
//! A single left-to-right scan over the word's codepoints. Each unit is a
//! standalone vowel, a consonant (optionally conjoined through virama) with
//! its dependent vowel sign, or an isolated anusvara/visarga. Codepoints that
//! start none of these are skipped.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::romanization::PhoneticMap;
use crate::unicode::{CharClass, Script, ScriptRange};

pub const INHERENT_VOWEL: &str = "a";
pub const ANUSVARA_ROMAN: &str = "ṁ";
pub const VISARGA_ROMAN: &str = "ḥ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AksharaKind {
    Vowel,
    Consonant,
    Conjunct,
}

/// One orthographic syllable of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Akshara {
    /// Exact substring of the input covered by this unit.
    pub display: String,
    /// More than one means a conjunct joined by virama.
    pub consonants: Vec<char>,
    pub matra: Option<char>,
    /// Set only for standalone-vowel units.
    pub vowel: Option<char>,
    pub phonetic: String,
    #[serde(rename = "type")]
    pub kind: AksharaKind,
}

/// Decompose `word` in the script named by `script_id`.
///
/// Unknown script ids yield an empty sequence.
pub fn decompose_word(word: &str, script_id: &str) -> Vec<Akshara> {
    match Script::from_code(script_id) {
        Some(script) => Decomposer::global(script).decompose(word),
        None => {
            debug!(script_id, "unconfigured script");
            Vec::new()
        }
    }
}

/// Decomposer bound to one script's ranges and phonetic map.
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'a> {
    range: &'a ScriptRange,
    phonetics: &'a PhoneticMap,
}

impl Decomposer<'static> {
    pub fn global(script: Script) -> Self {
        Self::new(script.range(), PhoneticMap::global(script))
    }
}

impl<'a> Decomposer<'a> {
    pub fn new(range: &'a ScriptRange, phonetics: &'a PhoneticMap) -> Self {
        Self { range, phonetics }
    }

    pub fn decompose(&self, word: &str) -> Vec<Akshara> {
        let _span = debug_span!("decompose", word).entered();

        let chars: Vec<char> = word.chars().collect();
        let mut aksharas = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match self.range.classify(chars[i]) {
                CharClass::Vowel => {
                    let (akshara, next) = self.vowel_unit(&chars, i);
                    aksharas.push(akshara);
                    i = next;
                }
                CharClass::Consonant => {
                    let (akshara, next) = self.consonant_unit(&chars, i);
                    aksharas.push(akshara);
                    i = next;
                }
                _ => {
                    // Isolated anusvara/visarga. Stray matra, virama, nukta and
                    // non-script codepoints are skipped.
                    if let Some((mark, roman)) = self.mark_at(&chars, i) {
                        aksharas.push(Akshara {
                            display: mark.to_string(),
                            consonants: Vec::new(),
                            matra: None,
                            vowel: None,
                            phonetic: roman.to_string(),
                            kind: AksharaKind::Vowel,
                        });
                    }
                    i += 1;
                }
            }
        }

        debug!(akshara_count = aksharas.len());
        aksharas
    }

    fn class_at(&self, chars: &[char], i: usize) -> CharClass {
        chars
            .get(i)
            .map_or(CharClass::Other, |&c| self.range.classify(c))
    }

    /// Anusvara or visarga at `i` with its romanization.
    fn mark_at(&self, chars: &[char], i: usize) -> Option<(char, &'static str)> {
        let c = *chars.get(i)?;
        match self.range.classify(c) {
            CharClass::Anusvara => Some((c, ANUSVARA_ROMAN)),
            CharClass::Visarga => Some((c, VISARGA_ROMAN)),
            _ => None,
        }
    }

    fn vowel_unit(&self, chars: &[char], start: usize) -> (Akshara, usize) {
        let vowel = chars[start];
        let mut display = String::from(vowel);
        let mut phonetic = self.phonetics.vowel(vowel).to_string();
        let mut next = start + 1;

        if let Some((mark, roman)) = self.mark_at(chars, next) {
            display.push(mark);
            phonetic.push_str(roman);
            next += 1;
        }

        let akshara = Akshara {
            display,
            consonants: Vec::new(),
            matra: None,
            vowel: Some(vowel),
            phonetic,
            kind: AksharaKind::Vowel,
        };
        (akshara, next)
    }

    fn consonant_unit(&self, chars: &[char], start: usize) -> (Akshara, usize) {
        let mut consonants = Vec::new();
        let mut display = String::new();
        let mut halant = false;
        let mut i = start;

        loop {
            let c = chars[i];
            consonants.push(c);
            display.push(c);

            if self.class_at(chars, i + 1) == CharClass::Nukta {
                display.push(chars[i + 1]);
                i += 1;
            }

            if self.class_at(chars, i + 1) != CharClass::Virama {
                i += 1;
                break;
            }
            display.push(chars[i + 1]);
            i += 2;
            if self.class_at(chars, i) != CharClass::Consonant {
                halant = true;
                break;
            }
        }

        let mut matra = None;
        let mut matra_roman = None;
        if self.class_at(chars, i) == CharClass::Matra {
            let m = chars[i];
            matra = Some(m);
            matra_roman = Some(self.matra_roman(m));
            display.push(m);
            i += 1;
        }

        let mark = self.mark_at(chars, i);
        if let Some((c, _)) = mark {
            display.push(c);
            i += 1;
        }

        let romans: Vec<&str> = consonants
            .iter()
            .map(|&c| self.phonetics.consonant(c))
            .collect();

        let mut phonetic = if romans.len() > 1 {
            // The last member carries the inherent vowel unless a sign replaces it.
            let mut p: String = romans.iter().map(|r| strip_inherent(r)).collect();
            p.push_str(matra_roman.unwrap_or(INHERENT_VOWEL));
            p
        } else {
            match matra_roman {
                Some(vowel) if !vowel.is_empty() => format!("{}{vowel}", strip_inherent(romans[0])),
                _ if halant => strip_inherent(romans[0]).to_string(),
                _ => romans[0].to_string(),
            }
        };
        if let Some((_, roman)) = mark {
            phonetic.push_str(roman);
        }

        let kind = if consonants.len() > 1 {
            AksharaKind::Conjunct
        } else {
            AksharaKind::Consonant
        };
        let akshara = Akshara {
            display,
            consonants,
            matra,
            vowel: None,
            phonetic,
            kind,
        };
        (akshara, i)
    }

    /// Romanization of the independent vowel a sign stands for.
    fn matra_roman(&self, matra: char) -> &'a str {
        let phonetics = self.phonetics;
        self.range
            .matra_vowel(matra)
            .map_or("", |v| phonetics.vowel(v))
    }
}

fn strip_inherent(roman: &str) -> &str {
    roman.strip_suffix(INHERENT_VOWEL).unwrap_or(roman)
}

#[cfg(test)]
mod tests;
