//! Running-text analysis: tokenize, find each word's dictionary root, and
//! explain inflected forms.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::lexicon::{Lexicon, WordEntry};
use crate::morphology::{MorphBreakdown, MorphMatcher};
use crate::settings::{settings, ReaderSettings};

/// A run of word characters or a run of separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub value: &'a str,
    pub is_word: bool,
}

/// Split `text` into alternating word and separator runs using the global
/// reader settings. Concatenating the token values reproduces `text`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let reader = &settings().reader;
    tokenize_with(text, |c| reader.is_separator(c))
}

pub fn tokenize_with(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let is_word = !is_separator(c);
        match current {
            Some(prev) if prev != is_word => {
                tokens.push(Token {
                    value: &text[start..i],
                    is_word: prev,
                });
                start = i;
            }
            _ => {}
        }
        current = Some(is_word);
    }
    if let Some(is_word) = current {
        tokens.push(Token {
            value: &text[start..],
            is_word,
        });
    }
    tokens
}

/// Exact dictionary hit, else the longest entry of at least
/// `min_prefix_chars` characters that prefixes `token`.
pub fn find_root<'l, L: Lexicon + ?Sized>(
    lexicon: &'l L,
    token: &str,
    min_prefix_chars: usize,
) -> Option<&'l WordEntry> {
    lexicon.lookup(token).or_else(|| {
        lexicon
            .prefix_candidates(token)
            .into_iter()
            .find(|e| e.target_word.chars().count() >= min_prefix_chars)
    })
}

/// One word token of a text with its root and, when inflected, its breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct TokenAnalysis<'a> {
    pub token: &'a str,
    pub root: Option<&'a WordEntry>,
    /// Set only when the token differs from the root and a suffix explains it.
    pub breakdown: Option<MorphBreakdown<'a, WordEntry>>,
}

impl TokenAnalysis<'_> {
    pub fn is_inflected(&self) -> bool {
        self.root.is_some_and(|r| r.target_word != self.token)
    }
}

/// Text analyzer over a lexicon and one script's suffix table.
pub struct Reader<'a, L: ?Sized> {
    lexicon: &'a L,
    matcher: MorphMatcher<'a>,
    settings: ReaderSettings,
}

impl<'a, L: Lexicon + ?Sized> Reader<'a, L> {
    pub fn new(lexicon: &'a L, matcher: MorphMatcher<'a>) -> Self {
        Self::with_settings(lexicon, matcher, settings().reader.clone())
    }

    pub fn with_settings(lexicon: &'a L, matcher: MorphMatcher<'a>, settings: ReaderSettings) -> Self {
        Self {
            lexicon,
            matcher,
            settings,
        }
    }

    pub fn analyze_token(&self, token: &'a str) -> TokenAnalysis<'a> {
        let root = find_root(self.lexicon, token, self.settings.min_prefix_chars);
        let breakdown = root
            .filter(|r| r.target_word != token)
            .and_then(|r| self.matcher.decompose(token, r));
        TokenAnalysis {
            token,
            root,
            breakdown,
        }
    }

    /// Analyze every word token of `text`, in order.
    pub fn analyze_text(&self, text: &'a str) -> Vec<TokenAnalysis<'a>> {
        let _span = debug_span!("analyze_text").entered();
        let analyses: Vec<TokenAnalysis<'a>> =
            tokenize_with(text, |c| self.settings.is_separator(c))
                .into_iter()
                .filter(|t| t.is_word)
                .map(|t| self.analyze_token(t.value))
                .collect();
        debug!(
            words = analyses.len(),
            known = analyses.iter().filter(|a| a.root.is_some()).count(),
            explained = analyses.iter().filter(|a| a.breakdown.is_some()).count(),
        );
        analyses
    }
}
