//! Script and morphology engine for Brahmic-script vocabulary.
//!
//! `decompose` splits a word into aksharas with a phonetic reading for each;
//! `morphology` explains an inflected token as root + (glide) + suffix.

pub mod decompose;
pub mod lexicon;
pub mod morphology;
pub mod reader;
pub mod romanization;
pub mod settings;
pub mod unicode;

pub use decompose::{decompose_word, Akshara, AksharaKind, Decomposer};
pub use lexicon::{Lexicon, MemoryLexicon, PartOfSpeech, RootWord, WordEntry};
pub use morphology::{MorphBreakdown, MorphMatcher, SuffixCategory, SuffixEntry, SuffixTable};
pub use unicode::{Script, ScriptRange};
