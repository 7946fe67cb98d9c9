use proptest::prelude::*;

use super::*;
use crate::romanization::{parse_romanization_toml, reference_table};

fn phonetics(word: &str, script: &str) -> Vec<String> {
    decompose_word(word, script)
        .into_iter()
        .map(|a| a.phonetic)
        .collect()
}

// ---------------------------------------------------------------------------
// Single units
// ---------------------------------------------------------------------------

#[test]
fn test_consonant_with_matra() {
    let result = decompose_word("ಕಾ", "kn");
    assert_eq!(result.len(), 1);
    let a = &result[0];
    assert_eq!(a.kind, AksharaKind::Consonant);
    assert_eq!(a.display, "ಕಾ");
    assert_eq!(a.consonants, vec!['ಕ']);
    assert_eq!(a.matra, Some('ಾ'));
    assert_eq!(a.vowel, None);
    assert_eq!(a.phonetic, "kā");
}

#[test]
fn test_bare_consonant_keeps_inherent_vowel() {
    assert_eq!(phonetics("ಕ", "kn"), vec!["ka"]);
}

#[test]
fn test_vowel_with_anusvara() {
    let result = decompose_word("ಅಂ", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].kind, AksharaKind::Vowel);
    assert_eq!(result[0].vowel, Some('ಅ'));
    assert_eq!(result[0].display, "ಅಂ");
    assert_eq!(result[0].phonetic, "aṁ");
}

#[test]
fn test_vowel_with_visarga() {
    let result = decompose_word("ಅಃ", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].phonetic, "aḥ");
}

#[test]
fn test_conjunct_keeps_inherent_vowel_on_last_member() {
    let result = decompose_word("ಕ್ಷ", "kn");
    assert_eq!(result.len(), 1);
    let a = &result[0];
    assert_eq!(a.kind, AksharaKind::Conjunct);
    assert_eq!(a.consonants, vec!['ಕ', 'ಷ']);
    assert_eq!(a.matra, None);
    assert_eq!(a.phonetic, "kṣa");
}

#[test]
fn test_three_member_conjunct_with_matra() {
    let result = decompose_word("ಸ್ತ್ರೀ", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].consonants, vec!['ಸ', 'ತ', 'ರ']);
    assert_eq!(result[0].phonetic, "strī");
}

#[test]
fn test_halant_final_consonant() {
    let result = decompose_word("ನ್", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].kind, AksharaKind::Consonant);
    assert_eq!(result[0].display, "ನ್");
    assert_eq!(result[0].phonetic, "n");
}

#[test]
fn test_conjunct_with_final_virama_appends_inherent_vowel() {
    let result = decompose_word("ಕ್ಷ್", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].display, "ಕ್ಷ್");
    assert_eq!(result[0].phonetic, "kṣa");
}

#[test]
fn test_consonant_with_matra_and_visarga() {
    assert_eq!(phonetics("ದುಃಖ", "kn"), vec!["duḥ", "kha"]);
}

#[test]
fn test_isolated_anusvara() {
    let result = decompose_word("ಂ", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].kind, AksharaKind::Vowel);
    assert_eq!(result[0].vowel, None);
    assert_eq!(result[0].phonetic, "ṁ");
}

#[test]
fn test_isolated_visarga_after_mark() {
    // The first anusvara is absorbed by the vowel; the visarga stands alone.
    assert_eq!(phonetics("ಅಂಃ", "kn"), vec!["aṁ", "ḥ"]);
}

#[test]
fn test_matra_without_known_vowel() {
    // ೄ maps to ಌ, which the reference table does not romanize.
    assert_eq!(phonetics("ಕೄ", "kn"), vec!["ka"]);
    assert_eq!(phonetics("ಕ್ಷೄ", "kn"), vec!["kṣ"]);
}

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

#[test]
fn test_kannada_words() {
    assert_eq!(phonetics("ನಮಸ್ಕಾರ", "kn"), vec!["na", "ma", "skā", "ra"]);
    assert_eq!(phonetics("ಮನೆ", "kn"), vec!["ma", "ne"]);
    assert_eq!(phonetics("ಹೋಗು", "kn"), vec!["hō", "gu"]);
    assert_eq!(phonetics("ಇಲ್ಲ", "kn"), vec!["i", "lla"]);
}

#[test]
fn test_malayalam_word() {
    let result = decompose_word("വീട്", "ml");
    let kinds: Vec<AksharaKind> = result.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AksharaKind::Consonant, AksharaKind::Consonant]);
    assert_eq!(result[0].phonetic, "vī");
    assert_eq!(result[1].phonetic, "ṭ");
}

#[test]
fn test_bangla_word_with_anusvara() {
    assert_eq!(phonetics("বাংলা", "bn"), vec!["vāṁ", "lā"]);
}

#[test]
fn test_bangla_nukta_joins_display_only() {
    let result = decompose_word("ড\u{09BC}ি", "bn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].display, "ড\u{09BC}ি");
    assert_eq!(result[0].consonants, vec!['ড']);
    assert_eq!(result[0].phonetic, "ḍi");
}

#[test]
fn test_separators_are_skipped() {
    assert_eq!(phonetics("ಮನೆ ಗೆ!", "kn"), vec!["ma", "ne", "ge"]);
}

#[test]
fn test_astral_codepoints_are_skipped() {
    assert_eq!(phonetics("😀ಕ😀", "kn"), vec!["ka"]);
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_script_is_empty() {
    assert!(decompose_word("ಮನೆ", "ta").is_empty());
    assert!(decompose_word("ಮನೆ", "").is_empty());
}

#[test]
fn test_ascii_is_empty() {
    for script in Script::ALL {
        assert!(decompose_word("a1 b", script.code()).is_empty());
    }
}

#[test]
fn test_other_script_is_skipped() {
    assert!(decompose_word("ಮನೆ", "ml").is_empty());
}

#[test]
fn test_stray_matra_is_skipped() {
    assert_eq!(phonetics("ಾಕ", "kn"), vec!["ka"]);
    assert_eq!(phonetics("ಅಾ", "kn"), vec!["a"]);
}

#[test]
fn test_double_virama() {
    let result = decompose_word("ಕ್್", "kn");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].display, "ಕ್");
}

#[test]
fn test_empty_word() {
    assert!(decompose_word("", "kn").is_empty());
}

#[test]
fn test_injected_tables() {
    let table = parse_romanization_toml(
        r#"
[[vowels]]
roman = "A"
kn = "ಅ"

[[vowels]]
roman = "AA"
kn = "ಆ"

[[consonants]]
roman = "Ka"
kn = "ಕ"
"#,
    )
    .unwrap();
    let map = PhoneticMap::build(Script::Kannada, &table);
    let decomposer = Decomposer::new(Script::Kannada.range(), &map);
    let result = decomposer.decompose("ಕಾಅ");
    let got: Vec<&str> = result.iter().map(|a| a.phonetic.as_str()).collect();
    assert_eq!(got, vec!["KAA", "A"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn letters(script: Script, vowels: bool) -> Vec<char> {
    let table = reference_table();
    let rows = if vowels {
        &table.vowels
    } else {
        &table.consonants
    };
    rows.iter()
        .filter_map(|e| e.letter(script))
        .filter_map(|l| l.chars().next())
        .collect()
}

/// Well-formed akshara text: vowel + optional mark, or a virama-joined
/// cluster with an optional sign or final virama and an optional mark.
fn arb_akshara(script: Script) -> impl Strategy<Value = String> {
    let range = script.range();
    let marks = vec![range.anusvara, range.visarga];
    let virama = range.virama;
    let nukta = range.nukta;
    let matra = proptest::char::range(*range.matras.start(), *range.matras.end());

    let vowel_unit = (
        prop::sample::select(letters(script, true)),
        prop::option::of(prop::sample::select(marks.clone())),
    )
        .prop_map(|(v, mark)| {
            let mut s = String::from(v);
            s.extend(mark);
            s
        });

    let cluster = (
        prop::collection::vec(
            (prop::sample::select(letters(script, false)), any::<bool>()),
            1..=3,
        ),
        prop_oneof![Just(None), matra.prop_map(Some), Just(Some(virama))],
        prop::option::of(prop::sample::select(marks)),
    )
        .prop_map(move |(members, tail, mark)| {
            let mut s = String::new();
            for (n, (c, with_nukta)) in members.into_iter().enumerate() {
                if n > 0 {
                    s.push(virama);
                }
                s.push(c);
                if with_nukta {
                    s.extend(nukta);
                }
            }
            s.extend(tail);
            s.extend(mark);
            s
        });

    prop_oneof![1 => vowel_unit, 3 => cluster]
}

fn arb_script_word() -> impl Strategy<Value = (Script, String)> {
    prop::sample::select(Script::ALL.to_vec()).prop_flat_map(|script| {
        (
            Just(script),
            prop::collection::vec(arb_akshara(script), 1..6).prop_map(|parts| parts.concat()),
        )
    })
}

proptest! {
    #[test]
    fn prop_display_partitions_word((script, word) in arb_script_word()) {
        let result = decompose_word(&word, script.code());
        let rebuilt: String = result.iter().map(|a| a.display.as_str()).collect();
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn prop_units_are_well_formed((script, word) in arb_script_word()) {
        for a in decompose_word(&word, script.code()) {
            prop_assert!(!a.display.is_empty());
            prop_assert!(!a.phonetic.is_empty());
            match a.kind {
                AksharaKind::Vowel => prop_assert!(a.consonants.is_empty()),
                AksharaKind::Consonant => prop_assert_eq!(a.consonants.len(), 1),
                AksharaKind::Conjunct => prop_assert!(a.consonants.len() > 1),
            }
            prop_assert!(a.vowel.is_none() || a.kind == AksharaKind::Vowel);
        }
    }

    #[test]
    fn prop_idempotent((script, word) in arb_script_word()) {
        prop_assert_eq!(
            decompose_word(&word, script.code()),
            decompose_word(&word, script.code())
        );
    }

    #[test]
    fn prop_ascii_yields_nothing(text in "[ -~]{0,32}", script in prop::sample::select(Script::ALL.to_vec())) {
        prop_assert!(decompose_word(&text, script.code()).is_empty());
    }

    #[test]
    fn prop_never_panics(text in "\\PC{0,24}", script in prop::sample::select(Script::ALL.to_vec())) {
        let _ = decompose_word(&text, script.code());
    }
}
