use std::fs;

use akshara_core::lexicon::MemoryLexicon;
use akshara_core::morphology::MorphMatcher;
use akshara_core::reader::Reader;

use super::morph_ops::print_breakdown;
use super::resolve_script;

pub fn read_cmd(text: &str, dict_file: &str, script: Option<&str>, json: bool) {
    let script = resolve_script(script, text);
    let content = die!(fs::read_to_string(dict_file), "Error reading {dict_file}: {}");
    let lexicon = die!(MemoryLexicon::from_toml(&content), "Error: {}");
    tracing::debug!(words = lexicon.len(), %script, "lexicon loaded");
    let reader = Reader::new(&lexicon, MorphMatcher::global(script));
    let analyses = reader.analyze_text(text);

    if json {
        let out = die!(serde_json::to_string_pretty(&analyses), "Error: {}");
        println!("{out}");
        return;
    }

    for a in &analyses {
        match (a.root, &a.breakdown) {
            (None, _) => println!("{}: unknown", a.token),
            (Some(root), _) if !a.is_inflected() => {
                println!("{}: {}", a.token, root.english_meaning)
            }
            (Some(_), Some(b)) => print_breakdown(a.token, b),
            (Some(root), None) => println!(
                "{}: inflected form of {} (no breakdown available)",
                a.token, root.target_word
            ),
        }
    }
}
