use akshara_core::lexicon::{PartOfSpeech, WordEntry};
use akshara_core::morphology::MorphMatcher;
use akshara_core::MorphBreakdown;

use super::resolve_script;

pub fn explain_cmd(token: &str, root: &str, verb: bool, script: Option<&str>, json: bool) {
    let script = resolve_script(script, root);
    let pos = if verb {
        PartOfSpeech::Verb
    } else {
        PartOfSpeech::Noun
    };
    let entry = WordEntry::new(root, Some(pos));
    let breakdown = MorphMatcher::global(script).decompose(token, &entry);

    if json {
        let out = die!(serde_json::to_string_pretty(&breakdown), "Error: {}");
        println!("{out}");
        return;
    }

    match breakdown {
        Some(b) => print_breakdown(token, &b),
        None => println!("{token}: no breakdown available"),
    }
}

pub(crate) fn print_breakdown(token: &str, b: &MorphBreakdown<'_, WordEntry>) {
    let mut parts = vec![b.root_part.as_str()];
    parts.extend(b.glide.as_deref());
    parts.push(&b.suffix.suffix);
    println!("{token} = {}", parts.join(" + "));
    println!(
        "  suffix:  {} ({}) [{:?}]",
        b.suffix.roman, b.suffix.label, b.suffix.category
    );
    if let Some(m) = &b.suffix.marathi_equiv {
        println!("  marathi: {m}");
    }
    if let Some(h) = &b.suffix.hindi_equiv {
        println!("  hindi:   {h}");
    }
}
