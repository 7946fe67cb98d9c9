use unicode_width::UnicodeWidthStr;

use akshara_core::{AksharaKind, Decomposer};

use super::resolve_script;

pub fn decompose_cmd(word: &str, script: Option<&str>, json: bool) {
    let script = resolve_script(script, word);
    let aksharas = Decomposer::global(script).decompose(word);

    if json {
        let out = die!(serde_json::to_string_pretty(&aksharas), "Error: {}");
        println!("{out}");
        return;
    }

    if aksharas.is_empty() {
        println!("(no aksharas)");
        return;
    }

    let width = aksharas
        .iter()
        .map(|a| a.display.width())
        .max()
        .unwrap_or(0);
    for a in &aksharas {
        println!(
            "{}  {:<9}  {}",
            pad(&a.display, width),
            kind_name(a.kind),
            a.phonetic
        );
    }
    let reading: Vec<&str> = aksharas.iter().map(|a| a.phonetic.as_str()).collect();
    println!("[{script}] {} = {}", word, reading.join("-"));
}

fn kind_name(kind: AksharaKind) -> &'static str {
    match kind {
        AksharaKind::Vowel => "vowel",
        AksharaKind::Consonant => "consonant",
        AksharaKind::Conjunct => "conjunct",
    }
}

/// Pad to a display width; combining signs occupy no columns.
fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}
