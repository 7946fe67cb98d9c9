use std::fs;

use akshara_core::{morphology, romanization, settings};

/// Install custom tables before any command touches the globals.
pub fn load_custom(
    suffixes_file: Option<&str>,
    romanization_file: Option<&str>,
    settings_file: Option<&str>,
) {
    if let Some(file) = suffixes_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(morphology::init_custom(content), "Error in {file}: {}");
        tracing::debug!(file, "custom suffix tables");
    }
    if let Some(file) = romanization_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(romanization::init_custom(content), "Error in {file}: {}");
        tracing::debug!(file, "custom romanization table");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
        tracing::debug!(file, "custom settings");
    }
}

pub fn suffixes_export() {
    print!("{}", morphology::default_toml());
}

pub fn suffixes_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(morphology::parse_suffix_toml(&content), "Error: {}");
    let mut scripts: Vec<_> = tables.iter().collect();
    scripts.sort_by_key(|(script, _)| **script);
    for (script, table) in scripts {
        println!(
            "OK: [{script}] {} suffixes, {} glides",
            table.entries().len(),
            table.glides().len()
        );
    }
}

pub fn romanization_export() {
    print!("{}", romanization::default_toml());
}

pub fn romanization_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(romanization::parse_romanization_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants",
        table.vowels.len(),
        table.consonants.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("OK: reader.min_prefix_chars={}", s.reader.min_prefix_chars);
}
