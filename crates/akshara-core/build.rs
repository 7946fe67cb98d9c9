fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/romanization/default_romanization.toml",
        include_str!("src/romanization/default_romanization.toml"),
    );
    validate_toml(
        "src/morphology/default_suffixes.toml",
        include_str!("src/morphology/default_suffixes.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
