//! Reader settings: how running text is split into tokens and how short a
//! dictionary root may be when it only prefixes a token.
//!
//! The defaults live in `default_settings.toml`. A replacement TOML can be
//! installed with `init_custom`, but only until `settings()` is first read.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Install reader settings from `toml_content`.
///
/// Fails with `AlreadyInitialized` once `settings()` has been read or a
/// custom TOML was already installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if SETTINGS.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The process-wide settings, custom if installed in time.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("reader settings already in use")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub reader: ReaderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReaderSettings {
    pub min_prefix_chars: usize,
    pub separators: String,
}

impl ReaderSettings {
    pub fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || self.separators.contains(c)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.reader.min_prefix_chars == 0 {
        return Err(SettingsError::InvalidValue {
            field: "reader.min_prefix_chars".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.reader.separators.chars().any(|c| c.is_alphanumeric()) {
        return Err(SettingsError::InvalidValue {
            field: "reader.separators".to_string(),
            reason: "must not contain letters or digits".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.reader.min_prefix_chars, 2);
        assert!(s.reader.is_separator(' '));
        assert!(s.reader.is_separator('\n'));
        assert!(s.reader.is_separator('।'));
        assert!(s.reader.is_separator('—'));
        assert!(s.reader.is_separator('"'));
        assert!(!s.reader.is_separator('ಕ'));
        assert!(!s.reader.is_separator('1'));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[reader]
min_prefix_chars = 3
separators = ".,"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.reader.min_prefix_chars, 3);
        assert!(!s.reader.is_separator('!'));
    }

    #[test]
    fn error_zero_prefix() {
        let toml = r#"
[reader]
min_prefix_chars = 0
separators = "."
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "reader.min_prefix_chars"));
    }

    #[test]
    fn error_alphanumeric_separator() {
        let toml = r#"
[reader]
min_prefix_chars = 2
separators = ".a"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn default_toml_matches_constant() {
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }
}
