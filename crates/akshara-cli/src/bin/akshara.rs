use clap::{Parser, Subcommand};

use akshara_cli::commands::{config_ops, decompose_ops, morph_ops, read_ops};
use akshara_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "akshara", about = "Brahmic script and morphology diagnostics")]
struct Cli {
    /// Custom suffix tables TOML (replaces the built-in tables)
    #[arg(long, global = true)]
    suffixes: Option<String>,
    /// Custom romanization reference table TOML
    #[arg(long, global = true)]
    romanization: Option<String>,
    /// Custom reader settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a word into aksharas with phonetic readings
    Decompose {
        /// Word in Kannada, Malayalam or Bangla script
        word: String,
        /// Script code (kn, ml, bn); detected from the word when omitted
        #[arg(long)]
        script: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Explain an inflected token as root + glide + suffix
    Explain {
        /// Inflected surface form
        token: String,
        /// Dictionary root the token is expected to extend
        root: String,
        /// Treat the root as a verb (default: noun)
        #[arg(long)]
        verb: bool,
        /// Script code (kn, ml, bn); detected from the root when omitted
        #[arg(long)]
        script: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Analyze running text against a TOML word list
    Read {
        /// Text to analyze
        text: String,
        /// Word list file ([[words]] entries)
        #[arg(long)]
        dict: String,
        /// Script code (kn, ml, bn); detected from the text when omitted
        #[arg(long)]
        script: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default suffix tables as TOML
    SuffixesExport,
    /// Validate a custom suffix tables TOML file
    SuffixesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default romanization reference table as TOML
    RomanizationExport,
    /// Validate a custom romanization TOML file
    RomanizationValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    config_ops::load_custom(
        cli.suffixes.as_deref(),
        cli.romanization.as_deref(),
        cli.settings.as_deref(),
    );

    match cli.command {
        Command::Decompose { word, script, json } => {
            decompose_ops::decompose_cmd(&word, script.as_deref(), json)
        }
        Command::Explain {
            token,
            root,
            verb,
            script,
            json,
        } => morph_ops::explain_cmd(&token, &root, verb, script.as_deref(), json),
        Command::Read {
            text,
            dict,
            script,
            json,
        } => read_ops::read_cmd(&text, &dict, script.as_deref(), json),
        Command::SuffixesExport => config_ops::suffixes_export(),
        Command::SuffixesValidate { file } => config_ops::suffixes_validate(&file),
        Command::RomanizationExport => config_ops::romanization_export(),
        Command::RomanizationValidate { file } => config_ops::romanization_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
