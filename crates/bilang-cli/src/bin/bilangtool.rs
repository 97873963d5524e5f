use clap::{Parser, Subcommand};

use bilang_cli::commands::{accuracy_ops, config_ops, render_ops, snapshot_ops};

#[derive(Parser)]
#[command(name = "bilangtool", about = "Tagalog number-word diagnostics")]
struct Cli {
    /// Custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSONL debug traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<std::path::PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render values as Tagalog phrases
    Render {
        /// Values to render (integers, or anything else to see the error)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Parse a Tagalog phrase back into a number
    Parse {
        /// Phrase to parse (quote it)
        phrase: String,
    },

    /// Render values and parse them back, reporting mismatches
    Roundtrip {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Render values from a file and record the phrases to JSONL
    Snapshot {
        /// Path to the input file (one value per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the input file (one value per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },

    /// Run rendering accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        bilang_engine::init_tracing(dir);
    }

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Render { values, json } => render_ops::render_cmd(&values, json),
        Command::Parse { phrase } => render_ops::parse_cmd(&phrase),
        Command::Roundtrip { values } => render_ops::roundtrip_cmd(&values),
        Command::Snapshot {
            input_file,
            output_file,
        } => snapshot_ops::snapshot_cmd(&input_file, &output_file),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
        } => snapshot_ops::diff_snapshot_cmd(&input_file, &baseline_file),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(&corpus_file, category.as_deref(), verbose, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
