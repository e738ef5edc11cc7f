//! itemscope CLI - validate microdata item scopes against vocabularies.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, resolve, validate, vocabularies};

#[derive(Parser)]
#[command(name = "itemscope")]
#[command(about = "Microdata item validation and normalization CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate item scopes against a vocabulary registry
    Validate {
        /// Input JSON file with one scope or an array of scopes (or stdin if not provided)
        input: Option<String>,
        /// Vocabulary registry JSON file (default: generic vocabulary only)
        #[arg(long)]
        vocabularies: Option<String>,
        /// Maximum item scope nesting depth
        #[arg(long, default_value_t = itemscope_core::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Store datatype values in their canonical form
        #[arg(long)]
        coerce: bool,
        /// Print RFC 8785 canonical JSON instead of the display form
        #[arg(long)]
        canonical: bool,
    },
    /// List vocabularies in a registry
    Vocabularies {
        /// Vocabulary registry JSON file
        registry: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the schema an item type resolves to
    Resolve {
        /// Item type to resolve
        item_type: String,
        /// Vocabulary registry JSON file (default: generic vocabulary only)
        #[arg(long)]
        vocabularies: Option<String>,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate {
            input,
            vocabularies,
            max_depth,
            coerce,
            canonical,
        } => validate::run(input, vocabularies, max_depth, coerce, canonical),
        Commands::Vocabularies { registry, json } => vocabularies::run(registry, json),
        Commands::Resolve {
            item_type,
            vocabularies,
        } => resolve::run(item_type, vocabularies),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
