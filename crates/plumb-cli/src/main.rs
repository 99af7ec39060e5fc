//! Plumb CLI - Command-line interface for the Plumb design-token linter

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, explain, fix, tokens};

#[derive(Parser)]
#[command(name = "plumb")]
#[command(about = "Lint design nodes against a design-token scale", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a node document and report off-scale properties
    Check {
        /// Path to node document (.json or .toml)
        nodes: String,

        /// Token file to lint against (defaults to the built-in Fluent scale)
        #[arg(long)]
        tokens: Option<String>,

        /// Lint configuration file
        #[arg(long)]
        config: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Explain each violation with the suggested token and documentation
    Explain {
        /// Path to node document (.json or .toml)
        nodes: String,

        /// Token file to lint against
        #[arg(long)]
        tokens: Option<String>,

        /// Lint configuration file
        #[arg(long)]
        config: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Apply suggested tokens to a node document
    Fix {
        /// Path to node document (.json or .toml)
        nodes: String,

        /// Token file to lint against
        #[arg(long)]
        tokens: Option<String>,

        /// Lint configuration file
        #[arg(long)]
        config: Option<String>,

        /// Preview fixes without applying
        #[arg(long)]
        dry_run: bool,

        /// Write the fixed nodes back to the document
        #[arg(long)]
        write: bool,
    },

    /// Show token scales
    Tokens {
        /// Token file to show (defaults to the built-in Fluent scale)
        #[arg(long)]
        tokens: Option<String>,

        /// Only show one category (border_radius, spacing, stroke_width)
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            nodes,
            tokens,
            config,
            format,
        } => check::run(check::CheckArgs {
            nodes,
            tokens,
            config,
            format,
        }),
        Commands::Explain {
            nodes,
            tokens,
            config,
            format,
        } => explain::run(explain::ExplainArgs {
            nodes,
            tokens,
            config,
            format,
        }),
        Commands::Fix {
            nodes,
            tokens,
            config,
            dry_run,
            write,
        } => fix::run(fix::FixArgs {
            nodes,
            tokens,
            config,
            dry_run,
            write,
        }),
        Commands::Tokens { tokens, category } => {
            tokens::run(tokens.as_deref(), category.as_deref())
        }
    }
}
