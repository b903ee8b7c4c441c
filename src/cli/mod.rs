pub mod format;
pub mod state;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Terminal editor for ESLint rule configuration.
#[derive(Parser)]
#[command(name = "ruleboard", version, about)]
pub struct Cli {
    /// Path to the editor state file.
    #[arg(long, global = true, default_value = "ruleboard.toml")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the rule catalog with current on/off state and severity.
    List {
        /// Only show rules whose name or description matches this regex.
        #[arg(long)]
        filter: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Show the detail panel for a rule.
    Show {
        /// Rule name; defaults to the currently selected rule.
        rule: Option<String>,

        /// Step the selection back before showing.
        #[arg(long, conflicts_with = "rule")]
        previous: bool,

        /// Step the selection forward before showing.
        #[arg(long, conflicts_with_all = ["rule", "previous"])]
        next: bool,
    },

    /// Flip a rule's on/off switch.
    Toggle {
        /// Rule name.
        rule: String,
    },

    /// Set what ESLint does when it catches the rule break.
    Set {
        /// Rule name.
        rule: String,

        /// `warn` or `error`.
        severity: String,
    },

    /// Print the generated ESLint configuration.
    Generate {
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Output style for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}
