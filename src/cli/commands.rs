//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page through the lines of a text file
#[derive(Parser, Debug)]
#[command(name = "pagectl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file (`-` for stdin)
    #[arg(short, long, global = true, default_value = "-")]
    pub file: PathBuf,

    /// Settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Lines per page (overrides the settings file)
    #[arg(short = 's', long, global = true)]
    pub page_size: Option<u64>,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (overrides the settings file, `RUST_LOG` still applies)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show page counts and the current position
    Info,

    /// Print a single page
    Show {
        /// 1-based page number (defaults to the configured start page)
        page: Option<u64>,
    },

    /// Print every page in order
    Dump {
        /// Begin at this page instead of the configured start page
        #[arg(long)]
        from: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["pagectl", "show", "3", "--file", "notes.txt", "-s", "20"]);
        assert_eq!(cli.file, PathBuf::from("notes.txt"));
        assert_eq!(cli.page_size, Some(20));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Show { page: Some(3) }));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["pagectl", "info"]);
        assert_eq!(cli.file, PathBuf::from("-"));
        assert!(cli.config.is_none());
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn test_parse_dump_pretty() {
        let cli = Cli::parse_from(["pagectl", "--format", "pretty", "dump", "--from", "2"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Dump { from: Some(2) }));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
