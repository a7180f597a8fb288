//! Command-line interface definitions for fim.
//!
//! Shared between the binary and xtask (man page generation).

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for fim.
#[derive(Parser)]
#[command(
    name = "fim",
    version = crate::VERSION,
    about = "File integrity monitor for a hand-maintained list of files",
    long_about = "Records SHA-256 digests of the files named in a list file as a baseline, \
                  then rescans on demand and reports every file that went missing, became \
                  unreadable, changed, or was added to the list since the baseline. \
                  State lives in $FIM_HOME (default ~/.fim)."
)]
pub struct Cli {
    /// Subcommand to execute (prints help when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show per-file detail and debug diagnostics
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print findings, verdicts and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Hash every listed file and record the result as the baseline
    Init {
        /// List file to use (defaults to the configured list)
        listfile: Option<PathBuf>,
    },

    /// Rescan the listed files and report drift from the baseline
    Check {
        /// List file to use (defaults to the configured list)
        listfile: Option<PathBuf>,
    },

    /// Add a path to the list
    Add {
        /// Path to watch, stored as written (`~/` is allowed)
        path: String,

        /// List file to use (defaults to the configured list)
        listfile: Option<PathBuf>,
    },

    /// Remove a path from the list
    Remove {
        /// Path exactly as it appears in the list
        path: String,

        /// List file to use (defaults to the configured list)
        listfile: Option<PathBuf>,
    },

    /// Show the paths a scan would hash
    List {
        /// List file to use (defaults to the configured list)
        listfile: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_optional_list() {
        let cli = Cli::parse_from(["fim", "add", "~/.bashrc", "mine.txt"]);
        match cli.command {
            Some(Commands::Add { path, listfile }) => {
                assert_eq!(path, "~/.bashrc");
                assert_eq!(listfile, Some(PathBuf::from("mine.txt")));
            }
            _ => panic!("expected add"),
        }

        let cli = Cli::parse_from(["fim", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check { listfile: None })));
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::parse_from(["fim", "--quiet"]);
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }
}
