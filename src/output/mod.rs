//! Terminal output for the fim CLI.
//!
//! Event log lines are echoed here as they are written. Routine narration is
//! dimmed, findings are yellow, alerts red, and quiet mode hides everything
//! except findings, alerts and errors.

use crate::diff::{Finding, Verdict};
use colored::Colorize;
use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity level for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only findings, verdicts, warnings and errors.
    Quiet = 0,
    /// Default verbosity level, show all standard messages.
    Normal = 1,
    /// Also show per-file detail.
    Verbose = 2,
}

/// Global verbosity setting (default: Normal).
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Sets the global verbosity level for all output functions.
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// Gets the current global verbosity level.
pub fn get_verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Quiet,
        2 => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

/// Echoes a routine event log line (respects quiet mode).
pub fn event(line: &str) {
    if get_verbosity() == Verbosity::Quiet {
        return;
    }
    println!("{}", line.dimmed());
}

/// Echoes the event log line for a finding (always shown).
pub fn finding(line: &str, finding: &Finding) {
    match finding {
        Finding::New(_) => println!("{}", line.cyan()),
        _ => println!("{}", line.yellow()),
    }
}

/// Echoes the event log line carrying the verdict (always shown).
pub fn verdict(line: &str, verdict: Verdict) {
    match verdict {
        Verdict::Ok => println!("{}", line.green()),
        Verdict::Alert(_) => println!("{}", line.red().bold()),
    }
}

/// Prints an error message in bold red (always shown).
pub fn error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Prints a warning message in bold yellow (always shown).
pub fn warning(message: &str) {
    eprintln!("{}", message.yellow().bold());
}

/// Prints a verbose debug message (only in verbose mode).
pub fn verbose(message: &str) {
    if get_verbosity() != Verbosity::Verbose {
        return;
    }
    eprintln!("{}", message.dimmed());
}
