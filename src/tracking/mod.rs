//! What fim watches.
//!
//! The [`PathList`] file is the single source of truth for tracked paths.
//! Baseline and scan stores are derived from it plus the live filesystem and
//! can always be regenerated.

pub mod list;

pub use list::{AddOutcome, PathList};
