//! Utility functions and helpers.
//!
//! - [`atomic`]: all-or-nothing file replacement
//! - [`hash`]: streaming SHA-256 of tracked files
//! - [`paths`]: `~/` expansion and path comparison

/// Atomic file replacement via temporary file and rename
pub mod atomic;
/// SHA-256 hashing of files and buffers
pub mod hash;
/// Path manipulation utilities
pub mod paths;

pub use hash::{hash_bytes, hash_file};
pub use paths::expand_home;
