//! Line format shared by `baseline` and `last_scan`.
//!
//! Each entry is written as `<token>  <path>`, the same layout `sha256sum`
//! produces, so a baseline can be checked with `sha256sum -c` as long as it
//! holds no sentinel lines. `<token>` is a lowercase hex digest, `MISSING` or
//! `ERROR`. Any other token is read back verbatim, never dropped.

use super::{HashStore, Outcome};
use std::collections::BTreeMap;
use tracing::debug;

/// A hash store read back from text.
///
/// `entries` is keyed by path, so iteration is in ascending path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStore {
    pub entries: BTreeMap<String, Outcome>,
    /// Non-blank lines with no whitespace separating a token from a path
    pub malformed_lines: usize,
    /// Entries whose token is neither a digest nor a sentinel
    pub unrecognized_tokens: usize,
    /// Paths that appeared more than once; the last occurrence won
    pub duplicate_paths: Vec<String>,
}

impl ParsedStore {
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Outcome> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a store in scan order. Empty stores render as an empty string.
#[must_use]
pub fn encode(store: &HashStore) -> String {
    let mut out = String::new();
    for (path, outcome) in store.iter() {
        out.push_str(&outcome.to_string());
        out.push_str("  ");
        out.push_str(path);
        out.push('\n');
    }
    out
}

/// Parse store text.
///
/// Lines are folded in file order, so a path that occurs twice keeps the
/// outcome from its last line. Blank lines are skipped silently; a line that
/// does not split into a token and a path is dropped and counted in
/// [`ParsedStore::malformed_lines`]. Every line that does split is kept.
#[must_use]
pub fn decode(text: &str) -> ParsedStore {
    let mut parsed = ParsedStore::default();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let Some((token, path)) = split_line(line) else {
            debug!(line = lineno + 1, "dropping malformed store line");
            parsed.malformed_lines += 1;
            continue;
        };

        let outcome = Outcome::from_token(token);
        if let Outcome::Unrecognized(_) = outcome {
            debug!(line = lineno + 1, token, "keeping store line with unknown token");
            parsed.unrecognized_tokens += 1;
        }

        if parsed.entries.insert(path.to_string(), outcome).is_some()
            && !parsed.duplicate_paths.iter().any(|p| p == path)
        {
            parsed.duplicate_paths.push(path.to_string());
        }
    }

    parsed
}

/// Split at the first whitespace run into `(token, path)`.
///
/// Leading spaces and `*` are stripped from the path; `*` is how binary-mode
/// checksum tools mark their entries.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let (token, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }

    Some((token, rest.trim_start_matches([' ', '*'])))
}
