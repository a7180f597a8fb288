/// Text format of hash store files
pub mod codec;
/// Baseline and last-scan files on disk
pub mod store;

use std::fmt;
use std::str::FromStr;

/// Sentinel token written for a tracked path that was not a regular file.
pub const MISSING_TOKEN: &str = "MISSING";
/// Sentinel token written for a tracked file that could not be read.
pub const ERROR_TOKEN: &str = "ERROR";

/// A SHA-256 content digest.
///
/// Displayed and stored as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

/// Error returned when a token is not a 64-character hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDigest(pub String);

impl fmt::Display for InvalidDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a sha256 hex digest: {:?}", self.0)
    }
}

impl std::error::Error for InvalidDigest {}

impl FromStr for Digest {
    type Err = InvalidDigest;

    /// Parses exactly the form [`Display`](fmt::Display) writes: 64 lowercase
    /// hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(InvalidDigest(s.to_string()));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidDigest(s.to_string()))?;
        Ok(Self(bytes))
    }
}

/// Result of one attempt to hash a tracked path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The file was read and hashed
    Digest(Digest),
    /// The path was not a regular file at scan time
    Missing,
    /// The file existed but reading it failed
    Error,
    /// A stored token that is neither a digest nor a sentinel, kept verbatim
    ///
    /// Only found in store files that were edited or written by another
    /// tool. It compares equal to nothing but the same text, so a damaged
    /// baseline entry surfaces as a modification.
    Unrecognized(String),
}

impl Outcome {
    /// Parse a store token: a digest, one of the sentinel words, or anything
    /// else as [`Outcome::Unrecognized`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            MISSING_TOKEN => Self::Missing,
            ERROR_TOKEN => Self::Error,
            other => other
                .parse::<Digest>()
                .map_or_else(|_| Self::Unrecognized(other.to_string()), Self::Digest),
        }
    }

    #[must_use]
    pub const fn is_digest(&self) -> bool {
        matches!(self, Self::Digest(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digest(d) => fmt::Display::fmt(d, f),
            Self::Missing => f.write_str(MISSING_TOKEN),
            Self::Error => f.write_str(ERROR_TOKEN),
            Self::Unrecognized(token) => f.write_str(token),
        }
    }
}

/// The outcomes of one full pass over the path list, in list order.
///
/// Order matters: it is the order lines are written in, which keeps repeated
/// `init` runs byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashStore {
    entries: Vec<(String, Outcome)>,
}

impl HashStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn from_entries(entries: Vec<(String, Outcome)>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, path: String, outcome: Outcome) {
        self.entries.push((path, outcome));
    }

    /// Outcome of the last entry for `path`, matching how a parsed store resolves duplicates.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, o)| o)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Outcome)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of (digests, missing, errors)
    #[must_use]
    pub fn summary(&self) -> (usize, usize, usize) {
        self.entries
            .iter()
            .fold((0, 0, 0), |(d, m, e), (_, outcome)| match outcome {
                Outcome::Digest(_) => (d + 1, m, e),
                Outcome::Missing => (d, m + 1, e),
                Outcome::Error => (d, m, e + 1),
                // A scan never produces these
                Outcome::Unrecognized(_) => (d, m, e),
            })
    }
}

impl FromIterator<(String, Outcome)> for HashStore {
    fn from_iter<I: IntoIterator<Item = (String, Outcome)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
