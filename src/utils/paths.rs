use std::path::{Path, PathBuf};

/// Expands a leading `~/` against `home`.
///
/// Only the `~/` prefix is recognised; `~user/` and a bare `~` are left as
/// written. Nothing else about the path is touched.
#[must_use]
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Whether `a` and `b` name the same file, comparing canonical forms when both exist.
#[must_use]
pub fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
