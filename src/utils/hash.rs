use crate::storage::{Digest, HashStore, Outcome};
use rayon::prelude::*;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Read buffer size used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 1_048_576;

/// SHA-256 of an in-memory buffer.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> Digest {
    Digest::from_bytes(Sha256::digest(data).into())
}

/// Hash a single tracked file.
///
/// Anything that is not a regular file right now is [`Outcome::Missing`]. Once
/// the file is known to exist, I/O failures become [`Outcome::Error`] so one
/// unreadable file never stops the rest of a scan.
#[must_use]
pub fn hash_file(path: &Path, chunk_size: usize) -> Outcome {
    if !path.is_file() {
        debug!(path = %path.display(), "not a regular file");
        return Outcome::Missing;
    }

    match hash_file_streaming(path, chunk_size) {
        Ok(digest) => Outcome::Digest(digest),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not hash file");
            Outcome::Error
        }
    }
}

/// Stream `path` through SHA-256 in `chunk_size` reads.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or read.
pub fn hash_file_streaming(path: &Path, chunk_size: usize) -> std::io::Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Digest::from_bytes(hasher.finalize().into()))
}

/// Hash every tracked path, keeping the input order.
///
/// With `parallel` the files are hashed on the rayon pool; the resulting
/// store is identical either way.
#[must_use]
pub fn hash_paths(paths: &[String], chunk_size: usize, parallel: bool) -> HashStore {
    let hash_one = |tracked: &String| (tracked.clone(), hash_file(Path::new(tracked), chunk_size));

    let entries: Vec<(String, Outcome)> = if parallel {
        paths.par_iter().map(hash_one).collect()
    } else {
        paths.iter().map(hash_one).collect()
    };

    HashStore::from_entries(entries)
}
