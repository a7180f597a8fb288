//! Drift detection between a baseline and a later scan.
//!
//! [`diff`] walks the baseline first and the scan second, each in ascending
//! path order, so the same two stores always produce the same findings in the
//! same order regardless of how the files were scanned. Anomalies on paths the
//! operator already trusted come before paths that are new since `init`.

use crate::storage::Outcome;
use std::collections::BTreeMap;
use std::fmt;

/// One classified anomaly for a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The file was not a regular file at scan time
    Missing(String),
    /// In the baseline but absent from the scan entirely
    MissingNotScanned(String),
    /// The file exists but could not be read
    Error(String),
    /// The content digest differs from the baseline
    Modified(String),
    /// In the scan but not in the baseline
    New(String),
}

impl Finding {
    /// Returns the path the finding is about.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Missing(p)
            | Self::MissingNotScanned(p)
            | Self::Error(p)
            | Self::Modified(p)
            | Self::New(p) => p,
        }
    }

    /// Short label used in the event log.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Missing(_) => "MISSING",
            Self::MissingNotScanned(_) => "MISSING (not scanned)",
            Self::Error(_) => "ERROR (could not hash)",
            Self::Modified(_) => "MODIFIED",
            Self::New(_) => "NEW (in list now, not in baseline)",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.path())
    }
}

/// Overall result of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No findings
    Ok,
    /// At least one finding; carries the count
    Alert(usize),
}

/// Ordered findings of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    pub findings: Vec<Finding>,
}

impl DiffReport {
    /// Number of anomalies.
    #[must_use]
    pub fn count(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self.findings.len() {
            0 => Verdict::Ok,
            n => Verdict::Alert(n),
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Classify every path of `baseline` and `scan`.
///
/// Phase one visits each baseline path in ascending order and reports it as
/// not scanned, missing, unreadable or modified. Phase two reports every scan
/// path the baseline does not know, also in ascending order. Outcomes compare
/// exactly as stored, so a baseline sentinel or an unrecognized token
/// followed by a scanned digest counts as modified.
#[must_use]
pub fn diff(
    baseline: &BTreeMap<String, Outcome>,
    scan: &BTreeMap<String, Outcome>,
) -> DiffReport {
    let mut findings = Vec::new();

    for (path, base) in baseline {
        let finding = match scan.get(path) {
            None => Some(Finding::MissingNotScanned(path.clone())),
            Some(Outcome::Missing) => Some(Finding::Missing(path.clone())),
            Some(Outcome::Error) => Some(Finding::Error(path.clone())),
            Some(current) if current != base => Some(Finding::Modified(path.clone())),
            Some(_) => None,
        };
        findings.extend(finding);
    }

    findings.extend(
        scan.keys()
            .filter(|path| !baseline.contains_key(*path))
            .map(|path| Finding::New(path.clone())),
    );

    DiffReport { findings }
}
