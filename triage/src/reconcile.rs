use report::{Outcome, ResultReport};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The report claims a test passed but no such test exists on disk
    /// under any of the three extensions. The corpus and the report were
    /// produced from different trees.
    #[error("Could not find test '{path}'. Maybe update the test corpus?")]
    UnknownPassingTest { path: String },
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// One run's categorized corpus. The four listings are pairwise disjoint;
/// together with the PASS-absorbed files they cover every scanned script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// On disk but never referenced by any report entry: the report
    /// generator's tree is out of sync with the local corpus.
    pub missing_from_report: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub errored: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Map a report entry's log name to the on-disk script it was produced
/// from.
///
/// The report records `<name>.log` uniformly, but the script behind it is
/// authored as `.sh`, `.pl`, or `.xpl`; only one of the three exists. The
/// chain probes in that order and keeps the `.xpl` candidate when nothing
/// exists, so callers can report the unresolved path.
pub fn resolve_entry(base: &Path, suite: &str, entry: &str) -> PathBuf {
    let Some(stem) = entry.strip_suffix(".log") else {
        // Not a log name; nothing to substitute.
        return base.join(suite).join(entry);
    };

    let mut resolved = base.join(suite).join(format!("{stem}.sh"));
    for ext in ["pl", "xpl"] {
        if resolved.exists() {
            break;
        }
        resolved.set_extension(ext);
    }
    resolved
}

/// Partition the corpus against the report.
///
/// The candidate set starts as the whole corpus and shrinks as entries
/// resolve: PASS absorbs, SKIP and ERROR move to their listings, anything
/// unrecognized is inert. Files the report never mentions come out as
/// missing-from-report; what survives every removal is the fail listing.
pub fn reconcile(
    base: &Path,
    corpus: &[PathBuf],
    report: &ResultReport,
) -> ReconcileResult<Reconciliation> {
    let on_disk: BTreeSet<&PathBuf> = corpus.iter().collect();
    let mut candidates: BTreeSet<PathBuf> = corpus.iter().cloned().collect();
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();

    let mut skipped = Vec::new();
    let mut errored = Vec::new();

    for (suite, entries) in report.suites() {
        for (entry, outcome) in entries {
            let path = resolve_entry(base, suite, entry);
            seen.insert(path.clone());

            match outcome {
                Outcome::Pass => {
                    if !candidates.remove(&path) && !on_disk.contains(&path) {
                        return Err(ReconcileError::UnknownPassingTest {
                            path: path.display().to_string(),
                        });
                    }
                }
                Outcome::Skip => {
                    if candidates.remove(&path) {
                        skipped.push(path);
                    }
                }
                Outcome::Error => {
                    if candidates.remove(&path) {
                        errored.push(path);
                    }
                }
                Outcome::Other(value) => {
                    debug!("Ignoring outcome '{}' for {}", value, path.display());
                }
            }
        }
    }

    // Corpus files the report never resolved. Pulled out of the candidate
    // set so they cannot double-count as failures.
    let missing_from_report: Vec<PathBuf> = corpus
        .iter()
        .filter(|path| !seen.contains(*path))
        .cloned()
        .collect();
    for path in &missing_from_report {
        candidates.remove(path);
    }

    let failed: Vec<PathBuf> = candidates.into_iter().collect();

    debug!(
        "Reconciled: {} missing, {} skipped, {} errored, {} failed",
        missing_from_report.len(),
        skipped.len(),
        errored.len(),
        failed.len()
    );

    Ok(Reconciliation {
        missing_from_report,
        skipped,
        errored,
        failed,
    })
}
