use crate::reconcile::Reconciliation;
use crate::scanner::{file_size, requires_root};
use std::io::{self, Write};
use std::path::PathBuf;

/// Test family excluded from every printed listing: its sizes are not
/// comparable to the rest of the suite and would skew prioritization.
const EXCLUDED_FAMILY: &str = "factor";

/// Write the four category listings in fixed order.
pub fn render(out: &mut impl Write, reconciliation: &Reconciliation) -> io::Result<()> {
    render_section(
        out,
        "Tests found on disk but missing from the report",
        &reconciliation.missing_from_report,
    )?;
    render_section(out, "SKIP tests", &reconciliation.skipped)?;
    render_section(out, "ERROR tests", &reconciliation.errored)?;
    render_section(out, "FAIL tests", &reconciliation.failed)?;
    Ok(())
}

/// One listing: biggest files first, `require_root` annotated, closed by
/// the post-filter count.
fn render_section(out: &mut impl Write, title: &str, paths: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "===============")?;
    writeln!(out, "{title}:")?;

    let mut visible: Vec<(&PathBuf, u64)> = paths
        .iter()
        .filter(|path| !path.to_string_lossy().contains(EXCLUDED_FAMILY))
        .map(|path| (path, file_size(path)))
        .collect();
    // Stable ascending sort printed in reverse: largest (highest-effort)
    // tests come first, ties keep their relative order.
    visible.sort_by_key(|(_, size)| *size);

    for (path, size) in visible.iter().rev() {
        if requires_root(path) {
            writeln!(out, "{}: {} / require_root", path.display(), size)?;
        } else {
            writeln!(out, "{}: {}", path.display(), size)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} tests remaining", visible.len())?;
    Ok(())
}
