use crate::session::{FolderAction, FolderOutcome};
use std::io::{self, Write};

/// Print the end-of-session summary.
pub fn display_summary(
    outcomes: &[FolderOutcome],
    dry_run: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    if dry_run {
        writeln!(writer, "          SESSION SUMMARY (DRY RUN)")?;
    } else {
        writeln!(writer, "              SESSION SUMMARY")?;
    }
    writeln!(writer, "========================================")?;
    writeln!(writer)?;

    if outcomes.is_empty() {
        writeln!(writer, "No folders were processed.")?;
        return Ok(());
    }

    let mut renamed = 0;
    let mut skipped = 0;

    for outcome in outcomes {
        match &outcome.action {
            FolderAction::Renamed(new_name) => {
                renamed += 1;
                writeln!(writer, "  {} -> {}", outcome.name, new_name)?;
            }
            FolderAction::Skipped => {
                skipped += 1;
                writeln!(writer, "  {} (skipped)", outcome.name)?;
            }
        }
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    if dry_run {
        writeln!(writer, "{} folders would be renamed, {} skipped.", renamed, skipped)?;
        writeln!(writer, "Nothing was changed. Run without --dry to apply.")?;
    } else {
        writeln!(writer, "{} folders renamed, {} skipped.", renamed, skipped)?;
    }

    Ok(())
}
