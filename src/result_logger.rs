use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::probe::ProbeOutcome;

/// Appends `outcome` as one JSON line to the sink selected by its
/// classification, creating the file if absent. The handle is opened per
/// append and dropped immediately; nothing is held across ticks.
///
/// Errors are returned, not swallowed: the caller decides whether a missed
/// write may end the process (the polling loop keeps going).
pub fn record(
    outcome: &ProbeOutcome,
    success_file: &Path,
    failure_file: &Path,
) -> io::Result<()> {
    let sink = if outcome.success {
        success_file
    } else {
        failure_file
    };

    let line = serde_json::to_string(outcome)?;
    let mut file = OpenOptions::new().create(true).append(true).open(sink)?;
    writeln!(file, "{line}")?;
    Ok(())
}
