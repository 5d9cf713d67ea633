//! Display model: select the runs to show, sort each run's entries, and
//! format the numbers.

use crate::fmt::{fmt, fmt_diff};
use crate::log::RunRecord;

/// How many runs from the head of the log are rendered.
pub const MAX_RUNS_DISPLAYED: usize = 3;

/// A run ready for rendering: rows sorted by instruction name, numbers
/// already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub timestamp: String,
    pub rows: Vec<RowView>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub instruction: String,
    pub compute_units: String,
    pub diff: String,
}

/// The first [`MAX_RUNS_DISPLAYED`] records in file order; anything past
/// them is silently omitted.
pub fn select_runs(runs: &[RunRecord]) -> &[RunRecord] {
    &runs[..runs.len().min(MAX_RUNS_DISPLAYED)]
}

/// Build the display rows for one run.
///
/// The sort is explicit: display order must not depend on how the underlying
/// map happens to iterate.
pub fn build_run_view(run: &RunRecord) -> RunView {
    let mut pairs: Vec<_> = run.entries.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let rows = pairs
        .into_iter()
        .map(|(name, m)| RowView {
            instruction: name.clone(),
            compute_units: fmt(m.value),
            diff: fmt_diff(m.diff),
        })
        .collect();

    RunView {
        timestamp: run.timestamp.clone(),
        rows,
    }
}
