//! Text rendering of run views for standard output.

pub mod table;

pub use table::{Align, render_table};

use crate::model::RunView;

const HEADERS: [&str; 3] = ["Instruction", "Compute Units", "Diff"];
const ALIGNS: [Align; 3] = [Align::Left, Align::Right, Align::Right];

/// Render one run section: a `## Run at <timestamp>` header followed by the
/// instruction table, framed by blank lines.
pub fn render_run(view: &RunView) -> String {
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|r| {
            vec![
                r.instruction.clone(),
                r.compute_units.clone(),
                r.diff.clone(),
            ]
        })
        .collect();

    format!(
        "\n## Run at {}\n\n{}\n",
        view.timestamp,
        render_table(&HEADERS, &ALIGNS, &rows)
    )
}
