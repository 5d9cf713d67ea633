use serde::Deserialize;
use std::collections::HashMap;

/// One logged measurement session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunRecord {
    pub timestamp: String,

    /// Instruction name -> measurement. Names are unique within a run;
    /// iteration order carries no meaning.
    pub entries: HashMap<String, Measurement>,
}

/// Compute-unit measurement for a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Measurement {
    /// Cumulative compute-unit count.
    pub value: i64,

    /// Signed change against the previous baseline, computed by the
    /// producer of the log.
    pub diff: i64,
}
