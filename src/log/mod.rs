//! Loading of the compute-unit measurement log.

pub mod load;
pub mod record;

pub use load::load_log_file;
pub use record::{Measurement, RunRecord};
