use crate::log::record::RunRecord;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a compute-unit log file: a JSON array of run records.
///
/// A missing file is not an error: the user is told there is nothing to
/// display and an empty log is returned. Anything else (unreadable file,
/// malformed JSON, records of the wrong shape) propagates.
pub fn load_log_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<RunRecord>> {
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("File not found. No logs to display.");
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read log file {}", path.display()));
        }
    };

    serde_json::from_str(&text).with_context(|| format!("parse log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_log(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn loads_run_records() {
        let file = write_log(
            r#"[{"timestamp": "T1", "entries": {"mine": {"value": 1200, "diff": -5}}}]"#,
        );

        let runs = load_log_file(file.path()).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].timestamp, "T1");
        assert_eq!(runs[0].entries["mine"].value, 1200);
        assert_eq!(runs[0].entries["mine"].diff, -5);
    }

    #[test]
    fn empty_array_is_an_empty_log() {
        let file = write_log("[]");
        assert_eq!(load_log_file(file.path()).unwrap(), vec![]);
    }

    #[test]
    fn missing_file_recovers_with_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let runs = load_log_file(dir.path().join("cu_logs.json")).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn malformed_json_is_fatal() {
        let file = write_log("[{");
        let err = load_log_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse log file"));
    }

    #[test]
    fn missing_fields_are_fatal() {
        // No `entries` on the record.
        let file = write_log(r#"[{"timestamp": "T1"}]"#);
        assert!(load_log_file(file.path()).is_err());

        // Non-integer `value`.
        let file = write_log(
            r#"[{"timestamp": "T1", "entries": {"mine": {"value": "a lot", "diff": 0}}}]"#,
        );
        assert!(load_log_file(file.path()).is_err());
    }
}
