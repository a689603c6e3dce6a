use crate::scanner::ExtractionMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of a single run, printed in the selected output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub input_path: String,
    pub output_path: String,
    pub mode: ExtractionMode,
    pub identifier_count: usize,
    pub line_count: usize,
    pub bytes_read: u64,
    /// Zero when nothing was written (dry run)
    pub bytes_written: u64,
    pub lossy_input: bool,
    pub dry_run: bool,
    pub duration: Duration,
    pub generated_at: DateTime<Utc>,
}

/// A rendered union that has not been written anywhere.
#[derive(Debug, Clone)]
pub struct Preview {
    pub report: GenerationReport,
    pub rendered: String,
}

pub fn count_lines(rendered: &str) -> usize {
    rendered.lines().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("'a';"), 1);
        assert_eq!(count_lines("'a' | \n'b';"), 2);
        assert_eq!(count_lines("'a' | \n'b';\n"), 2);
    }

    #[test]
    fn test_report_serializes_mode_in_lowercase() {
        let report = GenerationReport {
            input_path: "base.css".to_string(),
            output_path: "output.txt".to_string(),
            mode: ExtractionMode::Stylesheet,
            identifier_count: 2,
            line_count: 1,
            bytes_read: 36,
            bytes_written: 16,
            lossy_input: false,
            dry_run: false,
            duration: Duration::from_millis(3),
            generated_at: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "stylesheet");
        assert_eq!(json["identifier_count"], 2);
    }
}
