//! Aggregation loop and summary rendering.
//!
//! One linear pass over the report file: every record's counter pairs are
//! folded into [`ReportTotals`], and the totals render as the two summary
//! lines the original tooling printed.

use std::path::Path;

use crate::error::AnalyzerError;

use super::line_parser::parse_record;
use super::log_loader::LogLoader;
use super::types::ReportTotals;

/// What to do when a report line does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop at the first malformed line and report it.
    Halt,
    /// Warn about the malformed line and keep aggregating.
    SkipAndWarn,
}

/// Aggregate all records of a report file into totals.
///
/// # Parameters
///
/// * `path` - Path to the report file
/// * `policy` - Behavior on malformed lines
///
/// # Returns
///
/// `Ok(ReportTotals)` summed over all parsed lines, in file order. Under
/// [`MalformedPolicy::Halt`] the first bad line aborts the pass with
/// `AnalyzerError::MalformedLine`; no partial totals survive.
pub fn aggregate_report(path: &Path, policy: MalformedPolicy) -> Result<ReportTotals, AnalyzerError> {
    let mut loader = LogLoader::open(path)?;
    let mut totals = ReportTotals::new();

    while let Some((line_number, line)) = loader.next_line()? {
        match parse_record(&line) {
            Ok(record) => totals.record(&record),
            Err(source) => match policy {
                MalformedPolicy::Halt => {
                    return Err(AnalyzerError::MalformedLine { line_number, source });
                }
                MalformedPolicy::SkipAndWarn => {
                    log::warn!("Skipping malformed record at line {}: {}", line_number, source);
                }
            },
        }
    }

    log::info!(
        "Aggregated {} records: sent {}, received {}",
        totals.records,
        totals.sends,
        totals.receives
    );

    Ok(totals)
}

/// Render the totals as the two summary lines.
///
/// The wording and spacing are kept byte-for-byte identical to the original
/// report tooling.
pub fn render_summary(totals: &ReportTotals) -> [String; 2] {
    [
        format!("Total de Pacotes Enviados : {}", totals.sends),
        format!("Total de Pacotes Recebidos: {}", totals.receives),
    ]
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use crate::analyzer::types::PacketRatio;

    use super::*;

    fn write_report(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("log.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_single_line_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "a b c d 3/5 e f 2/2\n");

        let totals = aggregate_report(&path, MalformedPolicy::Halt).unwrap();
        let summary = render_summary(&totals);
        assert_eq!(summary[0], "Total de Pacotes Enviados : 3/5");
        assert_eq!(summary[1], "Total de Pacotes Recebidos: 2/2");
    }

    #[test]
    fn test_totals_sum_over_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "a b c d 1/1 e f 4/4\na b c d 2/3 e f 0/1\n");

        let totals = aggregate_report(&path, MalformedPolicy::Halt).unwrap();
        assert_eq!(totals.sends, PacketRatio { observed: 3, expected: 4 });
        assert_eq!(totals.receives, PacketRatio { observed: 4, expected: 5 });
        assert_eq!(totals.records, 2);
    }

    #[test]
    fn test_empty_file_yields_zero_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "");

        let totals = aggregate_report(&path, MalformedPolicy::Halt).unwrap();
        let summary = render_summary(&totals);
        assert_eq!(summary[0], "Total de Pacotes Enviados : 0/0");
        assert_eq!(summary[1], "Total de Pacotes Recebidos: 0/0");
    }

    #[test]
    fn test_halt_on_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "a b c d 1/1 e f 4/4\na b c d 3/5\n");

        let err = aggregate_report(&path, MalformedPolicy::Halt).unwrap_err();
        match err {
            AnalyzerError::MalformedLine { line_number, .. } => assert_eq!(line_number, 2),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_and_warn_keeps_good_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(
            dir.path(),
            "a b c d 1/1 e f 4/4\na b c d x/2 e f 2/2\na b c d 2/3 e f 0/1\n",
        );

        let totals = aggregate_report(&path, MalformedPolicy::SkipAndWarn).unwrap();
        assert_eq!(totals.sends, PacketRatio { observed: 3, expected: 4 });
        assert_eq!(totals.receives, PacketRatio { observed: 4, expected: 5 });
        assert_eq!(totals.records, 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "a b c d 1/1 e f 4/4\na b c d 2/3 e f 0/1\n");

        let first = aggregate_report(&path, MalformedPolicy::Halt).unwrap();
        let second = aggregate_report(&path, MalformedPolicy::Halt).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_log.txt");

        let err = aggregate_report(&path, MalformedPolicy::Halt).unwrap_err();
        assert!(matches!(err, AnalyzerError::FileAccess { .. }));
    }
}
