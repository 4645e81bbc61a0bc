//! JSON report output writer.
//!
//! Writes `Report` structs to JSON files with proper formatting.

use crate::aggregator::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = to_report(summary, thresholds, &generated_at);
/// write_report(&report, "report.json")?;
/// ```
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, generated {}",
        report.version, report.generated_at
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{to_report, BowlingFigures, Summary, Thresholds};
    use tempfile::NamedTempFile;

    #[test]
    fn test_undefined_average_survives_as_null() {
        let mut summary = Summary::default();
        summary.bowling_economy.push(BowlingFigures {
            name: "A".to_string(),
            overs: 4,
            runs: 30,
            economy: Some(7.5),
            average: None,
            ..Default::default()
        });
        let report = to_report(summary, Thresholds::default(), "2019-09-01T00:00:00Z");
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.contains("\"average\": null"));

        let loaded = read_report(temp_file.path()).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_report("/nonexistent/report.json"),
            Err(OutputError::WriteFailed(_))
        ));
    }
}
