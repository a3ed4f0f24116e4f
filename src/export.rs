//! Tabular and JSON export of projection results
//!
//! Exports treat the points as opaque data: values are written exactly as the
//! engine emitted them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::projection::{CalculationInput, ProjectionPoint, ProjectionSummary};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Column order of the CSV export
pub const CSV_HEADER: [&str; 5] = ["month", "year", "principal", "interest", "total"];

/// Write one row per month, header first. An empty projection writes only the header.
pub fn write_csv<W: Write>(writer: W, points: &[ProjectionPoint]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for p in points {
        wtr.write_record([
            p.month.to_string(),
            p.year.to_string(),
            p.principal.to_string(),
            p.interest.to_string(),
            p.total.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the CSV export to a file
pub fn write_csv_file<P: AsRef<Path>>(path: P, points: &[ProjectionPoint]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), points)
}

/// Complete projection with its parameters, as served to API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub generated_at: DateTime<Utc>,
    pub input: CalculationInput,
    pub summary: Option<ProjectionSummary>,
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionReport {
    pub fn new(input: CalculationInput, points: Vec<ProjectionPoint>) -> Self {
        Self::with_timestamp(Utc::now(), input, points)
    }

    pub fn with_timestamp(
        generated_at: DateTime<Utc>,
        input: CalculationInput,
        points: Vec<ProjectionPoint>,
    ) -> Self {
        let summary = ProjectionSummary::from_points(&points);
        Self {
            generated_at,
            input,
            summary,
            points,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, CompoundingFrequency};
    use chrono::TimeZone;

    #[test]
    fn test_csv_rows() {
        let input = CalculationInput::new(1000.0, 10.0, CompoundingFrequency::Annually).with_years(1);
        let points = project(&input);

        let mut buf = Vec::new();
        write_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "month,year,principal,interest,total");
        assert_eq!(lines[1], "1,1,1000,0,1000");
        assert_eq!(lines[12], "12,1,1000,100,1100");
    }

    #[test]
    fn test_csv_empty_projection_writes_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "month,year,principal,interest,total\n");
    }

    #[test]
    fn test_report_json() {
        let input = CalculationInput::calculator_defaults().with_years(1);
        let points = project(&input);
        let stamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let report = ProjectionReport::with_timestamp(stamp, input, points);

        let json: serde_json::Value = serde_json::from_str(&report.to_json_string().unwrap()).unwrap();
        assert_eq!(json["generated_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["input"]["interestRate"], 12.0);
        assert_eq!(json["input"]["recurringFrequency"], "monthly");
        assert_eq!(json["points"].as_array().map(|a| a.len()), Some(12));
        assert_eq!(json["summary"]["months"], 12);
    }

    #[test]
    fn test_report_without_points_has_no_summary() {
        let input = CalculationInput::default();
        let report = ProjectionReport::new(input.clone(), project(&input));

        assert!(report.points.is_empty());
        assert!(report.summary.is_none());
    }
}
