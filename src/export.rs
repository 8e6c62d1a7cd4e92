//! Writers for name tables.
//!
//! Rows come from [`NameFrequencyDictionary::as_table`](crate::NameFrequencyDictionary::as_table)
//! and are written with the columns `name, occ_given, occ_family, soundex, metaphone`.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "csv")] {
//! use pumedoro::{ExportFormat, NameFrequencyDictionary, RawNamePair, SortBy};
//!
//! let mut dictionary = NameFrequencyDictionary::new();
//! dictionary.ingest(&RawNamePair::new("Anna", "Berg"));
//!
//! let mut out = Vec::new();
//! dictionary.serialize(ExportFormat::Csv, SortBy::Name, &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("name,occ_given,occ_family,soundex,metaphone\n"));
//! # }
//! ```

use crate::dictionary::NameRecord;
use crate::error::ExportError;
use std::io::Write;

/// Output formats for a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array of row objects
    Json,
    /// One JSON row object per line
    JsonLines,
}

impl ExportFormat {
    /// Convert the format to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::JsonLines => "JSON lines",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes `rows` in `format` to `writer`.
///
/// # Errors
///
/// Returns [`ExportError`] if a row cannot be serialized, the writer fails,
/// or the format's Cargo feature is disabled.
pub fn write_table<W: Write>(
    rows: &[NameRecord],
    format: ExportFormat,
    writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(rows, writer),
        ExportFormat::Json => write_json(rows, writer),
        ExportFormat::JsonLines => write_json_lines(rows, writer),
    }
}

#[cfg(feature = "csv")]
fn write_csv<W: Write>(rows: &[NameRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(not(feature = "csv"))]
fn write_csv<W: Write>(_rows: &[NameRecord], _writer: W) -> Result<(), ExportError> {
    Err(ExportError::Unsupported(ExportFormat::Csv.as_str()))
}

#[cfg(feature = "json")]
fn write_json<W: Write>(rows: &[NameRecord], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(feature = "json")]
fn write_json_lines<W: Write>(rows: &[NameRecord], mut writer: W) -> Result<(), ExportError> {
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(not(feature = "json"))]
fn write_json<W: Write>(_rows: &[NameRecord], _writer: W) -> Result<(), ExportError> {
    Err(ExportError::Unsupported(ExportFormat::Json.as_str()))
}

#[cfg(not(feature = "json"))]
fn write_json_lines<W: Write>(_rows: &[NameRecord], _writer: W) -> Result<(), ExportError> {
    Err(ExportError::Unsupported(ExportFormat::JsonLines.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<NameRecord> {
        vec![
            NameRecord {
                name: "Anna".to_string(),
                occ_given: 2,
                occ_family: 0,
                soundex: "A500".to_string(),
                metaphone: "AN".to_string(),
            },
            NameRecord {
                name: "O'Brien".to_string(),
                occ_given: 0,
                occ_family: 1,
                soundex: String::new(),
                metaphone: String::new(),
            },
        ]
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_table(&rows(), ExportFormat::Csv, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,occ_given,occ_family,soundex,metaphone\nAnna,2,0,A500,AN\nO'Brien,0,1,,\n"
        );
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_write_csv_empty_table() {
        let mut out = Vec::new();
        write_table(&[], ExportFormat::Csv, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_write_json_lines() {
        let mut out = Vec::new();
        write_table(&rows(), ExportFormat::JsonLines, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"name":"Anna","occ_given":2,"occ_family":0,"soundex":"A500","metaphone":"AN"}"#
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_write_json_round_trips_rows() {
        let mut out = Vec::new();
        write_table(&rows(), ExportFormat::Json, &mut out).unwrap();
        let parsed: Vec<NameRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, rows());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Csv), "CSV");
        assert_eq!(format!("{}", ExportFormat::JsonLines), "JSON lines");
    }
}
