//! On-demand exports of the current report collection. Nothing here is
//! stored; a consumer renders the snapshot and hands the bytes to the user.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::Report;

/// Column order of the CSV export, fixed by the dashboard's download button.
const CSV_HEADER: &str = "ID,Citizen,Type,Status,Location,Created,Updated";

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportedReport {
    pub id: String,
    pub citizen: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Versioned envelope for the JSON export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportData {
    pub version: i32,
    pub exported_at: String,
    pub reports: Vec<ExportedReport>,
}

fn export_report(report: &Report) -> ExportedReport {
    ExportedReport {
        id: report.id.clone(),
        citizen: report.citizen_name.clone(),
        category: report.category.to_string(),
        status: report.status.to_string(),
        location: report.location.clone(),
        created_at: report.created_at.to_rfc3339(),
        updated_at: report.updated_at.to_rfc3339(),
    }
}

/// Renders the collection as CSV with the fixed column order
/// id, citizen, category, status, location, created, updated.
pub fn csv_string(reports: &[Report]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for report in reports {
        let row = export_report(report);
        let fields = [
            row.id,
            row.citizen,
            row.category,
            row.status,
            row.location,
            row.created_at,
            row.updated_at,
        ];
        let escaped: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

/// Quotes a field when it contains the delimiter, quotes, or newlines.
fn csv_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_csv(reports: &[Report], path: &Path) -> Result<()> {
    fs::write(path, csv_string(reports)).context("Failed to write CSV export")?;
    info!(count = reports.len(), path = %path.display(), "exported reports as CSV");
    Ok(())
}

/// Renders the collection as the versioned JSON envelope.
pub fn json_string(reports: &[Report]) -> Result<String> {
    let data = ExportData {
        version: 1,
        exported_at: chrono::Utc::now().to_rfc3339(),
        reports: reports.iter().map(export_report).collect(),
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

pub fn write_json(reports: &[Report], path: &Path) -> Result<()> {
    fs::write(path, json_string(reports)?).context("Failed to write JSON export")?;
    info!(count = reports.len(), path = %path.display(), "exported reports as JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueCategory, ReportDraft};
    use crate::store::{seed_reports, ReportsStore};
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_csv_header_and_row_count() {
        let reports = seed_reports();
        let csv = csv_string(&reports);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.count(), reports.len());
    }

    #[test]
    fn test_csv_quotes_locations_containing_commas() {
        let reports = seed_reports();
        let csv = csv_string(&reports);
        assert!(csv.contains("\"Main Street, Block 12\""));
        // Every data row still has exactly seven columns once the quoted
        // field is accounted for.
        for line in csv.lines().skip(1) {
            assert_eq!(line.matches(',').count(), 7, "{line}");
        }
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let csv = csv_string(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let mut store = ReportsStore::new();
        store.add_report(ReportDraft {
            citizen_name: "A \"Citizen\"".to_string(),
            category: Some(IssueCategory::Other),
            description: "desc".to_string(),
            location: "Somewhere".to_string(),
            ..Default::default()
        });
        let csv = csv_string(store.reports());
        assert!(csv.contains("\"A \"\"Citizen\"\"\""));
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.csv");
        write_csv(&seed_reports(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(CSV_HEADER));
    }

    #[test]
    fn test_json_export_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");
        write_json(&seed_reports(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.version, 1);
        assert_eq!(data.reports.len(), 3);
        assert_eq!(data.reports[0].status, "In Progress");
    }

    #[test]
    fn test_json_export_empty_collection() {
        let json = json_string(&[]).unwrap();
        let data: ExportData = serde_json::from_str(&json).unwrap();
        assert!(data.reports.is_empty());
    }

    proptest! {
        #[test]
        fn prop_csv_never_panics_and_keeps_row_count(
            name in "[a-zA-Z0-9 ,\"]{0,30}",
            location in "[a-zA-Z0-9 ,]{0,30}",
        ) {
            let mut store = ReportsStore::new();
            store.add_report(ReportDraft {
                citizen_name: name,
                category: Some(IssueCategory::Other),
                description: "desc".to_string(),
                location,
                ..Default::default()
            });
            let csv = csv_string(store.reports());
            prop_assert_eq!(csv.lines().count(), 2);
        }

        #[test]
        fn prop_json_is_valid(name in "[a-zA-Z0-9 ]{1,20}") {
            let mut store = ReportsStore::new();
            store.add_report(ReportDraft {
                citizen_name: name,
                category: Some(IssueCategory::Pothole),
                description: "desc".to_string(),
                location: "loc".to_string(),
                ..Default::default()
            });
            let json = json_string(store.reports()).unwrap();
            let parsed: Result<ExportData, _> = serde_json::from_str(&json);
            prop_assert!(parsed.is_ok());
        }
    }
}
