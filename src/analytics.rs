//! Aggregations the admin dashboard charts from a store snapshot. All pure
//! group-counts recomputed on demand.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{IssueCategory, Report, ReportStatus};

/// The three fixed status buckets plus the grand total, as shown on the
/// dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.resolved
    }

    pub fn get(&self, status: ReportStatus) -> usize {
        match status {
            ReportStatus::Pending => self.pending,
            ReportStatus::InProgress => self.in_progress,
            ReportStatus::Resolved => self.resolved,
        }
    }
}

pub fn count_by_status(reports: &[Report]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for report in reports {
        match report.status {
            ReportStatus::Pending => counts.pending += 1,
            ReportStatus::InProgress => counts.in_progress += 1,
            ReportStatus::Resolved => counts.resolved += 1,
        }
    }
    counts
}

/// Group-count keyed by whatever categories are present. Categories with no
/// reports get no bucket.
pub fn count_by_category(reports: &[Report]) -> BTreeMap<IssueCategory, usize> {
    let mut counts = BTreeMap::new();
    for report in reports {
        *counts.entry(report.category).or_insert(0) += 1;
    }
    counts
}

/// Group-count keyed by area: the part of the location before its first
/// comma, or the whole location when there is none.
pub fn count_by_area(reports: &[Report]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for report in reports {
        *counts.entry(area(&report.location).to_string()).or_insert(0) += 1;
    }
    counts
}

fn area(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportDraft, Urgency};
    use crate::store::{seed_reports, ReportsStore};

    #[test]
    fn test_count_by_status_fixed_buckets() {
        let reports = seed_reports();
        let counts = count_by_status(&reports);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.resolved, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_count_by_status_empty_snapshot() {
        let counts = count_by_status(&[]);
        assert_eq!(counts, StatusCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_count_by_category_only_present_buckets() {
        let reports = seed_reports();
        let counts = count_by_category(&reports);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&IssueCategory::Pothole], 1);
        assert_eq!(counts[&IssueCategory::Garbage], 1);
        assert_eq!(counts[&IssueCategory::Streetlight], 1);
        assert!(!counts.contains_key(&IssueCategory::Noise));
    }

    #[test]
    fn test_count_by_area_groups_on_first_comma() {
        let reports = seed_reports();
        let counts = count_by_area(&reports);
        assert_eq!(counts[&"Main Street".to_string()], 1);
        assert_eq!(counts[&"Oak Avenue".to_string()], 1);
        assert_eq!(counts[&"Park Road".to_string()], 1);
    }

    #[test]
    fn test_area_without_comma_uses_whole_location() {
        let mut store = ReportsStore::new();
        store.add_report(ReportDraft {
            citizen_name: "Ada".to_string(),
            category: Some(IssueCategory::Noise),
            description: "Loud construction at night".to_string(),
            location: "Riverside".to_string(),
            urgency: Some(Urgency::Low),
            ..Default::default()
        });
        let counts = count_by_area(store.reports());
        assert_eq!(counts[&"Riverside".to_string()], 1);
    }

    #[test]
    fn test_new_garbage_report_bumps_only_pending() {
        let mut store = ReportsStore::seeded();
        let before = count_by_status(store.reports());
        store.add_report(ReportDraft {
            citizen_name: "Sam Field".to_string(),
            category: Some(IssueCategory::Garbage),
            description: "Overflowing bins".to_string(),
            location: "Oak Avenue, Sector 7".to_string(),
            ..Default::default()
        });
        let after = count_by_status(store.reports());
        assert_eq!(after.pending, before.pending + 1);
        assert_eq!(after.in_progress, before.in_progress);
        assert_eq!(after.resolved, before.resolved);
    }
}
