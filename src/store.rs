use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::{IssueCategory, Report, ReportDraft, ReportStatus, Urgency};

/// Sole owner of the report collection. Constructed once at process start and
/// passed by reference to every consumer; consumers read snapshots and call
/// the two mutation entry points, nothing else.
#[derive(Debug, Default)]
pub struct ReportsStore {
    reports: Vec<Report>,
    version: u64,
}

impl ReportsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the mock dataset, one report per status.
    pub fn seeded() -> Self {
        ReportsStore {
            reports: seed_reports(),
            version: 0,
        }
    }

    /// Read-only snapshot, newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Bumped on every mutation. Consumers that cache derived views can
    /// compare versions instead of diffing the collection.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Inserts a new report from a validated draft. Assigns a fresh id, sets
    /// status to Pending, stamps both timestamps with one captured "now", and
    /// defaults urgency to Medium when the draft carries none. Prepends so the
    /// collection stays newest-first. Never fails; required-field validation
    /// is the caller's job, done before this point.
    pub fn add_report(&mut self, draft: ReportDraft) -> &Report {
        let now = Utc::now();
        let report = Report {
            id: Uuid::new_v4().to_string(),
            citizen_name: draft.citizen_name,
            category: draft.category.unwrap_or(IssueCategory::Other),
            description: draft.description,
            location: draft.location,
            image_url: draft.image_url,
            status: ReportStatus::Pending,
            urgency: draft.urgency.unwrap_or(Urgency::Medium),
            created_at: now,
            updated_at: now,
        };
        debug!(id = %report.id, category = %report.category, "report added");
        self.reports.insert(0, report);
        self.version += 1;
        &self.reports[0]
    }

    /// Replaces the status of the matching report and advances `updated_at`.
    /// An unknown id is a silent no-op: nothing is mutated and no error is
    /// raised, since the UI only offers updates on reports it already
    /// rendered from this store. Returns whether a report matched.
    pub fn update_status(&mut self, id: &str, status: ReportStatus) -> bool {
        match self.reports.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.status = status;
                report.updated_at = Utc::now();
                self.version += 1;
                debug!(%id, %status, "report status updated");
                true
            }
            None => {
                debug!(%id, "status update for unknown report ignored");
                false
            }
        }
    }
}

/// The three mock reports the app ships with, one per status.
pub fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: "1".to_string(),
            citizen_name: "John Smith".to_string(),
            category: IssueCategory::Pothole,
            description: "Large pothole on Main Street causing vehicle damage".to_string(),
            location: "Main Street, Block 12".to_string(),
            image_url: None,
            status: ReportStatus::InProgress,
            urgency: Urgency::High,
            created_at: seed_date(2024, 1, 15),
            updated_at: seed_date(2024, 1, 16),
        },
        Report {
            id: "2".to_string(),
            citizen_name: "Sarah Johnson".to_string(),
            category: IssueCategory::Garbage,
            description: "Garbage not collected for 3 days in residential area".to_string(),
            location: "Oak Avenue, Sector 7".to_string(),
            image_url: None,
            status: ReportStatus::Pending,
            urgency: Urgency::Medium,
            created_at: seed_date(2024, 1, 16),
            updated_at: seed_date(2024, 1, 16),
        },
        Report {
            id: "3".to_string(),
            citizen_name: "Mike Davis".to_string(),
            category: IssueCategory::Streetlight,
            description: "Street light not working, safety concern at night".to_string(),
            location: "Park Road, Near School".to_string(),
            image_url: None,
            status: ReportStatus::Resolved,
            urgency: Urgency::High,
            created_at: seed_date(2024, 1, 14),
            updated_at: seed_date(2024, 1, 17),
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
