use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a report. Any status may move to any other; there is
/// no enforced state machine beyond the three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReportStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        };
        f.write_str(s)
    }
}

impl FromStr for ReportStatus {
    type Err = Error;

    /// Boundary where user input becomes the domain type. Anything outside
    /// the three known statuses is rejected here, never stored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "in progress" | "in-progress" => Ok(ReportStatus::InProgress),
            "resolved" => Ok(ReportStatus::Resolved),
            other => bail!(
                "Invalid status '{}'. Must be one of: Pending, In Progress, Resolved",
                other
            ),
        }
    }
}

/// Fixed set of issue categories a citizen can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Pothole,
    Garbage,
    Streetlight,
    Water,
    #[serde(rename = "road")]
    RoadDamage,
    #[serde(rename = "traffic")]
    TrafficSignal,
    Noise,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 8] = [
        IssueCategory::Pothole,
        IssueCategory::Garbage,
        IssueCategory::Streetlight,
        IssueCategory::Water,
        IssueCategory::RoadDamage,
        IssueCategory::TrafficSignal,
        IssueCategory::Noise,
        IssueCategory::Other,
    ];

    /// Human-readable label, as shown in the report form.
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Pothole => "Pothole",
            IssueCategory::Garbage => "Garbage Collection",
            IssueCategory::Streetlight => "Street Light",
            IssueCategory::Water => "Water Issue",
            IssueCategory::RoadDamage => "Road Damage",
            IssueCategory::TrafficSignal => "Traffic Signal",
            IssueCategory::Noise => "Noise Complaint",
            IssueCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pothole" => Ok(IssueCategory::Pothole),
            "garbage" => Ok(IssueCategory::Garbage),
            "streetlight" => Ok(IssueCategory::Streetlight),
            "water" => Ok(IssueCategory::Water),
            "road" => Ok(IssueCategory::RoadDamage),
            "traffic" => Ok(IssueCategory::TrafficSignal),
            "noise" => Ok(IssueCategory::Noise),
            "other" => Ok(IssueCategory::Other),
            other => bail!(
                "Invalid category '{}'. Must be one of: pothole, garbage, streetlight, water, road, traffic, noise, other",
                other
            ),
        }
    }
}

/// Urgency assigned at intake. A real deployment would get this from the
/// classifier service; the store defaults it when the draft carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        };
        f.write_str(s)
    }
}

/// One citizen-submitted issue report. Created only through
/// [`ReportsStore::add_report`](crate::store::ReportsStore::add_report),
/// which assigns the id, status, and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub citizen_name: String,
    pub category: IssueCategory,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub status: ReportStatus,
    pub urgency: Urgency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the report form collects before submission. Lacks everything the
/// store assigns: id, status, and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    pub citizen_name: String,
    pub category: Option<IssueCategory>,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub urgency: Option<Urgency>,
}

impl ReportDraft {
    /// Required-field check the form runs before submitting. The store itself
    /// never rejects a draft, so this must happen first.
    pub fn validate(&self) -> Result<()> {
        if self.citizen_name.trim().is_empty() {
            bail!("Name is required");
        }
        if self.category.is_none() {
            bail!("Issue category is required");
        }
        if self.description.trim().is_empty() {
            bail!("Description is required");
        }
        if self.location.trim().is_empty() {
            bail!("Location is required");
        }
        Ok(())
    }
}

/// Role of an authenticated user. Only one role exists in this design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

/// The authenticated administrator. At most one exists per session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
