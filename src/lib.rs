//! In-memory state core for CrowdLens, a citizen issue-reporting app.
//!
//! Two independently owned stores hold all state for the lifetime of the
//! process: [`ReportsStore`] owns the report collection, [`SessionStore`]
//! owns the optional logged-in admin. Everything else is derived on demand
//! from read-only snapshots: filtering and pagination in [`query`],
//! chart aggregates in [`analytics`], CSV/JSON downloads in [`export`].
//! [`App`] wires both stores together with the stubbed external services.

pub mod analytics;
pub mod app;
pub mod classify;
pub mod export;
pub mod models;
pub mod query;
pub mod session;
pub mod store;

pub use app::App;
pub use models::{IssueCategory, Report, ReportDraft, ReportStatus, Role, Urgency, User};
pub use query::{ReportBrowser, ReportFilter, DEFAULT_PAGE_SIZE};
pub use session::SessionStore;
pub use store::ReportsStore;
