//! Derived views over a store snapshot: filtering, pagination, and the
//! ephemeral browse state the report list keeps. Pure recomputation from an
//! immutable snapshot every time; the data volumes here never justify
//! caching.

use crate::models::{IssueCategory, Report, ReportStatus};

/// Page size of the reference report list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The three filter axes of the report list. `None` on status or category is
/// the "All" sentinel: no constraint on that axis. An empty search term
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub search: String,
    pub status: Option<ReportStatus>,
    pub category: Option<IssueCategory>,
}

impl ReportFilter {
    /// OR across the three text fields, AND across the three axes.
    pub fn matches(&self, report: &Report) -> bool {
        self.matches_search(report)
            && self.status.is_none_or(|s| report.status == s)
            && self.category.is_none_or(|c| report.category == c)
    }

    fn matches_search(&self, report: &Report) -> bool {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return true;
        }
        report.citizen_name.to_lowercase().contains(&term)
            || report.description.to_lowercase().contains(&term)
            || report.location.to_lowercase().contains(&term)
    }
}

/// Subsequence of `reports` passing all three filter axes, in snapshot order.
pub fn filter_reports<'a>(reports: &'a [Report], filter: &ReportFilter) -> Vec<&'a Report> {
    reports.iter().filter(|r| filter.matches(r)).collect()
}

/// Number of pages needed for `len` items at `per_page` each: `ceil(len/P)`.
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page)
}

/// The 1-based page `page` of `items`: the slice `[(page-1)*P, page*P)`,
/// clipped to the collection. Pages past the end are empty.
pub fn page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page);
    &items[start.min(items.len())..end.min(items.len())]
}

/// Ephemeral state of the report list view: selected filters plus the
/// current page. Not shared and not authoritative; it vanishes with the
/// view. Changing any filter axis resets the page to 1.
#[derive(Debug, Clone)]
pub struct ReportBrowser {
    filter: ReportFilter,
    page: usize,
    per_page: usize,
}

impl Default for ReportBrowser {
    fn default() -> Self {
        ReportBrowser {
            filter: ReportFilter::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReportBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(per_page: usize) -> Self {
        ReportBrowser {
            per_page: per_page.max(1),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<ReportStatus>) {
        self.filter.status = status;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<IssueCategory>) {
        self.filter.category = category;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, reports: &[Report]) -> usize {
        page_count(filter_reports(reports, &self.filter).len(), self.per_page)
    }

    /// The slice of the filtered snapshot the view currently shows.
    pub fn visible<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        let filtered = filter_reports(reports, &self.filter);
        page(&filtered, self.page, self.per_page).to_vec()
    }
}
