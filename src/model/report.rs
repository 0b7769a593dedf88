use std::fmt;

use chrono::NaiveDate;

use super::enums::{Category, Status};

/// Display format for report dates, e.g. `2025.06.23`.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

// ---------------------------------------------------------------------------
// ReportId
// ---------------------------------------------------------------------------

/// Identifier unique within a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportId(pub u32);

impl ReportId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReportId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Report: a single facility report, school-life report, or inquiry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: ReportId,
    pub category: Category,
    /// First line is the title, the rest is the body.
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub status: Status,
}

impl Report {
    pub fn title(&self) -> &str {
        self.content.lines().next().unwrap_or_default()
    }

    /// Everything after the title line, with the blank separator line(s)
    /// that usually follow the title stripped.
    pub fn body(&self) -> String {
        let mut lines = self.content.lines().skip(1).skip_while(|l| l.trim().is_empty());
        let mut body = String::new();
        if let Some(first) = lines.next() {
            body.push_str(first);
            for line in lines {
                body.push('\n');
                body.push_str(line);
            }
        }
        body.trim_end().to_string()
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn selection(&self) -> NavigationSelection {
        NavigationSelection {
            id: self.id,
            category: self.category,
        }
    }

    /// Case-insensitive substring match against content or author.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.content.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// Keep the reports whose content or author contains `query`
/// (case-insensitive), preserving their original order.
pub fn filter_reports<'a>(reports: &'a [Report], query: &str) -> Vec<&'a Report> {
    let needle = query.to_lowercase();
    reports
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// NavigationSelection: what the detail view should display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationSelection {
    pub id: ReportId,
    pub category: Category,
}

impl NavigationSelection {
    pub fn new(id: impl Into<ReportId>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

impl fmt::Display for NavigationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.category.key(), self.id)
    }
}
