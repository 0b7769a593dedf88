use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tool parameter types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListReportsParams {
    /// Category: "facility", "school-life" or "inquiry". All categories when omitted.
    #[schemars(default)]
    pub category: Option<String>,
    /// Status key (e.g. "received", "answered") or Korean label. All statuses when omitted.
    #[schemars(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetReportParams {
    /// Category: "facility", "school-life" or "inquiry"
    pub category: String,
    /// Report id, unique within its category
    pub id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchReportsParams {
    /// Case-insensitive substring matched against content and author
    pub query: String,
    /// Restrict the search to one category
    #[schemars(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetStatusOptionsParams {
    /// Category: "facility", "school-life" or "inquiry"
    pub category: String,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummaryResponse {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub status: String,
    pub status_label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDetailResponse {
    pub id: u32,
    pub category: String,
    pub category_label: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
    pub status: String,
    pub status_label: String,
    /// Statuses this report may be moved to.
    pub status_options: Vec<StatusOptionResponse>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusOptionResponse {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategorySummaryResponse {
    pub category: String,
    pub label: String,
    pub total: usize,
    /// Count per status key, including zero counts.
    pub by_status: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total: usize,
    pub categories: Vec<CategorySummaryResponse>,
}
