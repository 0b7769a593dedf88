use std::path::Path;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::model::{Category, Report, ReportId, Status};
use crate::store::error::StoreError;
use crate::store::{open_store, MemoryStore, ReportStore};

use super::types::*;

// ---------------------------------------------------------------------------
// ReportService
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ReportService {
    store: Arc<MemoryStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ReportService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// Serve the given seed file, or the built-in data.
    pub fn open(data: Option<&Path>) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(open_store(data)?)))
    }

    // -- helpers (not tools) ------------------------------------------------

    fn parse_category(raw: &str) -> Result<Category, String> {
        Category::from_str_loose(raw).ok_or_else(|| {
            format!("Error: unknown category '{raw}' (expected facility, school-life or inquiry)")
        })
    }

    /// `None` means every category.
    fn categories(raw: Option<&str>) -> Result<Vec<Category>, String> {
        match raw {
            None => Ok(Category::ALL.to_vec()),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(Category::ALL.to_vec()),
            Some(raw) => Ok(vec![Self::parse_category(raw)?]),
        }
    }

    fn status_options(category: Category) -> Vec<StatusOptionResponse> {
        category
            .statuses()
            .iter()
            .map(|s| StatusOptionResponse {
                key: s.key().to_string(),
                label: s.label().to_string(),
            })
            .collect()
    }

    fn report_to_summary(report: &Report) -> ReportSummaryResponse {
        ReportSummaryResponse {
            id: report.id.get(),
            category: report.category.key().to_string(),
            title: report.title().to_string(),
            author: report.author.clone(),
            date: report.date_label(),
            status: report.status.key().to_string(),
            status_label: report.status.label().to_string(),
        }
    }

    fn report_to_detail(report: &Report) -> ReportDetailResponse {
        ReportDetailResponse {
            id: report.id.get(),
            category: report.category.key().to_string(),
            category_label: report.category.label().to_string(),
            title: report.title().to_string(),
            body: report.body(),
            author: report.author.clone(),
            date: report.date_label(),
            status: report.status.key().to_string(),
            status_label: report.status.label().to_string(),
            status_options: Self::status_options(report.category),
        }
    }

    // -- tools --------------------------------------------------------------

    #[tool(
        description = "List reports, optionally restricted to one category (facility, school-life, inquiry) and/or one status. Returns id, title, author, date and status for each report."
    )]
    pub fn list_reports(&self, Parameters(params): Parameters<ListReportsParams>) -> String {
        let categories = match Self::categories(params.category.as_deref()) {
            Ok(c) => c,
            Err(e) => return e,
        };
        let status = match params.status.as_deref() {
            None => None,
            Some(raw) => match Status::parse(raw) {
                Some(s) => Some(s),
                None => return format!("Error: unknown status '{raw}'"),
            },
        };

        let summaries: Vec<ReportSummaryResponse> = categories
            .into_iter()
            .flat_map(|c| self.store.list(c))
            .filter(|r| status.map_or(true, |s| r.status == s))
            .map(|r| Self::report_to_summary(&r))
            .collect();

        serde_json::to_string_pretty(&summaries).unwrap_or_else(|e| format!("Error: {e}"))
    }

    #[tool(
        description = "Get one report by category and id, including its full body and the statuses it can be moved to."
    )]
    pub fn get_report(&self, Parameters(params): Parameters<GetReportParams>) -> String {
        let category = match Self::parse_category(&params.category) {
            Ok(c) => c,
            Err(e) => return e,
        };
        match self.store.get(category, ReportId(params.id)) {
            Some(report) => serde_json::to_string_pretty(&Self::report_to_detail(&report))
                .unwrap_or_else(|e| format!("Error: {e}")),
            None => format!(
                "Error: {} #{} not found",
                category.key(),
                params.id
            ),
        }
    }

    #[tool(
        description = "Search reports by case-insensitive substring over content and author. Optionally restrict to one category."
    )]
    pub fn search_reports(&self, Parameters(params): Parameters<SearchReportsParams>) -> String {
        let categories = match Self::categories(params.category.as_deref()) {
            Ok(c) => c,
            Err(e) => return e,
        };
        let needle = params.query.to_lowercase();

        let results: Vec<ReportSummaryResponse> = categories
            .into_iter()
            .flat_map(|c| self.store.list(c))
            .filter(|r| r.matches_lowercase(&needle))
            .map(|r| Self::report_to_summary(&r))
            .collect();

        serde_json::to_string_pretty(&results).unwrap_or_else(|e| format!("Error: {e}"))
    }

    #[tool(description = "Get report counts per category, broken down by status.")]
    pub fn get_summary(&self) -> String {
        let categories: Vec<CategorySummaryResponse> = Category::ALL
            .into_iter()
            .map(|category| CategorySummaryResponse {
                category: category.key().to_string(),
                label: category.label().to_string(),
                total: self.store.count(category),
                by_status: category
                    .statuses()
                    .iter()
                    .map(|s| {
                        (
                            s.key().to_string(),
                            self.store.count_with_status(category, *s),
                        )
                    })
                    .collect(),
            })
            .collect();

        let resp = SummaryResponse {
            total: self.store.len(),
            categories,
        };

        serde_json::to_string_pretty(&resp).unwrap_or_else(|e| format!("Error: {e}"))
    }

    #[tool(description = "List the statuses a report in the given category may take, in display order.")]
    pub fn get_status_options(
        &self,
        Parameters(params): Parameters<GetStatusOptionsParams>,
    ) -> String {
        match Self::parse_category(&params.category) {
            Ok(category) => serde_json::to_string_pretty(&Self::status_options(category))
                .unwrap_or_else(|e| format!("Error: {e}")),
            Err(e) => e,
        }
    }
}

#[tool_handler]
impl ServerHandler for ReportService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "신GO! report server: read-only access to facility reports, school-life \
                 reports and inquiries. Use list_reports or search_reports to find reports, \
                 get_report for the full text, and get_summary for counts by status."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ReportService {
        ReportService::open(None).expect("built-in seed loads")
    }

    #[test]
    fn test_list_reports_by_category() {
        let result = service().list_reports(Parameters(ListReportsParams {
            category: Some("inquiry".into()),
            status: None,
        }));
        let parsed: Vec<ReportSummaryResponse> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.len(), 6);
        assert!(parsed.iter().all(|r| r.category == "inquiry"));
    }

    #[test]
    fn test_list_reports_by_status_label() {
        let result = service().list_reports(Parameters(ListReportsParams {
            category: None,
            status: Some("접수 중".into()),
        }));
        let parsed: Vec<ReportSummaryResponse> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.len(), 4);
        assert!(parsed.iter().all(|r| r.status == "received"));
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let result = service().get_status_options(Parameters(GetStatusOptionsParams {
            category: "cafeteria".into(),
        }));
        assert!(result.starts_with("Error: unknown category"));
    }

    #[test]
    fn test_get_report_missing() {
        let result = service().get_report(Parameters(GetReportParams {
            category: "facility".into(),
            id: 99,
        }));
        assert_eq!(result, "Error: facility #99 not found");
    }
}
