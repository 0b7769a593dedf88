use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use singo_dashboard::mcp::service::ReportService;
use singo_dashboard::mcp::types::*;
use singo_dashboard::store::{open_store, MemoryStore};

fn service() -> ReportService {
    ReportService::new(Arc::new(
        MemoryStore::seeded().expect("built-in seed loads"),
    ))
}

// ---------------------------------------------------------------------------
// list_reports
// ---------------------------------------------------------------------------

#[test]
fn test_list_all_reports() {
    let result = service().list_reports(Parameters(ListReportsParams {
        category: None,
        status: None,
    }));
    let reports: Vec<ReportSummaryResponse> =
        serde_json::from_str(&result).expect("valid JSON array");
    assert_eq!(reports.len(), 16);
    // Facility first, in seed order
    assert_eq!(reports[0].category, "facility");
    assert_eq!(reports[0].title, "2학년 3반 에어컨이 고장났어요ㅠㅠㅠㅠㅠ");
}

#[test]
fn test_list_filtered_by_category_and_status() {
    let result = service().list_reports(Parameters(ListReportsParams {
        category: Some("school-life".into()),
        status: Some("resolved".into()),
    }));
    let reports: Vec<ReportSummaryResponse> = serde_json::from_str(&result).unwrap();
    let ids: Vec<u32> = reports.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 5]);
    assert!(reports.iter().all(|r| r.status_label == "처리 완료"));
}

#[test]
fn test_list_unknown_status() {
    let result = service().list_reports(Parameters(ListReportsParams {
        category: None,
        status: Some("lost".into()),
    }));
    assert_eq!(result, "Error: unknown status 'lost'");
}

// ---------------------------------------------------------------------------
// get_report
// ---------------------------------------------------------------------------

#[test]
fn test_get_report_detail() {
    let result = service().get_report(Parameters(GetReportParams {
        category: "facility".into(),
        id: 2,
    }));
    let detail: ReportDetailResponse = serde_json::from_str(&result).expect("valid JSON");
    assert_eq!(detail.author, "신민채");
    assert_eq!(detail.status, "scheduled");
    assert_eq!(detail.category_label, "시설 신고");
    assert!(detail.body.starts_with("물에서 비린내가 나고"));
    assert_eq!(detail.status_options.len(), 3);
}

// ---------------------------------------------------------------------------
// search_reports
// ---------------------------------------------------------------------------

#[test]
fn test_search_across_categories() {
    let result = service().search_reports(Parameters(SearchReportsParams {
        query: "급식".into(),
        category: None,
    }));
    let hits: Vec<ReportSummaryResponse> = serde_json::from_str(&result).unwrap();
    let keys: Vec<(String, u32)> = hits.into_iter().map(|r| (r.category, r.id)).collect();
    assert_eq!(
        keys,
        vec![("school-life".to_string(), 1), ("inquiry".to_string(), 1)]
    );
}

#[test]
fn test_search_within_category() {
    let result = service().search_reports(Parameters(SearchReportsParams {
        query: "급식".into(),
        category: Some("inquiry".into()),
    }));
    let hits: Vec<ReportSummaryResponse> = serde_json::from_str(&result).unwrap();
    assert_eq!(hits.len(), 1);
}

// ---------------------------------------------------------------------------
// get_summary / get_status_options
// ---------------------------------------------------------------------------

#[test]
fn test_summary_counts() {
    let summary: SummaryResponse = serde_json::from_str(&service().get_summary()).unwrap();
    assert_eq!(summary.total, 16);
    assert_eq!(summary.categories.len(), 3);

    let inquiry = &summary.categories[2];
    assert_eq!(inquiry.category, "inquiry");
    assert_eq!(inquiry.by_status.get("answered"), Some(&3));
    assert_eq!(inquiry.by_status.get("received"), None);

    let facility = &summary.categories[0];
    assert_eq!(facility.by_status.get("received"), Some(&2));
}

#[test]
fn test_status_options_for_inquiry() {
    let result = service().get_status_options(Parameters(GetStatusOptionsParams {
        category: "inquiry".into(),
    }));
    let options: Vec<StatusOptionResponse> = serde_json::from_str(&result).unwrap();
    assert_eq!(
        options,
        vec![
            StatusOptionResponse {
                key: "answered".into(),
                label: "답변 완료".into(),
            },
            StatusOptionResponse {
                key: "unanswered".into(),
                label: "답변 안함".into(),
            },
        ]
    );
}

#[test]
fn test_service_over_seed_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("reports.yaml");
    let svc = ReportService::new(Arc::new(open_store(Some(&path)).unwrap()));
    let summary: SummaryResponse = serde_json::from_str(&svc.get_summary()).unwrap();
    assert_eq!(summary.total, 2);
}
