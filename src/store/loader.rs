//! Parse report seed files.
//!
//! Both formats share one schema:
//!   { reports: [ { category, id, content, author, date, status } ] }
//!
//! `author` also accepts the older `reporter` / `inquirer` keys, `status`
//! accepts the machine key or the Korean label, and `date` accepts
//! `2025.06.23` or `2025-06-23`.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Category, Report, ReportId, Status};
use crate::store::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Default)]
struct RawSeed {
    #[serde(default)]
    reports: Vec<RawReport>,
}

#[derive(Deserialize, Debug)]
struct RawReport {
    category: Category,
    id: u32,
    content: String,
    #[serde(alias = "reporter", alias = "inquirer")]
    author: String,
    date: String,
    status: Status,
}

impl RawReport {
    fn into_report(self) -> Result<Report, StoreError> {
        let id = ReportId(self.id);
        let date = parse_date(&self.date).ok_or_else(|| StoreError::InvalidDate {
            category: self.category,
            id,
            value: self.date.clone(),
        })?;
        Ok(Report {
            id,
            category: self.category,
            content: self.content,
            author: self.author,
            date,
            status: self.status,
        })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read and parse a seed file, picking the format from its extension.
pub fn load_seed_file(path: &Path) -> Result<Vec<Report>, StoreError> {
    let format =
        SeedFormat::from_path(path).ok_or_else(|| StoreError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_seed(&content, format, &path.display().to_string())
}

/// Parse seed content. `source_name` only appears in error messages.
pub fn parse_seed(
    content: &str,
    format: SeedFormat,
    source_name: &str,
) -> Result<Vec<Report>, StoreError> {
    let raw: RawSeed = match format {
        SeedFormat::Json => serde_json::from_str(content).map_err(|e| StoreError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?,
        SeedFormat::Yaml => serde_yaml::from_str(content).map_err(|e| StoreError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?,
    };

    raw.reports.into_iter().map(RawReport::into_report).collect()
}

/// Parse a report date. Handles `2025.06.23`, `2025-06-23` and `2025/06/23`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    ["%Y.%m.%d", "%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_json_seed() {
        let json = r#"{
            "reports": [
                {
                    "category": "inquiry",
                    "id": 7,
                    "content": "졸업앨범은 언제 나오나요?",
                    "inquirer": "김하늘",
                    "date": "2025-06-20",
                    "status": "답변 안함"
                }
            ]
        }"#;
        let reports = parse_seed(json, SeedFormat::Json, "test").unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].author, "김하늘");
        assert_eq!(reports[0].status, Status::Unanswered);
        assert_eq!(reports[0].category, Category::Inquiry);
    }

    #[test]
    fn test_parse_yaml_seed() {
        let yaml = r#"
reports:
  - category: school-life
    id: 1
    content: 급식실 새치기
    reporter: 오시온
    date: "2025.06.23"
    status: received
"#;
        let reports = parse_seed(yaml, SeedFormat::Yaml, "test").unwrap();
        assert_eq!(reports[0].category, Category::SchoolLife);
        assert_eq!(reports[0].date.day(), 23);
    }

    #[test]
    fn test_empty_seed() {
        let reports = parse_seed("{}", SeedFormat::Json, "test").unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"{"reports":[{"category":"lunch","id":1,"content":"x","author":"y","date":"2025.06.23","status":"received"}]}"#;
        let err = parse_seed(json, SeedFormat::Json, "test").unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_bad_date() {
        let json = r#"{"reports":[{"category":"facility","id":3,"content":"x","author":"y","date":"June 23rd","status":"received"}]}"#;
        let err = parse_seed(json, SeedFormat::Json, "test").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate { id: ReportId(3), .. }));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025.06.23"), NaiveDate::from_ymd_opt(2025, 6, 23));
        assert_eq!(parse_date(" 2025-06-23 "), NaiveDate::from_ymd_opt(2025, 6, 23));
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SeedFormat::from_path(Path::new("a/reports.JSON")), Some(SeedFormat::Json));
        assert_eq!(SeedFormat::from_path(Path::new("reports.yml")), Some(SeedFormat::Yaml));
        assert_eq!(SeedFormat::from_path(Path::new("reports.toml")), None);
    }
}
