pub mod error;
pub mod loader;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use crate::model::{Category, Report, ReportId, Status};
use crate::store::error::StoreError;
use crate::store::loader::SeedFormat;

const BUILTIN_SEED: &str = include_str!("seed.yaml");

/// Read access to reports, shared by the list view, the detail view and
/// the MCP server.
pub trait ReportStore: Send + Sync {
    fn get(&self, category: Category, id: ReportId) -> Option<Report>;

    /// Reports of one category in insertion order.
    fn list(&self, category: Category) -> Vec<Report>;
}

/// In-memory store. Every record is guaranteed to carry a status from its
/// category's vocabulary and an id unique within its category.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    reports: BTreeMap<Category, Vec<Report>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store, rejecting out-of-vocabulary statuses and duplicate ids.
    pub fn from_reports(reports: impl IntoIterator<Item = Report>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let mut seen: HashSet<(Category, ReportId)> = HashSet::new();

        for report in reports {
            if !report.category.allows(report.status) {
                return Err(StoreError::StatusNotAllowed {
                    category: report.category,
                    id: report.id,
                    status: report.status,
                });
            }
            if !seen.insert((report.category, report.id)) {
                return Err(StoreError::DuplicateId {
                    category: report.category,
                    id: report.id,
                });
            }
            store.reports.entry(report.category).or_default().push(report);
        }

        Ok(store)
    }

    /// The built-in mock data set.
    pub fn seeded() -> Result<Self, StoreError> {
        let reports = loader::parse_seed(BUILTIN_SEED, SeedFormat::Yaml, "built-in seed")?;
        Self::from_reports(reports)
    }

    /// Load a JSON or YAML seed file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let reports = loader::load_seed_file(path)?;
        Self::from_reports(reports)
    }

    pub fn len(&self) -> usize {
        self.reports.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, category: Category) -> usize {
        self.reports.get(&category).map_or(0, Vec::len)
    }

    pub fn count_with_status(&self, category: Category, status: Status) -> usize {
        self.reports
            .get(&category)
            .map_or(0, |rs| rs.iter().filter(|r| r.status == status).count())
    }
}

impl ReportStore for MemoryStore {
    fn get(&self, category: Category, id: ReportId) -> Option<Report> {
        self.reports
            .get(&category)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    fn list(&self, category: Category) -> Vec<Report> {
        self.reports.get(&category).cloned().unwrap_or_default()
    }
}

/// Open the store the dashboard runs against: the given seed file, or the
/// built-in data when none is given.
pub fn open_store(data: Option<&Path>) -> Result<MemoryStore, StoreError> {
    let store = match data {
        Some(path) => {
            debug!(path = %path.display(), "loading seed file");
            MemoryStore::load(path)?
        }
        None => MemoryStore::seeded()?,
    };

    for category in Category::ALL {
        debug!(category = category.key(), count = store.count(category), "loaded reports");
    }
    info!(total = store.len(), "report store ready");

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_loads() {
        let store = MemoryStore::seeded().expect("built-in seed should be valid");
        assert_eq!(store.count(Category::Facility), 5);
        assert_eq!(store.count(Category::SchoolLife), 5);
        assert_eq!(store.count(Category::Inquiry), 6);
    }

    #[test]
    fn test_builtin_seed_detail_body() {
        let store = MemoryStore::seeded().unwrap();
        let report = store.get(Category::Facility, ReportId(1)).unwrap();
        assert_eq!(report.title(), "2학년 3반 에어컨이 고장났어요ㅠㅠㅠㅠㅠ");
        assert!(report.body().starts_with("급하게 수리가 필요합니다."));
    }

    #[test]
    fn test_ids_are_scoped_per_category() {
        let store = MemoryStore::seeded().unwrap();
        let facility = store.get(Category::Facility, ReportId(2)).unwrap();
        let inquiry = store.get(Category::Inquiry, ReportId(2)).unwrap();
        assert_ne!(facility.content, inquiry.content);
        assert!(store.get(Category::Facility, ReportId(6)).is_none());
        assert!(store.get(Category::Inquiry, ReportId(6)).is_some());
    }
}
