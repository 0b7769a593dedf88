use std::path::PathBuf;

use crate::model::{Category, ReportId, Status};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported seed file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid seed data in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Invalid date '{value}' for {category} #{id}")]
    InvalidDate {
        category: Category,
        id: ReportId,
        value: String,
    },

    #[error("Status '{status}' is not allowed for {category} #{id}")]
    StatusNotAllowed {
        category: Category,
        id: ReportId,
        status: Status,
    },

    #[error("Duplicate id {id} in {category}")]
    DuplicateId { category: Category, id: ReportId },
}
