use dietplan_catalog::CatalogError;
use thiserror::Error;

use crate::plan::PlanError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Plan error: {0}")]
    PlanError(#[from] PlanError),

    #[error("Invalid profile file {path}: {source}")]
    ProfileError {
        path: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
