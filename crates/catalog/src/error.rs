use std::path::PathBuf;

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("Dataset is missing required columns: {}", missing.join(", "))]
    SchemaError { missing: Vec<&'static str> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
