use thiserror::Error;

pub type HealthResult<T> = Result<T, HealthError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
