use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Geometry whose shape class does not match the declared functional unit
    #[error("Geometry error: {0}")]
    GeometryError(String),

    /// Two materials share a display name but not a catalog identifier
    #[error("Data integrity error: {0}")]
    IntegrityError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported entity: {0}")]
    UnsupportedEntity(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
