use thiserror::Error;

use crate::forms::productos::ProductoFormError;
use crate::repository::errors::RepositoryError;

pub mod productos;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to the HTTP layer, one variant per response class.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No row exists for the addressed identifier.
    #[error("Producto con ID {id} no encontrado")]
    NotFound { id: i32 },
    /// A provided value breaks a domain rule, such as a non-positive price.
    #[error("{0}")]
    InvalidValue(String),
    /// The payload failed structural validation.
    #[error("{0}")]
    Form(String),
    /// Storage failure passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<ProductoFormError> for ServiceError {
    fn from(err: ProductoFormError) -> Self {
        match err {
            ProductoFormError::InvalidPrecio { .. } => ServiceError::InvalidValue(err.to_string()),
            other => ServiceError::Form(other.to_string()),
        }
    }
}
