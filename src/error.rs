/*---------- Imports ----------*/
use crate::store::StoreError;
use thiserror::Error;

/*---------- Enums ----------*/

/// Everything a handler can fail with. Each variant maps to one HTTP status.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CustomerError {
    pub fn status_code(&self) -> u16 {
        match self {
            CustomerError::Validation(_)
            | CustomerError::InvalidBody(_)
            | CustomerError::MissingPathParameter(_) => 400,
            CustomerError::NotFound(_) => 404,
            CustomerError::Store(_) => 500,
        }
    }
}
