use thiserror::Error;

use crate::db::StoreError;

/// Every failure a core operation can report.
///
/// All variants are recoverable by the user: the caller shows a corrective
/// message and the session state is left as it was before the call.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<serde_json::Error> for AssistantError {
    fn from(e: serde_json::Error) -> Self {
        AssistantError::Storage(StoreError::Json(e))
    }
}

impl AssistantError {
    pub(crate) fn not_found(entity: &str, id: impl ToString) -> Self {
        AssistantError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}
