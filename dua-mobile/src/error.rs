//! Mobile-friendly error types.

use dua_core::{ContentError, StorageError, TasbihError};

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for MobileError {
    fn from(err: StorageError) -> Self {
        MobileError::StorageError(err.to_string())
    }
}

impl From<ContentError> for MobileError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Storage(e) => MobileError::StorageError(e.to_string()),
            ContentError::Io(e) => MobileError::StorageError(e.to_string()),
            ContentError::Fetch(msg) => MobileError::NetworkError(msg),
            ContentError::InvalidPayload(msg) => MobileError::InvalidPayload(msg),
        }
    }
}

impl From<TasbihError> for MobileError {
    fn from(err: TasbihError) -> Self {
        MobileError::InvalidInput(err.to_string())
    }
}
