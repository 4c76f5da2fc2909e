use std::time::Duration;

use thiserror::Error;

use crate::types::UserId;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model request failed: {0}")]
    Request(String),
    #[error("Model request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Model returned an empty response")]
    EmptyResponse
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("User [{user_id}] not found")]
    UserNotFound {
        user_id: UserId
    },
    #[error(transparent)]
    Model(#[from] ModelError)
}
