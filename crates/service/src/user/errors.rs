use thiserror::Error;

use models::errors::ModelError;

/// Business errors for user workflows
#[derive(Debug, Error)]
pub enum UserError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl UserError {
    pub fn not_found() -> Self {
        Self::NotFound("user not found".into())
    }

    /// Login failures deliberately do not reveal whether the name exists.
    pub fn bad_login() -> Self {
        Self::NotFound("user not found or incorrect password".into())
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            UserError::Validation(_) => 1001,
            UserError::NotFound(_) => 1002,
            UserError::Unauthorized => 1003,
            UserError::Hash(_) => 1101,
            UserError::Repository(_) => 1200,
        }
    }
}

impl From<ModelError> for UserError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => UserError::Validation(msg),
            ModelError::Db(msg) => UserError::Repository(msg),
        }
    }
}
