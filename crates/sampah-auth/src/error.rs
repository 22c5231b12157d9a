use sampah_client::ClientError;
use sampah_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Validation(other.to_string()),
        }
    }
}
