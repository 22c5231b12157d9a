use sampah_client::ClientError;
use sampah_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioporiError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The same operation is already running.
    #[error("{0} already in progress")]
    Busy(&'static str),
}

impl BioporiError {
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Client(ClientError::Unauthenticated))
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::Validation(_)) | Self::Client(ClientError::Validation(_))
        )
    }
}
