/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unreachable")]
    Unreachable,
    #[error("repository.unexpected_status")]
    UnexpectedStatus,
    #[error("repository.decode_error")]
    DecodeError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn unreachable() -> Self {
        RepositoryError::Unreachable
    }
    pub fn unexpected_status() -> Self {
        RepositoryError::UnexpectedStatus
    }
    pub fn decode_error() -> Self {
        RepositoryError::DecodeError
    }
}
