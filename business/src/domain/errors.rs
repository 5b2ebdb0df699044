/// Persistence store errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.serialization")]
    Serialization,
    #[error("storage.backend")]
    Backend,
}
