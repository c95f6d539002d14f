use thiserror::Error;

/// Failure to open a connection to the reminder store.
///
/// Per-operation failures never surface as this type: they are logged and
/// reported to the caller as an absent result.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}
