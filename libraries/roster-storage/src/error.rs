/// Storage-specific errors
use thiserror::Error;

/// Errors raised while opening or migrating the store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        roster_core::RosterError::storage(err.to_string())
    }
}
