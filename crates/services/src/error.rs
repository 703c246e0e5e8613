//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::RoundError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SoundPlayer` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SoundError {
    #[error("audio output unavailable: {0}")]
    Output(String),
}

/// Errors emitted by the round driver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoundLoopError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("round driver has stopped")]
    Closed,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
