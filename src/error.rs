use crate::domain::batch::BatchError;
use crate::domain::track::TrackListError;
use crate::domain::tts::SynthesisError;
use std::path::PathBuf;

/// Main application error type.
///
/// Every variant is fatal: the top-level driver logs it and turns it into a
/// non-zero exit status. Nothing inside the batch logic terminates the
/// process directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("input file '{}' is not accessible", .0.display())]
    InputFileNotFound(PathBuf),

    #[error("output directory '{}' doesn't exist, please create it first", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TrackList(#[from] TrackListError),

    #[error("failed to set up the synthesis backend: {0}")]
    Backend(#[from] SynthesisError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
