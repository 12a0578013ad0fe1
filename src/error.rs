use crate::constants::exit_codes;
use crate::pipeline::{writer::WriteFailure, Stage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse source glob. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Invalid pattern. Original error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Failed to render. Original error: {0}")]
    MiniJinjaError(#[from] minijinja::Error),

    #[error("Failed to build worker pool. Original error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON error: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot read template directory '{path}': {reason}.")]
    ReadError { path: String, reason: String },

    #[error("Failed to render '{file}'. Original error: {source}")]
    RenderError { file: String, source: minijinja::Error },

    #[error("Rename of '{file}' produced unsafe path '{rendered}'.")]
    InvalidPathError { file: String, rendered: String },

    /// Some destination writes failed; the files in `written` are on disk.
    #[error("{} of {} file(s) could not be written", failed.len(), written.len() + failed.len())]
    PartialWriteError { written: Vec<PathBuf>, failed: Vec<WriteFailure> },

    #[error("Run cancelled during the {stage} stage.")]
    CancelledError { stage: Stage },

    #[error("Run timed out during the {stage} stage.")]
    TimeoutError { stage: Stage },

    #[error("{stage} stage failed: {source}")]
    StageError { stage: Stage, source: Box<Error> },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Annotates an error with the pipeline stage it surfaced in.
    /// Cancellation, timeout, and already-annotated errors pass through.
    pub(crate) fn with_stage(self, stage: Stage) -> Self {
        match self {
            Error::CancelledError { .. }
            | Error::TimeoutError { .. }
            | Error::StageError { .. } => self,
            other => Error::StageError { stage, source: Box::new(other) },
        }
    }
}

/// Convenience type alias for Results with formwork's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
