use crate::{fetch::FetchError, join::JoinError, loader::LoaderError, sink::SinkError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    LoaderError(#[from] LoaderError),
    #[error(transparent)]
    JoinError(#[from] JoinError),
    #[error(transparent)]
    FetchError(#[from] FetchError),
    #[error(transparent)]
    SinkError(#[from] SinkError),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
}
