use zip::result::ZipError;

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to parse '{source_name}': {source}")]
    ParseError {
        source_name: String,
        source: csv::Error,
    },
    #[error("required GTFS file '{0}' not found")]
    MissingFile(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ZipError(#[from] ZipError),
}
