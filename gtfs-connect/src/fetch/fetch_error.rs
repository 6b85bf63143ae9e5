use zip::result::ZipError;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Got invalid response {status} from url {url}")]
    TransferFailure { url: String, status: u16 },
    #[error("failed requesting '{url}': {source}")]
    HttpError { url: String, source: reqwest::Error },
    #[error("content from '{url}' is not a zip archive: {source}")]
    ZipError { url: String, source: ZipError },
    #[error("failed reading cache file '{filepath}': {error}")]
    CacheFileError { filepath: String, error: String },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
