#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("failed writing to '{destination}': {source}")]
    WriteError {
        destination: String,
        source: std::io::Error,
    },
    #[error("failed serializing record for '{destination}': {source}")]
    SerializeError {
        destination: String,
        source: serde_json::Error,
    },
}
