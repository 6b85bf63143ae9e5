use std::time::Duration;

use super::FetchError;

/// something that can return the raw bytes stored at a URL.
pub trait ContentSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// fetches content over HTTP with a blocking client.
pub struct HttpContentSource {
    client: reqwest::blocking::Client,
}

impl HttpContentSource {
    pub fn new(timeout: Duration) -> Result<HttpContentSource, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::HttpError {
                url: String::from("<client>"),
                source: e,
            })?;
        Ok(HttpContentSource { client })
    }
}

impl ContentSource for HttpContentSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_error = |e: reqwest::Error| FetchError::HttpError {
            url: url.to_string(),
            source: e,
        };
        let response = self.client.get(url).send().map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            let err = FetchError::TransferFailure {
                url: url.to_string(),
                status: status.as_u16(),
            };
            log::error!("{err}");
            return Err(err);
        }
        let body = response.bytes().map_err(http_error)?;
        log::debug!("downloaded {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}
