use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::FetchError;

/// remembers the SHA-256 digest of the most recent content seen at each URL, so
/// that unchanged downloads can be skipped. owned by the caller and lent to a
/// [`super::DownloadService`]; it can be saved between runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContentHashCache {
    url_to_hash: HashMap<String, String>,
}

impl ContentHashCache {
    /// hex-encoded SHA-256 digest of `content`.
    pub fn digest(content: &[u8]) -> String {
        hex::encode(Sha256::digest(content))
    }

    /// records the digest of `content` for `url`. returns true if the content
    /// differs from the last content observed for that url, or if the url is new.
    pub fn observe(&mut self, url: &str, content: &[u8]) -> bool {
        let new_hash = Self::digest(content);
        if self.url_to_hash.get(url) == Some(&new_hash) {
            return false;
        }
        self.url_to_hash.insert(url.to_string(), new_hash);
        true
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.url_to_hash.get(url).map(|h| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.url_to_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.url_to_hash.is_empty()
    }

    pub fn clear(&mut self) {
        self.url_to_hash.clear();
    }

    /// reads a cache saved by [`ContentHashCache::save`]. a missing file yields an empty cache.
    pub fn load(filepath: &Path) -> Result<ContentHashCache, FetchError> {
        if !filepath.exists() {
            return Ok(ContentHashCache::default());
        }
        let file = File::open(filepath)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| FetchError::CacheFileError {
            filepath: filepath.to_string_lossy().to_string(),
            error: e.to_string(),
        })
    }

    pub fn save(&self, filepath: &Path) -> Result<(), FetchError> {
        let file = File::create(filepath)?;
        serde_json::to_writer_pretty(file, self).map_err(|e| FetchError::CacheFileError {
            filepath: filepath.to_string_lossy().to_string(),
            error: e.to_string(),
        })
    }
}
