use std::{io::Cursor, path::Path};

use zip::ZipArchive;

use super::{ContentHashCache, ContentSource, FetchError};

/// an in-memory GTFS zip archive.
pub type GtfsZip = ZipArchive<Cursor<Vec<u8>>>;

/// downloads GTFS zip archives, optionally only when their content changed since
/// the last download recorded in the borrowed [`ContentHashCache`].
pub struct DownloadService<'a, S: ContentSource> {
    source: S,
    cache: &'a mut ContentHashCache,
}

impl<'a, S: ContentSource> DownloadService<'a, S> {
    pub fn new(source: S, cache: &'a mut ContentHashCache) -> DownloadService<'a, S> {
        DownloadService { source, cache }
    }

    /// downloads the GTFS zip file at `zip_url`.
    pub fn download_gtfs_zip(&self, zip_url: &str) -> Result<GtfsZip, FetchError> {
        let content = self.source.fetch(zip_url)?;
        open_zip(zip_url, content)
    }

    /// downloads and extracts the GTFS zip file at `zip_url` into `directory`,
    /// regardless of whether it changed.
    pub fn get_gtfs_files(&self, zip_url: &str, directory: &Path) -> Result<(), FetchError> {
        let mut archive = self.download_gtfs_zip(zip_url)?;
        extract(zip_url, &mut archive, directory)
    }

    /// downloads the zip file at `zip_url`, returning it only if its content hash
    /// differs from the previous download of the same url.
    ///
    /// # Result
    /// `Some` archive when the content is new, `None` when unchanged, or a
    /// [`FetchError::TransferFailure`] when the server responds with an error status.
    pub fn get_if_diff(&mut self, zip_url: &str) -> Result<Option<GtfsZip>, FetchError> {
        let content = self.source.fetch(zip_url)?;
        if !self.cache.observe(zip_url, &content) {
            log::info!("No changes to content at {zip_url}, not redownloading it");
            return Ok(None);
        }
        open_zip(zip_url, content).map(Some)
    }

    /// extracts the zip file at `zip_url` into `directory` if it differs from
    /// the previous download. returns true if files were extracted.
    pub fn extract_if_diff(&mut self, zip_url: &str, directory: &Path) -> Result<bool, FetchError> {
        match self.get_if_diff(zip_url)? {
            None => {
                log::info!("No difference between zips, not extracting");
                Ok(false)
            }
            Some(mut archive) => {
                extract(zip_url, &mut archive, directory)?;
                Ok(true)
            }
        }
    }

    pub fn cache(&self) -> &ContentHashCache {
        self.cache
    }
}

fn open_zip(zip_url: &str, content: Vec<u8>) -> Result<GtfsZip, FetchError> {
    ZipArchive::new(Cursor::new(content)).map_err(|e| FetchError::ZipError {
        url: zip_url.to_string(),
        source: e,
    })
}

fn extract(zip_url: &str, archive: &mut GtfsZip, directory: &Path) -> Result<(), FetchError> {
    log::debug!("Extracting zip file into {}", directory.display());
    std::fs::create_dir_all(directory)?;
    archive.extract(directory).map_err(|e| FetchError::ZipError {
        url: zip_url.to_string(),
        source: e,
    })?;
    log::debug!("Finished extracting zip file");
    Ok(())
}
