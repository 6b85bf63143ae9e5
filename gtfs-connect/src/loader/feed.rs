use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use zip::ZipArchive;

use super::{load, read_records, LoaderError};
use crate::model::{Agency, Calendar, GtfsFile, Route, Stop, StopTime, Trip};

/// the recognized tables of one GTFS feed, held in memory for a single join.
/// tables whose file was absent are left empty.
#[derive(Debug, Default, Clone)]
pub struct GtfsFeed {
    pub agencies: Vec<Agency>,
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub calendars: Vec<Calendar>,
    /// recognized files that were present in the source, in [`GtfsFile::ALL`] order.
    pub files: Vec<GtfsFile>,
}

impl GtfsFeed {
    /// loads every recognized GTFS file found in a directory of extracted `.txt` files.
    pub fn from_directory(directory: &Path) -> Result<GtfsFeed, LoaderError> {
        if !directory.is_dir() {
            let msg = format!("'{}' is not a directory", directory.display());
            log::error!("{msg}");
            return Err(LoaderError::InvalidArgument(msg));
        }
        let present = GtfsFile::ALL
            .into_iter()
            .map(|file| (file, directory.join(file.filename())))
            .filter(|(_, path)| path.is_file())
            .collect_vec();
        check_required(present.iter().map(|(file, _)| *file), directory)?;

        let mut feed = GtfsFeed::default();
        for (file, path) in present {
            log::info!("loading {}", path.display());
            feed.load_file(file, &path)?;
        }
        Ok(feed)
    }

    /// loads every recognized GTFS file from a zip archive. entries are matched by
    /// file name, so archives that nest their tables in a folder are accepted.
    pub fn from_zip(zip_path: &Path) -> Result<GtfsFeed, LoaderError> {
        let mut archive = File::open(zip_path)
            .map_err(LoaderError::from)
            .and_then(|file| ZipArchive::new(file).map_err(LoaderError::from))
            .map_err(|e| {
                log::error!(
                    "Encountered error when opening zip archive {}: {e}",
                    zip_path.display()
                );
                e
            })?;
        Self::from_archive(&mut archive, zip_path)
    }

    /// loads every recognized GTFS file from an opened zip archive.
    pub fn from_archive<R: Read + std::io::Seek>(
        archive: &mut ZipArchive<R>,
        archive_path: &Path,
    ) -> Result<GtfsFeed, LoaderError> {
        let mut entries: Vec<(GtfsFile, usize)> = vec![];
        for i in 0..archive.len() {
            let entry = archive.by_index(i)?;
            if let Some(gtfs_file) = GtfsFile::from_entry_name(entry.name()) {
                if entries.iter().any(|(f, _)| *f == gtfs_file) {
                    log::warn!(
                        "multiple {gtfs_file} entries found in {}, using the first",
                        archive_path.display()
                    );
                    continue;
                }
                entries.push((gtfs_file, i));
            }
        }
        entries.sort_by_key(|(file, _)| GtfsFile::ALL.iter().position(|f| f == file));
        check_required(entries.iter().map(|(file, _)| *file), archive_path)?;

        let mut feed = GtfsFeed::default();
        for (gtfs_file, index) in entries {
            let entry = archive.by_index(index)?;
            let source_name = PathBuf::from(archive_path).join(entry.name());
            let source_name = source_name.to_string_lossy().to_string();
            log::info!("loading {source_name}");
            feed.read_entry(gtfs_file, entry, &source_name)?;
        }
        Ok(feed)
    }

    fn load_file(&mut self, file: GtfsFile, path: &Path) -> Result<(), LoaderError> {
        match file {
            GtfsFile::Agency => self.agencies = load(path)?,
            GtfsFile::Stops => self.stops = load(path)?,
            GtfsFile::Routes => self.routes = load(path)?,
            GtfsFile::Trips => self.trips = load(path)?,
            GtfsFile::StopTimes => self.stop_times = load(path)?,
            GtfsFile::Calendar => self.calendars = load(path)?,
        }
        self.files.push(file);
        Ok(())
    }

    fn read_entry<R: Read>(
        &mut self,
        file: GtfsFile,
        reader: R,
        source_name: &str,
    ) -> Result<(), LoaderError> {
        match file {
            GtfsFile::Agency => self.agencies = read_records(reader, source_name)?,
            GtfsFile::Stops => self.stops = read_records(reader, source_name)?,
            GtfsFile::Routes => self.routes = read_records(reader, source_name)?,
            GtfsFile::Trips => self.trips = read_records(reader, source_name)?,
            GtfsFile::StopTimes => self.stop_times = read_records(reader, source_name)?,
            GtfsFile::Calendar => self.calendars = read_records(reader, source_name)?,
        }
        self.files.push(file);
        Ok(())
    }

    /// serializes one loaded table as a JSON array value.
    pub fn table_to_json(&self, file: GtfsFile) -> Result<serde_json::Value, serde_json::Error> {
        match file {
            GtfsFile::Agency => serde_json::to_value(&self.agencies),
            GtfsFile::Stops => serde_json::to_value(&self.stops),
            GtfsFile::Routes => serde_json::to_value(&self.routes),
            GtfsFile::Trips => serde_json::to_value(&self.trips),
            GtfsFile::StopTimes => serde_json::to_value(&self.stop_times),
            GtfsFile::Calendar => serde_json::to_value(&self.calendars),
        }
    }
}

fn check_required(
    present: impl Iterator<Item = GtfsFile>,
    location: &Path,
) -> Result<(), LoaderError> {
    let present = present.collect_vec();
    match GtfsFile::ALL
        .into_iter()
        .find(|file| file.is_required() && !present.contains(file))
    {
        Some(missing) => {
            let msg = format!("{missing} in {}", location.display());
            log::error!("required GTFS file not found: {msg}");
            Err(LoaderError::MissingFile(msg))
        }
        None => Ok(()),
    }
}
