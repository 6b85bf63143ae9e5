use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the GTFS tables this crate knows how to load.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GtfsFile {
    Agency,
    Stops,
    Routes,
    Trips,
    StopTimes,
    Calendar,
}

impl GtfsFile {
    /// every recognized file, in the order they are written to the output directory.
    pub const ALL: [GtfsFile; 6] = [
        GtfsFile::Agency,
        GtfsFile::Calendar,
        GtfsFile::Routes,
        GtfsFile::StopTimes,
        GtfsFile::Stops,
        GtfsFile::Trips,
    ];

    /// name of this table within a GTFS archive or directory.
    pub fn filename(&self) -> &'static str {
        match self {
            GtfsFile::Agency => "agency.txt",
            GtfsFile::Stops => "stops.txt",
            GtfsFile::Routes => "routes.txt",
            GtfsFile::Trips => "trips.txt",
            GtfsFile::StopTimes => "stop_times.txt",
            GtfsFile::Calendar => "calendar.txt",
        }
    }

    /// name of the JSON file this table is written to.
    pub fn output_filename(&self) -> String {
        self.filename().replace(".txt", ".json")
    }

    /// the join cannot run without these tables.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            GtfsFile::Routes | GtfsFile::Trips | GtfsFile::StopTimes
        )
    }

    /// matches a path or archive entry name against the recognized files,
    /// ignoring any leading directories.
    pub fn from_entry_name(name: &str) -> Option<GtfsFile> {
        let filename = std::path::Path::new(name).file_name()?.to_str()?;
        GtfsFile::ALL
            .into_iter()
            .find(|file| file.filename() == filename)
    }
}

impl Display for GtfsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}
