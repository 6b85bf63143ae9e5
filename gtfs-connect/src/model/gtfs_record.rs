use serde::{de::DeserializeOwned, Serialize};

use super::{GroupField, GtfsFile};

/// a row type of one GTFS table.
pub trait GtfsRecord: DeserializeOwned + Serialize {
    /// the table this record is read from.
    const FILE: GtfsFile;

    /// value of a groupable column, or `None` when this record type has no such column.
    fn field(&self, field: GroupField) -> Option<&str>;
}
