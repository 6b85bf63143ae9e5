use serde::{Deserialize, Serialize};

use super::{field_codec::numeric, GroupField, GtfsFile, GtfsRecord};

/// a row of stops.txt.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub stop_lat: f64,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub stop_lon: f64,
}

impl GtfsRecord for Stop {
    const FILE: GtfsFile = GtfsFile::Stops;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::StopId => Some(&self.stop_id),
            _ => None,
        }
    }
}
