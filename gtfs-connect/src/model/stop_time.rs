use serde::{Deserialize, Serialize};

use super::{field_codec::numeric, GroupField, GtfsFile, GtfsRecord};

/// a row of stop_times.txt: one scheduled visit of a trip to a stop.
/// many rows share a trip_id; `stop_sequence` orders them within the trip.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub stop_sequence: u32,
    pub stop_headsign: String,
    pub pickup_type: String,
    pub drop_off_type: String,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub shape_dist_traveled: f64,
}

impl GtfsRecord for StopTime {
    const FILE: GtfsFile = GtfsFile::StopTimes;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::TripId => Some(&self.trip_id),
            GroupField::StopId => Some(&self.stop_id),
            _ => None,
        }
    }
}
