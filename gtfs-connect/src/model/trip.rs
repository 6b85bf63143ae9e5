use serde::{Deserialize, Serialize};

use super::{GroupField, GtfsFile, GtfsRecord};

/// a row of trips.txt, referencing its route and service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub shape_id: String,
    pub trip_headsign: String,
    pub direction_id: String,
}

impl GtfsRecord for Trip {
    const FILE: GtfsFile = GtfsFile::Trips;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::RouteId => Some(&self.route_id),
            GroupField::ServiceId => Some(&self.service_id),
            GroupField::TripId => Some(&self.trip_id),
            GroupField::ShapeId => Some(&self.shape_id),
            GroupField::DirectionId => Some(&self.direction_id),
            _ => None,
        }
    }
}
