use serde::{Deserialize, Serialize};

use super::{GroupField, GtfsFile, GtfsRecord};

/// a row of routes.txt. does not carry its stops; those come from joining
/// trips and stop times.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Route {
    pub route_id: String,
    pub agency_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_type: String,
}

impl GtfsRecord for Route {
    const FILE: GtfsFile = GtfsFile::Routes;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::RouteId => Some(&self.route_id),
            GroupField::AgencyId => Some(&self.agency_id),
            _ => None,
        }
    }
}
