use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// GTFS columns that records can be grouped by. each record type
/// exposes some subset of these through [`super::GtfsRecord::field`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    StopId,
    RouteId,
    TripId,
    ServiceId,
    AgencyId,
    ShapeId,
    DirectionId,
}

impl GroupField {
    pub fn column_name(&self) -> &'static str {
        match self {
            GroupField::StopId => "stop_id",
            GroupField::RouteId => "route_id",
            GroupField::TripId => "trip_id",
            GroupField::ServiceId => "service_id",
            GroupField::AgencyId => "agency_id",
            GroupField::ShapeId => "shape_id",
            GroupField::DirectionId => "direction_id",
        }
    }
}

impl Display for GroupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for GroupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stop_id" => Ok(GroupField::StopId),
            "route_id" => Ok(GroupField::RouteId),
            "trip_id" => Ok(GroupField::TripId),
            "service_id" => Ok(GroupField::ServiceId),
            "agency_id" => Ok(GroupField::AgencyId),
            "shape_id" => Ok(GroupField::ShapeId),
            "direction_id" => Ok(GroupField::DirectionId),
            other => Err(format!("unknown group field '{other}'")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GroupField;

    #[test]
    fn test_parse_column_name() {
        let field: GroupField = "service_id".parse().expect("should parse");
        assert_eq!(field, GroupField::ServiceId);
        assert_eq!(field.to_string(), "service_id");
        assert!("invalid".parse::<GroupField>().is_err());
    }
}
