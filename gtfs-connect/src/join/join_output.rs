use std::fmt::Display;

/// a data anomaly found while joining. these never abort a join on their own;
/// see [`super::LookupMissPolicy`] for when a miss becomes an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinWarning {
    /// more than one route shares the trip's route_id; the first was used
    DuplicateRoute {
        trip_id: String,
        route_id: String,
        count: usize,
    },
    /// no stop times reference the trip
    MissingStopTimes { trip_id: String },
    /// the trip's route_id matches no route
    MissingRoute { trip_id: String, route_id: String },
    /// a trip's service_id matches no calendar row
    MissingCalendar { service_id: String },
    /// more than one calendar row shares the service_id; the first was used
    DuplicateCalendar { service_id: String, count: usize },
}

impl Display for JoinWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinWarning::DuplicateRoute {
                trip_id,
                route_id,
                count,
            } => write!(
                f,
                "route list for trip '{trip_id}' has {count} routes with route_id '{route_id}', using the first"
            ),
            JoinWarning::MissingStopTimes { trip_id } => {
                write!(f, "trip '{trip_id}' has no stop times")
            }
            JoinWarning::MissingRoute { trip_id, route_id } => {
                write!(f, "trip '{trip_id}' references unknown route_id '{route_id}'")
            }
            JoinWarning::MissingCalendar { service_id } => {
                write!(f, "service_id '{service_id}' has no calendar entry")
            }
            JoinWarning::DuplicateCalendar { service_id, count } => write!(
                f,
                "service_id '{service_id}' has {count} calendar entries, using the first"
            ),
        }
    }
}

/// records produced by a join, along with every anomaly found along the way.
#[derive(Debug, Clone)]
pub struct JoinOutput<T> {
    pub records: Vec<T>,
    pub warnings: Vec<JoinWarning>,
}
