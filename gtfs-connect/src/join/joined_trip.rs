use serde::Serialize;

use crate::model::{Calendar, Route, StopTime};

/// one trip's stop times paired with the route it runs on.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JoinedTrip {
    pub stops: Vec<StopTime>,
    pub route: Route,
}

/// a [`JoinedTrip`] overlaid on its service calendar. serializes as a single flat
/// object: calendar columns first, then `stops` and `route`. the joined fields
/// are written last so they take precedence over any calendar key of the same name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnrichedTrip {
    #[serde(flatten)]
    pub calendar: Option<Calendar>,
    #[serde(flatten)]
    pub joined: JoinedTrip,
}
