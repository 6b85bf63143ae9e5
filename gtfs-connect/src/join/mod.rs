mod calendar_enrichment;
mod grouping_index;
mod join_error;
mod join_options;
mod join_output;
mod joined_trip;
mod lookup_miss_policy;
mod route_stop_join;

pub use calendar_enrichment::{enrich_with_calendar, join_routes_stops_with_calendar};
pub use grouping_index::{group_by, GroupingIndex};
pub use join_error::JoinError;
pub use join_options::JoinOptions;
pub use join_output::{JoinOutput, JoinWarning};
pub use joined_trip::{EnrichedTrip, JoinedTrip};
pub use lookup_miss_policy::LookupMissPolicy;
pub use route_stop_join::join_routes_stops;
