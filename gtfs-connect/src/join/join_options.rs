use serde::{Deserialize, Serialize};

use super::LookupMissPolicy;

/// configures a route-stop join.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct JoinOptions {
    /// what to do when a trip has no stop times or no route
    pub lookup_miss_policy: LookupMissPolicy,
    /// if true, each trip's stops are stably sorted by stop_sequence.
    /// otherwise they keep the order they appear in stop_times.txt.
    pub order_by_stop_sequence: bool,
}
