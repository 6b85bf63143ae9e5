use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a trip whose
/// stop times or route cannot be found
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookupMissPolicy {
    /// abort the join with an error
    Fail,
    /// leave the trip out of the output and record a warning
    #[default]
    SkipTrip,
}
