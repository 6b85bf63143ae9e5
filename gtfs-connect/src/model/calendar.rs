use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    field_codec::{gtfs_date, numeric},
    GroupField, GtfsFile, GtfsRecord,
};

/// a single row from calendar.txt: the weekdays and date range a service runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Calendar {
    /// unique service identifier
    pub service_id: String,

    /// service availability by day (0 or 1)
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub monday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub tuesday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub wednesday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub thursday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub friday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub saturday: u8,
    #[serde(deserialize_with = "numeric::deserialize_blank_as_default")]
    pub sunday: u8,

    /// service start date (YYYYMMDD)
    #[serde(
        deserialize_with = "gtfs_date::deserialize_optional_naive_date",
        serialize_with = "gtfs_date::serialize_optional_naive_date"
    )]
    pub start_date: Option<NaiveDate>,

    /// service end date (YYYYMMDD)
    #[serde(
        deserialize_with = "gtfs_date::deserialize_optional_naive_date",
        serialize_with = "gtfs_date::serialize_optional_naive_date"
    )]
    pub end_date: Option<NaiveDate>,
}

impl GtfsRecord for Calendar {
    const FILE: GtfsFile = GtfsFile::Calendar;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::ServiceId => Some(&self.service_id),
            _ => None,
        }
    }
}
