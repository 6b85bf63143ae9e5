//! serde helpers for GTFS cells. GTFS leaves optional cells blank, so
//! numeric and date columns accept an empty string as "no value".

pub mod numeric {
    use serde::{de::Error, Deserialize, Deserializer};
    use std::{fmt::Display, str::FromStr};

    /// parses a numeric cell, returning the type's default for a blank cell.
    pub fn deserialize_blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        let value: String = String::deserialize(deserializer)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(T::default());
        }
        trimmed
            .parse::<T>()
            .map_err(|e| D::Error::custom(format!("Invalid numeric value '{value}': {e}")))
    }
}

pub mod gtfs_date {
    //! dates in a GTFS archive use yyyymmdd format.
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

    pub fn deserialize_optional_naive_date<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: String = String::deserialize(deserializer)?;
        if date_str.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(date_str.trim(), GTFS_DATE_FORMAT)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
    }

    /// writes the date back in yyyymmdd form, or an empty string when absent.
    pub fn serialize_optional_naive_date<S>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(GTFS_DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }
}
