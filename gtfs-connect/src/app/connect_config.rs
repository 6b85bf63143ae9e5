use config::Config;
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::join::{JoinOptions, LookupMissPolicy};

/// prefix of environment variables read into [`ConnectConfig`], for example
/// `GTFS_CONNECT_WITH_CALENDAR=true`.
pub const ENV_PREFIX: &str = "GTFS_CONNECT";

/// settings for a gtfs_connect run. read from an optional TOML file and the
/// environment; command line flags are applied on top by [`super::ConnectApp`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectConfig {
    /// what to do when a trip has no stop times or no route
    pub lookup_miss_policy: LookupMissPolicy,
    /// sort each trip's stops by stop_sequence
    pub order_by_stop_sequence: bool,
    /// overlay each connected trip on its service calendar
    pub with_calendar: bool,
    /// if set, the GTFS zip at this URL is extracted into the input directory first
    pub fetch_url: Option<String>,
    /// file where content hashes of fetched URLs are kept between runs
    pub hash_cache_file: Option<String>,
    /// timeout for fetching, in seconds
    pub fetch_timeout_secs: u64,
    /// if set, connected records are also appended to this JSON-lines file
    pub sink_file: Option<String>,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            lookup_miss_policy: LookupMissPolicy::default(),
            order_by_stop_sequence: false,
            with_calendar: false,
            fetch_url: None,
            hash_cache_file: None,
            fetch_timeout_secs: 60,
            sink_file: None,
        }
    }
}

impl ConnectConfig {
    /// builds the configuration from an optional TOML file, overridden by any
    /// `GTFS_CONNECT_*` environment variables.
    pub fn load(config_filepath: Option<&str>) -> Result<ConnectConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(filepath) = config_filepath {
            builder = builder.add_source(config::File::new(filepath, config::FileFormat::Toml));
        }
        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!(
                    "failed reading configuration '{}'",
                    config_filepath.unwrap_or("<environment>")
                ),
                source: e,
            })?;
        config
            .try_deserialize::<ConnectConfig>()
            .map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed deserializing gtfs_connect configuration"),
                source: e,
            })
    }

    pub fn join_options(&self) -> JoinOptions {
        JoinOptions {
            lookup_miss_policy: self.lookup_miss_policy,
            order_by_stop_sequence: self.order_by_stop_sequence,
        }
    }
}
