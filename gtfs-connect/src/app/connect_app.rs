use clap::Parser;

use super::{run_connect, AppError, ConnectConfig};
use crate::join::LookupMissPolicy;

/// command line tool that joins the trips of a GTFS feed with their stop times
/// and routes, writing each recognized table and the joined result as JSON.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ConnectApp {
    /// directory containing extracted GTFS .txt files
    pub input_directory: String,
    /// directory where the JSON outputs are written
    pub output_directory: String,
    /// TOML file with gtfs_connect settings
    #[arg(long)]
    pub config: Option<String>,
    /// download the GTFS zip at this URL into the input directory before joining,
    /// skipped when the content has not changed
    #[arg(long)]
    pub fetch_url: Option<String>,
    /// how to handle trips without stop times or without a route
    #[arg(long, value_enum)]
    pub lookup_miss_policy: Option<LookupMissPolicy>,
    /// merge the service calendar of each trip into its connected record
    #[arg(long)]
    pub with_calendar: bool,
    /// sort each trip's stops by stop_sequence instead of file order
    #[arg(long)]
    pub order_by_stop_sequence: bool,
    /// also append connected records to this JSON-lines file
    #[arg(long)]
    pub sink_file: Option<String>,
}

impl ConnectApp {
    pub fn run(&self) -> Result<(), AppError> {
        let config = self.build_config()?;
        log::debug!("running gtfs_connect with configuration {config:?}");
        run_connect(&self.input_directory, &self.output_directory, &config)
    }

    /// reads the file and environment configuration, then applies command line overrides.
    pub fn build_config(&self) -> Result<ConnectConfig, AppError> {
        let mut config = ConnectConfig::load(self.config.as_deref())?;
        if let Some(policy) = self.lookup_miss_policy {
            config.lookup_miss_policy = policy;
        }
        if self.with_calendar {
            config.with_calendar = true;
        }
        if self.order_by_stop_sequence {
            config.order_by_stop_sequence = true;
        }
        if self.fetch_url.is_some() {
            config.fetch_url = self.fetch_url.clone();
        }
        if self.sink_file.is_some() {
            config.sink_file = self.sink_file.clone();
        }
        Ok(config)
    }
}
