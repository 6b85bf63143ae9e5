use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Serialize;

use super::{AppError, ConnectConfig};
use crate::{
    fetch::{ContentHashCache, DownloadService, HttpContentSource},
    join::{join_routes_stops, join_routes_stops_with_calendar},
    loader::GtfsFeed,
    sink::{JsonLinesSink, RecordSink},
};

/// name of the output file holding the joined trips.
pub const CONNECTED_FILENAME: &str = "connected.json";

/// reads the GTFS files in `input_directory`, writes each recognized table as a JSON
/// array to `output_directory`, then joins trips with their stop times and routes
/// into [`CONNECTED_FILENAME`].
///
/// # Arguments
/// * input_directory - directory of extracted GTFS files
/// * output_directory - destination for JSON outputs, created if missing
/// * config - join, fetch and sink settings
pub fn run_connect(
    input_directory: &str,
    output_directory: &str,
    config: &ConnectConfig,
) -> Result<(), AppError> {
    let input_path = Path::new(input_directory);
    let output_path = Path::new(output_directory);

    if let Some(url) = &config.fetch_url {
        fetch_feed(url, input_path, config)?;
    }

    let feed = GtfsFeed::from_directory(input_path)?;
    std::fs::create_dir_all(output_path).map_err(|e| AppError::WriteError {
        filepath: output_directory.to_string(),
        error: e.to_string(),
    })?;

    for file in feed.files.iter() {
        let table = feed.table_to_json(*file).map_err(|e| AppError::WriteError {
            filepath: file.output_filename(),
            error: e.to_string(),
        })?;
        write_json(&output_path.join(file.output_filename()), &table)?;
    }

    let connected_path = output_path.join(CONNECTED_FILENAME);
    let options = config.join_options();
    let warning_count = if config.with_calendar {
        let output = join_routes_stops_with_calendar(
            &feed.routes,
            &feed.stop_times,
            &feed.trips,
            &feed.calendars,
            &options,
        )?;
        write_json(&connected_path, &output.records)?;
        write_sink(config, &output.records)?;
        output.warnings.len()
    } else {
        let output = join_routes_stops(&feed.routes, &feed.stop_times, &feed.trips, &options)?;
        write_json(&connected_path, &output.records)?;
        write_sink(config, &output.records)?;
        output.warnings.len()
    };

    log::info!(
        "connected {} trips into {} with {warning_count} warnings",
        feed.trips.len(),
        connected_path.display()
    );
    Ok(())
}

fn fetch_feed(url: &str, input_path: &Path, config: &ConnectConfig) -> Result<(), AppError> {
    let cache_path = config.hash_cache_file.as_ref().map(PathBuf::from);
    let mut cache = match &cache_path {
        Some(path) => ContentHashCache::load(path)?,
        None => ContentHashCache::default(),
    };
    let source = HttpContentSource::new(Duration::from_secs(config.fetch_timeout_secs))?;
    let mut service = DownloadService::new(source, &mut cache);
    let extracted = service.extract_if_diff(url, input_path)?;
    log::info!(
        "fetch of {url} {}",
        if extracted {
            "extracted new content"
        } else {
            "found no changes"
        }
    );
    if let Some(path) = &cache_path {
        cache.save(path)?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(filepath: &Path, value: &T) -> Result<(), AppError> {
    let write_error = |e: String| AppError::WriteError {
        filepath: filepath.to_string_lossy().to_string(),
        error: e,
    };
    let file = File::create(filepath).map_err(|e| write_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| write_error(e.to_string()))?;
    writer.flush().map_err(|e| write_error(e.to_string()))?;
    log::debug!("wrote {}", filepath.display());
    Ok(())
}

fn write_sink<T: Serialize>(config: &ConnectConfig, records: &[T]) -> Result<(), AppError> {
    if let Some(sink_file) = &config.sink_file {
        let mut sink = JsonLinesSink::open(Path::new(sink_file), "connected")?;
        sink.insert_many(records)?;
    }
    Ok(())
}
