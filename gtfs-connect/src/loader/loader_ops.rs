use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use csv::ReaderBuilder;

use super::LoaderError;
use crate::model::GtfsRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// loads every row of a GTFS table from a file path into records of type `T`.
///
/// # Arguments
/// * source - path to a delimited file with a header row
///
/// # Result
/// the records in file order. fails with [`LoaderError::InvalidArgument`] for a
/// blank path and [`LoaderError::ParseError`] when the file cannot be read or parsed.
pub fn load<T: GtfsRecord>(source: impl AsRef<Path>) -> Result<Vec<T>, LoaderError> {
    let path = source.as_ref();
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        let err = LoaderError::InvalidArgument(format!(
            "source path for {} must not be blank",
            T::FILE
        ));
        log::error!("{err}");
        return Err(err);
    }
    let source_name = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|e| {
        let err = LoaderError::ParseError {
            source_name: source_name.clone(),
            source: csv::Error::from(e),
        };
        log::error!("Encountered error when loading from file: {err}");
        err
    })?;
    read_records(file, &source_name)
}

/// reads records of type `T` from any delimited text source with a header row.
/// columns are matched to fields by name: unknown columns are ignored and
/// missing columns keep their default value, as do cells missing from the end
/// of a short row. a leading UTF-8 BOM is skipped.
pub fn read_records<T: GtfsRecord, R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<T>, LoaderError> {
    let parse_error = |source: csv::Error| {
        let err = LoaderError::ParseError {
            source_name: source_name.to_string(),
            source,
        };
        log::error!("Encountered error when loading from file: {err}");
        err
    };

    let mut buffered = BufReader::new(reader);
    let has_bom = buffered
        .fill_buf()
        .map_err(|e| parse_error(csv::Error::from(e)))?
        .starts_with(UTF8_BOM);
    if has_bom {
        buffered.consume(UTF8_BOM.len());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(buffered);

    let headers = rdr.headers().map_err(parse_error)?.clone();
    let mut records = vec![];
    for row in rdr.records() {
        let mut row = row.map_err(parse_error)?;
        // trailing optional cells are often dropped; missing cells take their default
        while row.len() < headers.len() {
            row.push_field("");
        }
        records.push(row.deserialize::<T>(Some(&headers)).map_err(parse_error)?);
    }
    log::debug!("read {} rows from {source_name}", records.len());
    Ok(records)
}
