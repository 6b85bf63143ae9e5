use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::{RecordSink, SinkError};

/// appends each record as one JSON document per line. identifiers are
/// `{collection}:{n}`, counting from the number of lines already in the file.
pub struct JsonLinesSink {
    collection: String,
    filepath: PathBuf,
    writer: BufWriter<File>,
    next_id: usize,
}

impl JsonLinesSink {
    pub fn open(filepath: &Path, collection: &str) -> Result<JsonLinesSink, SinkError> {
        let write_error = |e: std::io::Error| SinkError::WriteError {
            destination: filepath.to_string_lossy().to_string(),
            source: e,
        };
        let existing = match std::fs::read_to_string(filepath) {
            Ok(contents) => contents.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(write_error(e)),
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(filepath)
            .map_err(write_error)?;
        Ok(JsonLinesSink {
            collection: collection.to_string(),
            filepath: filepath.to_path_buf(),
            writer: BufWriter::new(file),
            next_id: existing,
        })
    }

    fn destination(&self) -> String {
        self.filepath.to_string_lossy().to_string()
    }
}

impl RecordSink for JsonLinesSink {
    fn insert_many<T: Serialize>(&mut self, records: &[T]) -> Result<Vec<String>, SinkError> {
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            serde_json::to_writer(&mut self.writer, record).map_err(|e| {
                SinkError::SerializeError {
                    destination: self.destination(),
                    source: e,
                }
            })?;
            self.writer
                .write_all(b"\n")
                .map_err(|e| SinkError::WriteError {
                    destination: self.destination(),
                    source: e,
                })?;
            ids.push(format!("{}:{}", self.collection, self.next_id));
            self.next_id += 1;
        }
        self.writer.flush().map_err(|e| SinkError::WriteError {
            destination: self.destination(),
            source: e,
        })?;
        log::info!(
            "inserted {} records into {} ({})",
            ids.len(),
            self.collection,
            self.destination()
        );
        Ok(ids)
    }
}
