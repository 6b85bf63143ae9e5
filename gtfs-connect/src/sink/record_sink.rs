use serde::Serialize;

use super::SinkError;

/// a bulk-insert destination for output records.
pub trait RecordSink {
    /// inserts all records, returning the identifier assigned to each, in order.
    fn insert_many<T: Serialize>(&mut self, records: &[T]) -> Result<Vec<String>, SinkError>;
}
