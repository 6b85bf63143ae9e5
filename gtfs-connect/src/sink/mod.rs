mod json_lines_sink;
mod record_sink;
mod sink_error;

pub use json_lines_sink::JsonLinesSink;
pub use record_sink::RecordSink;
pub use sink_error::SinkError;
