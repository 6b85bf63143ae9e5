mod agency;
mod calendar;
pub mod field_codec;
mod group_field;
mod gtfs_file;
mod gtfs_record;
mod route;
mod stop;
mod stop_time;
mod trip;

pub use agency::Agency;
pub use calendar::Calendar;
pub use group_field::GroupField;
pub use gtfs_file::GtfsFile;
pub use gtfs_record::GtfsRecord;
pub use route::Route;
pub use stop::Stop;
pub use stop_time::StopTime;
pub use trip::Trip;
