pub mod app;
pub mod fetch;
pub mod join;
pub mod loader;
pub mod model;
pub mod sink;
