mod app_error;
mod connect_app;
mod connect_config;
mod connect_ops;

pub use app_error::AppError;
pub use connect_app::ConnectApp;
pub use connect_config::ConnectConfig;
pub use connect_ops::{run_connect, CONNECTED_FILENAME};
