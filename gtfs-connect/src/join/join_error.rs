use super::JoinWarning;

#[derive(thiserror::Error, Debug)]
pub enum JoinError {
    #[error("lookup miss while joining trips: {0}")]
    LookupMiss(JoinWarning),
}
