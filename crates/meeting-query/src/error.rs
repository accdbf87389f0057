//! Error types for meeting-query construction and validation.

use thiserror::Error;

/// Errors raised while building ranges, events, or requests.
///
/// Resolution itself never fails; only malformed input is rejected, and only
/// at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A range whose start is not strictly before its end, or that runs past
    /// the end of the day.
    #[error("Invalid time range: start {start} must be before end {end} (max 1440)")]
    InvalidRange { start: u32, end: u32 },

    /// Clock text that is not `HH:MM`.
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("Invalid meeting request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
