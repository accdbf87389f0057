//! Meeting requests: who must come, who may come, and for how long.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// A request for a meeting slot.
///
/// Mandatory attendees must be free for the whole slot. Optional attendees are
/// accommodated only when doing so still leaves at least one slot. An id in
/// both sets counts as mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingRequest")]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
    duration: i64,
}

impl MeetingRequest {
    /// Build a request with mandatory `attendees` and a duration in minutes.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidRequest` if `duration` is negative.
    pub fn new<I, S>(attendees: I, duration: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration < 0 {
            return Err(SchedulerError::InvalidRequest(format!(
                "duration must not be negative, got {} minutes",
                duration
            )));
        }
        Ok(Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        })
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    /// The mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Required meeting length in minutes.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }

    /// The same request with every optional attendee promoted to mandatory.
    pub fn combined(&self) -> MeetingRequest {
        MeetingRequest {
            attendees: self.all_attendees(),
            optional_attendees: BTreeSet::new(),
            duration: self.duration,
        }
    }
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: i64,
}

impl TryFrom<RawMeetingRequest> for MeetingRequest {
    type Error = SchedulerError;

    fn try_from(raw: RawMeetingRequest) -> Result<Self> {
        Ok(MeetingRequest::new(raw.attendees, raw.duration)?
            .with_optional_attendees(raw.optional_attendees))
    }
}
