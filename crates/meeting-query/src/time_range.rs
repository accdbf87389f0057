//! Half-open minute-of-day ranges.
//!
//! A [`TimeRange`] is `[start, end)` in minutes since midnight, with
//! `0 <= start < end <= 1440`. Ranges that merely touch (`a.end == b.start`)
//! do not overlap, so back-to-back events never erase each other's boundary.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// One past the last minute of the day.
pub const END_OF_DAY: u32 = 24 * 60;

/// The full day, `[00:00, 24:00)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: END_OF_DAY,
};

/// A non-empty half-open range of minutes within a single day.
///
/// Ordered by start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// How an event range sits relative to a candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// No shared minute; touching boundaries land here.
    Disjoint,
    /// The event lies inside the slot and cuts it in two.
    Splits,
    /// The event covers the whole slot.
    Consumes,
    /// The event covers the beginning of the slot only.
    ClipsFront,
    /// The event covers the end of the slot only.
    ClipsTail,
}

impl TimeRange {
    /// Build a range from its bounds.
    ///
    /// An inclusive `end` is normalized to an exclusive one by adding a minute.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidRange` if the normalized range is empty,
    /// inverted, or ends after `END_OF_DAY`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        if start >= end || end > END_OF_DAY {
            return Err(SchedulerError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range of `duration` minutes beginning at `start`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration), false)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True if `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// True if the two ranges share at least one minute.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Classify `event` against this range, treating `self` as the slot.
    ///
    /// Containment is checked before coverage, so an event equal to the slot
    /// reports [`Relation::Splits`] with two empty halves.
    pub fn relation_to(&self, event: &TimeRange) -> Relation {
        if !self.overlaps(event) {
            Relation::Disjoint
        } else if self.contains(event) {
            Relation::Splits
        } else if event.contains(self) {
            Relation::Consumes
        } else if event.start < self.start {
            Relation::ClipsFront
        } else {
            Relation::ClipsTail
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Minutes since midnight for a wall-clock time.
///
/// `24:00` is accepted and maps to [`END_OF_DAY`].
pub fn minute_of_day(hours: u32, minutes: u32) -> Result<u32> {
    if (hours < 24 && minutes < 60) || (hours == 24 && minutes == 0) {
        Ok(hours * 60 + minutes)
    } else {
        Err(SchedulerError::InvalidClock(format!(
            "{:02}:{:02}",
            hours, minutes
        )))
    }
}

/// Parse `HH:MM` into minutes since midnight. `24:00` means end of day.
pub fn parse_clock(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| SchedulerError::InvalidClock(text.to_string()))?;
    minute_of_day(time.hour(), time.minute())
}

/// Render minutes since midnight as `HH:MM`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// A bound as it appears on the wire: either raw minutes or `HH:MM`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn into_minutes(self) -> Result<u32> {
        match self {
            ClockValue::Minutes(m) => Ok(m),
            ClockValue::Clock(text) => parse_clock(&text),
        }
    }
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: ClockValue,
    end: ClockValue,
    #[serde(default)]
    end_inclusive: bool,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SchedulerError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        let start = raw.start.into_minutes()?;
        let end = raw.end.into_minutes()?;
        TimeRange::from_start_end(start, end, raw.end_inclusive)
    }
}
