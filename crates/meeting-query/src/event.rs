//! Busy events bound to the attendees who are in them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A named busy range shared by a set of attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Build an event. Duplicate attendee ids collapse into one.
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True if at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        // Walk the smaller set.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}
