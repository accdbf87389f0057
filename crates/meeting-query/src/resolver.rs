//! Find free meeting times for a request against a list of busy events.
//!
//! The search starts from the whole day and carves out every event attended by
//! someone on the request. Each carve is an interval subtraction against every
//! candidate slot; pieces shorter than the meeting are discarded on the spot.
//!
//! Optional attendees are tried first as if they were mandatory. If that leaves
//! no room and the request has mandatory attendees, the search is repeated with
//! the mandatory attendees alone. There is no partial inclusion of optional
//! attendees.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::{Relation, TimeRange, WHOLE_DAY};

/// Which attendee set produced a set of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Mandatory and optional attendees are all free.
    Everyone,
    /// Optional attendees had to be dropped.
    MandatoryOnly,
}

/// The outcome of a meeting query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingOptions {
    /// The attendee set the slots were computed for.
    pub attendance: Attendance,
    /// Free ranges, each at least as long as the requested duration.
    /// Not sorted.
    pub slots: Vec<TimeRange>,
}

/// Find every range of the day that fits `request` around `events`.
///
/// Returns an empty vector when nothing fits. The order of the result follows
/// the order in which slots were carved and is not sorted by start.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_detailed(events, request).slots
}

/// Like [`query`], but also reports whether optional attendees were kept.
pub fn query_detailed(events: &[Event], request: &MeetingRequest) -> MeetingOptions {
    let combined = request.combined();
    let slots = solve(events, &combined);

    if !slots.is_empty() || request.attendees().is_empty() {
        debug!(
            attendees = combined.attendees().len(),
            slots = slots.len(),
            "meeting fits every attendee"
        );
        return MeetingOptions {
            attendance: Attendance::Everyone,
            slots,
        };
    }

    // Nothing optional to drop: the mandatory-only search would repeat this one.
    if combined.attendees() == request.attendees() {
        debug!("no slot for mandatory attendees");
        return MeetingOptions {
            attendance: Attendance::MandatoryOnly,
            slots,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no slot with optional attendees, retrying with mandatory attendees only"
    );
    MeetingOptions {
        attendance: Attendance::MandatoryOnly,
        slots: solve(events, request),
    }
}

fn solve(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    free_ranges(events, request.attendees(), request.duration())
}

/// Free ranges of at least `duration` minutes for a fixed set of `attendees`.
///
/// Events that none of `attendees` attend are ignored. A duration longer than
/// the day yields nothing; an empty attendee set or a non-positive duration
/// yields the whole day.
pub fn free_ranges(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: i64,
) -> Vec<TimeRange> {
    if duration > i64::from(WHOLE_DAY.duration()) {
        return Vec::new();
    }

    let mut slots = vec![WHOLE_DAY];
    if attendees.is_empty() || duration <= 0 {
        return slots;
    }

    // 1..=1440 after the checks above.
    let min_minutes = duration as u32;

    for event in events {
        if !event.involves_any(attendees) {
            continue;
        }
        trace!(event = event.name(), when = %event.when(), "carving busy range");
        slots = subtract(&slots, event.when(), min_minutes);
        if slots.is_empty() {
            break;
        }
    }

    slots
}

/// Remove `busy` from every slot, keeping pieces of at least `min_minutes`.
///
/// Slots are handled independently and never merged back together.
fn subtract(slots: &[TimeRange], busy: TimeRange, min_minutes: u32) -> Vec<TimeRange> {
    let mut kept = Vec::with_capacity(slots.len() + 1);

    for slot in slots {
        match slot.relation_to(&busy) {
            Relation::Disjoint => kept.push(*slot),
            Relation::Splits => {
                kept.extend(piece(slot.start(), busy.start(), min_minutes));
                kept.extend(piece(busy.end(), slot.end(), min_minutes));
            }
            Relation::Consumes => {}
            Relation::ClipsFront => kept.extend(piece(busy.end(), slot.end(), min_minutes)),
            Relation::ClipsTail => kept.extend(piece(slot.start(), busy.start(), min_minutes)),
        }
    }

    kept
}

fn piece(start: u32, end: u32, min_minutes: u32) -> Option<TimeRange> {
    if end.saturating_sub(start) < min_minutes {
        return None;
    }
    TimeRange::from_start_end(start, end, false).ok()
}
