//! # meeting-query
//!
//! Finds every time-of-day range long enough to hold a meeting without
//! clashing with the busy events of its attendees.
//!
//! A day is modelled as minutes `[0, 1440)`. Events are half-open busy ranges
//! tagged with attendee ids; a [`MeetingRequest`] names mandatory and optional
//! attendees plus a duration. Optional attendees are honoured when that still
//! leaves at least one slot, otherwise they are dropped as a group.
//!
//! ```rust
//! use meeting_query::{query, Event, MeetingRequest, TimeRange};
//!
//! let standup = Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(600, 660, false).unwrap(),
//!     ["alice"],
//! );
//! let request = MeetingRequest::new(["alice"], 30).unwrap();
//!
//! let mut slots = query(&[standup], &request);
//! slots.sort();
//! assert_eq!(slots[0].to_string(), "00:00-10:00");
//! assert_eq!(slots[1].to_string(), "11:00-24:00");
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — half-open minute ranges, clock parsing, geometric relations
//! - [`event`] — busy ranges bound to attendee sets
//! - [`request`] — mandatory/optional attendees and required duration
//! - [`resolver`] — the free-time search with optional-attendee fallback
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod request;
pub mod resolver;
pub mod time_range;

pub use error::SchedulerError;
pub use event::Event;
pub use request::MeetingRequest;
pub use resolver::{free_ranges, query, query_detailed, Attendance, MeetingOptions};
pub use time_range::{Relation, TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
