//! Event records as seen by the layout grid.
//!
//! An `EventRecord` is created fresh for every reload of the visible window.
//! Its span is immutable input; `column` and `max_columns` are output written
//! by [`crate::layout::compute_positions`].

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::error::{DayGridError, DayGridResult};
use crate::julian::julian_day;

/// Opaque, stable event identity supplied by the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an event sits in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSpan {
    /// Same-day event: minute offsets into Julian day `day`. `end_minute` may
    /// be 1440 for an event running to midnight.
    Timed {
        day: i32,
        start_minute: u32,
        end_minute: u32,
    },
    /// Inclusive Julian day range drawn in the all-day strip.
    AllDay { start_day: i32, end_day: i32 },
}

fn default_max_columns() -> usize {
    1
}

/// A calendar event plus its layout slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    /// Only used as the last tie-breaker of the layout order.
    pub title: String,
    pub span: EventSpan,
    /// Horizontal slot within the event's overlap cluster.
    #[serde(default)]
    pub column: usize,
    /// Number of slots reserved for the whole cluster.
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,
}

impl EventRecord {
    pub fn new(id: EventId, title: impl Into<String>, span: EventSpan) -> Self {
        EventRecord {
            id,
            title: title.into(),
            span,
            column: 0,
            max_columns: 1,
        }
    }

    pub fn timed(
        id: EventId,
        title: impl Into<String>,
        day: i32,
        start_minute: u32,
        end_minute: u32,
    ) -> Self {
        Self::new(
            id,
            title,
            EventSpan::Timed {
                day,
                start_minute,
                end_minute,
            },
        )
    }

    pub fn all_day(id: EventId, title: impl Into<String>, start_day: i32, end_day: i32) -> Self {
        Self::new(id, title, EventSpan::AllDay { start_day, end_day })
    }

    /// Build a timed record from local wall-clock times.
    ///
    /// `end` may be midnight of the following day; anything longer than that
    /// belongs in the all-day strip and is rejected.
    pub fn from_datetimes(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DayGridResult<Self> {
        let day = julian_day(start.date());
        let start_minute = start.hour() * 60 + start.minute();

        let end_minute = match julian_day(end.date()) - day {
            0 => end.hour() * 60 + end.minute(),
            1 if end.hour() == 0 && end.minute() == 0 => MINUTES_PER_DAY,
            _ => {
                return Err(DayGridError::InvalidEvent {
                    id,
                    reason: format!("timed event must end on its start day, got {start} to {end}"),
                });
            }
        };

        let record = Self::timed(id, title, day, start_minute, end_minute);
        record.validate()?;
        Ok(record)
    }

    /// Build an all-day record covering `first..=last`.
    pub fn from_dates(
        id: EventId,
        title: impl Into<String>,
        first: NaiveDate,
        last: NaiveDate,
    ) -> DayGridResult<Self> {
        let record = Self::all_day(id, title, julian_day(first), julian_day(last));
        record.validate()?;
        Ok(record)
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self.span, EventSpan::AllDay { .. })
    }

    pub fn start_day(&self) -> i32 {
        match self.span {
            EventSpan::Timed { day, .. } => day,
            EventSpan::AllDay { start_day, .. } => start_day,
        }
    }

    pub fn end_day(&self) -> i32 {
        match self.span {
            EventSpan::Timed { day, .. } => day,
            EventSpan::AllDay { end_day, .. } => end_day,
        }
    }

    /// Start as absolute minutes since Julian day 0.
    pub fn start_minutes(&self) -> i64 {
        match self.span {
            EventSpan::Timed {
                day, start_minute, ..
            } => absolute_minutes(day, start_minute),
            EventSpan::AllDay { start_day, .. } => absolute_minutes(start_day, 0),
        }
    }

    /// Exclusive end as absolute minutes since Julian day 0.
    pub fn end_minutes(&self) -> i64 {
        match self.span {
            EventSpan::Timed { day, end_minute, .. } => absolute_minutes(day, end_minute),
            EventSpan::AllDay { end_day, .. } => absolute_minutes(end_day + 1, 0),
        }
    }

    /// Check the span is well formed.
    pub fn validate(&self) -> DayGridResult<()> {
        let reason = match self.span {
            EventSpan::Timed {
                start_minute,
                end_minute,
                ..
            } => {
                if start_minute >= MINUTES_PER_DAY {
                    Some(format!("start minute {start_minute} is past the end of the day"))
                } else if end_minute > MINUTES_PER_DAY {
                    Some(format!("end minute {end_minute} is past the end of the day"))
                } else if end_minute < start_minute {
                    Some(format!("ends at minute {end_minute} before it starts at {start_minute}"))
                } else {
                    None
                }
            }
            EventSpan::AllDay { start_day, end_day } => (start_day > end_day)
                .then(|| format!("end day {end_day} precedes start day {start_day}")),
        };

        match reason {
            Some(reason) => Err(DayGridError::InvalidEvent {
                id: self.id,
                reason,
            }),
            None => Ok(()),
        }
    }
}

fn absolute_minutes(day: i32, minute: u32) -> i64 {
    i64::from(day) * i64::from(MINUTES_PER_DAY) + i64::from(minute)
}

/// Order the layout pass expects: start ascending, end descending, then title.
pub fn layout_order(a: &EventRecord, b: &EventRecord) -> Ordering {
    a.start_minutes()
        .cmp(&b.start_minutes())
        .then_with(|| b.end_minutes().cmp(&a.end_minutes()))
        .then_with(|| a.title.cmp(&b.title))
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.title)
    }
}
