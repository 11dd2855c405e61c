//! Validated event window.
//!
//! The layout pass trusts its input order. `EventWindow` is the front door
//! that checks records and ordering before handing them over.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::debug;

use crate::error::{DayGridError, DayGridResult};
use crate::event::{EventId, EventRecord, layout_order};
use crate::layout::{LayoutReport, compute_positions};

/// Events visible in one reload of a day/week grid showing `num_days` days
/// from `first_day`.
#[derive(Debug, Clone, Default)]
pub struct EventWindow {
    first_day: i32,
    num_days: i32,
    events: Vec<EventRecord>,
}

impl EventWindow {
    /// Accept events already in layout order.
    ///
    /// Rejects malformed spans, events reaching outside the visible days,
    /// duplicate ids, and out-of-order input instead of letting the layout
    /// produce arbitrary columns.
    pub fn new(first_day: i32, num_days: i32, events: Vec<EventRecord>) -> DayGridResult<Self> {
        validate_records(first_day, num_days, &events)?;

        if let Some(index) = events
            .windows(2)
            .position(|pair| layout_order(&pair[0], &pair[1]) == Ordering::Greater)
        {
            return Err(DayGridError::UnsortedWindow {
                id: events[index + 1].id,
                index: index + 1,
            });
        }

        Ok(EventWindow {
            first_day,
            num_days,
            events,
        })
    }

    /// Accept events in any order, sorting them for layout.
    pub fn sorted(
        first_day: i32,
        num_days: i32,
        mut events: Vec<EventRecord>,
    ) -> DayGridResult<Self> {
        validate_records(first_day, num_days, &events)?;
        events.sort_by(layout_order);
        Ok(EventWindow {
            first_day,
            num_days,
            events,
        })
    }

    /// Run the overlap layout over every event in the window.
    pub fn layout(&mut self, min_duration_minutes: i64) -> LayoutReport {
        compute_positions(&mut self.events, min_duration_minutes)
    }

    pub fn first_day(&self) -> i32 {
        self.first_day
    }

    pub fn num_days(&self) -> i32 {
        self.num_days
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn timed(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter().filter(|e| !e.is_all_day())
    }

    pub fn all_day(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter().filter(|e| e.is_all_day())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }
}

fn validate_records(first_day: i32, num_days: i32, events: &[EventRecord]) -> DayGridResult<()> {
    let mut seen = HashSet::with_capacity(events.len());

    for event in events {
        if let Err(err) = event.validate() {
            debug!(
                "event=window_rejected module=window event_id={} reason=invalid_span",
                event.id
            );
            return Err(err);
        }
        check_visible(first_day, num_days, event)?;
        if !seen.insert(event.id) {
            return Err(DayGridError::DuplicateEvent(event.id));
        }
    }

    Ok(())
}

fn check_visible(first_day: i32, num_days: i32, event: &EventRecord) -> DayGridResult<()> {
    let first = i64::from(first_day);
    let last = first + i64::from(num_days) - 1;
    let start = i64::from(event.start_day());
    let end = i64::from(event.end_day());

    if start >= first && end <= last {
        return Ok(());
    }

    debug!(
        "event=window_rejected module=window event_id={} reason=outside_visible_days",
        event.id
    );
    let reason = if event.is_all_day() {
        format!("days {start}..={end} reach outside the visible days {first}..={last}")
    } else {
        format!("day {start} is outside the visible days {first}..={last}")
    };
    Err(DayGridError::InvalidEvent {
        id: event.id,
        reason,
    })
}
