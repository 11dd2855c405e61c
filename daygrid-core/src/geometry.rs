//! Pixel geometry for laid-out events.
//!
//! Turns `column`/`max_columns` into rectangles inside a day column or the
//! all-day strip, and answers the hit-testing questions selection needs.

use serde::{Deserialize, Serialize};

use crate::event::{EventId, EventRecord, EventSpan};

/// Integer pixel rectangle; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) / 2
    }

    /// Whether this event rectangle counts as touched by a selection box.
    pub fn intersects_selection(&self, selection: &Rect) -> bool {
        self.left < selection.right
            && self.right >= selection.left
            && self.top < selection.bottom
            && self.bottom >= selection.top
    }

    /// Euclidean distance from a point to the rectangle; 0 inside it.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let (left, top) = (self.left as f32, self.top as f32);
        let (right, bottom) = (self.right as f32, self.bottom as f32);

        let dx = if x < left {
            left - x
        } else if x > right {
            x - right
        } else {
            0.0
        };
        let dy = if y < top {
            top - y
        } else if y > bottom {
            y - bottom
        } else {
            0.0
        };

        (dx * dx + dy * dy).sqrt()
    }
}

/// An event with its on-screen rectangle, as consumed by selection and
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedEvent {
    pub id: EventId,
    pub rect: Rect,
    /// Absolute start minute.
    pub start: i64,
    /// Absolute exclusive end minute.
    pub end: i64,
    pub column: usize,
    pub all_day: bool,
}

impl PositionedEvent {
    pub fn new(event: &EventRecord, rect: Rect) -> Self {
        PositionedEvent {
            id: event.id,
            rect,
            start: event.start_minutes(),
            end: event.end_minutes(),
            column: event.column,
            all_day: event.is_all_day(),
        }
    }
}

/// Drawing constants for the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub minute_height: f32,
    pub hour_gap: i32,
    pub cell_margin: i32,
    pub min_event_height: i32,
    pub all_day_row_height: i32,
}

impl EventGeometry {
    /// Rectangle of a timed event in the day column starting at `left`,`top`.
    ///
    /// Returns `None` for all-day events and events on another day.
    pub fn event_rect(
        &self,
        day: i32,
        left: i32,
        top: i32,
        cell_width: i32,
        event: &EventRecord,
    ) -> Option<Rect> {
        let EventSpan::Timed {
            day: event_day,
            start_minute,
            end_minute,
        } = event.span
        else {
            return None;
        };
        if event_day != day {
            return None;
        }

        let start = start_minute as i32;
        let end = end_minute as i32;
        let start_hour = start / 60;
        let mut end_hour = end / 60;
        // An end on the hour belongs to the previous hour cell.
        if end_hour * 60 == end {
            end_hour -= 1;
        }

        let rect_top = top + (start as f32 * self.minute_height) as i32 + start_hour * self.hour_gap;
        let mut rect_bottom =
            top + (end as f32 * self.minute_height) as i32 + end_hour * self.hour_gap - 1;
        if rect_bottom < rect_top + self.min_event_height {
            rect_bottom = rect_top + self.min_event_height;
        }

        let (rect_left, rect_right) = self.column_span(left, cell_width, event);

        Some(Rect::new(rect_left, rect_top, rect_right, rect_bottom))
    }

    /// Rectangle of an all-day event in a strip showing `num_days` days from
    /// `first_day`, each `day_width` wide.
    ///
    /// Spans reaching outside the visible days are clipped; events entirely
    /// outside return `None`.
    pub fn all_day_rect(
        &self,
        first_day: i32,
        num_days: i32,
        left: i32,
        top: i32,
        day_width: i32,
        event: &EventRecord,
    ) -> Option<Rect> {
        let EventSpan::AllDay { start_day, end_day } = event.span else {
            return None;
        };
        let last_day = first_day + num_days - 1;
        if num_days <= 0 || end_day < first_day || start_day > last_day {
            return None;
        }

        let start = start_day.max(first_day) - first_day;
        let end = end_day.min(last_day) - first_day;
        let row_top = top + event.column as i32 * self.all_day_row_height;

        Some(Rect::new(
            left + start * day_width + self.cell_margin,
            row_top,
            left + (end + 1) * day_width - self.cell_margin,
            row_top + self.all_day_row_height - self.cell_margin,
        ))
    }

    /// Position every timed event of `day` in one day column.
    pub fn position_day(
        &self,
        events: &[EventRecord],
        day: i32,
        left: i32,
        top: i32,
        cell_width: i32,
    ) -> Vec<PositionedEvent> {
        events
            .iter()
            .filter_map(|event| {
                self.event_rect(day, left, top, cell_width, event)
                    .map(|rect| PositionedEvent::new(event, rect))
            })
            .collect()
    }

    fn column_span(&self, left: i32, cell_width: i32, event: &EventRecord) -> (i32, i32) {
        let max_cols = event.max_columns.max(1) as i32;
        let margin = self.cell_margin as f32;
        let col_width = (cell_width - (max_cols + 1) * self.cell_margin) as f32 / max_cols as f32;
        let col_left = left as f32 + margin + event.column as f32 * (col_width + margin);

        (col_left as i32, (col_left + col_width) as i32)
    }
}
