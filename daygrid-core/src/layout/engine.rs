//! Sweep-line column assignment.
//!
//! Events arrive sorted by start. Each pass keeps the list of events still
//! open at the current start time and hands the newcomer the lowest free
//! column. A cluster closes when the open list drains; every member of the
//! closed cluster then gets the cluster's peak concurrency as `max_columns`.

use log::{debug, warn};

use crate::constants::MAX_COLUMNS;
use crate::event::{EventId, EventRecord};
use crate::layout::ColumnMask;

/// Summary of one layout run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub timed_clusters: usize,
    pub all_day_clusters: usize,
    /// Events that found all 64 columns occupied and were put in the last one.
    pub clamped: Vec<EventId>,
}

impl LayoutReport {
    pub fn has_collisions(&self) -> bool {
        !self.clamped.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lane {
    Timed,
    AllDay,
}

impl Lane {
    fn of(event: &EventRecord) -> Self {
        if event.is_all_day() {
            Lane::AllDay
        } else {
            Lane::Timed
        }
    }

    fn name(self) -> &'static str {
        match self {
            Lane::Timed => "timed",
            Lane::AllDay => "all_day",
        }
    }
}

/// Assign `column` and `max_columns` to every event.
///
/// `events` must already be in [`crate::event::layout_order`]; the order is
/// not checked here (see [`crate::window::EventWindow`]). Timed events shorter
/// than `min_duration_minutes` are treated as lasting that long when deciding
/// whether they still overlap a later event.
pub fn compute_positions(events: &mut [EventRecord], min_duration_minutes: i64) -> LayoutReport {
    let min_duration = min_duration_minutes.max(0);
    let mut clamped = Vec::new();

    let timed_clusters = run_pass(events, Lane::Timed, min_duration, &mut clamped);
    let all_day_clusters = run_pass(events, Lane::AllDay, min_duration, &mut clamped);

    LayoutReport {
        timed_clusters,
        all_day_clusters,
        clamped,
    }
}

/// Whether `active` no longer overlaps an event starting with `next`.
fn has_expired(active: &EventRecord, next: &EventRecord, min_duration: i64) -> bool {
    match Lane::of(active) {
        Lane::Timed => {
            let start = active.start_minutes();
            let duration = (active.end_minutes() - start).max(min_duration);
            start + duration <= next.start_minutes()
        }
        Lane::AllDay => active.end_day() < next.start_day(),
    }
}

fn close_cluster(events: &mut [EventRecord], group: &mut Vec<usize>, max_cols: usize) {
    for &idx in group.iter() {
        events[idx].max_columns = max_cols;
    }
    group.clear();
}

/// Lay out one lane; returns the number of clusters found.
fn run_pass(
    events: &mut [EventRecord],
    lane: Lane,
    min_duration: i64,
    clamped: &mut Vec<EventId>,
) -> usize {
    let mut active: Vec<usize> = Vec::new();
    let mut group: Vec<usize> = Vec::new();
    let mut mask = ColumnMask::new();
    let mut max_cols = 0;
    let mut clusters = 0;
    let mut laid_out = 0;

    for idx in 0..events.len() {
        if Lane::of(&events[idx]) != lane {
            continue;
        }
        laid_out += 1;

        let next = &events[idx];
        active.retain(|&open| {
            let expired = has_expired(&events[open], next, min_duration);
            if expired {
                mask.release(events[open].column);
            }
            !expired
        });

        if active.is_empty() {
            if !group.is_empty() {
                clusters += 1;
            }
            close_cluster(events, &mut group, max_cols);
            max_cols = 0;
            mask.clear();
        }

        let column = match mask.first_free() {
            Some(col) => col,
            None => {
                warn!(
                    "event=column_clamp module=layout lane={} event_id={} active={}",
                    lane.name(),
                    events[idx].id,
                    active.len()
                );
                clamped.push(events[idx].id);
                MAX_COLUMNS - 1
            }
        };

        mask.occupy(column);
        events[idx].column = column;
        active.push(idx);
        group.push(idx);
        max_cols = max_cols.max(active.len());
    }

    if !group.is_empty() {
        clusters += 1;
    }
    close_cluster(events, &mut group, max_cols);

    debug!(
        "event=layout_pass module=layout lane={} events={} clusters={}",
        lane.name(),
        laid_out,
        clusters
    );

    clusters
}
