//! Neighbor search over the events touched by a selection box.
//!
//! Timed events link up/down by time within the same horizontal band and
//! left/right by on-screen position. All-day events link up/down by column
//! only. The start event is the candidate that best continues the motion that
//! brought the selection here.

use log::debug;

use crate::event::EventId;
use crate::geometry::{PositionedEvent, Rect};
use crate::navigation::{Direction, NavigationGraph, NavigationOutcome, Neighbors};

/// The event that held focus before the selection box moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousSelection {
    pub rect: Rect,
    pub all_day: bool,
    pub column: usize,
}

impl PreviousSelection {
    pub fn of(event: &PositionedEvent) -> Self {
        PreviousSelection {
            rect: event.rect,
            all_day: event.all_day,
            column: event.column,
        }
    }
}

/// Selection state the builder reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext {
    /// Current selection box.
    pub selection_box: Rect,
    /// Selection box before the last move.
    pub prev_box: Rect,
    /// Previously focused event, if any. It may belong to a much older box.
    pub prev_selected: Option<PreviousSelection>,
    /// An event already chosen upstream; the builder leaves it alone.
    pub forced: Option<EventId>,
    /// Whether the selection box sits in the all-day strip.
    pub all_day: bool,
}

impl SelectionContext {
    pub fn new(selection_box: Rect, prev_box: Rect) -> Self {
        SelectionContext {
            selection_box,
            prev_box,
            prev_selected: None,
            forced: None,
            all_day: false,
        }
    }

    /// Rectangle the focus is arriving from.
    ///
    /// The previous event counts only while it still touches the previous box,
    /// and then only its part inside that box vertically.
    fn previous_rect(&self) -> Rect {
        let prev_box = self.prev_box;
        match self.prev_selected {
            Some(prev)
                if !(prev.rect.top >= prev_box.bottom
                    || prev.rect.bottom <= prev_box.top
                    || prev.rect.right <= prev_box.left
                    || prev.rect.left >= prev_box.right) =>
            {
                Rect {
                    top: prev.rect.top.max(prev_box.top),
                    bottom: prev.rect.bottom.min(prev_box.bottom),
                    ..prev.rect
                }
            }
            _ => prev_box,
        }
    }
}

/// Side the focus approached the selection box from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Approach {
    None,
    Above,
    Below,
    Left,
    Right,
}

impl Approach {
    /// Classify `prev` against the box, returning the side and the center of
    /// `prev` along the axis perpendicular to the approach.
    fn classify(prev: &Rect, selection_box: &Rect) -> (Self, i32) {
        if prev.left >= selection_box.right {
            (Approach::Right, prev.center_y())
        } else if prev.right <= selection_box.left {
            (Approach::Left, prev.center_y())
        } else if prev.bottom <= selection_box.top {
            (Approach::Above, prev.center_x())
        } else if prev.top >= selection_box.bottom {
            (Approach::Below, prev.center_x())
        } else {
            (Approach::None, 0)
        }
    }

    /// `(perpendicular, along)` distances ranking `rect` as a start event.
    fn start_distances(self, rect: &Rect, prev: &Rect, center: i32) -> (i32, i32) {
        match self {
            Approach::None => (0, 0),
            Approach::Above => (
                extent_gap(rect.left, rect.right, center),
                rect.top - prev.bottom,
            ),
            Approach::Below => (
                extent_gap(rect.left, rect.right, center),
                prev.top - rect.bottom,
            ),
            Approach::Left => (
                extent_gap(rect.top, rect.bottom, center),
                rect.left - prev.right,
            ),
            Approach::Right => (
                extent_gap(rect.top, rect.bottom, center),
                prev.left - rect.right,
            ),
        }
    }
}

/// Distance from the extent `[low, high]` to `center`; 0 when it straddles.
fn extent_gap(low: i32, high: i32, center: i32) -> i32 {
    if low >= center {
        low - center
    } else if high <= center {
        center - high
    } else {
        0
    }
}

/// Build the neighbor graph for the events under the selection box and pick
/// the event to focus first.
///
/// Returns an empty outcome when nothing is selected or an event was already
/// chosen upstream.
pub fn build_navigation(
    candidates: &[PositionedEvent],
    context: &SelectionContext,
) -> NavigationOutcome {
    if candidates.is_empty() || context.forced.is_some() {
        return NavigationOutcome::none();
    }

    let outcome = if context.all_day {
        build_all_day(candidates, context)
    } else {
        build_timed(candidates, context)
    };

    debug!(
        "event=navigation_built module=navigation lane={} candidates={} start={}",
        if context.all_day { "all_day" } else { "timed" },
        candidates.len(),
        outcome
            .start
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    outcome
}

/// Nearest candidate found so far in one direction.
struct Nearest<'a> {
    event: &'a PositionedEvent,
    distance: i64,
}

/// Up/down: smallest time gap, ties to the event horizontally closest to
/// `center_x`.
fn offer_vertical<'a>(
    best: &mut Option<Nearest<'a>>,
    neighbor: &'a PositionedEvent,
    distance: i64,
    center_x: i32,
) {
    let better = match best {
        None => true,
        Some(current) if distance < current.distance => true,
        Some(current) if distance == current.distance => {
            extent_gap(neighbor.rect.left, neighbor.rect.right, center_x)
                < extent_gap(current.event.rect.left, current.event.rect.right, center_x)
        }
        Some(_) => false,
    };
    if better {
        *best = Some(Nearest {
            event: neighbor,
            distance,
        });
    }
}

/// Left/right: smallest vertical offset from `center_y`, ties to the smaller
/// horizontal gap as measured by `gap`.
fn offer_horizontal<'a>(
    best: &mut Option<Nearest<'a>>,
    neighbor: &'a PositionedEvent,
    center_y: i32,
    gap: impl Fn(&Rect) -> i32,
) {
    let distance = i64::from(extent_gap(neighbor.rect.top, neighbor.rect.bottom, center_y));
    let better = match best {
        None => true,
        Some(current) if distance < current.distance => true,
        Some(current) if distance == current.distance => {
            gap(&neighbor.rect) < gap(&current.event.rect)
        }
        Some(_) => false,
    };
    if better {
        *best = Some(Nearest {
            event: neighbor,
            distance,
        });
    }
}

fn build_timed(candidates: &[PositionedEvent], context: &SelectionContext) -> NavigationOutcome {
    let selection_box = context.selection_box;
    let prev = context.previous_rect();
    let (approach, prev_center) = Approach::classify(&prev, &selection_box);

    let mut graph = NavigationGraph::unlinked(candidates.iter().map(|c| c.id));
    let mut start: Option<(EventId, (i32, i32))> = None;

    for event in candidates {
        let rect = Rect {
            top: event.rect.top.max(selection_box.top),
            bottom: event.rect.bottom.min(selection_box.bottom),
            ..event.rect
        };

        let distances = approach.start_distances(&rect, &prev, prev_center);
        if start.is_none_or(|(_, best)| distances < best) {
            start = Some((event.id, distances));
        }

        let center_x = rect.center_x();
        let center_y = rect.center_y();
        let mut up = None;
        let mut down = None;
        let mut left = None;
        let mut right = None;

        for neighbor in candidates.iter().filter(|n| n.id != event.id) {
            let shares_band = neighbor.rect.left < rect.right && neighbor.rect.right > rect.left;
            if neighbor.end <= event.start {
                if shares_band {
                    offer_vertical(&mut up, neighbor, event.start - neighbor.end, center_x);
                }
            } else if neighbor.start >= event.end && shares_band {
                offer_vertical(&mut down, neighbor, neighbor.start - event.end, center_x);
            }

            if neighbor.rect.left >= rect.right {
                offer_horizontal(&mut right, neighbor, center_y, |r| r.left - rect.right);
            } else if neighbor.rect.right <= rect.left {
                offer_horizontal(&mut left, neighbor, center_y, |r| rect.left - r.right);
            }
        }

        graph.insert(
            event.id,
            Neighbors {
                up: up.map(|n| n.event.id),
                down: down.map(|n| n.event.id),
                left: left.map(|n| n.event.id),
                right: right.map(|n| n.event.id),
            },
        );
    }

    NavigationOutcome {
        graph,
        start: start.map(|(id, _)| id),
    }
}

fn build_all_day(candidates: &[PositionedEvent], context: &SelectionContext) -> NavigationOutcome {
    let prev_column = context
        .prev_selected
        .filter(|prev| prev.all_day)
        .map(|prev| prev.column);

    let mut graph = NavigationGraph::unlinked(candidates.iter().map(|c| c.id));
    let mut same_column: Option<EventId> = None;
    let mut highest: Option<&PositionedEvent> = None;

    for event in candidates {
        if Some(event.column) == prev_column {
            same_column = Some(event.id);
        } else if highest.is_none_or(|h| event.column > h.column) {
            highest = Some(event);
        }

        let mut neighbors = Neighbors::default();
        for neighbor in candidates.iter().filter(|n| n.id != event.id) {
            if event.column.checked_sub(1) == Some(neighbor.column) {
                neighbors.set(Direction::Up, Some(neighbor.id));
            } else if neighbor.column == event.column + 1 {
                neighbors.set(Direction::Down, Some(neighbor.id));
            }
        }
        graph.insert(event.id, neighbors);
    }

    NavigationOutcome {
        graph,
        start: same_column.or(highest.map(|h| h.id)),
    }
}
