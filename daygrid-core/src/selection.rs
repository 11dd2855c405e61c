//! Hit-testing events against the selection box and taps.

use crate::geometry::{PositionedEvent, Rect};

/// Events touched by the selection box, in input order.
pub fn selected_events(positioned: &[PositionedEvent], selection_box: &Rect) -> Vec<PositionedEvent> {
    positioned
        .iter()
        .filter(|event| event.rect.intersects_selection(selection_box))
        .cloned()
        .collect()
}

/// Event nearest to a point; the earliest one wins ties.
pub fn closest_event(positioned: &[PositionedEvent], x: f32, y: f32) -> Option<&PositionedEvent> {
    let mut closest: Option<(&PositionedEvent, f32)> = None;

    for event in positioned {
        let distance = event.rect.distance_to(x, y);
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((event, distance));
        }
    }

    closest.map(|(event, _)| event)
}
