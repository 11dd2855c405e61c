use chrono::NaiveDate;
use daygrid_core::{
    Direction, EventId, EventRecord, EventWindow, LayoutSettings, PreviousSelection, Rect,
    SelectionContext, build_navigation, julian::julian_day, selected_events,
};

fn day() -> i32 {
    julian_day(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
}

fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 20)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn settings() -> LayoutSettings {
    LayoutSettings {
        cell_height: 60.0,
        hour_gap: 0,
        cell_margin: 0,
        min_event_height: 0,
        all_day_row_height: 30,
        min_duration_minutes: Some(0),
    }
}

#[test]
fn overlapping_pair_and_later_event_form_two_clusters() {
    let events = vec![
        EventRecord::from_datetimes(EventId(3), "Lunch", at(10, 50), at(11, 40)).unwrap(),
        EventRecord::from_datetimes(EventId(1), "Standup", at(9, 0), at(10, 0)).unwrap(),
        EventRecord::from_datetimes(EventId(2), "Review", at(9, 20), at(10, 20)).unwrap(),
    ];
    let mut window = EventWindow::sorted(day(), 7, events).unwrap();

    let report = window.layout(settings().min_duration_minutes());

    let placement: Vec<_> = window
        .events()
        .iter()
        .map(|e| (e.id, e.column, e.max_columns))
        .collect();
    assert_eq!(
        placement,
        vec![
            (EventId(1), 0, 2),
            (EventId(2), 1, 2),
            (EventId(3), 0, 1),
        ]
    );
    assert_eq!(report.timed_clusters, 2);
}

#[test]
fn overlapping_all_day_events_share_width() {
    let first = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let events = vec![
        EventRecord::from_dates(EventId(1), "Conference", first, first + chrono::Duration::days(2))
            .unwrap(),
        EventRecord::from_dates(
            EventId(2),
            "Holiday",
            first + chrono::Duration::days(1),
            first + chrono::Duration::days(1),
        )
        .unwrap(),
    ];
    let mut window = EventWindow::new(day(), 7, events).unwrap();

    window.layout(0);

    let conference = window.get(EventId(1)).unwrap();
    let holiday = window.get(EventId(2)).unwrap();
    assert_ne!(conference.column, holiday.column);
    assert_eq!(conference.max_columns, 2);
    assert_eq!(holiday.max_columns, 2);
}

#[test]
fn sixty_five_way_overlap_is_reported_not_hidden() {
    let events: Vec<_> = (0..65)
        .map(|i| EventRecord::timed(EventId(i), format!("slot {i:02}"), day(), 540, 600))
        .collect();
    let mut window = EventWindow::new(day(), 7, events).unwrap();

    let report = window.layout(0);

    assert!(report.has_collisions());
    assert_eq!(report.clamped, vec![EventId(64)]);
    assert_eq!(window.get(EventId(63)).map(|e| e.column), Some(63));
    assert_eq!(window.get(EventId(64)).map(|e| e.column), Some(63));
}

#[test]
fn selection_moving_right_focuses_event_level_with_previous_one() {
    // Morning column on the left, afternoon pair stacked on the right day.
    let events = vec![
        EventRecord::timed(EventId(1), "Focus", day(), 600, 660),
        EventRecord::timed(EventId(2), "Sync", day() + 1, 480, 570),
        EventRecord::timed(EventId(3), "Retro", day() + 1, 570, 690),
    ];
    let mut window = EventWindow::sorted(day(), 7, events).unwrap();
    window.layout(0);

    let geometry = settings().geometry();
    let left_column = geometry.position_day(window.events(), day(), 0, 0, 100);
    let right_column = geometry.position_day(window.events(), day() + 1, 100, 0, 100);

    let prev_box = Rect::new(0, 600, 100, 660);
    let selection_box = Rect::new(100, 420, 200, 720);
    let selected = selected_events(&right_column, &selection_box);
    assert_eq!(selected.len(), 2);

    let mut context = SelectionContext::new(selection_box, prev_box);
    context.prev_selected = Some(PreviousSelection::of(&left_column[0]));

    let outcome = build_navigation(&selected, &context);

    assert_eq!(outcome.start, Some(EventId(3)));
    assert_eq!(outcome.graph.step(EventId(3), Direction::Up), Some(EventId(2)));
    assert_eq!(outcome.graph.step(EventId(2), Direction::Down), Some(EventId(3)));
}

#[test]
fn relayout_is_idempotent() {
    let events = vec![
        EventRecord::timed(EventId(1), "A", day(), 480, 600),
        EventRecord::timed(EventId(2), "B", day(), 490, 520),
        EventRecord::timed(EventId(3), "C", day(), 500, 505),
        EventRecord::timed(EventId(4), "D", day(), 530, 700),
    ];
    let mut window = EventWindow::sorted(day(), 7, events).unwrap();

    window.layout(15);
    let first: Vec<_> = window.events().to_vec();
    window.layout(15);

    assert_eq!(window.events(), first.as_slice());
}
