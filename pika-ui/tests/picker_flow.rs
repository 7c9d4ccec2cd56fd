use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use pika_ui::{
    BoundField, CalendarDate, DatePicker, Listener, PickerEffect, PickerEvent, PickerEventKind,
    PickerOptions, PickerRegistry, PointerTarget, ViewPanel, YearRange,
};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn bound_popup_round_trip() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .field(BoundField::new("2024-02-10"))
            .min_date(date(2024, 0, 1))
            .max_date(date(2024, 11, 31)),
    );
    for kind in [
        PickerEventKind::Select,
        PickerEventKind::Open,
        PickerEventKind::Close,
    ] {
        let sink = sink.clone();
        picker.on(
            kind,
            Listener::new(move |event| sink.lock().push(event.kind())),
        );
    }

    let start = Instant::now();
    picker.on_trigger_click();
    assert!(picker.is_visible());
    assert_eq!(picker.panels(), &[ViewPanel::new(2024, 1)]);

    picker.on_pointer_down(PointerTarget::NextMonth, start);
    picker.on_pointer_down(PointerTarget::Day(date(2024, 2, 4)), start);
    assert_eq!(picker.field().map(BoundField::value), Some("2024-03-04"));

    let effects = picker.poll_timers(start + Duration::from_millis(150));
    assert!(effects.contains(&PickerEffect::BlurField));
    assert!(!picker.is_visible());
    assert_eq!(
        *events.lock(),
        vec![
            PickerEventKind::Open,
            PickerEventKind::Select,
            PickerEventKind::Close
        ]
    );
}

#[test]
fn draw_view_matches_panels_and_range() {
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .number_of_months(2)
            .default_date(date(2024, 3, 1))
            .start_range(date(2024, 3, 10))
            .end_range(date(2024, 4, 5))
            .year_range(YearRange::Span(2))
            .show_week_number(true),
    );
    let view = picker.draw().unwrap().clone();
    assert_eq!(view.panels.len(), 2);
    assert_eq!(view.panels[0].panel, ViewPanel::new(2024, 3));
    assert_eq!(view.panels[1].panel, ViewPanel::new(2024, 4));

    let first = &view.panels[0].title;
    assert!(first.prev.is_some() && first.next.is_none());
    assert_eq!(first.year_options.len(), 5);
    assert!(view.panels[1].title.next.is_some());

    let starts: Vec<_> = view.cells().filter(|c| c.is_start_range).collect();
    let ends: Vec<_> = view.cells().filter(|c| c.is_end_range).collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(ends.len(), 1);
    let in_range = view
        .cells()
        .filter(|c| !c.is_empty && c.is_in_range)
        .count();
    // April 11..=30 and May 1..=4.
    assert_eq!(in_range, 24);
    assert!(
        view.panels
            .iter()
            .flat_map(|panel| &panel.rows)
            .all(|row| row.week_number.is_some())
    );
}

#[test]
fn registry_keeps_one_picker_open() {
    let mut registry = PickerRegistry::new();
    let ids: Vec<_> = (0..3)
        .map(|_| {
            registry.register(DatePicker::new(
                PickerOptions::default().field(BoundField::new("")),
            ))
        })
        .collect();
    for id in &ids {
        registry.open(*id);
        assert_eq!(registry.visible_ids(), vec![*id]);
    }
    let handle = registry.get(ids[0]).unwrap();
    handle.lock().set_date(date(2025, 6, 4), true);
    assert_eq!(handle.lock().get_date(), Some(date(2025, 6, 4)));
}

#[test]
fn select_events_carry_clamped_date() {
    let picked = Arc::new(Mutex::new(None));
    let sink = picked.clone();
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .max_date(date(2024, 5, 20))
            .on_select(Listener::new(move |event| {
                if let PickerEvent::Select(date) = event {
                    *sink.lock() = Some(*date);
                }
            })),
    );
    picker.set_date(date(2030, 0, 1), false);
    assert_eq!(*picked.lock(), Some(date(2024, 5, 20)));
}
