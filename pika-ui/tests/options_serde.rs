#![cfg(feature = "serde")]

use pika_ui::{CalendarDate, DatePicker, MainCalendar, PickerOptions, ViewPanel, YearRange};

#[test]
fn options_from_json() {
    let options: PickerOptions = serde_json::from_str(
        r#"{
            "firstDay": 1,
            "numberOfMonths": 2,
            "mainCalendar": "right",
            "position": "top right",
            "yearRange": [2000, 2030],
            "defaultDate": { "year": 2024, "month": 5, "day": 15 },
            "setDefaultDate": true,
            "format": "DD.MM.YYYY"
        }"#,
    )
    .unwrap();
    assert_eq!(options.year_range, Some(YearRange::Bounds(2000, 2030)));
    assert_eq!(options.main_calendar, Some(MainCalendar::Right));

    let picker = DatePicker::new(options);
    let config = picker.config();
    assert_eq!(config.first_day, 1);
    assert!(config.position.top && config.position.right);
    assert_eq!(picker.to_string(), "15.06.2024");
    assert_eq!(
        picker.panels(),
        &[ViewPanel::new(2024, 4), ViewPanel::new(2024, 5)]
    );
}

#[test]
fn year_span_and_invalid_dates() {
    let options: PickerOptions = serde_json::from_str(r#"{ "yearRange": 5 }"#).unwrap();
    assert_eq!(options.year_range, Some(YearRange::Span(5)));

    let invalid = serde_json::from_str::<PickerOptions>(
        r#"{ "minDate": { "year": 2024, "month": 1, "day": 30 } }"#,
    );
    assert!(invalid.is_err());
}

#[test]
fn dates_serialize_with_zero_based_months() {
    let date = CalendarDate::new(2024, 11, 31).unwrap();
    let json = serde_json::to_value(date).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "year": 2024, "month": 11, "day": 31 })
    );
}
