use pika_components::{render, render_picker};
use pika_ui::{BoundField, CalendarDate, DatePicker, PickerOptions};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn week_numbers_lead_each_row() {
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .show_week_number(true)
            .default_date(date(2015, 1, 1)),
    );
    let view = picker.draw().unwrap().clone();
    let html = render_picker(picker.config(), &view);
    // February 2015 starts on a Sunday and fills exactly four rows.
    for week in 6..=9 {
        assert!(html.contains(&format!(r#"<tr><td class="pika-week">{week}</td>"#)));
    }
}

#[test]
fn rtl_rows_end_with_week_number() {
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .is_rtl(true)
            .show_week_number(true)
            .default_date(date(2015, 1, 1)),
    );
    let view = picker.draw().unwrap().clone();
    let html = render_picker(picker.config(), &view);
    assert!(html.contains(r#"<td class="pika-week">6</td></tr>"#));
    assert!(html.contains(r#"<tr><td data-day="7" "#));
}

#[test]
fn outside_days_render_as_buttons_when_enabled() {
    let options = || PickerOptions::default().default_date(date(2024, 5, 1));

    let mut hidden_outside = DatePicker::new(options());
    let view = hidden_outside.draw().unwrap().clone();
    let html = render_picker(hidden_outside.config(), &view);
    assert_eq!(html.matches(r#"<td class="is-empty"></td>"#).count(), 6 + 6);

    let mut shown_outside = DatePicker::new(options().show_days_in_next_and_previous_months(true));
    let view = shown_outside.draw().unwrap().clone();
    let html = render_picker(shown_outside.config(), &view);
    assert!(!html.contains("is-empty"));
    assert!(html.contains(r#"<td data-day="26" class="is-outside-current-month" aria-selected="false"><button class="pika-button pika-day" type="button" data-pika-year="2024" data-pika-month="4" data-pika-day="26">"#));
}

#[test]
fn bound_picker_markup_follows_visibility() {
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .field(BoundField::new("2024-06-15"))
            .theme("dark"),
    );
    assert!(render(&picker).starts_with(r#"<div class="pika-single dark is-bound is-hidden">"#));
    picker.show();
    let html = render(&picker);
    assert!(html.starts_with(r#"<div class="pika-single dark is-bound">"#));
    assert!(html.contains(r#"class="is-selected" aria-selected="true""#));
}

#[test]
fn labels_are_escaped() {
    let mut picker = DatePicker::new(
        PickerOptions::default()
            .year_suffix("<b>")
            .default_date(date(2024, 0, 1)),
    );
    let view = picker.draw().unwrap().clone();
    let html = render_picker(picker.config(), &view);
    assert!(html.contains("2024&lt;b&gt;"));
    assert!(!html.contains("<b>"));
}
