//! Markup for a single day cell.
//!
//! ## Usage
//!
//! ```
//! use pika_components::day::render_day;
//! use pika_ui::{DatePicker, PickerOptions, ViewPanel, CalendarDate};
//!
//! let picker = DatePicker::new(PickerOptions::default());
//! let rows = picker.render_at(ViewPanel::new(2024, 5), CalendarDate::new(2024, 5, 3).unwrap());
//! let html = render_day(&rows[0].cells[6], false);
//! assert!(html.contains(r#"data-pika-day="1""#));
//! ```
use pika_ui::DayCell;

/// Renders one `<td>`.
///
/// Cells outside the panel's month render as a bare `is-empty` cell unless
/// `show_outside_days` is set, in which case they get a button flagged
/// `is-outside-current-month`.
pub fn render_day(cell: &DayCell, show_outside_days: bool) -> String {
    if cell.is_empty && !show_outside_days {
        return r#"<td class="is-empty"></td>"#.to_string();
    }

    let flags = [
        (cell.is_empty, "is-outside-current-month"),
        (cell.is_disabled, "is-disabled"),
        (cell.is_today, "is-today"),
        (cell.is_selected, "is-selected"),
        (cell.is_in_range, "is-inrange"),
        (cell.is_start_range, "is-startrange"),
        (cell.is_end_range, "is-endrange"),
    ];
    let classes = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, class)| *class)
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<td data-day="{day}" class="{classes}" aria-selected="{selected}"><button class="pika-button pika-day" type="button" data-pika-year="{year}" data-pika-month="{month}" data-pika-day="{day}">{day}</button></td>"#,
        day = cell.day,
        year = cell.year,
        month = cell.month,
        selected = cell.is_selected,
    )
}
