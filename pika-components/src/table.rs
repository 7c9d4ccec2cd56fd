//! Markup for the month table: head, week numbers, rows, and body.
//!
//! ## Usage
//!
//! ```
//! use pika_components::table::render_table;
//! use pika_ui::{DatePicker, PickerOptions};
//!
//! let picker = DatePicker::new(PickerOptions::default().show_week_number(true));
//! let rows = picker.render(2024, 5);
//! let html = render_table(picker.config(), &rows);
//! assert!(html.starts_with(r#"<table cellpadding="0" cellspacing="0" class="pika-table">"#));
//! assert!(html.contains(r#"<td class="pika-week">"#));
//! ```
use pika_ui::{PickerConfig, WeekRow, grid::DAYS_PER_WEEK};

use crate::{day::render_day, escape::escape};

/// Renders the week-number cell.
pub fn render_week(week_number: u32) -> String {
    format!(r#"<td class="pika-week">{week_number}</td>"#)
}

/// Joins cell markup into a `<tr>`, reversing the cells for right-to-left.
pub fn render_row(mut cells: Vec<String>, is_rtl: bool) -> String {
    if is_rtl {
        cells.reverse();
    }
    format!("<tr>{}</tr>", cells.concat())
}

/// Wraps rendered rows in a `<tbody>`.
pub fn render_body(rows: &[String]) -> String {
    format!("<tbody>{}</tbody>", rows.concat())
}

/// Renders the weekday header, starting at the configured first day.
pub fn render_head(config: &PickerConfig) -> String {
    let mut cells = Vec::with_capacity(DAYS_PER_WEEK + 1);
    if config.show_week_number {
        cells.push("<th></th>".to_string());
    }
    for column in 0..DAYS_PER_WEEK as u8 {
        let full = config.i18n.day_name(config.first_day, column, false);
        let short = config.i18n.day_name(config.first_day, column, true);
        cells.push(format!(
            r#"<th scope="col"><abbr title="{}">{}</abbr></th>"#,
            escape(full),
            escape(short)
        ));
    }
    if config.is_rtl {
        cells.reverse();
    }
    format!("<thead><tr>{}</tr></thead>", cells.concat())
}

/// Renders the full `<table>` for one panel's rows.
pub fn render_table(config: &PickerConfig, rows: &[WeekRow]) -> String {
    let body: Vec<String> = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(DAYS_PER_WEEK + 1);
            if let Some(week_number) = row.week_number {
                cells.push(render_week(week_number));
            }
            cells.extend(
                row.cells
                    .iter()
                    .map(|cell| render_day(cell, config.show_days_in_next_and_previous_months)),
            );
            render_row(cells, config.is_rtl)
        })
        .collect();
    format!(
        r#"<table cellpadding="0" cellspacing="0" class="pika-table">{}{}</table>"#,
        render_head(config),
        render_body(&body)
    )
}
