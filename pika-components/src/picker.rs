//! Markup for the whole picker element.
//!
//! ## Usage
//!
//! ```
//! use pika_components::picker::render;
//! use pika_ui::{DatePicker, PickerOptions};
//!
//! let picker = DatePicker::new(PickerOptions::default().theme("dark"));
//! let html = render(&picker);
//! assert!(html.starts_with(r#"<div class="pika-single dark">"#));
//! ```
use pika_ui::{CalendarDate, CalendarView, DatePicker, PanelView, PickerConfig};
use tracing::trace;

use crate::{escape::escape, table::render_table, title::render_title};

/// Class list of the picker root.
pub fn root_classes(config: &PickerConfig, visible: bool) -> String {
    let mut classes = vec!["pika-single".to_string()];
    if config.is_rtl {
        classes.push("is-rtl".to_string());
    }
    if let Some(theme) = &config.theme {
        classes.push(escape(theme));
    }
    if config.bound {
        classes.push("is-bound".to_string());
    }
    if !visible {
        classes.push("is-hidden".to_string());
    }
    classes.join(" ")
}

/// Renders one `pika-lendar` panel: title bar and table.
pub fn render_panel(config: &PickerConfig, panel: &PanelView) -> String {
    format!(
        r#"<div class="pika-lendar">{}{}</div>"#,
        render_title(&panel.title),
        render_table(config, &panel.rows)
    )
}

/// Renders the inner markup of every panel, in display order.
pub fn render_picker(config: &PickerConfig, view: &CalendarView) -> String {
    trace!(panels = view.panels.len(), "rendering picker markup");
    view.panels
        .iter()
        .map(|panel| render_panel(config, panel))
        .collect()
}

/// Renders the picker root element with its panels.
///
/// A hidden picker keeps its last drawn panels; one that was never drawn is
/// rendered from its current state.
pub fn render(picker: &DatePicker) -> String {
    let config = picker.config();
    let inner = match picker.view() {
        Some(view) => render_picker(config, view),
        None => render_picker(config, &picker.build_view(CalendarDate::today())),
    };
    format!(
        r#"<div class="{}">{inner}</div>"#,
        root_classes(config, picker.is_visible())
    )
}
