//! HTML rendering for pika date pickers.
//!
//! Every element carries a `pika-*` class (`pika-single`, `pika-lendar`,
//! `pika-title`, `pika-table`, `pika-day`) and day buttons carry
//! `data-pika-year`, `data-pika-month`, and `data-pika-day`, so a stylesheet
//! and a click handler are all a page needs.
//!
//! # Usage
//!
//! ```
//! use pika_components::render_picker;
//! use pika_ui::{CalendarDate, DatePicker, PickerOptions};
//!
//! let mut picker = DatePicker::new(
//!     PickerOptions::default().default_date(CalendarDate::new(2024, 5, 1).unwrap()),
//! );
//! picker.set_date(CalendarDate::new(2024, 5, 15).unwrap(), true);
//! let view = picker.draw().unwrap().clone();
//! let html = render_picker(picker.config(), &view);
//! assert!(html.contains(r#"<td data-day="15" class="is-selected" aria-selected="true">"#));
//! ```
//!
//! The piecewise renderers in [`day`], [`table`], and [`title`] can be used on
//! their own when a host lays the picker out differently.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod escape;

pub mod day;
pub mod picker;
pub mod table;
pub mod title;

pub use crate::picker::{render, render_panel, render_picker, root_classes};
