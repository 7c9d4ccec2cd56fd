//! pika is a headless calendar date picker.
//!
//! The crate owns everything a date picker decides: date math, the month
//! grid, which months are visible, what may be selected, and when the popup
//! opens or closes. Drawing is left to the host; [`DatePicker::draw`] returns
//! a [`CalendarView`] describing every panel, and the `pika-components` crate
//! turns that view into HTML.
//!
//! # Quick start
//!
//! ```
//! use pika_ui::{CalendarDate, DatePicker, Listener, PickerEvent, PickerEventKind, PickerOptions};
//!
//! let mut picker = DatePicker::new(
//!     PickerOptions::default()
//!         .number_of_months(2)
//!         .first_day(1)
//!         .min_date(CalendarDate::new(2024, 0, 1).unwrap()),
//! );
//! picker.on(
//!     PickerEventKind::Select,
//!     Listener::new(|event| {
//!         if let PickerEvent::Select(date) = event {
//!             println!("picked {date}");
//!         }
//!     }),
//! );
//! picker.set_date("2024-03-15", false);
//!
//! let view = picker.draw().unwrap();
//! assert_eq!(view.panels.len(), 2);
//! assert!(view.cells().any(|cell| cell.is_selected));
//! ```
//!
//! # Months
//!
//! Months are zero based everywhere (`0` is January). [`ViewPanel`] keeps a
//! signed month so navigation can step past either end of the year before
//! [`calendar::adjust_calendar`] folds it back.
//!
//! # Binding to a text field
//!
//! A picker created with a [`BoundField`] behaves as a popup. The host
//! forwards focus, blur, pointer and click input through the `on_*` methods
//! and applies the [`PickerEffect`]s returned by [`DatePicker::poll_timers`].
//!
//! # Features
//!
//! - `serde`: deserializes [`PickerOptions`] and serializes dates and string
//!   tables.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod calendar;
pub mod callback;
pub mod date;
pub mod debounce;
pub mod events;
pub mod field;
pub mod format;
pub mod grid;
pub mod i18n;
pub mod options;
pub mod picker;
pub mod position;
pub mod registry;
pub mod title;
pub mod view;

pub use crate::{
    calendar::{MAX_PANELS, MonthBounds, ViewPanel, adjust_calendar},
    callback::{CallbackWith, DisableDayFn},
    date::{CalendarDate, LocalDateTime},
    events::{Listener, Listeners, PickerEvent, PickerEventKind},
    field::BoundField,
    format::{DEFAULT_FORMAT, DateParseError},
    grid::{DayCell, GridConstraints, WeekRow},
    i18n::I18n,
    options::{
        LabelContext, LabelFn, LabelTemplate, MainCalendar, PickerConfig, PickerOptions, Position,
        YearRange,
    },
    picker::{ClickOrigin, DateInput, DatePicker, PickerEffect, PointerTarget, SelectKind},
    position::{PositionInput, Rect},
    registry::{PickerHandle, PickerId, PickerRegistry},
    title::{NavButton, SelectOption, TitleModel},
    view::{CalendarView, PanelView},
};
