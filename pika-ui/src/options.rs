//! Picker options and the effective configuration they merge into.
//!
//! ## Usage
//!
//! Build a [`PickerOptions`] with its setters; every field left unset keeps
//! its current (initially default) value when passed to
//! [`DatePicker::configure`](crate::DatePicker::configure).
//!
//! ```
//! use pika_ui::{CalendarDate, PickerOptions, YearRange, DatePicker};
//!
//! let picker = DatePicker::new(
//!     PickerOptions::default()
//!         .first_day(1)
//!         .number_of_months(2)
//!         .year_range(YearRange::Bounds(2000, 2030))
//!         .min_date(CalendarDate::new(2024, 0, 1).unwrap()),
//! );
//! assert_eq!(picker.config().number_of_months, 2);
//! ```
use derive_setters::Setters;
use tracing::warn;

use crate::{
    calendar::{MAX_PANELS, MonthBounds},
    callback::{CallbackWith, DisableDayFn},
    date::CalendarDate,
    events::Listener,
    field::BoundField,
    format::DEFAULT_FORMAT,
    i18n::I18n,
};

/// Default number of years listed on each side of the shown year.
pub const DEFAULT_YEAR_SPAN: u32 = 10;
/// Largest accepted year span.
pub const MAX_YEAR_SPAN: u32 = 100;

/// Years offered by the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum YearRange {
    /// This many years on either side of the shown year.
    Span(u32),
    /// An explicit inclusive range of years.
    Bounds(i32, i32),
}

impl YearRange {
    fn normalized(self) -> Self {
        match self {
            YearRange::Span(0) => YearRange::Span(DEFAULT_YEAR_SPAN),
            YearRange::Span(span) => YearRange::Span(span.min(MAX_YEAR_SPAN)),
            bounds => bounds,
        }
    }

    /// Returns the inclusive years listed around `year`.
    pub fn years_around(&self, year: i32) -> (i32, i32) {
        match *self {
            YearRange::Span(span) => (year - span as i32, year + span as i32),
            YearRange::Bounds(low, high) => (low, high),
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange::Span(DEFAULT_YEAR_SPAN)
    }
}

/// Which panel anchors the view when a new month is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MainCalendar {
    /// The target month is the leftmost panel.
    #[default]
    Left,
    /// The target month is the rightmost panel.
    Right,
}

/// Placement of a bound picker relative to its trigger.
///
/// The default is below the trigger, aligned to its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub struct Position {
    /// Open above the trigger.
    pub top: bool,
    /// Align to the trigger's right edge.
    pub right: bool,
}

impl From<&str> for Position {
    /// Reads the `top` and `right` keywords; `bottom` and `left` are implied.
    fn from(value: &str) -> Self {
        let words = || value.split_whitespace();
        Self {
            top: words().any(|word| word.eq_ignore_ascii_case("top")),
            right: words().any(|word| word.eq_ignore_ascii_case("right")),
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from(value.as_str())
    }
}

/// Values available to title label templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelContext {
    /// Zero-based month shown by the panel.
    pub month: u8,
    /// Localized month name.
    pub month_name: String,
    /// Year shown by the panel.
    pub year: i32,
    /// Configured year suffix.
    pub year_suffix: String,
}

/// Builds a title label from a [`LabelContext`].
pub type LabelFn = CallbackWith<LabelContext, String>;

/// A label given either as a template string or as a callback.
///
/// Templates substitute `{month}`, `{year}`, and `{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelTemplate {
    /// Template string with named substitutions.
    Template(String),
    /// Callback producing the label.
    Callback(LabelFn),
}

impl LabelTemplate {
    /// Produces the label text.
    pub fn resolve(&self, context: &LabelContext) -> String {
        match self {
            LabelTemplate::Template(template) => template
                .replace("{month}", &context.month_name)
                .replace("{year}", &context.year.to_string())
                .replace("{suffix}", &context.year_suffix),
            LabelTemplate::Callback(callback) => callback.call(context.clone()),
        }
    }

    fn month_default() -> Self {
        LabelTemplate::Template("{month}".to_string())
    }

    fn year_default() -> Self {
        LabelTemplate::Template("{year}{suffix}".to_string())
    }
}

impl From<&str> for LabelTemplate {
    fn from(template: &str) -> Self {
        LabelTemplate::Template(template.to_string())
    }
}

/// Partial picker options; unset fields keep their current value.
#[derive(Clone, Default, Setters)]
#[setters(strip_option)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PickerOptions {
    /// Text field kept in sync with the selection.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub field: Option<BoundField>,
    /// Shows the picker as a popup tied to the field (defaults to having a
    /// field).
    pub bound: Option<bool>,
    /// Popup placement, e.g. `"top right"`.
    #[setters(into)]
    pub position: Option<Position>,
    /// Moves the popup so it stays inside the viewport.
    pub reposition: Option<bool>,
    /// Output and parse pattern.
    #[setters(into)]
    pub format: Option<String>,
    /// Parses field text strictly against `format`.
    pub format_strict: Option<bool>,
    /// Initial date to show (or select, with `set_default_date`).
    pub default_date: Option<CalendarDate>,
    /// Selects `default_date` instead of only showing it.
    pub set_default_date: Option<bool>,
    /// Weekday shown in the first column (0 = Sunday).
    pub first_day: Option<u8>,
    /// Earliest selectable date.
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date.
    pub max_date: Option<CalendarDate>,
    /// Years offered by the year selector.
    pub year_range: Option<YearRange>,
    /// Prefixes rows with week numbers.
    pub show_week_number: Option<bool>,
    /// Disables Saturdays and Sundays.
    pub disable_weekends: Option<bool>,
    /// Disables dates for which the predicate returns true.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub disable_day_fn: Option<DisableDayFn>,
    /// Number of month panels shown side by side (at most four).
    pub number_of_months: Option<usize>,
    /// Which panel shows the target month.
    pub main_calendar: Option<MainCalendar>,
    /// Renders into a host container instead of a positioned popup.
    pub container: Option<bool>,
    /// Extra class name on the picker root.
    #[setters(into)]
    pub theme: Option<String>,
    /// Right-to-left layout.
    pub is_rtl: Option<bool>,
    /// Text appended to the year in the title.
    #[setters(into)]
    pub year_suffix: Option<String>,
    /// Shows the year selector before the month selector.
    pub show_month_after_year: Option<bool>,
    /// Renders neighbouring months' days instead of blank cells.
    pub show_days_in_next_and_previous_months: Option<bool>,
    /// Start of the highlighted range.
    pub start_range: Option<CalendarDate>,
    /// End of the highlighted range.
    pub end_range: Option<CalendarDate>,
    /// Static string tables.
    pub i18n: Option<I18n>,
    /// Month label in the title.
    #[setters(into)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub month_label: Option<LabelTemplate>,
    /// Year label in the title.
    #[setters(into)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub year_label: Option<LabelTemplate>,
    /// Called after a date is selected.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_select: Option<Listener>,
    /// Called when the picker opens.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_open: Option<Listener>,
    /// Called when the picker closes.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_close: Option<Listener>,
    /// Called after every draw.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_draw: Option<Listener>,
}

/// The effective configuration of a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Shows the picker as a popup tied to the field.
    pub bound: bool,
    /// Popup placement.
    pub position: Position,
    /// Moves the popup so it stays inside the viewport.
    pub reposition: bool,
    /// Output and parse pattern.
    pub format: String,
    /// Parses field text strictly against `format`.
    pub format_strict: bool,
    /// Initial date to show.
    pub default_date: Option<CalendarDate>,
    /// Selects `default_date` instead of only showing it.
    pub set_default_date: bool,
    /// Weekday shown in the first column (0 = Sunday).
    pub first_day: u8,
    /// Earliest selectable date.
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date.
    pub max_date: Option<CalendarDate>,
    /// Years offered by the year selector.
    pub year_range: YearRange,
    /// Prefixes rows with week numbers.
    pub show_week_number: bool,
    /// Disables Saturdays and Sundays.
    pub disable_weekends: bool,
    /// Disables dates for which the predicate returns true.
    pub disable_day_fn: Option<DisableDayFn>,
    /// Number of month panels, in `1..=4`.
    pub number_of_months: usize,
    /// Which panel shows the target month.
    pub main_calendar: MainCalendar,
    /// Renders into a host container.
    pub container: bool,
    /// Extra class name on the picker root.
    pub theme: Option<String>,
    /// Right-to-left layout.
    pub is_rtl: bool,
    /// Text appended to the year in the title.
    pub year_suffix: String,
    /// Shows the year selector before the month selector.
    pub show_month_after_year: bool,
    /// Renders neighbouring months' days instead of blank cells.
    pub show_days_in_next_and_previous_months: bool,
    /// Start of the highlighted range.
    pub start_range: Option<CalendarDate>,
    /// End of the highlighted range.
    pub end_range: Option<CalendarDate>,
    /// Static string tables.
    pub i18n: I18n,
    /// Month label in the title.
    pub month_label: LabelTemplate,
    /// Year label in the title.
    pub year_label: LabelTemplate,
    /// Year and month limits derived from `min_date` and `max_date`.
    pub bounds: MonthBounds,
    bound_requested: Option<bool>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            bound: false,
            position: Position::default(),
            reposition: true,
            format: DEFAULT_FORMAT.to_string(),
            format_strict: false,
            default_date: None,
            set_default_date: false,
            first_day: 0,
            min_date: None,
            max_date: None,
            year_range: YearRange::default(),
            show_week_number: false,
            disable_weekends: false,
            disable_day_fn: None,
            number_of_months: 1,
            main_calendar: MainCalendar::Left,
            container: false,
            theme: None,
            is_rtl: false,
            year_suffix: String::new(),
            show_month_after_year: false,
            show_days_in_next_and_previous_months: false,
            start_range: None,
            end_range: None,
            i18n: I18n::default(),
            month_label: LabelTemplate::month_default(),
            year_label: LabelTemplate::year_default(),
            bounds: MonthBounds::default(),
            bound_requested: None,
        }
    }
}

impl PickerConfig {
    /// Merges `options` over this configuration and normalizes the result.
    ///
    /// `field`, lifecycle listeners, and other instance state carried by the
    /// options are ignored here; the picker takes them before merging.
    pub fn merge(&mut self, options: PickerOptions, has_field: bool) {
        let PickerOptions {
            bound,
            position,
            reposition,
            format,
            format_strict,
            default_date,
            set_default_date,
            first_day,
            min_date,
            max_date,
            year_range,
            show_week_number,
            disable_weekends,
            disable_day_fn,
            number_of_months,
            main_calendar,
            container,
            theme,
            is_rtl,
            year_suffix,
            show_month_after_year,
            show_days_in_next_and_previous_months,
            start_range,
            end_range,
            i18n,
            month_label,
            year_label,
            ..
        } = options;

        if bound.is_some() {
            self.bound_requested = bound;
        }
        self.bound = has_field && self.bound_requested.unwrap_or(true);
        merge_value(&mut self.position, position);
        merge_value(&mut self.reposition, reposition);
        merge_value(&mut self.format, format);
        merge_value(&mut self.format_strict, format_strict);
        merge_option(&mut self.default_date, default_date);
        merge_value(&mut self.set_default_date, set_default_date);
        if let Some(first_day) = first_day {
            self.first_day = first_day % 7;
        }
        merge_option(&mut self.min_date, min_date);
        merge_option(&mut self.max_date, max_date);
        if let Some(year_range) = year_range {
            self.year_range = year_range.normalized();
        }
        merge_value(&mut self.show_week_number, show_week_number);
        merge_value(&mut self.disable_weekends, disable_weekends);
        merge_option(&mut self.disable_day_fn, disable_day_fn);
        if let Some(count) = number_of_months {
            self.number_of_months = count.clamp(1, MAX_PANELS);
        }
        merge_value(&mut self.main_calendar, main_calendar);
        merge_value(&mut self.container, container);
        if let Some(theme) = theme {
            self.theme = Some(theme).filter(|theme| !theme.is_empty());
        }
        merge_value(&mut self.is_rtl, is_rtl);
        merge_value(&mut self.year_suffix, year_suffix);
        merge_value(&mut self.show_month_after_year, show_month_after_year);
        merge_value(
            &mut self.show_days_in_next_and_previous_months,
            show_days_in_next_and_previous_months,
        );
        merge_option(&mut self.start_range, start_range);
        merge_option(&mut self.end_range, end_range);
        merge_value(&mut self.i18n, i18n);
        merge_value(&mut self.month_label, month_label);
        merge_value(&mut self.year_label, year_label);

        if let (Some(min), Some(max)) = (self.min_date, self.max_date)
            && max < min
        {
            warn!(%min, %max, "max_date precedes min_date; clearing both");
            self.min_date = None;
            self.max_date = None;
        }
        self.bounds = MonthBounds::from_dates(self.min_date, self.max_date);
    }
}

fn merge_value<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_option<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.format, "YYYY-MM-DD");
        assert_eq!(config.number_of_months, 1);
        assert_eq!(config.year_range, YearRange::Span(10));
        assert_eq!(config.bounds.min_year, 0);
        assert_eq!(config.bounds.max_year, 9999);
        assert!(config.reposition);
        assert!(!config.bound);
    }

    #[test]
    fn test_inverted_min_max_clears_both() {
        let mut config = PickerConfig::default();
        config.merge(
            PickerOptions::default()
                .min_date(date(2024, 5, 15))
                .max_date(date(2024, 5, 1)),
            false,
        );
        assert_eq!(config.min_date, None);
        assert_eq!(config.max_date, None);
        assert_eq!(config.bounds, MonthBounds::default());
    }

    #[test]
    fn test_normalization() {
        let mut config = PickerConfig::default();
        config.merge(
            PickerOptions::default()
                .number_of_months(9)
                .year_range(YearRange::Span(500))
                .first_day(8)
                .theme(""),
            false,
        );
        assert_eq!(config.number_of_months, 4);
        assert_eq!(config.year_range, YearRange::Span(100));
        assert_eq!(config.first_day, 1);
        assert_eq!(config.theme, None);

        config.merge(
            PickerOptions::default()
                .number_of_months(0)
                .year_range(YearRange::Span(0)),
            false,
        );
        assert_eq!(config.number_of_months, 1);
        assert_eq!(config.year_range, YearRange::Span(10));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut config = PickerConfig::default();
        config.merge(PickerOptions::default().format("DD/MM/YYYY").first_day(1), false);
        config.merge(PickerOptions::default().show_week_number(true), false);
        assert_eq!(config.format, "DD/MM/YYYY");
        assert_eq!(config.first_day, 1);
        assert!(config.show_week_number);
    }

    #[test]
    fn test_bound_requires_field() {
        let mut config = PickerConfig::default();
        config.merge(PickerOptions::default().bound(true), false);
        assert!(!config.bound);
        config.merge(PickerOptions::default(), true);
        assert!(config.bound);
        config.merge(PickerOptions::default().bound(false), true);
        assert!(!config.bound);
    }

    #[test]
    fn test_position_keywords() {
        assert_eq!(Position::from("bottom left"), Position::default());
        assert_eq!(
            Position::from("top right"),
            Position {
                top: true,
                right: true
            }
        );
        assert_eq!(
            Position::from("bottom RIGHT"),
            Position {
                top: false,
                right: true
            }
        );
    }

    #[test]
    fn test_label_templates() {
        let context = LabelContext {
            month: 5,
            month_name: "June".to_string(),
            year: 2024,
            year_suffix: " AD".to_string(),
        };
        assert_eq!(LabelTemplate::year_default().resolve(&context), "2024 AD");
        assert_eq!(LabelTemplate::from("{month} ({year})").resolve(&context), "June (2024)");
        let callback = LabelTemplate::Callback(LabelFn::new(|ctx: LabelContext| {
            format!("{}/{}", ctx.month + 1, ctx.year)
        }));
        assert_eq!(callback.resolve(&context), "6/2024");
    }

    #[test]
    fn test_year_range_years_around() {
        assert_eq!(YearRange::Span(10).years_around(2024), (2014, 2034));
        assert_eq!(YearRange::Bounds(1990, 2000).years_around(2024), (1990, 2000));
    }
}
