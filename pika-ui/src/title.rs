//! Title bar state for a month panel: month and year selectors and the
//! previous/next buttons.
use crate::{
    calendar::{MonthBounds, ViewPanel},
    options::{LabelContext, PickerConfig},
};

/// One `<option>` of a title selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value passed to `goto_month` or `goto_year` when chosen.
    pub value: i32,
    /// Visible text.
    pub label: String,
    /// The option matches the panel.
    pub selected: bool,
    /// The option lies outside the navigable range.
    pub disabled: bool,
}

/// A previous- or next-month button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    /// Visible text.
    pub label: String,
    /// False when navigating would leave the allowed range.
    pub enabled: bool,
}

/// Title bar content of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleModel {
    /// Label shown over the month selector.
    pub month_label: String,
    /// Month selector options.
    pub month_options: Vec<SelectOption>,
    /// Label shown over the year selector.
    pub year_label: String,
    /// Year selector options.
    pub year_options: Vec<SelectOption>,
    /// Year selector comes first.
    pub month_after_year: bool,
    /// Present on the first panel only.
    pub prev: Option<NavButton>,
    /// Present on the last panel only.
    pub next: Option<NavButton>,
}

/// Returns false when the panel already shows the earliest navigable month.
pub fn can_go_prev(panel: ViewPanel, bounds: &MonthBounds) -> bool {
    let at_min_year = panel.year == bounds.min_year;
    !(at_min_year
        && (panel.month == 0
            || bounds
                .min_month
                .is_some_and(|min| min as i32 >= panel.month)))
}

/// Returns false when the panel already shows the latest navigable month.
pub fn can_go_next(panel: ViewPanel, bounds: &MonthBounds) -> bool {
    let at_max_year = panel.year == bounds.max_year;
    !(at_max_year
        && (panel.month == 11
            || bounds
                .max_month
                .is_some_and(|max| max as i32 <= panel.month)))
}

/// Builds the title of panel `index` out of `panel_count`.
///
/// `reference_year` is the year of the first panel; month option values are
/// offsets from it so choosing month `i` on panel `index` shows month `i` on
/// that panel.
pub fn build_title(
    config: &PickerConfig,
    index: usize,
    panel_count: usize,
    panel: ViewPanel,
    reference_year: i32,
) -> TitleModel {
    let bounds = &config.bounds;
    let is_min_year = panel.year == bounds.min_year;
    let is_max_year = panel.year == bounds.max_year;
    let offset = index as i32;
    let month = panel.month_index().unwrap_or_default();

    let month_options = (0..12u8)
        .map(|option| {
            let i = option as i32;
            SelectOption {
                value: if panel.year == reference_year {
                    i - offset
                } else {
                    12 + i - offset
                },
                label: config.i18n.month_name(option).to_string(),
                selected: option == month,
                disabled: (is_min_year && bounds.min_month.is_some_and(|min| option < min))
                    || (is_max_year && bounds.max_month.is_some_and(|max| option > max)),
            }
        })
        .collect();

    let (first_year, last_year) = config.year_range.years_around(panel.year);
    let year_options = (first_year..=last_year.min(bounds.max_year))
        .filter(|year| *year >= bounds.min_year)
        .map(|year| SelectOption {
            value: year,
            label: year.to_string(),
            selected: year == panel.year,
            disabled: false,
        })
        .collect();

    let context = LabelContext {
        month,
        month_name: config.i18n.month_name(month).to_string(),
        year: panel.year,
        year_suffix: config.year_suffix.clone(),
    };

    TitleModel {
        month_label: config.month_label.resolve(&context),
        month_options,
        year_label: config.year_label.resolve(&context),
        year_options,
        month_after_year: config.show_month_after_year,
        prev: (index == 0).then(|| NavButton {
            label: config.i18n.previous_month.clone(),
            enabled: can_go_prev(panel, bounds),
        }),
        next: (index + 1 == panel_count).then(|| NavButton {
            label: config.i18n.next_month.clone(),
            enabled: can_go_next(panel, bounds),
        }),
    }
}
