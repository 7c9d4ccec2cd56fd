//! Visible month panels and their normalization rules.
use crate::date::CalendarDate;

/// Maximum number of side-by-side month panels.
pub const MAX_PANELS: usize = 4;

/// One visible month grid: a year and a zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPanel {
    /// Full year.
    pub year: i32,
    /// Month, normalized into `0..=11` by [`adjust_calendar`].
    pub month: i32,
}

impl ViewPanel {
    /// Creates a panel without normalizing it.
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Returns the panel showing the month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
        }
    }

    /// Returns the first day shown by the panel.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_overflowing(self.year, self.month, 1)
    }

    /// Returns the last day shown by the panel.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::from_overflowing(self.year, self.month + 1, 0)
    }

    /// Returns the month as an index when it is normalized.
    pub fn month_index(&self) -> Option<u8> {
        u8::try_from(self.month).ok().filter(|month| *month < 12)
    }
}

/// Moves month overflow into the year with a single division step.
///
/// Negative months borrow `ceil(|month| / 12)` years and gain twelve months;
/// months above eleven carry `floor(month / 12)` years and lose twelve. One
/// step lands in `0..=11` for every month in `-12..=23`, which covers every
/// navigation the picker performs.
pub fn adjust_calendar(mut panel: ViewPanel) -> ViewPanel {
    if panel.month < 0 {
        panel.year -= (panel.month.unsigned_abs() as i32 + 11) / 12;
        panel.month += 12;
    }
    if panel.month > 11 {
        panel.year += panel.month / 12;
        panel.month -= 12;
    }
    panel
}

/// Returns true when [`adjust_calendar`] normalizes `month` in one step.
pub fn is_single_step_month(month: i32) -> bool {
    (-12..=23).contains(&month)
}

/// Year and month limits derived from the minimum and maximum dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    /// Earliest navigable year.
    pub min_year: i32,
    /// Latest navigable year.
    pub max_year: i32,
    /// Earliest navigable month within `min_year`.
    pub min_month: Option<u8>,
    /// Latest navigable month within `max_year`.
    pub max_month: Option<u8>,
}

impl MonthBounds {
    /// Year used when no minimum date is configured.
    pub const DEFAULT_MIN_YEAR: i32 = 0;
    /// Year used when no maximum date is configured.
    pub const DEFAULT_MAX_YEAR: i32 = 9999;

    /// Derives the bounds from optional minimum and maximum dates.
    pub fn from_dates(min_date: Option<CalendarDate>, max_date: Option<CalendarDate>) -> Self {
        Self {
            min_year: min_date.map_or(Self::DEFAULT_MIN_YEAR, |date| date.year()),
            max_year: max_date.map_or(Self::DEFAULT_MAX_YEAR, |date| date.year()),
            min_month: min_date.map(|date| date.month()),
            max_month: max_date.map(|date| date.month()),
        }
    }

    /// Clamps the panel year into the bounds, and the month when the year sits
    /// on a bound.
    pub fn clamp(&self, mut panel: ViewPanel) -> ViewPanel {
        if panel.year <= self.min_year {
            panel.year = self.min_year;
            if let Some(min_month) = self.min_month
                && panel.month < min_month as i32
            {
                panel.month = min_month as i32;
            }
        }
        if panel.year >= self.max_year {
            panel.year = self.max_year;
            if let Some(max_month) = self.max_month
                && panel.month > max_month as i32
            {
                panel.month = max_month as i32;
            }
        }
        panel
    }
}

impl Default for MonthBounds {
    fn default() -> Self {
        Self::from_dates(None, None)
    }
}

/// Derives `count` consecutive panels starting at `first`.
///
/// The first panel is normalized and clamped; the rest follow it month by
/// month.
pub fn derive_panels(first: ViewPanel, count: usize, bounds: &MonthBounds) -> Vec<ViewPanel> {
    let first = bounds.clamp(adjust_calendar(first));
    let count = count.clamp(1, MAX_PANELS);
    (0..count)
        .map(|offset| {
            adjust_calendar(ViewPanel {
                year: first.year,
                month: first.month + offset as i32,
            })
        })
        .collect()
}

/// Returns true when `date` falls inside the span covered by `panels`.
pub fn panels_cover(panels: &[ViewPanel], date: CalendarDate) -> bool {
    match (panels.first(), panels.last()) {
        (Some(first), Some(last)) => first.first_day() <= date && date <= last.last_day(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_calendar_rollover() {
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, -1)),
            ViewPanel::new(2023, 11)
        );
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, 12)),
            ViewPanel::new(2025, 0)
        );
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, 5)),
            ViewPanel::new(2024, 5)
        );
    }

    #[test]
    fn test_adjust_calendar_single_step_range() {
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, -12)),
            ViewPanel::new(2023, 0)
        );
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, 23)),
            ViewPanel::new(2025, 11)
        );
        // Outside the single-step range the month stays unnormalized.
        assert_eq!(
            adjust_calendar(ViewPanel::new(2024, -13)),
            ViewPanel::new(2022, -1)
        );
        assert!(is_single_step_month(-12));
        assert!(!is_single_step_month(24));
    }

    #[test]
    fn test_derive_panels_crosses_year() {
        let panels = derive_panels(ViewPanel::new(2024, 10), 3, &MonthBounds::default());
        assert_eq!(
            panels,
            vec![
                ViewPanel::new(2024, 10),
                ViewPanel::new(2024, 11),
                ViewPanel::new(2025, 0),
            ]
        );
    }

    #[test]
    fn test_derive_panels_caps_count() {
        let panels = derive_panels(ViewPanel::new(2024, 0), 9, &MonthBounds::default());
        assert_eq!(panels.len(), MAX_PANELS);
        let panels = derive_panels(ViewPanel::new(2024, 0), 0, &MonthBounds::default());
        assert_eq!(panels.len(), 1);
    }

    #[test]
    fn test_clamp_to_min_and_max() {
        let bounds = MonthBounds::from_dates(
            CalendarDate::new(2024, 3, 10),
            CalendarDate::new(2025, 7, 1),
        );
        assert_eq!(bounds.clamp(ViewPanel::new(2023, 11)), ViewPanel::new(2024, 11));
        assert_eq!(bounds.clamp(ViewPanel::new(2024, 1)), ViewPanel::new(2024, 3));
        assert_eq!(bounds.clamp(ViewPanel::new(2024, 6)), ViewPanel::new(2024, 6));
        assert_eq!(bounds.clamp(ViewPanel::new(2026, 0)), ViewPanel::new(2025, 0));
        assert_eq!(bounds.clamp(ViewPanel::new(2025, 9)), ViewPanel::new(2025, 7));
    }

    #[test]
    fn test_panels_cover() {
        let panels = [ViewPanel::new(2024, 0), ViewPanel::new(2024, 1)];
        assert!(panels_cover(&panels, CalendarDate::new(2024, 0, 1).unwrap()));
        assert!(panels_cover(&panels, CalendarDate::new(2024, 1, 29).unwrap()));
        assert!(!panels_cover(&panels, CalendarDate::new(2024, 2, 1).unwrap()));
        assert!(!panels_cover(&[], CalendarDate::new(2024, 2, 1).unwrap()));
    }
}
