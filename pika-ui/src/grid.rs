//! Calendar grid computation for a single month panel.
//!
//! ## Usage
//!
//! Build [`GridConstraints`] with its setters and call [`render_month`] for
//! each visible panel. The result is a pure function of its inputs.
use derive_setters::Setters;
use smallvec::SmallVec;

use crate::{
    calendar::ViewPanel,
    callback::DisableDayFn,
    date::{CalendarDate, days_in_month, is_weekend, week_number},
};

/// Number of columns in a calendar row.
pub const DAYS_PER_WEEK: usize = 7;

/// Constraints and highlights applied while computing a month grid.
#[derive(Clone, Debug, Default, PartialEq, Setters)]
pub struct GridConstraints {
    /// Dates before this one are disabled.
    #[setters(strip_option)]
    pub min_date: Option<CalendarDate>,
    /// Dates after this one are disabled.
    #[setters(strip_option)]
    pub max_date: Option<CalendarDate>,
    /// Disables Saturdays and Sundays.
    pub disable_weekends: bool,
    /// Disables any date for which the predicate returns true.
    #[setters(strip_option)]
    pub disable_day_fn: Option<DisableDayFn>,
    /// The selected date.
    #[setters(strip_option)]
    pub selected_date: Option<CalendarDate>,
    /// Start of the highlighted range.
    #[setters(strip_option)]
    pub range_start: Option<CalendarDate>,
    /// End of the highlighted range.
    #[setters(strip_option)]
    pub range_end: Option<CalendarDate>,
    /// Weekday shown in the first column (0 = Sunday).
    pub first_day: u8,
    /// Renders days of the neighbouring months instead of blank cells.
    pub show_outside_days: bool,
    /// Prefixes every row with its week number.
    pub show_week_number: bool,
}

impl GridConstraints {
    /// Returns true when the date may not be selected.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.min_date.is_some_and(|min| date < min)
            || self.max_date.is_some_and(|max| date > max)
            || (self.disable_weekends && is_weekend(date))
            || self
                .disable_day_fn
                .as_ref()
                .is_some_and(|predicate| predicate.call(date))
    }

    fn cell(&self, date: CalendarDate, today: CalendarDate, is_empty: bool) -> DayCell {
        let (is_in_range, is_start_range, is_end_range) = match (self.range_start, self.range_end) {
            (Some(start), Some(end)) => (start < date && date < end, start == date, end == date),
            (Some(start), None) => (false, start == date, false),
            (None, Some(end)) => (false, false, end == date),
            (None, None) => (false, false, false),
        };
        DayCell {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            is_empty,
            is_today: date == today,
            is_selected: self.selected_date == Some(date),
            is_disabled: self.is_disabled(date),
            is_in_range,
            is_start_range,
            is_end_range,
        }
    }
}

/// One day square of a month grid with its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Year of the date the cell represents.
    pub year: i32,
    /// Zero-based month of the date the cell represents.
    pub month: u8,
    /// Day of the month.
    pub day: u8,
    /// The date belongs to the previous or next month.
    pub is_empty: bool,
    /// The date is today.
    pub is_today: bool,
    /// The date is the selected date.
    pub is_selected: bool,
    /// The date is outside the allowed bounds or rejected by a rule.
    pub is_disabled: bool,
    /// The date lies strictly between both range endpoints.
    pub is_in_range: bool,
    /// The date is the range start.
    pub is_start_range: bool,
    /// The date is the range end.
    pub is_end_range: bool,
}

impl DayCell {
    /// Returns the date the cell represents.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_overflowing(self.year, self.month as i32, self.day as i32)
    }
}

/// One row of seven day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// Week-of-year number, present when week numbers are shown.
    pub week_number: Option<u32>,
    /// The row's cells in column order.
    pub cells: SmallVec<[DayCell; DAYS_PER_WEEK]>,
}

/// Returns how many leading cells precede the 1st of the month.
pub fn leading_cells(year: i32, month: u8, first_day: u8) -> usize {
    let first = CalendarDate::from_overflowing(year, month as i32, 1);
    (first.weekday() as usize + DAYS_PER_WEEK - (first_day as usize % DAYS_PER_WEEK)) % DAYS_PER_WEEK
}

/// Returns the number of cells in the month grid: the smallest multiple of
/// seven that holds the leading cells and every day of the month.
///
/// Months past December roll into the following years.
pub fn total_cells(year: i32, month: u8, first_day: u8) -> usize {
    let first = CalendarDate::from_overflowing(year, month as i32, 1);
    let days = days_in_month(first.year(), first.month()) as usize;
    let used = days + leading_cells(year, month, first_day);
    used.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK
}

/// Computes the rows of a month panel.
///
/// Cells before the 1st and after the last day carry the neighbouring
/// months' dates and are flagged `is_empty`. Every flag is evaluated against
/// the cell's actual date.
pub fn render_month(
    panel: ViewPanel,
    constraints: &GridConstraints,
    today: CalendarDate,
) -> Vec<WeekRow> {
    let first = panel.first_day();
    let (year, month) = (first.year(), first.month());
    let days = days_in_month(year, month) as usize;
    let before = leading_cells(year, month, constraints.first_day);
    let cells = total_cells(year, month, constraints.first_day);

    let mut rows = Vec::with_capacity(cells / DAYS_PER_WEEK);
    let mut row = SmallVec::new();
    for index in 0..cells {
        let offset = index as i64 - before as i64;
        let date = first.add_days(offset);
        let is_empty = index < before || index >= days + before;
        row.push(constraints.cell(date, today, is_empty));

        if row.len() == DAYS_PER_WEEK {
            let week_number = constraints
                .show_week_number
                .then(|| week_number(year, month as i32, offset as i32));
            rows.push(WeekRow {
                week_number,
                cells: std::mem::take(&mut row),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn cells(rows: &[WeekRow]) -> Vec<DayCell> {
        rows.iter().flat_map(|row| row.cells.iter().copied()).collect()
    }

    #[test]
    fn test_cell_count_is_multiple_of_seven() {
        for year in [1900, 2000, 2015, 2023, 2024] {
            for month in 0..12 {
                for first_day in 0..7 {
                    let total = total_cells(year, month, first_day);
                    let needed = days_in_month(year, month) as usize
                        + leading_cells(year, month, first_day);
                    assert_eq!(total % 7, 0);
                    assert!(total >= needed);
                    assert!(total < needed + 7);
                }
            }
        }
    }

    #[test]
    fn test_february_2015_fits_four_rows() {
        // 2015-02-01 is a Sunday.
        let rows = render_month(
            ViewPanel::new(2015, 1),
            &GridConstraints::default(),
            date(2000, 0, 1),
        );
        assert_eq!(rows.len(), 4);
        assert!(cells(&rows).iter().all(|cell| !cell.is_empty));
    }

    #[test]
    fn test_leading_cells_follow_first_day() {
        // 2024-06-01 is a Saturday.
        assert_eq!(leading_cells(2024, 5, 0), 6);
        assert_eq!(leading_cells(2024, 5, 1), 5);
        assert_eq!(leading_cells(2024, 5, 6), 0);
    }

    #[test]
    fn test_total_cells_rolls_past_december() {
        assert_eq!(total_cells(2024, 12, 0), total_cells(2025, 0, 0));
        assert_eq!(total_cells(2014, 13, 1), total_cells(2015, 1, 1));
        assert_eq!(total_cells(2015, 1, 0), 28);
    }

    #[test]
    fn test_outside_cells_carry_neighbouring_dates() {
        let rows = render_month(
            ViewPanel::new(2024, 0),
            &GridConstraints::default(),
            date(2000, 0, 1),
        );
        let all = cells(&rows);
        // 2024-01-01 is a Monday: one leading Sunday from December 2023.
        assert_eq!(all[0].date(), date(2023, 11, 31));
        assert!(all[0].is_empty);
        assert_eq!(all[1].date(), date(2024, 0, 1));
        assert!(!all[1].is_empty);
        let last = all.last().unwrap();
        assert_eq!(last.date(), date(2024, 1, 3));
        assert!(last.is_empty);
    }

    #[test]
    fn test_flags() {
        let constraints = GridConstraints::default()
            .min_date(date(2024, 5, 3))
            .max_date(date(2024, 5, 27))
            .selected_date(date(2024, 5, 12))
            .range_start(date(2024, 5, 10))
            .range_end(date(2024, 5, 14));
        let today = date(2024, 5, 20);
        let all = cells(&render_month(ViewPanel::new(2024, 5), &constraints, today));
        let find = |day: u8| {
            *all.iter()
                .find(|cell| !cell.is_empty && cell.day == day)
                .unwrap()
        };
        assert!(find(2).is_disabled);
        assert!(!find(3).is_disabled);
        assert!(find(28).is_disabled);
        assert!(find(12).is_selected);
        assert!(find(20).is_today);
        assert!(find(10).is_start_range && !find(10).is_in_range);
        assert!(find(11).is_in_range && find(13).is_in_range);
        assert!(find(14).is_end_range && !find(14).is_in_range);
        assert!(!find(15).is_in_range);
    }

    #[test]
    fn test_weekend_and_predicate_disable() {
        let constraints = GridConstraints::default()
            .disable_weekends(true)
            .disable_day_fn(DisableDayFn::new(|d: CalendarDate| d.day() == 13));
        assert!(constraints.is_disabled(date(2024, 5, 15)));
        assert!(constraints.is_disabled(date(2024, 5, 13)));
        assert!(!constraints.is_disabled(date(2024, 5, 14)));
    }

    #[test]
    fn test_week_numbers() {
        let constraints = GridConstraints::default()
            .first_day(1)
            .show_week_number(true);
        let rows = render_month(ViewPanel::new(2024, 0), &constraints, date(2000, 0, 1));
        let numbers: Vec<Option<u32>> = rows.iter().map(|row| row.week_number).collect();
        assert_eq!(
            numbers,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        let plain = render_month(
            ViewPanel::new(2024, 0),
            &GridConstraints::default(),
            date(2000, 0, 1),
        );
        assert!(plain.iter().all(|row| row.week_number.is_none()));
    }

    #[test]
    fn test_render_is_repeatable() {
        let constraints = GridConstraints::default().selected_date(date(2024, 1, 29));
        let today = date(2024, 1, 1);
        let first = render_month(ViewPanel::new(2024, 1), &constraints, today);
        let second = render_month(ViewPanel::new(2024, 1), &constraints, today);
        assert_eq!(first, second);
    }
}
