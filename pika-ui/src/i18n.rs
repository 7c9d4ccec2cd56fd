//! Static string tables for month names, weekday names, and button labels.

/// Localized strings used by the title, table head, and date formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct I18n {
    /// Label of the previous-month button.
    pub previous_month: String,
    /// Label of the next-month button.
    pub next_month: String,
    /// Full month names, January first.
    pub months: [String; 12],
    /// Abbreviated month names, January first.
    pub months_short: [String; 12],
    /// Full weekday names, Sunday first.
    pub weekdays: [String; 7],
    /// Abbreviated weekday names, Sunday first.
    pub weekdays_short: [String; 7],
}

impl I18n {
    /// Returns the full name of a zero-based month.
    pub fn month_name(&self, month: u8) -> &str {
        &self.months[month as usize % 12]
    }

    /// Returns the abbreviated name of a zero-based month.
    pub fn month_short_name(&self, month: u8) -> &str {
        &self.months_short[month as usize % 12]
    }

    /// Returns a weekday name for a column, counting from `first_day`.
    pub fn day_name(&self, first_day: u8, column: u8, abbreviated: bool) -> &str {
        let day = (first_day as usize + column as usize) % 7;
        if abbreviated {
            &self.weekdays_short[day]
        } else {
            &self.weekdays[day]
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            previous_month: "Previous Month".to_string(),
            next_month: "Next Month".to_string(),
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .map(String::from),
            weekdays: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from),
            weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
        }
    }
}
