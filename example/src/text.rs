//! Terminal rendering of a drawn calendar view.
use console::style;
use pika_ui::{CalendarView, DayCell, PanelView, PickerConfig};

const CELL_WIDTH: usize = 3;

fn day_cell(cell: &DayCell, show_outside_days: bool) -> String {
    if cell.is_empty && !show_outside_days {
        return " ".repeat(CELL_WIDTH);
    }
    let text = format!("{:>width$}", cell.day, width = CELL_WIDTH);
    let mut styled = style(text);
    if cell.is_empty || cell.is_disabled {
        styled = styled.dim();
    }
    if cell.is_today {
        styled = styled.underlined();
    }
    if cell.is_in_range || cell.is_start_range || cell.is_end_range {
        styled = styled.cyan();
    }
    if cell.is_selected {
        styled = styled.reverse().bold();
    }
    styled.to_string()
}

fn panel_lines(config: &PickerConfig, panel: &PanelView) -> Vec<String> {
    let title = &panel.title;
    let heading = if title.month_after_year {
        format!("{} {}", title.year_label, title.month_label)
    } else {
        format!("{} {}", title.month_label, title.year_label)
    };
    let week_column = if config.show_week_number { "   " } else { "" };
    let mut lines = vec![format!("{week_column}{heading}")];

    let mut names: Vec<String> = (0..7u8)
        .map(|column| {
            let name: String = config
                .i18n
                .day_name(config.first_day, column, true)
                .chars()
                .take(2)
                .collect();
            format!("{name:>width$}", width = CELL_WIDTH)
        })
        .collect();
    if config.is_rtl {
        names.reverse();
    }
    lines.push(format!("{week_column}{}", names.concat()));

    for row in &panel.rows {
        let mut cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| day_cell(cell, config.show_days_in_next_and_previous_months))
            .collect();
        if config.is_rtl {
            cells.reverse();
        }
        let week = row
            .week_number
            .map(|week| style(format!("{week:>2} ")).dim().to_string())
            .unwrap_or_default();
        lines.push(format!("{week}{}", cells.concat()));
    }
    lines
}

/// Renders every panel, separated by a blank line.
pub fn render_text(config: &PickerConfig, view: &CalendarView) -> String {
    view.panels
        .iter()
        .map(|panel| panel_lines(config, panel).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use pika_ui::{CalendarDate, DatePicker, PickerOptions};

    use super::*;

    #[test]
    fn test_february_2015_layout() {
        let mut picker = DatePicker::new(
            PickerOptions::default().default_date(CalendarDate::new(2015, 1, 1).unwrap()),
        );
        let config = picker.config().clone();
        let text = render_text(&config, picker.draw_forced());
        let lines: Vec<String> = text
            .lines()
            .map(|line| strip_ansi_codes(line).into_owned())
            .collect();
        assert_eq!(lines[0], "February 2015");
        assert_eq!(lines[1], " Su Mo Tu We Th Fr Sa");
        assert_eq!(lines[2], "  1  2  3  4  5  6  7");
        assert_eq!(lines.len(), 6);
    }
}
