//! Markup for a panel's title bar.
use pika_ui::{NavButton, SelectOption, TitleModel};

use crate::escape::{escape, push_escaped};

fn render_options(options: &[SelectOption]) -> String {
    let mut html = String::new();
    for option in options {
        html.push_str(&format!(r#"<option value="{}""#, option.value));
        if option.selected {
            html.push_str(r#" selected="selected""#);
        }
        if option.disabled {
            html.push_str(r#" disabled="disabled""#);
        }
        html.push('>');
        push_escaped(&mut html, &option.label);
        html.push_str("</option>");
    }
    html
}

fn render_label(label: &str, kind: &str, options: &[SelectOption]) -> String {
    format!(
        r#"<div class="pika-label">{}<select class="pika-select pika-select-{kind}" tabindex="-1">{}</select></div>"#,
        escape(label),
        render_options(options),
    )
}

fn render_nav(class: &str, button: &NavButton) -> String {
    let disabled = if button.enabled { "" } else { " is-disabled" };
    format!(
        r#"<button class="{class}{disabled}" type="button">{}</button>"#,
        escape(&button.label)
    )
}

/// Renders the `pika-title` block: both selectors, then the navigation
/// buttons the panel carries.
pub fn render_title(title: &TitleModel) -> String {
    let month = render_label(&title.month_label, "month", &title.month_options);
    let year = render_label(&title.year_label, "year", &title.year_options);
    let mut html = String::from(r#"<div class="pika-title">"#);
    if title.month_after_year {
        html.push_str(&year);
        html.push_str(&month);
    } else {
        html.push_str(&month);
        html.push_str(&year);
    }
    if let Some(prev) = &title.prev {
        html.push_str(&render_nav("pika-prev", prev));
    }
    if let Some(next) = &title.next {
        html.push_str(&render_nav("pika-next", next));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use pika_ui::{CalendarDate, DatePicker, PickerOptions};

    use super::*;

    fn first_title(options: PickerOptions) -> TitleModel {
        let mut picker = DatePicker::new(options);
        picker.draw().unwrap().panels[0].title.clone()
    }

    #[test]
    fn test_title_layout() {
        let title = first_title(
            PickerOptions::default().default_date(CalendarDate::new(2024, 5, 1).unwrap()),
        );
        let html = render_title(&title);
        assert!(html.starts_with(r#"<div class="pika-title"><div class="pika-label">June<select class="pika-select pika-select-month" tabindex="-1">"#));
        assert!(html.contains(r#"<option value="5" selected="selected">June</option>"#));
        assert!(html.contains(r#"<option value="2024" selected="selected">2024</option>"#));
        assert!(html.ends_with(r#"<button class="pika-prev" type="button">Previous Month</button><button class="pika-next" type="button">Next Month</button></div>"#));
    }

    #[test]
    fn test_disabled_options_and_buttons() {
        let title = first_title(
            PickerOptions::default()
                .min_date(CalendarDate::new(2024, 5, 10).unwrap())
                .default_date(CalendarDate::new(2024, 5, 12).unwrap()),
        );
        let html = render_title(&title);
        assert!(html.contains(r#"<option value="4" disabled="disabled">May</option>"#));
        assert!(html.contains(r#"<button class="pika-prev is-disabled" type="button">"#));
        assert!(!html.contains(r#"<option value="2023""#));
    }

    #[test]
    fn test_year_first() {
        let title = first_title(PickerOptions::default().show_month_after_year(true));
        let html = render_title(&title);
        let year = html.find("pika-select-year").unwrap();
        let month = html.find("pika-select-month").unwrap();
        assert!(year < month);
    }
}
