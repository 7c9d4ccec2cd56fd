//! The date picker: selection, visible panels, visibility, and host input.
//!
//! ## Usage
//!
//! Create a [`DatePicker`] from [`PickerOptions`], forward host input through
//! the `on_*` methods, call [`DatePicker::poll_timers`] from the host's event
//! loop, and present the [`CalendarView`] returned by [`DatePicker::draw`].
//!
//! ```
//! use pika_ui::{CalendarDate, DatePicker, PickerOptions};
//!
//! let mut picker = DatePicker::new(PickerOptions::default());
//! picker.set_date(CalendarDate::new(2024, 5, 15).unwrap(), false);
//! assert_eq!(picker.to_string(), "2024-06-15");
//! picker.next_month();
//! assert_eq!(picker.panels()[0].month, 6);
//! ```
use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::{debug, trace, warn};

use crate::{
    calendar::{MonthBounds, ViewPanel, derive_panels, is_single_step_month, panels_cover},
    date::{CalendarDate, LocalDateTime, start_of_day},
    debounce::Debounce,
    events::{Listener, Listeners, PickerEvent, PickerEventKind},
    field::BoundField,
    format::{format_date, parse_date_input},
    grid::{GridConstraints, WeekRow, render_month},
    options::{MainCalendar, PickerConfig, PickerOptions},
    position::{PositionInput, adjust_position},
    title::{build_title, can_go_next, can_go_prev},
    view::{CalendarView, PanelView},
};

const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(50);
const SELECT_CLOSE_DELAY: Duration = Duration::from_millis(100);
const FOCUS_RESTORE_DELAY: Duration = Duration::from_millis(1);

/// A value accepted by [`DatePicker::set_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Clears the selection.
    Clear,
    /// A calendar date.
    Date(CalendarDate),
    /// A date-time; the time of day is dropped.
    DateTime(LocalDateTime),
    /// Text parsed with the configured format.
    Text(String),
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<Option<CalendarDate>> for DateInput {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(DateInput::Clear, DateInput::Date)
    }
}

impl From<LocalDateTime> for DateInput {
    fn from(value: LocalDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// What a pointer press on the picker landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A day button.
    Day(CalendarDate),
    /// The previous-month button.
    PrevMonth,
    /// The next-month button.
    NextMonth,
    /// A month or year selector.
    SelectControl,
}

/// Which title selector changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKind {
    /// The month selector.
    Month,
    /// The year selector.
    Year,
}

/// Where a document-level click happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Inside the picker element.
    InsidePicker,
    /// On the trigger element.
    Trigger,
    /// Anywhere else.
    Elsewhere,
}

/// An action the host must perform for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEffect {
    /// Move focus back to the trigger element.
    FocusTrigger,
    /// Remove focus from the bound field.
    BlurField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseReason {
    Blur,
    Selection,
}

/// A calendar date picker.
///
/// Each instance owns its state exclusively. Every method runs synchronously;
/// delayed behavior is expressed as timers the host drives with
/// [`DatePicker::poll_timers`].
pub struct DatePicker {
    config: PickerConfig,
    listeners: Listeners,
    field: Option<BoundField>,
    selected: Option<CalendarDate>,
    panels: Vec<ViewPanel>,
    visible: Option<bool>,
    select_pressed: bool,
    close_timer: Debounce<CloseReason>,
    focus_timer: Debounce<()>,
    last_view: Option<CalendarView>,
}

impl DatePicker {
    /// Creates a picker, shows its initial month, and opens it unless bound.
    ///
    /// A bound field's text seeds the selection when no default date is
    /// configured.
    pub fn new(options: PickerOptions) -> Self {
        let mut picker = Self {
            config: PickerConfig::default(),
            listeners: Listeners::default(),
            field: None,
            selected: None,
            panels: Vec::new(),
            visible: None,
            select_pressed: false,
            close_timer: Debounce::new(),
            focus_timer: Debounce::new(),
            last_view: None,
        };
        picker.configure(options);

        if picker.config.default_date.is_none()
            && let Some(field) = &picker.field
        {
            picker.config.default_date = parse_date_input(
                field.value(),
                &picker.config.format,
                &picker.config.i18n,
                picker.config.format_strict,
            );
            picker.config.set_default_date = true;
        }

        match picker.config.default_date {
            Some(date) if picker.config.set_default_date => picker.set_date(date, true),
            Some(date) => picker.goto_date(date),
            None => picker.goto_date(CalendarDate::today()),
        }

        if picker.config.bound {
            picker.hide();
        } else {
            picker.show();
        }
        picker
    }

    /// Merges `options` over the current configuration and returns the result.
    ///
    /// A field in the options replaces the bound field; callbacks are
    /// appended to the listener registry.
    pub fn configure(&mut self, mut options: PickerOptions) -> &PickerConfig {
        if let Some(field) = options.field.take() {
            self.field = Some(field);
        }
        let callbacks = [
            (PickerEventKind::Select, options.on_select.take()),
            (PickerEventKind::Open, options.on_open.take()),
            (PickerEventKind::Close, options.on_close.take()),
            (PickerEventKind::Draw, options.on_draw.take()),
        ];
        for (kind, listener) in callbacks {
            if let Some(listener) = listener {
                self.listeners.on(kind, listener);
            }
        }
        self.config.merge(options, self.field.is_some());
        debug!(
            bound = self.config.bound,
            months = self.config.number_of_months,
            "picker configured"
        );
        if !self.panels.is_empty() {
            self.adjust_panels();
        }
        &self.config
    }

    /// Returns the effective configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Registers a lifecycle listener.
    pub fn on(&mut self, kind: PickerEventKind, listener: impl Into<Listener>) {
        self.listeners.on(kind, listener);
    }

    /// Returns the listener registry.
    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    /// Returns the bound field.
    pub fn field(&self) -> Option<&BoundField> {
        self.field.as_ref()
    }

    /// Returns the selected date.
    pub fn get_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Returns the visible panels in display order.
    pub fn panels(&self) -> &[ViewPanel] {
        &self.panels
    }

    /// Returns the most recently drawn view.
    pub fn view(&self) -> Option<&CalendarView> {
        self.last_view.as_ref()
    }

    /// Sets or clears the selection.
    ///
    /// Dates are clamped into `[min_date, max_date]`; the view moves to the
    /// date, the bound field receives the formatted text, and `Select`
    /// listeners run unless `prevent_on_select` is set. Text that does not
    /// parse is ignored; empty text clears.
    pub fn set_date(&mut self, input: impl Into<DateInput>, prevent_on_select: bool) {
        let date = match input.into() {
            DateInput::Clear => None,
            DateInput::Date(date) => Some(date),
            DateInput::DateTime(value) => Some(start_of_day(value)),
            DateInput::Text(text) if text.trim().is_empty() => None,
            DateInput::Text(text) => {
                let parsed = parse_date_input(
                    &text,
                    &self.config.format,
                    &self.config.i18n,
                    self.config.format_strict,
                );
                if parsed.is_none() {
                    return;
                }
                parsed
            }
        };

        let Some(date) = date else {
            self.selected = None;
            self.sync_field();
            self.redraw();
            return;
        };

        let date = self.clamp_to_bounds(date);
        self.selected = Some(date);
        self.goto_date(date);
        self.sync_field();
        if !prevent_on_select {
            self.listeners.emit(&PickerEvent::Select(date));
        }
    }

    /// Selects `date` unless it is disabled; returns true when selected.
    pub fn select_day(&mut self, date: CalendarDate) -> bool {
        if self.constraints().is_disabled(date) {
            debug!(%date, "ignoring selection of a disabled date");
            return false;
        }
        self.set_date(date, false);
        true
    }

    fn clamp_to_bounds(&self, date: CalendarDate) -> CalendarDate {
        match (self.config.min_date, self.config.max_date) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }

    fn sync_field(&mut self) {
        let text = self.to_string();
        if let Some(field) = &mut self.field {
            field.set_value(text);
        }
    }

    /// Shows the month containing `date`.
    ///
    /// Panels stay put when the date is already visible; otherwise the view
    /// resets around it.
    pub fn goto_date(&mut self, date: CalendarDate) {
        if self.panels.is_empty() || !panels_cover(&self.panels, date) {
            let mut first = ViewPanel::containing(date);
            if self.config.main_calendar == MainCalendar::Right {
                first.month += 1 - self.config.number_of_months as i32;
            }
            self.panels = vec![first];
        }
        self.adjust_panels();
    }

    /// Shows the month containing today.
    pub fn goto_today(&mut self) {
        self.goto_date(CalendarDate::today());
    }

    /// Shows a zero-based month in the first panel's year.
    ///
    /// Months in `-12..=23` roll into the neighbouring years; anything else is
    /// ignored.
    pub fn goto_month(&mut self, month: i32) {
        if !is_single_step_month(month) {
            debug!(month, "ignoring out-of-range month");
            return;
        }
        if let Some(first) = self.panels.first_mut() {
            first.month = month;
            self.adjust_panels();
        }
    }

    /// Shows the first panel's month in `year`.
    pub fn goto_year(&mut self, year: i32) {
        if let Some(first) = self.panels.first_mut() {
            first.year = year;
            self.adjust_panels();
        }
    }

    /// Like [`goto_month`](Self::goto_month) for text input; non-numeric text
    /// is ignored.
    pub fn goto_month_input(&mut self, value: &str) {
        match value.trim().parse::<i32>() {
            Ok(month) => self.goto_month(month),
            Err(_) => debug!(value, "ignoring non-numeric month"),
        }
    }

    /// Like [`goto_year`](Self::goto_year) for text input; non-numeric text is
    /// ignored.
    pub fn goto_year_input(&mut self, value: &str) {
        match value.trim().parse::<i32>() {
            Ok(year) => self.goto_year(year),
            Err(_) => debug!(value, "ignoring non-numeric year"),
        }
    }

    /// Advances every panel by one month.
    pub fn next_month(&mut self) {
        if let Some(first) = self.panels.first_mut() {
            first.month += 1;
            self.adjust_panels();
        }
    }

    /// Moves every panel back by one month.
    pub fn prev_month(&mut self) {
        if let Some(first) = self.panels.first_mut() {
            first.month -= 1;
            self.adjust_panels();
        }
    }

    fn adjust_panels(&mut self) {
        if let Some(first) = self.panels.first().copied() {
            self.panels = derive_panels(first, self.config.number_of_months, &self.config.bounds);
            trace!(panels = ?self.panels, "panels adjusted");
        }
        self.redraw();
    }

    /// Sets or clears the earliest selectable date.
    ///
    /// Clearing it also clears the range start.
    pub fn set_min_date(&mut self, date: Option<CalendarDate>) {
        self.config.min_date = date;
        if date.is_none() {
            self.config.start_range = None;
        }
        self.refresh_bounds();
    }

    /// Sets or clears the latest selectable date.
    ///
    /// Clearing it also clears the range end.
    pub fn set_max_date(&mut self, date: Option<CalendarDate>) {
        self.config.max_date = date;
        if date.is_none() {
            self.config.end_range = None;
        }
        self.refresh_bounds();
    }

    fn refresh_bounds(&mut self) {
        if let (Some(min), Some(max)) = (self.config.min_date, self.config.max_date)
            && max < min
        {
            warn!(%min, %max, "max_date precedes min_date; clearing both");
            self.config.min_date = None;
            self.config.max_date = None;
        }
        self.config.bounds = MonthBounds::from_dates(self.config.min_date, self.config.max_date);
        self.redraw();
    }

    /// Sets the highlighted range start; ordering is not checked.
    pub fn set_start_range(&mut self, date: Option<CalendarDate>) {
        self.config.start_range = date;
    }

    /// Sets the highlighted range end; ordering is not checked.
    pub fn set_end_range(&mut self, date: Option<CalendarDate>) {
        self.config.end_range = date;
    }

    /// Returns the grid constraints for the current state.
    pub fn constraints(&self) -> GridConstraints {
        GridConstraints {
            min_date: self.config.min_date,
            max_date: self.config.max_date,
            disable_weekends: self.config.disable_weekends,
            disable_day_fn: self.config.disable_day_fn.clone(),
            selected_date: self.selected,
            range_start: self.config.start_range,
            range_end: self.config.end_range,
            first_day: self.config.first_day,
            show_outside_days: self.config.show_days_in_next_and_previous_months,
            show_week_number: self.config.show_week_number,
        }
    }

    /// Computes the rows of one month with the current constraints.
    pub fn render(&self, year: i32, month: i32) -> Vec<WeekRow> {
        self.render_at(ViewPanel::new(year, month), CalendarDate::today())
    }

    /// Like [`render`](Self::render) with an explicit "today".
    pub fn render_at(&self, panel: ViewPanel, today: CalendarDate) -> Vec<WeekRow> {
        render_month(panel, &self.constraints(), today)
    }

    /// Builds the view of every panel as of `today`.
    pub fn build_view(&self, today: CalendarDate) -> CalendarView {
        let constraints = self.constraints();
        let reference_year = self.panels.first().map_or(today.year(), |panel| panel.year);
        let count = self.panels.len();
        let panels = self
            .panels
            .iter()
            .enumerate()
            .map(|(index, panel)| PanelView {
                index,
                panel: *panel,
                title: build_title(&self.config, index, count, *panel, reference_year),
                rows: render_month(*panel, &constraints, today),
            })
            .collect();
        CalendarView { panels }
    }

    /// Redraws while visible; returns the new view.
    pub fn draw(&mut self) -> Option<&CalendarView> {
        if !self.is_visible() {
            return None;
        }
        Some(self.draw_forced())
    }

    /// Redraws regardless of visibility.
    ///
    /// A bound picker with a visible field schedules the focus restore here.
    /// Its deadline is taken from [`Instant::now`], since a redraw can follow
    /// any call, so hosts that drive [`poll_timers`](Self::poll_timers) with a
    /// simulated clock should start that clock from [`Instant::now`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn draw_forced(&mut self) -> &CalendarView {
        let view = self.build_view(CalendarDate::today());
        if self.config.bound && self.field.as_ref().is_some_and(|field| !field.is_hidden()) {
            self.focus_timer
                .schedule(Instant::now(), FOCUS_RESTORE_DELAY, ());
        }
        self.listeners.emit(&PickerEvent::Draw(&view));
        self.last_view.insert(view)
    }

    fn redraw(&mut self) {
        let _ = self.draw();
    }

    /// Returns true while the picker is shown.
    pub fn is_visible(&self) -> bool {
        self.visible == Some(true)
    }

    /// Shows the picker, draws it, and runs `Open` listeners.
    pub fn show(&mut self) {
        if self.is_visible() {
            return;
        }
        self.visible = Some(true);
        self.redraw();
        self.listeners.emit(&PickerEvent::Open);
    }

    /// Hides the picker and cancels pending timers.
    ///
    /// `Close` listeners run when the picker was shown.
    pub fn hide(&mut self) {
        let was = self.visible;
        if was == Some(false) {
            return;
        }
        self.close_timer.cancel();
        self.focus_timer.cancel();
        self.visible = Some(false);
        if was.is_some() {
            self.listeners.emit(&PickerEvent::Close);
        }
    }

    /// Hides the picker and drops its listeners and field.
    pub fn destroy(&mut self) {
        self.hide();
        self.listeners.clear_all();
        self.field = None;
        self.config.bound = false;
        self.last_view = None;
    }

    /// Page coordinates for a bound popup, or `None` inside a container.
    pub fn position(&self, input: &PositionInput) -> Option<(f64, f64)> {
        if self.config.container {
            return None;
        }
        Some(adjust_position(
            input,
            self.config.position,
            self.config.reposition,
        ))
    }

    /// The user edited the bound field.
    ///
    /// Parsable text becomes the selection; the picker opens if hidden.
    pub fn on_field_change(&mut self, text: &str) {
        if let Some(field) = &mut self.field {
            field.set_value(text);
        }
        if let Some(date) = parse_date_input(
            text,
            &self.config.format,
            &self.config.i18n,
            self.config.format_strict,
        ) {
            self.set_date(date, false);
        }
        if !self.is_visible() {
            self.show();
        }
    }

    /// The trigger gained focus.
    pub fn on_trigger_focus(&mut self) {
        self.show();
    }

    /// The trigger was clicked.
    pub fn on_trigger_click(&mut self) {
        self.show();
    }

    /// The trigger lost focus.
    ///
    /// Unless focus moved into the picker or a selector press is in flight,
    /// the picker closes after a short delay.
    pub fn on_trigger_blur(&mut self, focus_inside_picker: bool, now: Instant) {
        if focus_inside_picker {
            return;
        }
        if !self.select_pressed {
            self.close_timer
                .schedule(now, BLUR_CLOSE_DELAY, CloseReason::Blur);
        }
        self.select_pressed = false;
    }

    /// A pointer press landed on the picker.
    pub fn on_pointer_down(&mut self, target: PointerTarget, now: Instant) {
        if !self.is_visible() {
            return;
        }
        match target {
            PointerTarget::Day(date) => {
                if self.select_day(date) && self.config.bound {
                    self.close_timer
                        .schedule(now, SELECT_CLOSE_DELAY, CloseReason::Selection);
                }
            }
            PointerTarget::PrevMonth => {
                if self
                    .panels
                    .first()
                    .is_some_and(|panel| can_go_prev(*panel, &self.config.bounds))
                {
                    self.prev_month();
                }
            }
            PointerTarget::NextMonth => {
                if self
                    .panels
                    .last()
                    .is_some_and(|panel| can_go_next(*panel, &self.config.bounds))
                {
                    self.next_month();
                }
            }
            PointerTarget::SelectControl => self.select_pressed = true,
        }
    }

    /// A title selector changed to `value`.
    pub fn on_select_change(&mut self, kind: SelectKind, value: &str) {
        match kind {
            SelectKind::Month => self.goto_month_input(value),
            SelectKind::Year => self.goto_year_input(value),
        }
    }

    /// A click reached the document.
    ///
    /// A bound picker closes on clicks outside itself and its trigger.
    pub fn on_document_click(&mut self, origin: ClickOrigin) {
        if self.config.bound && self.is_visible() && origin == ClickOrigin::Elsewhere {
            self.hide();
        }
    }

    /// Fires due timers and returns the effects the host must apply.
    ///
    /// Close deadlines come from the `now` passed to the `on_*` methods; the
    /// focus restore deadline comes from the wall clock at draw time (see
    /// [`draw_forced`](Self::draw_forced)).
    pub fn poll_timers(&mut self, now: Instant) -> Vec<PickerEffect> {
        let mut effects = Vec::new();
        if self.focus_timer.fire(now).is_some() {
            effects.push(PickerEffect::FocusTrigger);
        }
        if let Some(reason) = self.close_timer.fire(now) {
            self.hide();
            if reason == CloseReason::Selection && self.field.is_some() {
                effects.push(PickerEffect::BlurField);
            }
        }
        effects
    }

    /// Returns the earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.focus_timer.deadline(), self.close_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(PickerOptions::default())
    }
}

impl fmt::Display for DatePicker {
    /// Formats the selection with the configured format; empty when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selected {
            Some(date) => f.write_str(&format_date(date, &self.config.format, &self.config.i18n)),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("selected", &self.selected)
            .field("panels", &self.panels)
            .field("visible", &self.is_visible())
            .field("bound", &self.config.bound)
            .finish_non_exhaustive()
    }
}
