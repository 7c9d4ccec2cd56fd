//! The output of a picker draw.
use crate::{calendar::ViewPanel, grid::WeekRow, title::TitleModel};

/// One rendered month panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Position of the panel, left to right.
    pub index: usize,
    /// The month shown.
    pub panel: ViewPanel,
    /// Title bar content.
    pub title: TitleModel,
    /// Week rows of the month grid.
    pub rows: Vec<WeekRow>,
}

/// Everything a host needs to present the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// Panels in display order.
    pub panels: Vec<PanelView>,
}

impl CalendarView {
    /// Iterates every day cell of every panel.
    pub fn cells(&self) -> impl Iterator<Item = &crate::grid::DayCell> {
        self.panels
            .iter()
            .flat_map(|panel| panel.rows.iter())
            .flat_map(|row| row.cells.iter())
    }
}
