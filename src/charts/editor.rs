// src/charts/editor.rs
use thiserror::Error;
use uuid::Uuid;

use super::defaults::{new_category_seed_row, NEW_CATEGORY_NAME};
use super::definitions::ChartCategory;
use super::grid::ChartGrid;

/// Recoverable validation failures raised by the editor session. The UI
/// maps each variant to a localized message; `Display` is for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("column headers must be unique")]
    DuplicateHeader,
    #[error("column headers cannot be empty")]
    EmptyHeader,
    #[error("the last remaining category cannot be deleted")]
    LastCategory,
}

/// An open chart-editing session.
///
/// Holds a deep clone of the live chart list plus the positional grid for
/// the currently selected chart. The live `ChartRegistry` is untouched
/// until `save()` succeeds and the caller installs the returned list;
/// cancelling is simply dropping the session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    charts: Vec<ChartCategory>,
    active_id: String,
    /// Grid being edited for the active chart. The UI mutates this directly.
    pub grid: ChartGrid,
    /// Name field for the active chart, committed together with the grid.
    pub name_edit: String,
}

impl EditorSession {
    /// Opens a session over a snapshot of the given charts, selecting the
    /// first one. The chart list is never empty (registry invariant).
    pub fn open(charts: &[ChartCategory]) -> Self {
        debug_assert!(!charts.is_empty(), "editor opened over empty chart list");
        let charts = charts.to_vec();
        let first = &charts[0];
        Self {
            grid: ChartGrid::from_chart(first),
            name_edit: first.name.clone(),
            active_id: first.id.clone(),
            charts,
        }
    }

    pub fn charts(&self) -> &[ChartCategory] {
        &self.charts
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Writes the in-progress grid and name field back into the working
    /// copy for the active chart.
    fn commit_active(&mut self) {
        let records = self.grid.to_records();
        if let Some(chart) = self.charts.iter_mut().find(|c| c.id == self.active_id) {
            chart.name = self.name_edit.clone();
            chart.data = records;
        }
    }

    /// Re-derives the grid and name field for the chart with `id`.
    fn activate(&mut self, id: &str) {
        if let Some(chart) = self.charts.iter().find(|c| c.id == id) {
            self.active_id = chart.id.clone();
            self.name_edit = chart.name.clone();
            self.grid = ChartGrid::from_chart(chart);
        }
    }

    /// Switches the active chart, committing the current edits first.
    /// No-op when `id` is already active, so a repeated click does not
    /// churn the grid.
    pub fn select_chart(&mut self, id: &str) {
        if id == self.active_id {
            return;
        }
        self.commit_active();
        self.activate(id);
    }

    /// Commits current edits, appends a new category with a generated
    /// unique id and one seed row, and selects it. Returns the new id.
    pub fn add_category(&mut self) -> String {
        self.commit_active();
        let id = format!("custom_{}", Uuid::new_v4().simple());
        self.charts.push(ChartCategory::new(
            id.clone(),
            NEW_CATEGORY_NAME,
            vec![new_category_seed_row()],
        ));
        self.activate(&id);
        id
    }

    /// Removes a category from the working copy. Rejected when it is the
    /// last one. If the active chart was removed, the first remaining
    /// chart becomes active.
    pub fn delete_category(&mut self, id: &str) -> Result<(), EditorError> {
        if self.charts.len() <= 1 {
            return Err(EditorError::LastCategory);
        }
        self.charts.retain(|c| c.id != id);
        if id == self.active_id {
            let next_id = self.charts[0].id.clone();
            self.activate(&next_id);
        }
        Ok(())
    }

    /// Validates the active grid's headers, commits it, and returns the
    /// full working list for the caller to install atomically. On a
    /// validation error nothing is committed and the session stays live.
    pub fn save(&mut self) -> Result<Vec<ChartCategory>, EditorError> {
        self.grid.validate_headers()?;
        self.commit_active();
        Ok(self.charts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::defaults::default_charts;

    #[test]
    fn open_selects_first_chart() {
        let session = EditorSession::open(&default_charts());
        assert_eq!(session.active_id(), "universal");
        assert_eq!(session.name_edit, "Універсальна таблиця");
        assert_eq!(session.grid.headers[0], "int");
    }

    #[test]
    fn select_commits_previous_chart_edits() {
        let mut session = EditorSession::open(&default_charts());
        session.grid.set_cell(0, 0, "XS-custom");
        session.name_edit = "Edited".to_string();
        session.select_chart("sportswear");

        let edited = session
            .charts()
            .iter()
            .find(|c| c.id == "universal")
            .unwrap();
        assert_eq!(edited.name, "Edited");
        assert_eq!(edited.data[0]["int"], "XS-custom");
        assert_eq!(session.active_id(), "sportswear");
    }

    #[test]
    fn select_same_chart_is_noop() {
        let mut session = EditorSession::open(&default_charts());
        session.grid.set_cell(0, 0, "dirty");
        session.select_chart("universal");
        // The in-progress edit is still uncommitted.
        let untouched = session
            .charts()
            .iter()
            .find(|c| c.id == "universal")
            .unwrap();
        assert_eq!(untouched.data[0]["int"], "XS");
        assert_eq!(session.grid.rows[0][0], "dirty");
    }

    #[test]
    fn add_category_generates_unique_ids_and_seed_row() {
        let mut session = EditorSession::open(&default_charts());
        let first = session.add_category();
        let second = session.add_category();
        assert_ne!(first, second);
        assert_eq!(session.active_id(), second);
        assert_eq!(session.name_edit, NEW_CATEGORY_NAME);
        assert_eq!(session.grid.headers, ["Розмір", "Зріст", "Груди"]);
        assert_eq!(session.grid.rows, vec![vec!["M", "175", "100"]]);
        assert_eq!(session.charts().len(), 5);
    }

    #[test]
    fn delete_last_category_is_rejected_without_mutation() {
        let charts = vec![default_charts().remove(0)];
        let mut session = EditorSession::open(&charts);
        assert_eq!(session.delete_category("universal"), Err(EditorError::LastCategory));
        assert_eq!(session.charts().len(), 1);
        assert_eq!(session.active_id(), "universal");
    }

    #[test]
    fn delete_active_category_reactivates_first_remaining() {
        let mut session = EditorSession::open(&default_charts());
        session.select_chart("mens_jackets");
        session.delete_category("mens_jackets").unwrap();
        assert_eq!(session.active_id(), "universal");
        assert_eq!(session.charts().len(), 2);
    }

    #[test]
    fn delete_inactive_category_keeps_current_grid() {
        let mut session = EditorSession::open(&default_charts());
        session.grid.set_cell(0, 0, "dirty");
        session.delete_category("sportswear").unwrap();
        assert_eq!(session.active_id(), "universal");
        assert_eq!(session.grid.rows[0][0], "dirty");
    }

    #[test]
    fn save_rejects_invalid_headers_without_commit() {
        let mut session = EditorSession::open(&default_charts());
        session.grid.set_header(0, "ua_eu");
        assert_eq!(session.save(), Err(EditorError::DuplicateHeader));
        let untouched = session
            .charts()
            .iter()
            .find(|c| c.id == "universal")
            .unwrap();
        assert_eq!(untouched.data, default_charts()[0].data);

        session.grid.set_header(0, "   ");
        assert_eq!(session.save(), Err(EditorError::EmptyHeader));
    }

    #[test]
    fn save_commits_active_chart_and_returns_full_list() {
        let mut session = EditorSession::open(&default_charts());
        session.grid.set_cell(0, 0, "XS+");
        let saved = session.save().unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].data[0]["int"], "XS+");
    }
}
