// src/charts/grid.rs
use std::collections::HashSet;

use super::definitions::{ChartCategory, SizeRow};
use super::editor::EditorError;

/// Headers used when a chart is opened with no rows at all.
pub const TEMPLATE_HEADERS: [&str; 2] = ["Розмір", "Параметри"];

/// Positional working view of one chart used during editing: a header array
/// plus rows aligned with it. Derived from a `ChartCategory` when the
/// editor selects it and converted back into keyed records on commit.
///
/// Invariant: every row has exactly `headers.len()` cells. All mutating
/// operations below preserve this. Out-of-range indices on the positional
/// setters are a caller bug and panic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ChartGrid {
    /// Projects a chart into grid form. Headers come from the first row's
    /// keys in insertion order; cells missing a header's key default to an
    /// empty string. An empty chart yields the two-column template with a
    /// single blank row.
    pub fn from_chart(chart: &ChartCategory) -> Self {
        match chart.data.first() {
            Some(first) => {
                let headers: Vec<String> = first.keys().cloned().collect();
                let rows = chart
                    .data
                    .iter()
                    .map(|record| {
                        headers
                            .iter()
                            .map(|header| record.get(header).cloned().unwrap_or_default())
                            .collect()
                    })
                    .collect();
                Self { headers, rows }
            }
            None => Self {
                headers: TEMPLATE_HEADERS.iter().map(|h| h.to_string()).collect(),
                rows: vec![vec![String::new(); TEMPLATE_HEADERS.len()]],
            },
        }
    }

    /// Converts the grid back into keyed records. Header names are trimmed;
    /// headers that trim to empty are dropped from every record. The save
    /// path validates headers first, so the drop only ever happens on the
    /// intermediate commits made while switching charts mid-edit.
    pub fn to_records(&self) -> Vec<SizeRow> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .filter_map(|(i, header)| {
                        let key = header.trim();
                        if key.is_empty() {
                            return None;
                        }
                        Some((key.to_string(), row.get(i).cloned().unwrap_or_default()))
                    })
                    .collect()
            })
            .collect()
    }

    /// Appends a column with the given placeholder name and a blank cell in
    /// every row.
    pub fn add_column(&mut self, placeholder: &str) {
        self.headers.push(placeholder.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Removes the column at `index`. No-op when only one column remains;
    /// the grid never drops below one column.
    pub fn remove_column(&mut self, index: usize) {
        if self.headers.len() <= 1 {
            return;
        }
        self.headers.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
    }

    /// Appends a blank row sized to the current header count.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.headers.len()]);
    }

    /// Removes the row at `index`. A grid may end up with zero rows.
    pub fn remove_row(&mut self, index: usize) {
        self.rows.remove(index);
    }

    pub fn set_header(&mut self, index: usize, value: impl Into<String>) {
        self.headers[index] = value.into();
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
    }

    /// Save-path validation: headers must be pairwise distinct and non-empty
    /// after trimming. Duplicates are reported before empties, matching the
    /// order the editor surfaces them.
    pub fn validate_headers(&self) -> Result<(), EditorError> {
        let trimmed: Vec<&str> = self.headers.iter().map(|h| h.trim()).collect();
        let unique: HashSet<&str> = trimmed.iter().copied().collect();
        if unique.len() != trimmed.len() {
            return Err(EditorError::DuplicateHeader);
        }
        if trimmed.iter().any(|h| h.is_empty()) {
            return Err(EditorError::EmptyHeader);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::defaults::default_charts;

    fn record(pairs: &[(&str, &str)]) -> SizeRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn round_trips_well_formed_charts() {
        for chart in default_charts() {
            let grid = ChartGrid::from_chart(&chart);
            assert_eq!(grid.to_records(), chart.data, "chart '{}'", chart.id);
        }
    }

    #[test]
    fn missing_keys_default_to_empty_cells() {
        let chart = ChartCategory::new(
            "t",
            "t",
            vec![
                record(&[("size", "M"), ("chest", "96")]),
                record(&[("size", "L")]),
            ],
        );
        let grid = ChartGrid::from_chart(&chart);
        assert_eq!(grid.headers, ["size", "chest"]);
        assert_eq!(grid.rows[1], ["L", ""]);
    }

    #[test]
    fn empty_chart_yields_template() {
        let chart = ChartCategory::new("t", "t", Vec::new());
        let grid = ChartGrid::from_chart(&chart);
        assert_eq!(grid.headers, TEMPLATE_HEADERS);
        assert_eq!(grid.rows, vec![vec!["".to_string(), "".to_string()]]);
    }

    #[test]
    fn to_records_trims_headers_and_drops_blank_ones() {
        let grid = ChartGrid {
            headers: vec![" size ".into(), "   ".into(), "chest".into()],
            rows: vec![vec!["M".into(), "x".into(), "96".into()]],
        };
        let records = grid.to_records();
        assert_eq!(records[0], record(&[("size", "M"), ("chest", "96")]));
    }

    #[test]
    fn column_ops_keep_rows_aligned() {
        let mut grid = ChartGrid::from_chart(&default_charts()[0]);
        grid.add_column("Нова колонка");
        grid.add_row();
        grid.remove_column(2);
        grid.add_column("ще одна");
        grid.remove_column(0);
        for row in &grid.rows {
            assert_eq!(row.len(), grid.headers.len());
        }
    }

    #[test]
    fn remove_column_is_noop_on_last_column() {
        let mut grid = ChartGrid {
            headers: vec!["size".into()],
            rows: vec![vec!["M".into()]],
        };
        grid.remove_column(0);
        assert_eq!(grid.headers.len(), 1);
        assert_eq!(grid.rows[0].len(), 1);
    }

    #[test]
    fn rows_may_reach_zero() {
        let mut grid = ChartGrid::from_chart(&ChartCategory::new("t", "t", Vec::new()));
        grid.remove_row(0);
        assert!(grid.rows.is_empty());
        assert_eq!(grid.headers.len(), 2);
    }

    #[test]
    fn header_validation() {
        let mut grid = ChartGrid {
            headers: vec!["Size".into(), "Size ".into()],
            rows: Vec::new(),
        };
        assert_eq!(grid.validate_headers(), Err(EditorError::DuplicateHeader));

        grid.headers = vec!["Size".into(), "  ".into()];
        assert_eq!(grid.validate_headers(), Err(EditorError::EmptyHeader));

        grid.headers = vec!["Size".into(), "Chest".into()];
        assert_eq!(grid.validate_headers(), Ok(()));
    }
}
