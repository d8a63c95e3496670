// src/charts/highlight.rs
use super::definitions::SizeRow;

/// Whether a chart row should be emphasized for a recommended size.
///
/// Deliberately loose: a row matches when any cell value, compared
/// case-insensitively, equals the recommendation or is contained by it.
/// So recommendation "L (176-182)" matches both an "L" cell and a
/// "176-182" cell. Several rows may match at once; all of them are
/// emphasized and none takes precedence.
pub fn row_matches(row: &SizeRow, recommended: &str) -> bool {
    let needle = recommended.to_lowercase();
    row.values().any(|cell| {
        let cell = cell.to_lowercase();
        cell == needle || needle.contains(cell.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::definitions::SizeRow;

    fn record(pairs: &[(&str, &str)]) -> SizeRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn exact_cell_match_highlights_row() {
        let row = record(&[("int", "M"), ("height", "176-182")]);
        assert!(row_matches(&row, "176-182"));
    }

    #[test]
    fn cell_contained_in_recommendation_highlights_row() {
        let row = record(&[("int", "L"), ("height", "182-186")]);
        assert!(row_matches(&row, "L (182-186)"));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let row = record(&[("size", "xl")]);
        assert!(row_matches(&row, "XL"));
    }

    #[test]
    fn unrelated_recommendation_matches_nothing() {
        let rows = [
            record(&[("int", "S"), ("height", "170-176")]),
            record(&[("int", "M"), ("height", "176-182")]),
        ];
        assert!(!rows.iter().any(|row| row_matches(row, "XL")));
    }
}
