// src/charts/defaults.rs
//
// Charts seeded at startup. The three built-in ids are recognized by the
// locale layer, which substitutes translated display names for them.

use super::definitions::{ChartCategory, SizeRow};

pub const UNIVERSAL_CHART_ID: &str = "universal";
pub const MENS_JACKETS_CHART_ID: &str = "mens_jackets";
pub const SPORTSWEAR_CHART_ID: &str = "sportswear";

/// Name given to a freshly added category before the user renames it.
pub const NEW_CATEGORY_NAME: &str = "Нова категорія";

const UNIVERSAL_ROWS: &[&[(&str, &str)]] = &[
    &[("int", "XS"), ("ua_eu", "44"), ("height", "166-170"), ("chest", "86-90"), ("waist", "74-78"), ("hips", "88-92")],
    &[("int", "S"), ("ua_eu", "46"), ("height", "170-176"), ("chest", "90-94"), ("waist", "78-82"), ("hips", "92-96")],
    &[("int", "M"), ("ua_eu", "48"), ("height", "176-182"), ("chest", "94-98"), ("waist", "82-86"), ("hips", "96-100")],
    &[("int", "L"), ("ua_eu", "50"), ("height", "182-186"), ("chest", "98-102"), ("waist", "86-90"), ("hips", "100-104")],
    &[("int", "XL"), ("ua_eu", "52"), ("height", "184-188"), ("chest", "102-106"), ("waist", "90-96"), ("hips", "104-108")],
    &[("int", "XXL"), ("ua_eu", "54"), ("height", "186-190"), ("chest", "106-110"), ("waist", "96-102"), ("hips", "108-112")],
];

const MENS_JACKETS_ROWS: &[&[(&str, &str)]] = &[
    &[("size", "46"), ("height", "170"), ("chest", "92"), ("sleeve", "62")],
    &[("size", "48"), ("height", "176"), ("chest", "96"), ("sleeve", "64")],
    &[("size", "50"), ("height", "182"), ("chest", "100"), ("sleeve", "66")],
    &[("size", "52"), ("height", "188"), ("chest", "104"), ("sleeve", "68")],
    &[("size", "54"), ("height", "188"), ("chest", "108"), ("sleeve", "69")],
    &[("size", "56"), ("height", "194"), ("chest", "112"), ("sleeve", "70")],
];

const SPORTSWEAR_ROWS: &[&[(&str, &str)]] = &[
    &[("size", "S"), ("height", "168-175"), ("weight", "60-70"), ("chest", "88-92")],
    &[("size", "M"), ("height", "175-180"), ("weight", "70-80"), ("chest", "96-100")],
    &[("size", "L"), ("height", "180-185"), ("weight", "80-90"), ("chest", "104-108")],
    &[("size", "XL"), ("height", "185-190"), ("weight", "90-100"), ("chest", "112-116")],
    &[("size", "XXL"), ("height", "190+"), ("weight", "100+"), ("chest", "120+")],
];

const NEW_CATEGORY_SEED: &[(&str, &str)] = &[("Розмір", "M"), ("Зріст", "175"), ("Груди", "100")];

fn row(pairs: &[(&str, &str)]) -> SizeRow {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn rows(table: &[&[(&str, &str)]]) -> Vec<SizeRow> {
    table.iter().map(|pairs| row(pairs)).collect()
}

/// Seed row for a freshly added category, so the editor never opens on a
/// fully empty table.
pub fn new_category_seed_row() -> SizeRow {
    row(NEW_CATEGORY_SEED)
}

pub fn default_charts() -> Vec<ChartCategory> {
    vec![
        ChartCategory::new(UNIVERSAL_CHART_ID, "Універсальна таблиця", rows(UNIVERSAL_ROWS)),
        ChartCategory::new(MENS_JACKETS_CHART_ID, "Чоловічі куртки", rows(MENS_JACKETS_ROWS)),
        ChartCategory::new(SPORTSWEAR_CHART_ID, "Спортивні костюми", rows(SPORTSWEAR_ROWS)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_charts_are_well_formed() {
        let charts = default_charts();
        assert_eq!(charts.len(), 3);
        for chart in &charts {
            assert!(!chart.data.is_empty(), "chart '{}' has no rows", chart.id);
            let headers: Vec<&String> = chart.data[0].keys().collect();
            for record in &chart.data {
                let keys: Vec<&String> = record.keys().collect();
                assert_eq!(keys, headers, "heterogeneous keys in chart '{}'", chart.id);
            }
        }
    }

    #[test]
    fn universal_chart_preserves_column_order() {
        let charts = default_charts();
        let headers: Vec<&str> = charts[0].data[0].keys().map(String::as_str).collect();
        assert_eq!(headers, ["int", "ua_eu", "height", "chest", "waist", "hips"]);
    }
}
