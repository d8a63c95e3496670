// src/charts/definitions.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One size entry: column name mapped to a cell value.
///
/// Charts have no fixed schema — the column set is user-defined and varies
/// per chart, so rows are ordered string maps rather than a struct. Key
/// order is the column order shown in the UI and sent to the model.
pub type SizeRow = IndexMap<String, String>;

/// A named, independently editable size table for one class of garment.
///
/// All rows in `data` are expected to share the same key set; the grid
/// commit path maintains that, the type does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartCategory {
    pub id: String,
    pub name: String,
    pub data: Vec<SizeRow>,
}

impl ChartCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: Vec<SizeRow>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
        }
    }
}
