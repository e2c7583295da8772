// src/export/model.rs

use crate::models::{Guest, SeatingTable};
use serde::Serialize;
use std::collections::HashMap;

/// One exported line: a guest and the name of their table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SeatingRow {
    #[serde(rename = "Guest Name")]
    pub guest: String,
    #[serde(rename = "Table Name")]
    pub table: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Guest Name", "Table Name"]
}

pub(crate) fn row_to_cells(r: &SeatingRow) -> Vec<&str> {
    vec![r.guest.as_str(), r.table.as_str()]
}

/// One row per guest, in the given guest order. Guests without a table,
/// or pointing to a table that no longer exists, get `placeholder`.
pub fn build_rows(guests: &[Guest], tables: &[SeatingTable], placeholder: &str) -> Vec<SeatingRow> {
    let names: HashMap<i64, &str> = tables.iter().map(|t| (t.id, t.name.as_str())).collect();

    guests
        .iter()
        .map(|g| SeatingRow {
            guest: g.name.clone(),
            table: g
                .table_id
                .and_then(|id| names.get(&id).copied())
                .unwrap_or(placeholder)
                .to_string(),
        })
        .collect()
}
