//! Column-to-record normalization with sentinel substitution.
//!
//! Whatever columns a splitting strategy or grid decode produced are mapped
//! here into the canonical five-field record. Absent fields are represented
//! by the sentinel defaults, never by empty strings.

use crate::locate::ColumnMap;
use crate::types::{Record, NOT_AVAILABLE, NO_DESCRIPTION, UNKNOWN};

/// Non-empty trimmed cell at `index`, if any.
fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
}

/// Cell at `index` or the given sentinel.
fn cell_or(row: &[String], index: usize, default: &str) -> String {
    cell(row, index).unwrap_or(default).to_string()
}

/// Normalize a positionally split column list into a record.
///
/// Five or more columns map directly to the five fields. Exactly four map
/// to client/module/status/date with the description forced to `"-"` (the
/// third field is presumed absent, not blank). Fewer than four columns is
/// not a data row.
pub fn record_from_columns(columns: &[String]) -> Option<Record> {
    match columns.len() {
        0..=3 => None,
        4 => Some(Record {
            client: cell_or(columns, 0, UNKNOWN),
            module: cell_or(columns, 1, UNKNOWN),
            description: NO_DESCRIPTION.to_string(),
            deployment_status: cell_or(columns, 2, NOT_AVAILABLE),
            delivery_date: cell_or(columns, 3, NOT_AVAILABLE),
        }),
        _ => Some(record_from_cells(columns)),
    }
}

/// Map cells 0–4 positionally to the five fields, substituting sentinels
/// for anything missing or empty.
pub fn record_from_cells(row: &[String]) -> Record {
    Record {
        client: cell_or(row, 0, UNKNOWN),
        module: cell_or(row, 1, UNKNOWN),
        description: cell_or(row, 2, NOT_AVAILABLE),
        deployment_status: cell_or(row, 3, NOT_AVAILABLE),
        delivery_date: cell_or(row, 4, NOT_AVAILABLE),
    }
}

/// Normalize a spreadsheet row against located header columns.
///
/// Each field takes its located column when that cell is non-empty, falls
/// back to the fixed positional column otherwise, and ends at the sentinel
/// default when both are empty.
pub fn record_from_mapped_row(map: &ColumnMap, row: &[String]) -> Record {
    Record {
        client: mapped_or(row, map.client, 0, UNKNOWN),
        module: mapped_or(row, map.module, 1, UNKNOWN),
        description: mapped_or(row, map.description, 2, NOT_AVAILABLE),
        deployment_status: mapped_or(row, map.deployment_status, 3, NOT_AVAILABLE),
        delivery_date: mapped_or(row, map.delivery_date, 4, NOT_AVAILABLE),
    }
}

fn mapped_or(row: &[String], located: Option<usize>, position: usize, default: &str) -> String {
    located
        .and_then(|index| cell(row, index))
        .or_else(|| cell(row, position))
        .unwrap_or(default)
        .to_string()
}

/// True when every cell in the row is empty or whitespace.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}
