//! Spreadsheet parser implementation.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::NaiveDateTime;
use report_core::fallback::unparsed_record;
use report_core::locate::ColumnMap;
use report_core::normalize::{is_blank_row, record_from_mapped_row};
use report_core::{Error, Record, Report, ReportFormat, Result};
use std::io::{Read, Seek};

/// Parser for spreadsheet (.xlsx / .xls) report files.
pub struct SheetParser;

impl SheetParser {
    /// Create a new spreadsheet parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse the first worksheet of a workbook into a report.
    ///
    /// Decode failures (unreadable container, corrupt workbook) are
    /// returned as errors; structural problems (no sheets, header-only
    /// sheet, nothing extractable) degrade to the universal fallback
    /// record instead.
    pub fn parse<R: Read + Seek + Clone>(&self, reader: R, filename: &str) -> Result<Report> {
        let mut workbook = open_workbook_auto_from_rs(reader)
            .map_err(|e| Error::SpreadsheetDecode(format!("Failed to open workbook: {}", e)))?;

        let mut report = Report::new(filename, ReportFormat::Spreadsheet);

        let grid = match workbook.worksheet_range_at(0) {
            Some(Ok(range)) => range
                .rows()
                .map(|row| row.iter().map(cell_to_text).collect())
                .collect(),
            Some(Err(e)) => {
                return Err(Error::SpreadsheetDecode(format!(
                    "Failed to read first sheet: {}",
                    e
                )))
            }
            None => {
                log::warn!("Workbook {} has no sheets", filename);
                Vec::new()
            }
        };

        report.records = records_from_grid(&grid, filename);
        Ok(report)
    }
}

impl Default for SheetParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract records from a decoded cell grid, treating the first row as
/// headers.
///
/// Headers are fuzzy-matched to columns; rows normalize against that map
/// with positional fallback. Empty rows are skipped. A grid that yields no
/// records produces the single universal fallback record.
pub fn records_from_grid(grid: &[Vec<String>], filename: &str) -> Vec<Record> {
    let mut records = Vec::new();

    if let Some((headers, rows)) = grid.split_first() {
        let map = ColumnMap::locate(headers);
        if map.is_unmapped() {
            log::debug!("No headers matched in {}; using first five columns", filename);
        }

        for row in rows {
            if is_blank_row(row) {
                continue;
            }
            records.push(record_from_mapped_row(&map, row));
        }
    }

    if records.is_empty() {
        log::debug!("No rows extracted from {}; synthesizing", filename);
        records.push(unparsed_record(filename));
    }

    records
}

/// Coerce a cell to display text.
///
/// Floats without a fractional part print without the trailing `.0`; date
/// cells render as `DD/MM/YYYY`; error cells count as empty.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_delivery_date)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => {
            log::debug!("Skipping error cell: {:?}", e);
            String::new()
        }
    }
}

/// Render a date cell in the `DD/MM/YYYY` form the record vocabulary uses.
fn format_delivery_date(datetime: NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y").to_string()
}
