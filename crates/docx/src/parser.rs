//! DOCX file parser implementation.

use quick_xml::events::Event;
use quick_xml::Reader;
use report_core::normalize::record_from_cells;
use report_core::text::TextExtractor;
use report_core::{Error, Record, Report, ReportFormat, Result};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Minimum cells for a table row to qualify as data.
const MIN_TABLE_CELLS: usize = 3;

/// Parser for DOCX (Office Open XML) report files.
pub struct DocxParser {
    extractor: TextExtractor,
}

impl DocxParser {
    /// Create a new DOCX parser with the stock text extractor.
    pub fn new() -> Self {
        Self {
            extractor: TextExtractor::new(),
        }
    }

    /// Create a parser with a custom text extractor for the no-table path.
    pub fn with_extractor(extractor: TextExtractor) -> Self {
        Self { extractor }
    }

    /// Parse a DOCX file from a reader.
    ///
    /// Container and markup decode failures are returned as errors;
    /// everything structural degrades through the table path, the text
    /// path, and finally synthesis.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Report> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

        let content = read_file_from_archive(&mut archive, "word/document.xml")?;
        let document = parse_document(&content)?;

        let mut report = Report::new(filename, ReportFormat::WordProcessor);
        report.records = records_from_tables(&document.tables);

        if report.records.is_empty() {
            log::debug!("No table records in {}; trying text content", filename);
            report.records = self.extractor.extract_records(&document.text, filename);
        }

        Ok(report)
    }
}

impl Default for DocxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Body content pulled from `word/document.xml`.
#[derive(Debug, Default)]
pub(crate) struct DocumentContent {
    /// Top-level tables as row-major cell text.
    pub tables: Vec<Vec<Vec<String>>>,
    /// Full document text with paragraph line breaks.
    pub text: String,
}

/// Walk the document XML, collecting top-level tables and paragraph text.
pub(crate) fn parse_document(xml: &str) -> Result<DocumentContent> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut document = DocumentContent::default();
    let mut table: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut table_depth = 0usize;
    let mut in_cell = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        table.clear();
                    }
                }
                b"tr" if table_depth == 1 => {
                    row.clear();
                }
                b"tc" if table_depth == 1 => {
                    in_cell = true;
                    cell.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                // Line and tab marks carry layout the splitting strategies
                // depend on; keep them in the extracted text.
                b"br" | b"cr" => {
                    if in_cell {
                        cell.push(' ');
                    }
                    document.text.push('\n');
                }
                b"tab" => {
                    if in_cell {
                        cell.push(' ');
                    }
                    document.text.push('\t');
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default();
                if in_cell {
                    cell.push_str(&text);
                }
                document.text.push_str(&text);
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"tbl" => {
                    if table_depth == 1 && !table.is_empty() {
                        document.tables.push(std::mem::take(&mut table));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                b"tr" if table_depth == 1 => {
                    table.push(std::mem::take(&mut row));
                }
                b"tc" if table_depth == 1 => {
                    row.push(cell.trim().to_string());
                    in_cell = false;
                }
                b"p" => {
                    if in_cell && !cell.is_empty() && !cell.ends_with(' ') {
                        cell.push(' ');
                    }
                    if !document.text.ends_with('\n') {
                        document.text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("Error parsing document: {}", e)));
            }
            _ => {}
        }
    }

    Ok(document)
}

/// Map literal table rows to records.
///
/// The first row of each table is its header and is skipped, as are rows
/// with fewer than [`MIN_TABLE_CELLS`] cells. Cells 0–4 map positionally
/// to the five fields; a row is accepted once any of its first three cells
/// holds real content.
pub(crate) fn records_from_tables(tables: &[Vec<Vec<String>>]) -> Vec<Record> {
    let mut records = Vec::new();

    for table in tables {
        if table.len() < 2 {
            continue;
        }

        for row in &table[1..] {
            if row.len() < MIN_TABLE_CELLS {
                continue;
            }
            if row.iter().take(3).all(|c| c.trim().is_empty()) {
                continue;
            }
            records.push(record_from_cells(row));
        }
    }

    records
}

/// Read a file from the ZIP archive.
fn read_file_from_archive<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::Zip(format!("File not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::Zip(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}
