//! Domain types for representing extracted status-report content.

use serde::{Deserialize, Serialize};

/// Placeholder used when a client or module cannot be determined.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used when a description, status, or date cannot be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder used when a four-column line carries no description at all.
pub const NO_DESCRIPTION: &str = "-";

/// One normalized five-field status entry.
///
/// Every field is always populated: either real extracted content or one of
/// the sentinel placeholders above. JSON field names keep the camelCase used
/// by downstream renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Entity/customer identifier.
    pub client: String,

    /// Product area.
    pub module: String,

    /// Free-text task or issue description.
    pub description: String,

    /// Deployment status token (`Live`, `UAT`, `Dev`, `Testing`, ...).
    #[serde(rename = "deploymentStatus")]
    pub deployment_status: String,

    /// Delivery date as opaque text, `DD/MM/YYYY` when one was recognized.
    #[serde(rename = "deliveryDate")]
    pub delivery_date: String,
}

impl Record {
    /// Create a new record from the five fields.
    pub fn new(
        client: impl Into<String>,
        module: impl Into<String>,
        description: impl Into<String>,
        deployment_status: impl Into<String>,
        delivery_date: impl Into<String>,
    ) -> Self {
        Self {
            client: client.into(),
            module: module.into(),
            description: description.into(),
            deployment_status: deployment_status.into(),
            delivery_date: delivery_date.into(),
        }
    }
}

/// An extracted report: source metadata plus the ordered record set.
///
/// Insertion order is the display order and drives global row numbering at
/// render time; the record set is never mutated after extraction returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Original filename (without path).
    pub filename: String,

    /// Detected format of the source file.
    pub format: ReportFormat,

    /// Records in document order.
    pub records: Vec<Record>,
}

impl Report {
    /// Create a new empty report for the given filename and format.
    pub fn new(filename: impl Into<String>, format: ReportFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
            records: Vec::new(),
        }
    }

    /// Append a record, preserving document order.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records extracted.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when extraction produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The format of the source report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Excel workbook (.xlsx or legacy .xls).
    Spreadsheet,
    /// Word-processor document (.docx).
    WordProcessor,
    /// Plain text (.txt).
    PlainText,
}

impl ReportFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` for anything outside the supported set; callers
    /// surface that as `Error::InputRejected` before reading any bytes.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "xlsx" | "xls" => Some(Self::Spreadsheet),
            "docx" => Some(Self::WordProcessor),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }
}
