//! Plain-text extraction pipeline.
//!
//! Raw decoded content is split into non-blank lines, each line runs
//! through the delimiter-strategy chain, and surviving column lists are
//! normalized into records. A document that yields nothing falls through
//! to the synthesizer, so the pipeline never returns an empty record set
//! for a non-empty input.

use crate::fallback::{unparsed_record, PatternRecognizer};
use crate::normalize::record_from_columns;
use crate::strategy::split_columns;
use crate::types::{Record, Report, ReportFormat};

/// Split raw content into trimmed, non-blank lines in document order.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extractor for plain-text report documents.
#[derive(Debug, Default)]
pub struct TextExtractor {
    recognizer: PatternRecognizer,
}

impl TextExtractor {
    /// Create an extractor with the stock pattern recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom (or disabled) recognizer.
    pub fn with_recognizer(recognizer: PatternRecognizer) -> Self {
        Self { recognizer }
    }

    /// Extract a report from decoded plain-text content.
    pub fn extract(&self, content: &str, filename: &str) -> Report {
        let mut report = Report::new(filename, ReportFormat::PlainText);
        report.records = self.extract_records(content, filename);
        report
    }

    /// Extract records from decoded text content.
    ///
    /// Never fails for structural reasons; content with no recognizable
    /// rows degrades to synthesis. Also used by the word-processor path
    /// for documents without literal tables.
    pub fn extract_records(&self, content: &str, filename: &str) -> Vec<Record> {
        let mut records = Vec::new();

        for line in split_lines(content) {
            let columns = split_columns(line);
            match record_from_columns(&columns) {
                Some(record) => records.push(record),
                None => log::debug!("Discarding non-data line: {}", line),
            }
        }

        if records.is_empty() {
            log::debug!("No structured rows in {}; synthesizing", filename);
            records = self.recognizer.recognize(content);
        }

        if records.is_empty() {
            records.push(unparsed_record(filename));
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks() {
        let lines = split_lines("first\n\n  \nsecond\r\nthird\n");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_extract_bracket_pipe_line() {
        let extractor = TextExtractor::new();
        let content = "[PU]-HOSTEL->[10399] || Hostel || Issue in Hostel Room Type       Live";
        let report = extractor.extract(content, "status.txt");

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.client, "[PU]-HOSTEL");
        assert_eq!(record.module, "Hostel");
        assert_eq!(record.description, "Issue in Hostel Room Type");
        assert_eq!(record.deployment_status, "Live");
        assert_eq!(record.delivery_date, "N/A");
    }

    #[test]
    fn test_extract_tab_delimited_line() {
        let extractor = TextExtractor::new();
        let report = extractor.extract("SNU\tAcademic\tBuild report\tLive\t02/05/2025", "t.txt");

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.client, "SNU");
        assert_eq!(record.module, "Academic");
        assert_eq!(record.description, "Build report");
        assert_eq!(record.deployment_status, "Live");
        assert_eq!(record.delivery_date, "02/05/2025");
    }

    #[test]
    fn test_extract_four_column_line_dashes_description() {
        let extractor = TextExtractor::new();
        let report = extractor.extract("SNU   Academic   Live   02/05/2025", "t.txt");

        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].description, "-");
        assert_eq!(report.records[0].deployment_status, "Live");
    }

    #[test]
    fn test_extract_skips_headings_keeps_order() {
        let extractor = TextExtractor::new();
        let content = "Weekly Status\n\
                       A\tM1\tfirst task\tLive\t01/05/2025\n\
                       B\tM2\tsecond task\tUAT\t08/05/2025\n";
        let report = extractor.extract(content, "t.txt");

        assert_eq!(report.len(), 2);
        assert_eq!(report.records[0].description, "first task");
        assert_eq!(report.records[1].description, "second task");
    }

    #[test]
    fn test_blank_content_synthesizes_one_record() {
        let extractor = TextExtractor::new();
        let report = extractor.extract("   \n\n  ", "empty.txt");

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.client, "Unknown");
        assert_eq!(record.description, "No data could be extracted from empty.txt");
    }

    #[test]
    fn test_unstructured_content_triggers_recognizer() {
        let extractor = TextExtractor::new();
        let report = extractor.extract("notes about the UTKAL rollout", "notes.txt");

        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].client, "UTKAL");
    }

    #[test]
    fn test_disabled_recognizer_still_yields_fallback() {
        let extractor = TextExtractor::with_recognizer(PatternRecognizer::disabled());
        let report = extractor.extract("notes about the UTKAL rollout", "notes.txt");

        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].client, "Unknown");
    }

    #[test]
    fn test_structured_rows_suppress_recognizer() {
        // Trigger words in prose do not fire once real rows parsed.
        let extractor = TextExtractor::new();
        let content = "SNU\tAcademic\tBuild report\tLive\t02/05/2025\nmisc UTKAL chatter";
        let report = extractor.extract(content, "t.txt");

        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].client, "SNU");
    }

    #[test]
    fn test_every_field_populated() {
        let extractor = TextExtractor::new();
        let content = "A\tB\tC\tD\nplain heading\n[PU]-X->[1] || M || desc       Live";
        let report = extractor.extract(content, "t.txt");

        for record in &report.records {
            assert!(!record.client.is_empty());
            assert!(!record.module.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.deployment_status.is_empty());
            assert!(!record.delivery_date.is_empty());
        }
    }
}
