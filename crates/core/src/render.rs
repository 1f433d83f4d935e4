//! Deck pagination and standalone HTML report output.
//!
//! A deck partitions the record set into fixed-size slides. Row numbers are
//! global (index + 1 over the full record set), so numbering is stable no
//! matter how the renderer splits records into pages.

use crate::types::Record;

/// Default number of table rows per slide.
pub const DEFAULT_ROWS_PER_SLIDE: usize = 8;

/// Column headers shared by the deck and HTML renderings.
pub const COLUMN_HEADERS: [&str; 5] = [
    "Client",
    "Module",
    "Description",
    "Deployment Status",
    "Date of Delivery",
];

/// Pagination layout for a slide deck.
#[derive(Debug, Clone)]
pub struct DeckLayout {
    rows_per_slide: usize,
}

impl Default for DeckLayout {
    fn default() -> Self {
        Self {
            rows_per_slide: DEFAULT_ROWS_PER_SLIDE,
        }
    }
}

impl DeckLayout {
    /// Create a layout with the default rows per slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows per slide.
    pub fn with_rows_per_slide(mut self, rows: usize) -> Self {
        self.rows_per_slide = rows.max(1); // At least 1 row per slide
        self
    }

    /// Partition records into slides, assigning global row numbers.
    pub fn paginate<'a>(&self, records: &'a [Record]) -> Vec<DeckSlide<'a>> {
        let total = records.len().div_ceil(self.rows_per_slide);

        records
            .chunks(self.rows_per_slide)
            .enumerate()
            .map(|(slide_index, chunk)| DeckSlide {
                number: slide_index + 1,
                total,
                rows: chunk
                    .iter()
                    .enumerate()
                    .map(|(row_index, record)| DeckRow {
                        number: slide_index * self.rows_per_slide + row_index + 1,
                        record,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// One slide of the paginated deck.
#[derive(Debug)]
pub struct DeckSlide<'a> {
    /// 1-based slide number.
    pub number: usize,
    /// Total slides in the deck.
    pub total: usize,
    /// Rows shown on this slide.
    pub rows: Vec<DeckRow<'a>>,
}

/// One table row with its global 1-based number.
#[derive(Debug)]
pub struct DeckRow<'a> {
    pub number: usize,
    pub record: &'a Record,
}

/// Renderer for the standalone single-file HTML report.
///
/// Produces one `.slide` section per deck page with a page-break hint for
/// printing, mirroring the slide-deck rendering of the same record set.
#[derive(Debug, Clone)]
pub struct HtmlReport {
    title: String,
    layout: DeckLayout,
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self {
            title: "Work Done Status".to_string(),
            layout: DeckLayout::default(),
        }
    }
}

impl HtmlReport {
    /// Create a renderer with the default title and layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the pagination layout.
    pub fn with_layout(mut self, layout: DeckLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Render records into a complete standalone HTML document.
    pub fn render(&self, records: &[Record]) -> String {
        let title = escape_html(&self.title);
        let mut html = String::with_capacity(2048 + records.len() * 256);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str("<meta charset=\"UTF-8\">\n<style>\n");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n");

        for slide in self.layout.paginate(records) {
            html.push_str("<div class=\"slide\">\n");
            html.push_str(&format!("<h1 class=\"title\">{}</h1>\n", title));
            html.push_str("<table>\n<thead>\n<tr>");
            for header in COLUMN_HEADERS {
                html.push_str(&format!("<th>{}</th>", header));
            }
            html.push_str("</tr>\n</thead>\n<tbody>\n");

            for row in &slide.rows {
                let record = row.record;
                html.push_str("<tr>");
                html.push_str(&format!(
                    "<td>{}. {}</td>",
                    row.number,
                    escape_html(&record.client)
                ));
                html.push_str(&format!("<td>{}</td>", escape_html(&record.module)));
                html.push_str(&format!("<td>{}</td>", escape_html(&record.description)));
                html.push_str(&format!(
                    "<td>{}</td>",
                    escape_html(&record.deployment_status)
                ));
                html.push_str(&format!("<td>{}</td>", escape_html(&record.delivery_date)));
                html.push_str("</tr>\n");
            }

            html.push_str("</tbody>\n</table>\n");
            html.push_str(&format!(
                "<div class=\"page-number\">{}/{}</div>\n",
                slide.number, slide.total
            ));
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escape text for embedding in HTML element content and attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #FFFFFF; }
.slide { width: 1024px; position: relative; margin: 0 auto; padding: 40px; box-sizing: border-box; }
.title { color: #333333; font-size: 36px; font-weight: bold; text-align: left; }
table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
th, td { border: 1px solid #666666; padding: 10px; text-align: left; }
th { background-color: #DDDDDD; font-weight: bold; }
.page-number { text-align: right; color: #666666; font-size: 18px; }
@media print { .slide { page-break-after: always; } }
";

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                Record::new(
                    format!("Client {}", i),
                    "Module",
                    format!("Task {}", i),
                    "Live",
                    "02/05/2025",
                )
            })
            .collect()
    }

    #[test]
    fn test_paginate_empty() {
        let layout = DeckLayout::new();
        assert!(layout.paginate(&[]).is_empty());
    }

    #[test]
    fn test_paginate_single_partial_slide() {
        let layout = DeckLayout::new();
        let data = records(3);
        let slides = layout.paginate(&data);

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].number, 1);
        assert_eq!(slides[0].total, 1);
        assert_eq!(slides[0].rows.len(), 3);
    }

    #[test]
    fn test_paginate_global_row_numbers() {
        let layout = DeckLayout::new();
        let data = records(17);
        let slides = layout.paginate(&data);

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].rows.len(), 8);
        assert_eq!(slides[1].rows.len(), 8);
        assert_eq!(slides[2].rows.len(), 1);

        // Numbering is index + 1 over the full set, not per slide.
        assert_eq!(slides[0].rows[0].number, 1);
        assert_eq!(slides[1].rows[0].number, 9);
        assert_eq!(slides[2].rows[0].number, 17);
        assert_eq!(slides[2].number, 3);
        assert_eq!(slides[2].total, 3);
    }

    #[test]
    fn test_paginate_custom_rows_per_slide() {
        let layout = DeckLayout::new().with_rows_per_slide(5);
        let data = records(10);
        let slides = layout.paginate(&data);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].rows[4].number, 10);
    }

    #[test]
    fn test_rows_per_slide_clamps_to_one() {
        let layout = DeckLayout::new().with_rows_per_slide(0);
        let data = records(2);
        let slides = layout.paginate(&data);

        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn test_render_numbers_rows_in_client_cell() {
        let html = HtmlReport::new().render(&records(2));

        assert!(html.contains("<td>1. Client 0</td>"));
        assert!(html.contains("<td>2. Client 1</td>"));
        assert!(html.contains("<div class=\"page-number\">1/1</div>"));
    }

    #[test]
    fn test_render_paginates_into_slide_sections() {
        let layout = DeckLayout::new().with_rows_per_slide(2);
        let html = HtmlReport::new().with_layout(layout).render(&records(5));

        assert_eq!(html.matches("<div class=\"slide\">").count(), 3);
        assert!(html.contains("<div class=\"page-number\">3/3</div>"));
        assert!(html.contains("<td>5. Client 4</td>"));
    }

    #[test]
    fn test_render_escapes_cell_content() {
        let record = Record::new("<Acme & Co>", "R\"D", "a < b", "Live", "N/A");
        let html = HtmlReport::new().render(&[record]);

        assert!(html.contains("&lt;Acme &amp; Co&gt;"));
        assert!(html.contains("a &lt; b"));
        assert!(!html.contains("<Acme"));
    }

    #[test]
    fn test_render_custom_title() {
        let html = HtmlReport::new().with_title("Sprint 12").render(&records(1));
        assert!(html.contains("<title>Sprint 12</title>"));
        assert!(html.contains("<h1 class=\"title\">Sprint 12</h1>"));
    }

    #[test]
    fn test_render_contains_all_headers() {
        let html = HtmlReport::new().render(&records(1));
        for header in COLUMN_HEADERS {
            assert!(html.contains(&format!("<th>{}</th>", header)));
        }
    }
}
