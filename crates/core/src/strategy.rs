//! Column-splitting strategies for free-form report lines.
//!
//! Each candidate line runs through a fixed priority chain of splitting
//! heuristics; the first strategy that yields at least [`MIN_COLUMNS`]
//! columns wins. Lines that defeat every strategy are not data rows
//! (free-standing headings, prose) and contribute nothing.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum column count for a line to be accepted as a data row.
pub const MIN_COLUMNS: usize = 4;

/// Trailing status token preceded by a run of two or more spaces.
static STATUS_TAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.+?)\s{2,}(Live|UAT|Testing|Dev)\s*$").unwrap());

/// Bare trailing status token, any boundary.
static BARE_STATUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Live|UAT|Testing|Dev)\s*$").unwrap());

/// Runs of two or more whitespace characters.
static MULTI_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Leading `N. ` prefix with the client text that follows it.
static NUMBERED_CLIENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+?)(?:\s{2,}|$)").unwrap());

/// Split one line into columns, trying each strategy in priority order.
///
/// Order: bracket-arrow-pipe, tab-delimited, multi-space, numbered entry.
/// The result may still have fewer than [`MIN_COLUMNS`] entries; callers
/// decide whether the line qualifies as a data row.
pub fn split_columns(line: &str) -> Vec<String> {
    let mut columns = bracket_pipe_columns(line);

    if columns.len() < MIN_COLUMNS {
        columns = tab_columns(line);
    }

    if columns.len() < MIN_COLUMNS {
        columns = multi_space_columns(line);
    }

    if columns.len() < MIN_COLUMNS {
        if let Some(numbered) = numbered_entry_columns(line) {
            columns = numbered;
        }
    }

    columns
}

/// Strategy 1: lines of the form
/// `[PU]-HOSTEL->[10399] || Hostel || Issue in Hostel Room Type       Live`.
///
/// The client is the verbatim bracket+dash prefix before the arrow; the
/// remainder splits on `||`; a trailing status token is stripped from the
/// last segment on a two-or-more-spaces boundary. The date column is left
/// empty for the normalizer to default.
fn bracket_pipe_columns(line: &str) -> Vec<String> {
    if !line.contains("->[") || !line.contains("||") {
        return Vec::new();
    }

    let client = line.split("->").next().unwrap_or(line).trim().to_string();

    let parts: Vec<&str> = line.split("||").map(str::trim).collect();
    if parts.len() < 3 {
        return Vec::new();
    }

    let module = parts[1].to_string();
    let last = parts[parts.len() - 1];
    let mut description = parts[2].to_string();
    let mut status = String::new();

    if let Some(caps) = STATUS_TAIL_REGEX.captures(last) {
        status = caps[2].to_string();
        if parts.len() == 3 {
            description = caps[1].trim().to_string();
        }
    } else if let Some(caps) = BARE_STATUS_REGEX.captures(last) {
        status = caps[1].to_string();
        description = BARE_STATUS_REGEX.replace(last, "").trim().to_string();
    }

    vec![client, module, description, status, String::new()]
}

/// Strategy 2: split on tab characters, dropping empty segments.
fn tab_columns(line: &str) -> Vec<String> {
    line.split('\t')
        .map(str::trim)
        .filter(|col| !col.is_empty())
        .map(String::from)
        .collect()
}

/// Strategy 3: split on runs of two or more whitespace characters.
fn multi_space_columns(line: &str) -> Vec<String> {
    MULTI_SPACE_REGEX
        .split(line)
        .map(str::trim)
        .filter(|col| !col.is_empty())
        .map(String::from)
        .collect()
}

/// Strategy 4: lines beginning with `N. `. The text after the number is
/// the client; the rest splits on multi-space runs.
fn numbered_entry_columns(line: &str) -> Option<Vec<String>> {
    let caps = NUMBERED_CLIENT_REGEX.captures(line)?;
    let client = caps[1].trim().to_string();
    let rest = &line[caps.get(0)?.end()..];

    let mut columns = vec![client];
    columns.extend(multi_space_columns(rest));
    Some(columns)
}
