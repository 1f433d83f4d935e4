//! CLI tool for converting status reports into paginated HTML decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use report_core::{DeckLayout, Error, HtmlReport, Report, ReportFormat, TextExtractor};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Convert status reports (.xlsx, .xls, .docx, .txt) into HTML decks.
#[derive(Parser, Debug)]
#[command(name = "report-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input report file(s) (.xlsx, .xls, .docx or .txt)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Number of table rows per slide (default: 8)
    #[arg(short = 'r', long, default_value = "8")]
    rows_per_slide: usize,

    /// Report title used in the rendered deck
    #[arg(short, long, default_value = "Work Done Status")]
    title: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Supported output renderings.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Standalone paginated HTML report.
    Html,
    /// Raw record set as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path =
                        get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Process a single report file into rendered output.
fn process_file(input_path: &Path, args: &Args) -> Result<String> {
    let extension = input_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let format = ReportFormat::from_extension(extension)
        .ok_or_else(|| Error::InputRejected(format!(".{}", extension)))?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let report = extract_report(input_path, format, filename)?;

    if args.verbose {
        eprintln!("  Extracted {} records", report.len());
    }

    match args.format {
        OutputFormat::Html => {
            let layout = DeckLayout::new().with_rows_per_slide(args.rows_per_slide);
            let renderer = HtmlReport::new()
                .with_title(&args.title)
                .with_layout(layout);
            Ok(renderer.render(&report.records))
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.records)?;
            Ok(format!("{}\n", json))
        }
    }
}

/// Run the format-specific extraction path.
fn extract_report(input_path: &Path, format: ReportFormat, filename: &str) -> Result<Report> {
    let report = match format {
        ReportFormat::Spreadsheet => {
            log::debug!("Parsing as spreadsheet");
            let bytes = std::fs::read(input_path)
                .with_context(|| format!("Failed to open {}", input_path.display()))?;
            report_xlsx::SheetParser::new().parse(std::io::Cursor::new(bytes), filename)?
        }
        ReportFormat::WordProcessor => {
            log::debug!("Parsing as DOCX");
            let file = File::open(input_path)
                .with_context(|| format!("Failed to open {}", input_path.display()))?;
            report_docx::DocxParser::new().parse(BufReader::new(file), filename)?
        }
        ReportFormat::PlainText => {
            log::debug!("Parsing as plain text");
            let content = std::fs::read_to_string(input_path)
                .with_context(|| format!("Failed to read {}", input_path.display()))?;
            TextExtractor::new().extract(&content, filename)
        }
    };

    Ok(report)
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
