//! Lexi Sheets CLI - spreadsheet dictionary conversion tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexi_sheets_core::Dictionary;
use lexi_sheets_import::{Converter, FontSpec, ImportOptions};
use lexi_sheets_xml::{read_file, Element};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "lexi")]
#[command(
    author,
    version,
    about = "Spreadsheet XML dictionary conversion tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spreadsheet dictionary to JSON and output to stdout or file
    #[command(alias = "json")]
    Convert {
        /// Input spreadsheet XML file
        input: PathBuf,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Fail on malformed numeric attributes instead of using defaults
        #[arg(long)]
        strict_numbers: bool,

        /// Font used where the document declares none
        #[arg(long)]
        font: Option<String>,

        /// Size of the fallback font in points
        #[arg(long)]
        font_size: Option<f64>,
    },

    /// Validate worksheet headers and list their fields
    Headers {
        /// Input spreadsheet XML file
        input: PathBuf,
    },

    /// Show information about a spreadsheet dictionary
    Info {
        /// Input spreadsheet XML file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            strict_numbers,
            font,
            font_size,
        } => {
            let mut options = ImportOptions::new().with_strict_numbers(strict_numbers);
            if font.is_some() || font_size.is_some() {
                let mut default_font = FontSpec::default();
                if let Some(name) = font {
                    default_font.font_name = name;
                }
                if let Some(size) = font_size {
                    default_font.size = size;
                }
                options = options.with_default_font(default_font);
            }
            convert(&input, output.as_deref(), compact, &options)
        }
        Commands::Headers { input } => show_headers(&input),
        Commands::Info { input } => show_info(&input),
    }
}

fn open(input: &Path) -> Result<Element> {
    debug!("Reading {}", input.display());
    read_file(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn convert(input: &Path, output: Option<&Path>, compact: bool, options: &ImportOptions) -> Result<()> {
    let root = open(input)?;
    let converter = Converter::new(&root, options)
        .with_context(|| format!("Failed to read styles of '{}'", input.display()))?;

    let mut dictionary = Dictionary::new();
    let report = converter
        .convert(&mut dictionary)
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    let json = if compact {
        serde_json::to_string(&dictionary)
    } else {
        serde_json::to_string_pretty(&dictionary)
    }
    .context("Failed to serialize dictionary")?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote dictionary to '{}'", output_path.display());
    } else {
        let mut stdout = io::stdout();
        stdout
            .write_all(json.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .context("Failed to write to stdout")?;
    }

    eprintln!(
        "Converted {} worksheets: {} words, {} languages, {} authors",
        report.worksheets,
        report.rows,
        report.languages_added,
        report.authors_added
    );
    Ok(())
}

fn show_headers(input: &Path) -> Result<()> {
    let root = open(input)?;
    let converter = Converter::new(&root, &ImportOptions::default())
        .with_context(|| format!("Failed to read styles of '{}'", input.display()))?;
    let layouts = converter
        .validate()
        .with_context(|| format!("Invalid headers in '{}'", input.display()))?;

    for (index, layout) in layouts.iter().enumerate() {
        println!("Worksheet {} (default language {})", index, layout.default_code);
        println!(
            "  {:<6} {:<20} {:<12} {:>6}  {:<11} {}",
            "Column", "Field", "Language", "Width", "Kind", "Apply"
        );
        for (column, field) in layout.fields.iter().enumerate() {
            println!(
                "  {:<6} {:<20} {:<12} {:>6}  {:<11} {}",
                column + 1,
                field.name,
                field.language_code,
                field.width_pixels(),
                field.kind,
                field.apply
            );
        }
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let root = open(input)?;
    let converter = Converter::new(&root, &ImportOptions::default())
        .with_context(|| format!("Failed to read styles of '{}'", input.display()))?;

    println!("File: {}", input.display());

    let authors = converter.authors();
    if authors.is_empty() {
        println!("Authors: (none)");
    } else {
        println!("Authors: {}", authors.join(", "));
    }

    let worksheets = converter.worksheets();
    println!("Worksheets: {}", worksheets.len());
    for (index, worksheet) in worksheets.iter().enumerate() {
        let name = worksheet.attr("ss:Name").unwrap_or("");
        let rows = worksheet
            .first_descendant("Table")
            .map(|table| table.descendants("Row").len())
            .unwrap_or(0);
        println!("  [{}] {} ({} rows)", index, name, rows);
    }

    let resolver = converter.resolver();
    println!("Styles: {}", resolver.style_count());
    println!(
        "Default font: {} {}pt",
        resolver.default_font().font_name,
        resolver.default_font().points()
    );

    Ok(())
}
