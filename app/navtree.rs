//! Command-line interface for navtree.
//!
//! Reads one or more endpoint lists (JSON arrays of endpoint records or plain
//! path-per-line files), lays them out and prints the navigation tree.

use clap::{Parser, ValueEnum};
use navtree::{Layout, LayoutBuilder, LayoutOptions, LayoutResult, layout_many, load_records, output};
use std::path::PathBuf;
use std::process::exit;

/// navtree — API endpoint navigation tree layout
#[derive(Parser)]
#[command(name = "navtree", version, about, long_about = None)]
struct Cli {
    /// Endpoint list files (.json arrays or one path per line)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Layout strategy
    #[arg(long, default_value = "deterministic", value_parser = parse_layout)]
    layout: Layout,

    /// Sort endpoints by path first (default: only for the deterministic layout)
    #[arg(long, conflicts_with = "no_sort")]
    sort: bool,

    /// Keep the input order even for the deterministic layout
    #[arg(long)]
    no_sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write to this file instead of stdout (single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Markdown,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Markdown => output::OutputFormat::Markdown,
        }
    }
}

/// Parse string into Layout enum.
fn parse_layout(s: &str) -> Result<Layout, String> {
    match s {
        "deterministic" => Ok(Layout::Deterministic),
        "natural" => Ok(Layout::Natural),
        _ => Err(format!("invalid layout: {}", s)),
    }
}

impl Cli {
    fn options(&self) -> LayoutOptions {
        let mut builder = LayoutBuilder::new(self.layout);
        if self.sort {
            builder = builder.sort_paths(true);
        } else if self.no_sort {
            builder = builder.sort_paths(false);
        }
        builder.build()
    }
}

fn main() {
    let cli = Cli::parse();
    let options = cli.options();

    if cli.output.is_some() && cli.files.len() > 1 {
        eprintln!("Error: --output accepts a single input file");
        exit(1);
    }

    let mut batches = Vec::with_capacity(cli.files.len());
    for file in &cli.files {
        match load_records(file) {
            Ok(records) => batches.push(records),
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
    }

    let format = output::OutputFormat::from(cli.format);
    let results = layout_many(&batches, &options);
    for (file, nodes) in cli.files.iter().zip(results) {
        let result = LayoutResult {
            strategy: options.strategy,
            nodes,
        };
        if let Some(path) = &cli.output {
            if let Err(e) = output::write_result_to_file(&result, format, path, cli.pretty) {
                eprintln!("Error: {}", e);
                exit(1);
            }
            continue;
        }
        if cli.files.len() > 1 && format != output::OutputFormat::Json {
            println!("# {}", file.display());
        }
        print!("{}", output::format_result(&result, format, cli.pretty));
        if format == output::OutputFormat::Json {
            println!();
        }
    }
}
