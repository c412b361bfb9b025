//! Process command - extract fields from a single invoice file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde_json::{Map, Value};
use tracing::{debug, info};

use facr_core::models::config::FacrConfig;
use facr_core::models::fields::{KeyStyle, OutputMapper};
use facr_core::ExtractionResult;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or pre-extracted plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output key vocabulary
    #[arg(short, long, value_enum)]
    keys: Option<KeyArg>,

    /// Print extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object
    Json,
    /// CSV row
    Csv,
    /// Plain text summary
    Text,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KeyArg {
    /// Capitalized keys with conditions/discount/voucher fields
    Full,
    /// Lowercase keys, core fields only
    Compact,
}

impl From<KeyArg> for KeyStyle {
    fn from(arg: KeyArg) -> Self {
        match arg {
            KeyArg::Full => KeyStyle::Full,
            KeyArg::Compact => KeyStyle::Compact,
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    info!("processing file: {}", args.input.display());

    let result = extract(&args.input, &config)?;

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let key_style = args.keys.map(KeyStyle::from).unwrap_or(config.output.key_style);
    let mapper = OutputMapper::new(key_style).with_warehouse_code(config.output.warehouse_code);
    let map = mapper.to_map(&result.fields);

    let output = format_output(&map, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<FacrConfig> {
    Ok(if let Some(path) = config_path {
        FacrConfig::from_file(Path::new(path))?
    } else {
        FacrConfig::default()
    })
}

/// Dispatch on input type: PDFs go through the reader, .txt files are taken
/// as already-extracted text.
pub(crate) fn extract(input: &Path, config: &FacrConfig) -> anyhow::Result<ExtractionResult> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Ok(facr_core::process_path(input, config)?),
        "txt" => {
            if !input.exists() {
                anyhow::bail!("Input file not found: {}", input.display());
            }
            let text = fs::read_to_string(input)?;
            Ok(facr_core::process_text(&text, config))
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

pub(crate) fn format_output(map: &Map<String, Value>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(map)?),
        OutputFormat::Csv => format_csv(map),
        OutputFormat::Text => Ok(format_text(map)),
    }
}

fn format_csv(map: &Map<String, Value>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&keys)?;

    let values: Vec<String> = map.values().map(value_to_cell).collect();
    wtr.write_record(&values)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_text(map: &Map<String, Value>) -> String {
    let mut output = String::new();
    for (key, value) in map {
        output.push_str(&format!("{}: {}\n", key, value_to_cell(value)));
    }
    output
}
