use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lexparse::{csv, FormatConfig};

#[derive(Debug, Parser)]
#[command(name = "lexparse", version, about = "Parse JSON-like documents and CSV tables")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Grammar to parse with; inferred from the input extension if omitted
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
    /// Indent the output
    #[arg(short, long)]
    pretty: bool,
    /// Field delimiter for tables
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
    /// Drop a final table row that is not terminated by a newline
    #[arg(long)]
    drop_partial_row: bool,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Document with a root object
    Value,
    /// Document with a root array
    Array,
    /// Delimited rows
    Table,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let input = read_input(args.input.as_ref())?;
    let Some(format) = args.format.or_else(|| infer_format(args.input.as_ref())) else {
        bail!("could not infer input format; pass --format or provide a .json or .csv file");
    };
    info!(?format, bytes = input.len(), "parsing input");

    let config = if args.pretty {
        FormatConfig::pretty()
    } else {
        FormatConfig::default()
    };

    let rendered = match format {
        FormatArg::Value => {
            let value = lexparse::parse_value(&input).context("failed to parse document")?;
            lexparse::format_value(&value, &config)
        }
        FormatArg::Array => {
            let value = lexparse::parse_array(&input).context("failed to parse document")?;
            lexparse::format_value(&value, &config)
        }
        FormatArg::Table => {
            check_delimiter(args.delimiter)?;
            let table_config = csv::Config::default()
                .with_delimiter(args.delimiter)
                .with_flush_trailing_row(!args.drop_partial_row);
            let rows = lexparse::parse_table_with_config(&input, table_config);
            lexparse::format_rows(&rows, &config)
        }
    };

    write_output(args.output.as_ref(), format!("{rendered}\n").as_bytes())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

/// Identifier characters, quotes and line breaks never act as separators
fn check_delimiter(delimiter: char) -> Result<()> {
    if delimiter.is_ascii_alphanumeric() || matches!(delimiter, '_' | '"' | '\n' | '\r') {
        bail!("invalid delimiter {delimiter:?}: must be a punctuation or whitespace character");
    }
    Ok(())
}

fn infer_format(path: Option<&PathBuf>) -> Option<FormatArg> {
    let ext = path?.extension().and_then(|s| s.to_str())?;
    match ext.to_ascii_lowercase().as_str() {
        "json" => Some(FormatArg::Value),
        "csv" => Some(FormatArg::Table),
        _ => None,
    }
}
