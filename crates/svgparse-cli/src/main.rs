use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use svgparse::Config;

#[derive(Debug, Parser)]
#[command(
    name = "svgparse",
    version,
    about = "Parse an SVG document and print its node tree as JSON"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
    /// Only check that the document parses
    #[arg(long)]
    check: bool,
    /// Maximum element nesting depth (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_size)]
    max_size: usize,
    /// Log parser progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = read_input(&args.input)?;
    let config = Config::new(args.max_depth, args.max_size);

    let root = match svgparse::parse_with_config(&source, config) {
        Ok(root) => root,
        Err(err) => {
            let name = input_name(&args.input);
            let mut stderr = io::stderr();
            writeln!(stderr, "{name}: {err}").context("failed to write stderr")?;
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(root = %root.element().tag_name, "parsed document");

    if args.check {
        return Ok(ExitCode::SUCCESS);
    }

    let mut json = if args.compact {
        serde_json::to_string(&root)
    } else {
        serde_json::to_string_pretty(&root)
    }
    .context("failed to serialize tree")?;
    json.push('\n');

    write_output(&args.output, json.as_bytes())?;
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
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

fn input_name(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}
