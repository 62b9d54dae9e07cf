//! Command-line front end for the scrambler.
//!
//! Reads text from an argument, a file, or stdin, scrambles it, and writes
//! the result to stdout or a file. Diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pii_scrambler::{Category, ScrambleReport, Scrambler, ScramblerConfig};

/// Scramble identifiable data patterns in text.
///
/// Phone numbers, credit card numbers, email addresses and IPv4 addresses
/// are replaced with random but valid values.
#[derive(Parser)]
#[command(name = "pii-scrambler")]
#[command(
    version,
    about = "Scramble identifiable data patterns in text.",
    long_about = None
)]
struct Cli {
    /// The input text to scramble. If not provided, reads from stdin.
    #[arg(value_name = "INPUT_TEXT")]
    input_text: Option<String>,

    /// Patterns to scramble (phone_number, credit_card, email, ip_address).
    /// If not provided, all patterns are used.
    #[arg(short, long, value_name = "PATTERN", num_args = 1..)]
    patterns: Option<Vec<String>>,

    /// Locale for generating fake data (e.g. en_US, fr_FR)
    #[arg(short, long, default_value = "en_US")]
    locale: String,

    /// File to scramble. Overrides INPUT_TEXT if present.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file. If not provided, prints to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Scramble command handler.
struct ScrambleHandler {
    scrambler: Scrambler,
    verbose: bool,
}

impl ScrambleHandler {
    fn new(config: ScramblerConfig, verbose: bool) -> Result<Self> {
        let scrambler = Scrambler::with_config(config).context("Failed to create scrambler")?;
        Ok(Self { scrambler, verbose })
    }

    /// Scrambles `input` and writes it to `output` or stdout.
    fn run(&mut self, input: &str, patterns: Option<&[&str]>, output: Option<&Path>) -> Result<()> {
        let outcome = self.scrambler.scramble(input, patterns);

        if self.verbose {
            print_summary(&outcome.report);
        }

        match output {
            Some(path) => {
                std::fs::write(path, &outcome.text)
                    .with_context(|| format!("Error writing to file: {}", path.display()))?;
                info!("Scrambled data written to: {}", path.display());
            }
            None => println!("{}", outcome.text),
        }

        Ok(())
    }
}

fn print_summary(report: &ScrambleReport) {
    let applied: Vec<_> = report
        .categories_applied
        .iter()
        .map(Category::as_str)
        .collect();
    eprintln!("Scramble Summary:");
    eprintln!("  Categories applied:  {}", applied.join(", "));
    eprintln!("  Matches found:       {}", report.matches_found);
    eprintln!("  Values replaced:     {}", report.values_replaced);
    eprintln!("  Generation failures: {}", report.generation_failures);
}

/// Checks every requested pattern name before any text is processed.
fn validate_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        if pattern.parse::<Category>().is_err() {
            anyhow::bail!(
                "Invalid pattern: {}. Must be one of: {}",
                pattern,
                Category::names()
            );
        }
    }
    Ok(())
}

/// Reads the input from the file, the positional argument, or stdin.
fn read_input(file: Option<&Path>, input_text: Option<&str>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => anyhow::anyhow!("File not found: {}", path.display()),
            _ => anyhow::Error::new(err).context(format!("Error reading file: {}", path.display())),
        });
    }

    // An empty argument counts as absent
    if let Some(text) = input_text.filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Error reading stdin")?;
    Ok(buffer)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(patterns) = &cli.patterns {
        validate_patterns(patterns)?;
    }

    let input = read_input(cli.file.as_deref(), cli.input_text.as_deref())?;

    let config = ScramblerConfig {
        locale: cli.locale.clone(),
        seed: cli.seed,
    };
    let mut handler = ScrambleHandler::new(config, cli.verbose)?;

    let patterns: Option<Vec<&str>> = cli
        .patterns
        .as_ref()
        .map(|names| names.iter().map(String::as_str).collect());
    handler.run(&input, patterns.as_deref(), cli.output.as_deref())?;

    Ok(())
}
