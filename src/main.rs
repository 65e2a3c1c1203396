//! Command-line interface for storedash-mock
//!
//! # Usage Examples
//!
//! ```bash
//! # Default dashboard batch: 126 records, line-delimited JSON
//! storedash-mock generate --output batch.jsonl
//!
//! # Reproducible batch for a fixture
//! storedash-mock generate --output fixture.jsonl --count 500 --seed 42
//!
//! # CSV export filtered to one zone and a reporting window
//! storedash-mock generate --output zone1.csv --format csv \
//!   --area 1区 --from 2025-03-01 --to 2025-03-31
//!
//! # Column catalog as JSON or YAML
//! storedash-mock columns --format json
//! storedash-mock columns --format yaml --file columns-override.yaml
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use metrics_core::{ColumnCatalog, SearchCriteria};
use mockdata_generator::{MockDataGenerator, DEFAULT_RECORD_COUNT};
use std::path::PathBuf;
use storedash_mock::export;

#[derive(Parser)]
#[command(name = "storedash-mock")]
#[command(about = "Generate mock store performance data for the storedash dashboard")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a record batch and export it to a file
    Generate(GenerateArgs),

    /// Print the dashboard column catalog
    Columns(ColumnsArgs),
}

#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Jsonl)]
    format: ExportFormat,

    /// Number of records to generate
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    count: u64,

    /// Random seed for deterministic generation (same seed = same batch)
    #[arg(long, env = "STOREDASH_SEED")]
    seed: Option<u64>,

    /// Sequence number the batch starts at (IDs and store codes resume here)
    #[arg(long, default_value = "1")]
    start_sequence: u64,

    /// Keep only records in this zone
    #[arg(long)]
    area: Option<String>,

    /// Keep only records whose store label contains this substring
    #[arg(long)]
    store: Option<String>,

    /// Keep only records reported on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Keep only records reported on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,
}

#[derive(Args, Clone, Debug)]
struct ColumnsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = CatalogFormat::Json)]
    format: CatalogFormat,

    /// Read the catalog from a YAML file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    /// One JSON object per line
    Jsonl,
    /// CSV with a header row
    Csv,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CatalogFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Columns(args) => run_columns(args),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let criteria = build_criteria(&args)?;

    let mut generator = match args.seed {
        Some(seed) => MockDataGenerator::seeded(seed),
        None => MockDataGenerator::new(),
    }
    .with_start_sequence(args.start_sequence)?;

    let records = generator.generate_batch(args.count)?;
    tracing::info!("Generated {} records", records.len());

    let records: Vec<_> = if criteria.is_empty() {
        records
    } else {
        let filtered: Vec<_> = records
            .into_iter()
            .filter(|record| criteria.matches(record))
            .collect();
        tracing::info!("{} records match the search criteria", filtered.len());
        filtered
    };

    let metrics = match args.format {
        ExportFormat::Jsonl => export::jsonl::export_jsonl(&records, &args.output),
        ExportFormat::Csv => export::csv::export_csv(&records, &args.output),
    }
    .with_context(|| format!("Failed to export to {}", args.output.display()))?;

    tracing::info!(
        "Wrote {} rows ({} bytes) to {}",
        metrics.rows_written,
        metrics.file_size_bytes,
        args.output.display()
    );

    Ok(())
}

fn run_columns(args: ColumnsArgs) -> anyhow::Result<()> {
    let catalog = match &args.file {
        Some(path) => ColumnCatalog::from_file(path)
            .with_context(|| format!("Failed to load column catalog from {}", path.display()))?,
        None => ColumnCatalog::default(),
    };

    let rendered = match args.format {
        CatalogFormat::Json => serde_json::to_string_pretty(&catalog)?,
        CatalogFormat::Yaml => serde_yaml::to_string(&catalog)?,
    };
    println!("{rendered}");

    Ok(())
}

/// Build search criteria from the filter flags, validating date bounds.
fn build_criteria(args: &GenerateArgs) -> anyhow::Result<SearchCriteria> {
    for (flag, value) in [("--from", &args.from), ("--to", &args.to)] {
        if let Some(value) = value {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .with_context(|| format!("{flag} must be a YYYY-MM-DD date, got '{value}'"))?;
        }
    }

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        if from > to {
            anyhow::bail!("--from {from} is after --to {to}");
        }
    }

    Ok(SearchCriteria {
        area: args.area.clone(),
        store: args.store.clone(),
        date_from: args.from.clone(),
        date_to: args.to.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["storedash-mock", "generate", "--output", "out.jsonl"])
            .expect("valid invocation");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.count, DEFAULT_RECORD_COUNT);
        assert_eq!(args.start_sequence, 1);
        assert!(args.seed.is_none());
        assert!(matches!(args.format, ExportFormat::Jsonl));
    }

    #[test]
    fn test_cli_requires_output() {
        assert!(Cli::try_parse_from(["storedash-mock", "generate"]).is_err());
    }

    #[test]
    fn test_build_criteria_rejects_bad_date() {
        let cli = Cli::try_parse_from([
            "storedash-mock",
            "generate",
            "--output",
            "out.jsonl",
            "--from",
            "03/01/2025",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert!(build_criteria(&args).is_err());
    }

    #[test]
    fn test_build_criteria_rejects_inverted_range() {
        let cli = Cli::try_parse_from([
            "storedash-mock",
            "generate",
            "--output",
            "out.jsonl",
            "--from",
            "2025-06-01",
            "--to",
            "2025-05-01",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert!(build_criteria(&args).is_err());
    }

    #[test]
    fn test_build_criteria_passes_filters_through() {
        let cli = Cli::try_parse_from([
            "storedash-mock",
            "generate",
            "--output",
            "out.jsonl",
            "--area",
            "1区",
            "--store",
            "城东",
            "--from",
            "2025-01-01",
            "--to",
            "2025-12-28",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };
        let criteria = build_criteria(&args).unwrap();
        assert_eq!(criteria.area.as_deref(), Some("1区"));
        assert_eq!(criteria.store.as_deref(), Some("城东"));
        assert!(!criteria.is_empty());
    }
}
