//! seedsweep - report disk files no torrent references.
//!
//! Usage:
//!   seedsweep --categories "Films=/mnt/films;Shows=/mnt/shows"
//!   seedsweep --format json
//!   seedsweep --help
//!
//! Connection and policy default to the environment (QBIT_HOST,
//! QBIT_USER, QBIT_PASS, CATEGORY_FOLDERS, EXCLUDE_PATTERNS,
//! IGNORE_SUFFIXES, also honored from a .env file); flags override.

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use seedsweep_client::QbitClient;
use seedsweep_core::{Category, CategoryMapping, ReconcileConfig, ReconcileReport};
use seedsweep_reconcile::reconcile;

#[derive(Parser)]
#[command(
    name = "seedsweep",
    version,
    about = "Report disk files no torrent in qBittorrent references",
    long_about = "seedsweep compares what qBittorrent thinks it owns with what is\n\
                  actually on disk under your category folders, and reports the\n\
                  files nothing references any more - grouped by category, with\n\
                  sizes. It never deletes anything."
)]
struct Cli {
    /// qBittorrent Web UI URL
    #[arg(long, env = "QBIT_HOST", default_value = "http://qbittorrent:8080")]
    host: String,

    /// Web UI username
    #[arg(long, env = "QBIT_USER", default_value = "admin")]
    username: String,

    /// Web UI password
    #[arg(long, env = "QBIT_PASS", default_value = "password", hide_env_values = true)]
    password: String,

    /// Category to folder mapping, e.g. "Films=/mnt/films;Shows=/mnt/shows"
    #[arg(long, env = "CATEGORY_FOLDERS")]
    categories: String,

    /// Comma-separated literal substrings; matching paths are never
    /// reported as orphaned
    #[arg(long, env = "EXCLUDE_PATTERNS", default_value = "")]
    exclude: String,

    /// Comma-separated file suffixes to ignore in addition to the defaults
    #[arg(long, env = "IGNORE_SUFFIXES", default_value = "")]
    ignore_suffixes: String,

    /// Do not follow symlinked directories
    #[arg(long)]
    no_follow_symlinks: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // .env is optional; flags and real environment win over it.
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    eprintln!("Connecting to {}...", cli.host);
    let client = QbitClient::connect(&cli.host, &cli.username, &cli.password)
        .await
        .context("download client unavailable")?;
    let torrents = client
        .fetch_records()
        .await
        .context("download client unavailable")?;

    eprintln!("Reconciling {} torrent(s) against disk...", torrents.len());
    let report = reconcile(&config, &torrents);

    match cli.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Assemble the run configuration from parsed flags and environment.
fn build_config(cli: &Cli) -> Result<ReconcileConfig> {
    let mapping = parse_category_map(&cli.categories)?;
    ReconcileConfig::builder()
        .mapping(mapping)
        .exclude_patterns(parse_list(&cli.exclude))
        .extra_ignore_suffixes(parse_list(&cli.ignore_suffixes))
        .follow_symlinks(!cli.no_follow_symlinks)
        .build()
        .map_err(|e| eyre!("invalid configuration: {e}"))
}

/// Convert `Films=/mnt/films;Shows=/mnt/shows` into a category mapping.
/// Malformed entries are logged and skipped.
fn parse_category_map(raw: &str) -> Result<CategoryMapping> {
    let mut mapping = CategoryMapping::new();
    for pair in raw.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((category, folder))
                if !category.trim().is_empty() && !trim_quotes(folder).is_empty() =>
            {
                mapping.insert(Category::named(category.trim()), trim_quotes(folder));
            }
            _ => warn!(entry = pair, "skipping malformed category mapping entry"),
        }
    }
    if mapping.is_empty() {
        return Err(eyre!("no category folders configured"));
    }
    Ok(mapping)
}

/// Parse a comma-separated list, dropping empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| trim_quotes(part).to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Trim whitespace and stray quotes some shells leave on values.
fn trim_quotes(s: &str) -> &str {
    s.trim().trim_matches(['"', '\'']).trim()
}

/// Print the text report.
fn print_report(report: &ReconcileReport) {
    if !report.has_orphans() {
        println!("No orphaned files found.");
    } else {
        for (category, section) in &report.categories {
            if section.is_empty() {
                continue;
            }
            println!();
            println!("===== {category} =====");
            for file in section.sorted_orphans() {
                println!("{}    ({})", file.path.display(), format_size(file.size));
            }
            println!(
                "  {} file(s), {}",
                section.orphan_count(),
                format_size(section.total_bytes)
            );
        }
        println!();
        println!(
            "Total: {} orphaned file(s), {}",
            report.orphan_count(),
            format_size(report.total_orphaned_bytes())
        );
    }

    if report.has_diagnostics() {
        println!();
        println!("{} warning(s) during the pass:", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic.message);
        }
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
