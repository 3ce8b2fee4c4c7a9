mod generate;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use engine::persist::{load_catalog, save_catalog, save_meta, CatalogPaths, MetaFile};
use engine::{Catalog, CatalogIndex, PropertyRecord};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cataloger")]
#[command(about = "Generate and inspect property catalogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a reproducible synthetic catalog
    Generate {
        /// Number of listings
        #[arg(long, default_value_t = 100)]
        count: u32,
        /// RNG seed; the same seed always produces the same catalog
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output file (.json or .jsonl); meta.json is written alongside
        #[arg(long, default_value = "./data/catalog.json")]
        output: String,
    },
    /// Summarize a catalog file or a directory of catalog files
    Stats {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// How many features to list
        #[arg(long, default_value_t = 10)]
        top: usize,
        /// Print the summary as JSON on stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StatsReport<'a> {
    num_properties: usize,
    min_price: Option<u64>,
    max_price: Option<u64>,
    cities: Vec<(&'a str, usize)>,
    top_features: Vec<(&'a str, usize)>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { count, seed, output } => write_catalog(count, seed, &output),
        Commands::Stats { input, top, json } => stats(&input, top, json),
    }
}

fn write_catalog(count: u32, seed: u64, output: &str) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let paths = CatalogPaths::new(output);
    let records = generate::generate(count, seed);
    save_catalog(&paths, &records)?;

    let meta = MetaFile {
        num_properties: count,
        created_at: time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into()),
        seed: Some(seed),
        version: 1,
    };
    save_meta(&paths, &meta)?;

    tracing::info!(output, count, seed, "catalog written");
    Ok(())
}

fn stats(input: &str, top: usize, json: bool) -> Result<()> {
    let mut records: Vec<PropertyRecord> = Vec::new();
    for file in catalog_files(Path::new(input)) {
        let loaded = load_catalog(&CatalogPaths::new(&file))?;
        tracing::debug!(file = %file.display(), records = loaded.len(), "loaded catalog file");
        records.extend(loaded);
    }
    let catalog = Catalog::new(records)?;
    let index = CatalogIndex::build(&catalog);

    let prices = catalog.get_all().iter().map(|p| p.price);
    let mut top_features = index.feature_counts();
    top_features.truncate(top);
    let report = StatsReport {
        num_properties: catalog.len(),
        min_price: prices.clone().min(),
        max_price: prices.max(),
        cities: index.city_counts(),
        top_features,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    tracing::info!(
        num_properties = report.num_properties,
        min_price = report.min_price,
        max_price = report.max_price,
        "catalog summary"
    );
    for (city, n) in &report.cities {
        tracing::info!(city, listings = n, "city");
    }
    for (feature, n) in &report.top_features {
        tracing::info!(feature, listings = n, "feature");
    }
    Ok(())
}

fn catalog_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if !p.is_file() || p.file_name().and_then(|s| s.to_str()) == Some("meta.json") {
                continue;
            }
            if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                if matches!(ext, "json" | "jsonl") {
                    files.push(p.to_path_buf());
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}
