//! sheetcache CLI - replay server deltas into a viewport cache

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetcache::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetcache")]
#[command(
    author,
    version,
    about = "Replay spreadsheet deltas into a viewport cache and inspect the result"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply deltas and print the cached cells, counts and labels
    Replay {
        #[command(flatten)]
        cache: CacheArgs,
    },

    /// Apply deltas and print what a selection resolves to
    Resolve {
        #[command(flatten)]
        cache: CacheArgs,

        /// Cell, range or label to resolve
        #[arg(short, long)]
        selection: String,
    },

    /// Apply deltas and print each labelled cell with its labels
    Labels {
        #[command(flatten)]
        cache: CacheArgs,
    },
}

#[derive(Args)]
struct CacheArgs {
    /// Delta files (JSON, a single delta or an array of deltas), applied in order
    #[arg(required = true)]
    deltas: Vec<PathBuf>,

    /// Visible window, e.g. "A1:J20,L1:M20" (default: no window)
    #[arg(short, long, default_value = "")]
    window: String,

    /// Spreadsheet metadata file (JSON) providing the default column width and row height
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Fail when label mappings form a cycle
    #[arg(long)]
    reject_cycles: bool,

    /// Largest label range expanded into cells
    #[arg(long, default_value_t = CacheOptions::default().max_range_expansion)]
    max_range_expansion: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { cache } => replay(&cache),
        Commands::Resolve { cache, selection } => resolve(&cache, &selection),
        Commands::Labels { cache } => labels(&cache),
    }
}

/// Build a cache from the arguments and apply every delta file
fn load(args: &CacheArgs) -> Result<ViewportCache> {
    let options = CacheOptions {
        reject_label_cycles: args.reject_cycles,
        max_range_expansion: args.max_range_expansion,
        ..CacheOptions::default()
    };
    let mut cache = ViewportCache::new(options);

    if let Some(path) = &args.metadata {
        let text = read(path)?;
        let metadata: SpreadsheetMetadata = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse metadata '{}'", path.display()))?;
        cache.set_metadata(&metadata);
    }

    let window = Window::parse(&args.window)
        .with_context(|| format!("Invalid window '{}'", args.window))?;
    cache.set_window(window);

    for path in &args.deltas {
        let text = read(path)?;
        let deltas = parse_deltas(&text)
            .with_context(|| format!("Failed to parse deltas '{}'", path.display()))?;
        for (i, delta) in deltas.iter().enumerate() {
            let stats = cache
                .apply_delta(delta)
                .with_context(|| format!("Failed to apply delta {} of '{}'", i, path.display()))?;
            eprintln!(
                "{}[{}]: {} cells upserted, {} removed, {} labels ({} unresolved)",
                path.display(),
                i,
                stats.cells_upserted,
                stats.cells_removed,
                stats.labels,
                stats.labels_unresolved
            );
        }
    }

    Ok(cache)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// A file holds either one delta or an array of them
fn parse_deltas(text: &str) -> serde_json::Result<Vec<SpreadsheetDelta>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|delta| vec![delta])
    }
}

fn replay(args: &CacheArgs) -> Result<()> {
    let cache = load(args)?;

    let window = cache.window();
    println!(
        "Window: {}",
        if window.is_empty() {
            "(none)".to_string()
        } else {
            window.to_string()
        }
    );
    println!(
        "Columns: {}",
        cache
            .column_count()
            .map_or("unknown".to_string(), |c| c.to_string())
    );
    println!(
        "Rows: {}",
        cache
            .row_count()
            .map_or("unknown".to_string(), |r| r.to_string())
    );
    if !window.is_empty() {
        println!(
            "Window size: {} x {} px",
            cache.window_width(),
            cache.window_height()
        );
    }

    println!();
    println!("Cells:");
    for cell in cache.cells() {
        println!(
            "  {}\t{}\t{}",
            cell.reference,
            cell.formula.text,
            cell.display_text()
        );
    }

    println!();
    println!("Labels:");
    for mapping in cache.labels() {
        let resolved = cache
            .resolve_label(&Selection::from(mapping.label().clone()))
            .map_or("(unresolved)".to_string(), |s| s.to_string());
        println!("  {}\t{}\t{}", mapping.label(), mapping.target(), resolved);
    }

    Ok(())
}

fn resolve(args: &CacheArgs, selection: &str) -> Result<()> {
    let cache = load(args)?;
    let selection = Selection::parse(selection)
        .with_context(|| format!("Invalid selection '{}'", selection))?;

    match cache.resolve_label(&selection) {
        Some(resolved) => println!("{}", resolved),
        None => anyhow::bail!("'{}' does not resolve to a cell or range", selection),
    }

    Ok(())
}

fn labels(args: &CacheArgs) -> Result<()> {
    let cache = load(args)?;

    for (cell, labels) in cache.labelled_cells() {
        let names: Vec<String> = labels.iter().map(LabelName::to_string).collect();
        println!("{}\t{}", cell, names.join(","));
    }

    Ok(())
}
