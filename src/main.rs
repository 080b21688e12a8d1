use anyhow::{Context, Result, bail};
use config::PipelineConfig;
use processor::{
    JsonExporter, JsonFlattener, ParamExtractor, RowFilter, RuleNormalizer, SchemaMapper,
};
use std::path::Path;
use storage::LocalStore;
use tracing::info;

mod config;
mod models;
mod processor;
mod storage;

const CONFIG_PATH: &str = "src/configs/pipeline.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = if Path::new(CONFIG_PATH).exists() {
        PipelineConfig::from_file(CONFIG_PATH).context("Failed to load pipeline configuration")?
    } else {
        PipelineConfig::default()
    };
    config.validate()?;

    let rows = run(&config)?;

    info!("Saved '{}' with {} listings", config.output_path, rows);

    Ok(())
}

/// Runs the whole pipeline: scan, load, flatten, extract, prune/rename,
/// filter, clean, export. Returns the number of exported rows.
fn run(config: &PipelineConfig) -> Result<usize> {
    info!("Parsing tutti.ch listing data from {}", config.raw_dir);

    let store = LocalStore;
    let flattener = JsonFlattener::new();
    let extractor = ParamExtractor;
    let mapper = SchemaMapper::new();
    let normalizer = RuleNormalizer;
    let filter = RowFilter;
    let exporter = JsonExporter;

    let files = store.list_listing_files(Path::new(&config.raw_dir))?;
    info!("Found {} listing files", files.len());

    let mut items = Vec::new();
    for file in &files {
        items.extend(store.load_items(file)?);
    }
    if items.is_empty() {
        bail!("No listings found in {}", config.raw_dir);
    }

    let mut df = flattener.flatten_to_dataframe(&items)?;
    extractor.append_param_columns(&mut df, &items)?;
    info!(
        "Flattened {} listings into {} columns",
        df.height(),
        df.width()
    );

    mapper.map_to_target_schema(&mut df)?;

    df = filter.drop_missing(&df, "surface")?;
    normalizer.clean_surface(&mut df)?;
    df = filter.drop_missing(&df, "price")?;
    df = filter.drop_missing(&df, "address")?;
    info!(
        "{} listings remain after dropping rows with missing fields",
        df.height()
    );

    normalizer.clean_price(&mut df)?;
    normalizer.split_address(&mut df)?;

    df = filter.filter_residential(&df)?;
    info!(
        "{} residential rental listings after the category filter",
        df.height()
    );

    filter.drop_filter_columns(&mut df)?;

    let json = exporter.export_json(&df)?;
    store.write_output(Path::new(&config.output_path), &json)?;

    Ok(df.height())
}
