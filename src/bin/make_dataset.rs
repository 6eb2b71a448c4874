use anyhow::{Context, Result};
use zone_pair_scope::config::PERSISTENCE;
use zone_pair_scope::data::{DatasetFile, JsonTables, LoadDataset};

fn main() -> Result<()> {
    build_dataset()
}

fn build_dataset() -> Result<()> {
    let tables = JsonTables::from_config();
    let dataset = tables.load_dataset().with_context(|| {
        format!(
            "Failed to load source tables {:?} and {:?}",
            tables.records_path, tables.coordinates_path
        )
    })?;

    // Refuse to bake an ambiguous lookup into the prepared file
    dataset
        .coordinate_table()
        .context("Coordinate table has duplicate zones")?;

    println!(
        "Loaded {} records and {} zones from {:?}",
        dataset.records.len(),
        dataset.coordinates.len(),
        tables.records_path
    );

    let output = DatasetFile::new(dataset, PERSISTENCE.dataset.version);
    let output_path = DatasetFile::default_path();
    output.save_to_path(&output_path)?;

    println!(
        "✅ Dataset written to {:?} with {} records.",
        output_path,
        output.dataset.records.len()
    );
    Ok(())
}
