use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::{Map, Value};

/// Column whose null cells export as the numeric `0` instead of JSON null.
/// Addresses without a house number have always been exported that way,
/// even though every found number is a string.
const STREET_NUMBER_COLUMN: &str = "number";

/// Serializes the finished table as a JSON array of row objects, field
/// order following column order.
pub struct JsonExporter;

impl JsonExporter {
    pub fn export_json(&self, df: &DataFrame) -> Result<String> {
        let records = self.to_records(df)?;
        serde_json::to_string(&records).context("Failed to serialize the cleaned dataset")
    }

    pub fn to_records(&self, df: &DataFrame) -> Result<Vec<Map<String, Value>>> {
        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let values = column
                .str()
                .with_context(|| format!("Column '{}' is not a string column", column.name()))?;
            columns.push((column.name().as_str(), values));
        }

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let mut record = Map::new();
            for (name, values) in &columns {
                let cell = match values.get(row) {
                    Some(value) => Value::String(value.to_string()),
                    None if *name == STREET_NUMBER_COLUMN => Value::from(0),
                    None => Value::Null,
                };
                record.insert((*name).to_string(), cell);
            }
            records.push(record);
        }

        Ok(records)
    }
}
