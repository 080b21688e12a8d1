use anyhow::{Result, anyhow};
use polars::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::info;

/// Flattens raw listing objects into a single table of nullable string
/// columns. Nested objects become dotted-path columns
/// (`location_info.address`), scalars are rendered to strings, arrays are
/// kept as their compact JSON text, and nulls become missing cells.
pub struct JsonFlattener;

impl JsonFlattener {
    pub fn new() -> Self {
        JsonFlattener
    }

    pub fn flatten_to_dataframe(&self, items: &[Value]) -> Result<DataFrame> {
        let mut records = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let record = self
                .flatten_item(item)
                .map_err(|e| anyhow!("Failed to flatten listing at index {}: {}", index, e))?;
            records.push(record);
        }

        info!("Flattened {} listings", records.len());

        self.records_to_dataframe(records)
    }

    pub fn flatten_item(&self, item: &Value) -> Result<Map<String, Value>> {
        let object = item
            .as_object()
            .ok_or_else(|| anyhow!("listing is not a JSON object"))?;

        let mut record = Map::new();
        for (key, value) in object {
            self.flatten_value(key, value, &mut record);
        }

        Ok(record)
    }

    fn flatten_value(&self, key: &str, value: &Value, record: &mut Map<String, Value>) {
        match value {
            Value::Object(nested) => {
                for (child_key, child) in nested {
                    self.flatten_value(&format!("{}.{}", key, child_key), child, record);
                }
            }
            Value::String(s) => {
                record.insert(key.to_string(), Value::String(s.clone()));
            }
            Value::Null => {
                record.insert(key.to_string(), Value::Null);
            }
            // Numbers, bools and arrays keep their JSON text form; array
            // columns only survive until the column prune.
            other => {
                record.insert(key.to_string(), Value::String(other.to_string()));
            }
        }
    }

    fn records_to_dataframe(&self, records: Vec<Map<String, Value>>) -> Result<DataFrame> {
        if records.is_empty() {
            return Ok(DataFrame::empty());
        }

        // Column set is the union across records, ordered by first
        // appearance so reruns produce identical schemas.
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for record in &records {
            for key in record.keys() {
                if seen.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
        }

        let mut series_vec = Vec::with_capacity(columns.len());
        for column in &columns {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|record| match record.get(column) {
                    Some(Value::String(s)) => Some(s.clone()),
                    _ => None,
                })
                .collect();

            let series = Series::new(column.as_str().into(), values);
            series_vec.push(series.into());
        }

        DataFrame::new(series_vec).map_err(|e| anyhow!("Failed to create DataFrame: {}", e))
    }
}

impl Default for JsonFlattener {
    fn default() -> Self {
        Self::new()
    }
}
