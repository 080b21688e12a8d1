use crate::models::ParameterEntry;
use anyhow::{Context, Result, anyhow};
use polars::prelude::*;
use serde_json::Value;

/// Pulls the structured attributes out of each listing's `parameters` list
/// and appends them as the `rooms`, `size` and `type_param` columns.
pub struct ParamExtractor;

impl ParamExtractor {
    pub fn append_param_columns(&self, df: &mut DataFrame, items: &[Value]) -> Result<()> {
        let mut rooms = Vec::with_capacity(items.len());
        let mut sizes = Vec::with_capacity(items.len());
        let mut types = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let parameters = item
                .get("parameters")
                .ok_or_else(|| anyhow!("listing at index {} has no parameters list", index))?;

            let entries: Vec<ParameterEntry> = serde_json::from_value(parameters.clone())
                .with_context(|| {
                    format!(
                        "listing at index {} has a malformed parameters list",
                        index
                    )
                })?;

            rooms.push(Self::lookup(&entries, "rooms"));
            sizes.push(Self::lookup(&entries, "size"));
            types.push(Self::lookup(&entries, "type"));
        }

        df.with_column(Series::new("rooms".into(), rooms))?;
        df.with_column(Series::new("size".into(), sizes))?;
        df.with_column(Series::new("type_param".into(), types))?;

        Ok(())
    }

    // First entry with a matching id wins.
    fn lookup(entries: &[ParameterEntry], id: &str) -> Option<String> {
        entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.value.clone())
    }
}
