use anyhow::{Context, Result};
use polars::prelude::*;

/// Residential categories kept in the final dataset.
const KEPT_CATEGORIES: [&str; 2] = ["Maisons", "Appartements"];

/// Marker distinguishing rental offers from the other listing types.
const OFFER_TYPE: &str = "u";

/// Columns only needed to decide the category filter.
const FILTER_COLUMNS: [&str; 3] = ["type", "real_estate_type", "annount_type"];

/// Row-level filters: rows are dropped silently, never rewritten.
pub struct RowFilter;

impl RowFilter {
    /// Drops every row whose cell in `col_name` is null. Remaining rows
    /// re-index contiguously.
    pub fn drop_missing(&self, df: &DataFrame, col_name: &str) -> Result<DataFrame> {
        let keep: Vec<bool> = df
            .column(col_name)
            .with_context(|| format!("Missing required column '{}'", col_name))?
            .str()?
            .into_iter()
            .map(|value| value.is_some())
            .collect();

        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        Ok(df.filter(&mask)?)
    }

    /// Keeps houses and apartments that are rental offers: the category
    /// must be one of the kept categories and the listing type exactly the
    /// offer marker.
    pub fn filter_residential(&self, df: &DataFrame) -> Result<DataFrame> {
        let keep: Vec<bool> = df
            .column("real_estate_type")
            .context("Missing required column 'real_estate_type'")?
            .str()?
            .into_iter()
            .map(|value| value.is_some_and(|v| KEPT_CATEGORIES.contains(&v)))
            .collect();
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        let df = df.filter(&mask)?;

        let keep: Vec<bool> = df
            .column("type")
            .context("Missing required column 'type'")?
            .str()?
            .into_iter()
            .map(|value| value == Some(OFFER_TYPE))
            .collect();
        let mask = BooleanChunked::from_slice("keep".into(), &keep);

        Ok(df.filter(&mask)?)
    }

    /// Removes the columns that only existed to drive the category filter.
    pub fn drop_filter_columns(&self, df: &mut DataFrame) -> Result<()> {
        for column in FILTER_COLUMNS {
            if df.column(column).is_ok() {
                df.drop_in_place(column)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_series(name: &str, values: Vec<Option<&str>>) -> Column {
        let values: Vec<Option<String>> = values
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect();
        Series::new(name.into(), values).into()
    }

    #[test]
    fn test_drop_missing_reindexes_remaining_rows() {
        let df = DataFrame::new(vec![
            string_series("title", vec![Some("a"), Some("b"), Some("c")]),
            string_series("price", vec![Some("800"), None, Some("1200")]),
        ])
        .unwrap();

        let filtered = RowFilter.drop_missing(&df, "price").unwrap();
        assert_eq!(filtered.height(), 2);

        let titles = filtered.column("title").unwrap().str().unwrap();
        assert_eq!(titles.get(0), Some("a"));
        assert_eq!(titles.get(1), Some("c"));
    }

    #[test]
    fn test_drop_missing_never_increases_row_count() {
        let df = DataFrame::new(vec![
            string_series("surface", vec![Some("45"), None]),
            string_series("price", vec![None, Some("900")]),
            string_series("address", vec![Some("Rue A 1"), Some("Rue B 2")]),
        ])
        .unwrap();

        let mut current = df.clone();
        for column in ["surface", "price", "address"] {
            let next = RowFilter.drop_missing(&current, column).unwrap();
            assert!(next.height() <= current.height());
            current = next;
        }
        assert_eq!(current.height(), 0);
    }

    #[test]
    fn test_drop_missing_on_absent_column_is_fatal() {
        let df = DataFrame::new(vec![string_series("title", vec![Some("a")])]).unwrap();
        assert!(RowFilter.drop_missing(&df, "surface").is_err());
    }

    #[test]
    fn test_filter_residential_keeps_houses_and_apartments() {
        let df = DataFrame::new(vec![
            string_series(
                "real_estate_type",
                vec![
                    Some("Maisons"),
                    Some("Appartements"),
                    Some("Voitures"),
                    Some("Maisons"),
                    None,
                ],
            ),
            string_series(
                "type",
                vec![Some("u"), Some("u"), Some("u"), Some("s"), Some("u")],
            ),
            string_series(
                "title",
                vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e")],
            ),
        ])
        .unwrap();

        let filtered = RowFilter.filter_residential(&df).unwrap();
        assert_eq!(filtered.height(), 2);

        let titles = filtered.column("title").unwrap().str().unwrap();
        assert_eq!(titles.get(0), Some("a"));
        assert_eq!(titles.get(1), Some("b"));
    }

    #[test]
    fn test_drop_filter_columns() {
        let mut df = DataFrame::new(vec![
            string_series("title", vec![Some("a")]),
            string_series("type", vec![Some("u")]),
            string_series("real_estate_type", vec![Some("Maisons")]),
            string_series("annount_type", vec![Some("u")]),
        ])
        .unwrap();

        RowFilter.drop_filter_columns(&mut df).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["title"]);
    }
}
