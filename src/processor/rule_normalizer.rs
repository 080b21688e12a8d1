use anyhow::Result;
use polars::prelude::*;
use regex::Regex;

/// Text cleanup for the surviving columns: unit stripping on the surface,
/// suffix stripping on the price, and the street/number address split.
pub struct RuleNormalizer;

impl RuleNormalizer {
    /// Strips the `m²` unit suffix; the value stays a string.
    pub fn clean_surface(&self, df: &mut DataFrame) -> Result<()> {
        self.rewrite_column(df, "surface", |value| value.replace("m²", ""))
    }

    /// Strips the rental-price decorations. `.- par mois` must go before
    /// the bare `.-`, otherwise a dangling ` par mois` survives.
    pub fn clean_price(&self, df: &mut DataFrame) -> Result<()> {
        self.rewrite_column(df, "price", |value| {
            value
                .replace(".- par mois", "")
                .replace(".-", "")
                .replace("par sem.", "")
                .replace('\'', "")
                .trim()
                .to_string()
        })
    }

    /// Splits the address into `street` (first run of non-digits, empty
    /// string if none) and `number` (first run of digits, null if none).
    pub fn split_address(&self, df: &mut DataFrame) -> Result<()> {
        let street_regex = Regex::new(r"\D+")?;
        let number_regex = Regex::new(r"\d+")?;

        let addresses = df.column("address")?.str()?;

        let mut streets = Vec::with_capacity(addresses.len());
        let mut numbers = Vec::with_capacity(addresses.len());

        for address in addresses.into_iter() {
            let address = address.unwrap_or("");
            streets.push(
                street_regex
                    .find(address)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            );
            numbers.push(number_regex.find(address).map(|m| m.as_str().to_string()));
        }

        df.with_column(Series::new("street".into(), streets))?;
        df.with_column(Series::new("number".into(), numbers))?;

        Ok(())
    }

    fn rewrite_column(
        &self,
        df: &mut DataFrame,
        col_name: &str,
        clean: impl Fn(&str) -> String,
    ) -> Result<()> {
        let cleaned: Vec<Option<String>> = df
            .column(col_name)?
            .str()?
            .into_iter()
            .map(|value| value.map(&clean))
            .collect();

        let new_series = Series::new(col_name.into(), cleaned);
        df.with_column(new_series)?;

        Ok(())
    }
}
