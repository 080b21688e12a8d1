use anyhow::Result;
use polars::prelude::*;

/// Scraper columns with no value for rent analysis: identifiers, media,
/// language, the raw parameter list, redundant location fields, free text,
/// timestamps and the poster alias.
const DROP_COLUMNS: [&str; 19] = [
    "company_ad",
    "image_names",
    "language",
    "parameters",
    "phone_hash",
    "thumb_name",
    "category_info.id",
    "category_info.parent_id",
    "category_info.parent_name",
    "highlight",
    "location_info.area",
    "location_info.area_id",
    "location_info.region_name",
    "location_info.region_id",
    "public_account_id",
    "body",
    "id",
    "epoch_time",
    "user_alias",
];

/// Maps the remaining scraper columns onto the target schema.
pub struct SchemaMapper {
    renames: Vec<(&'static str, &'static str)>,
}

impl SchemaMapper {
    pub fn new() -> Self {
        let renames = vec![
            ("subject", "title"),
            ("rooms", "numberRooms"),
            ("location_info.address", "address"),
            ("location_info.plz", "postCode"),
            ("size", "surface"),
            ("type_param", "annount_type"),
            ("category_info.name", "real_estate_type"),
        ];

        SchemaMapper { renames }
    }

    pub fn map_to_target_schema(&self, df: &mut DataFrame) -> Result<()> {
        for column in DROP_COLUMNS {
            if df.column(column).is_ok() {
                df.drop_in_place(column)?;
            }
        }

        for &(from, to) in &self.renames {
            if df.column(from).is_ok() {
                df.rename(from, to.into())?;
            }
        }

        Ok(())
    }
}

impl Default for SchemaMapper {
    fn default() -> Self {
        Self::new()
    }
}
