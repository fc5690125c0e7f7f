use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::io;

use pricing_core::{PricingError, ProductRecord};

/// Product master loaded from CSV. Column layout follows the pricing
/// workbook's Data sheet, flattened: `item, description, category,
/// ship_rev, ship_cost, handling_rev, handling_cost, merch_cost`.
#[derive(Debug)]
pub struct Catalog {
    records: HashMap<String, ProductRecord>,
}

const REQUIRED_COLUMNS: [&str; 6] = [
    "item",
    "ship_rev",
    "ship_cost",
    "handling_rev",
    "handling_cost",
    "merch_cost",
];

/// One raw CSV row before conversion to the engine's record type.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    item: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    ship_rev: Decimal,
    ship_cost: Decimal,
    handling_rev: Decimal,
    handling_cost: Decimal,
    merch_cost: Decimal,
}

impl Catalog {
    /// Load and validate the catalog file. A missing column or an
    /// unparseable numeric cell is a hard error; computation never
    /// proceeds on defaulted figures.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)
            .map_err(|e| format!("Failed to open catalog '{}': {}", path, e))?;
        Self::from_reader(file).map_err(|e| format!("Catalog '{}': {}", path, e).into())
    }

    /// Load the catalog from any CSV source.
    pub fn from_reader<R: io::Read>(source: R) -> Result<Self, Box<dyn std::error::Error>> {
        let mut reader = csv::Reader::from_reader(source);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(format!("missing required column '{}'", column).into());
            }
        }

        let mut records: HashMap<String, ProductRecord> = HashMap::new();
        for (i, row) in reader.deserialize::<CatalogRow>().enumerate() {
            // Header is line 1, so data row i sits on line i + 2
            let row = row.map_err(|e| format!("row {}: {}", i + 2, e))?;
            let item = row.item.trim().to_string();
            if item.is_empty() {
                return Err(format!("row {}: empty item number", i + 2).into());
            }
            // First occurrence of a duplicated item wins
            records.entry(item.clone()).or_insert_with(|| ProductRecord {
                item,
                description: row.description.filter(|d| !d.trim().is_empty()),
                category: row.category.filter(|c| !c.trim().is_empty()),
                shipping_revenue: row.ship_rev,
                shipping_cost: row.ship_cost,
                handling_revenue: row.handling_rev,
                handling_cost: row.handling_cost,
                merchandise_cost: row.merch_cost,
            });
        }

        Ok(Catalog { records })
    }

    /// Look one item up; a miss is an error, never a defaulted record.
    pub fn get(&self, item: &str) -> Result<&ProductRecord, PricingError> {
        self.records
            .get(item)
            .ok_or_else(|| PricingError::UnknownItem(item.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
item,description,category,ship_rev,ship_cost,handling_rev,handling_cost,merch_cost
10482,Travel Mug 16oz,Drinkware,18.50,12.75,6.00,2.10,24.02
10511,Stylus Pen,Writing,9.25,6.40,3.00,1.05,4.18
";

    #[test]
    fn test_load_and_lookup() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let record = catalog.get("10482").unwrap();
        assert_eq!(record.shipping_revenue, dec!(18.50));
        assert_eq!(record.merchandise_cost, dec!(24.02));
        assert_eq!(record.category.as_deref(), Some("Drinkware"));
        assert!(catalog.get("10511").is_ok());
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let err = catalog.get("99999").unwrap_err();
        assert!(matches!(err, PricingError::UnknownItem(_)));
    }

    #[test]
    fn test_missing_column_rejected() {
        let csv = "item,ship_rev,ship_cost,handling_rev,handling_cost\n10482,1,1,1,1\n";
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("merch_cost"));
    }

    #[test]
    fn test_unparseable_cell_rejected_with_row_number() {
        let csv = "\
item,ship_rev,ship_cost,handling_rev,handling_cost,merch_cost
10482,abc,12.75,6.00,2.10,24.02
";
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_first_occurrence_of_duplicate_item_wins() {
        let csv = "\
item,ship_rev,ship_cost,handling_rev,handling_cost,merch_cost
10482,18.50,12.75,6.00,2.10,24.02
10482,99.00,99.00,99.00,99.00,99.00
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.get("10482").unwrap().shipping_revenue, dec!(18.50));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let csv = "\
item,description,category,ship_rev,ship_cost,handling_rev,handling_cost,merch_cost
10482,,,18.50,12.75,6.00,2.10,24.02
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        let record = catalog.get("10482").unwrap();
        assert!(record.description.is_none());
        assert!(record.category.is_none());
    }
}
