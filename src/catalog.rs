use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{LedgerError, Result};
use crate::models::FoodDefinition;

/// The set of available food definitions for one session.
///
/// Loaded wholesale from a JSON or CSV source; immutable afterwards.
/// Lookup is exact and case-sensitive on `name`.
pub struct FoodCatalog {
    /// Definitions in source order.
    foods: Vec<FoodDefinition>,
    /// Name -> index into `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Load a catalog from a file, picking the format by extension
    /// (`.csv` for CSV, anything else is parsed as a JSON array).
    ///
    /// Fails with `LedgerError::Catalog` on duplicate names or invalid
    /// rate values; missing required fields fail at deserialization.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let foods = if is_csv {
            Self::read_csv(path)?
        } else {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        };

        Self::from_foods(foods)
    }

    /// Build a catalog from already-parsed definitions, validating them.
    pub fn from_foods(foods: Vec<FoodDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(foods.len());
        for (i, food) in foods.iter().enumerate() {
            if !food.is_valid() {
                return Err(LedgerError::Catalog(format!(
                    "invalid definition for '{}': rates must be non-negative",
                    food.name
                )));
            }
            if index.insert(food.name.clone(), i).is_some() {
                return Err(LedgerError::Catalog(format!(
                    "duplicate food name: '{}'",
                    food.name
                )));
            }
        }
        Ok(Self { foods, index })
    }

    fn read_csv(path: &Path) -> Result<Vec<FoodDefinition>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut foods = Vec::new();
        for record in reader.deserialize() {
            foods.push(record?);
        }
        Ok(foods)
    }

    /// Exact, case-sensitive lookup by name. No fuzzy matching.
    pub fn find(&self, name: &str) -> Option<&FoodDefinition> {
        self.index.get(name).map(|&i| &self.foods[i])
    }

    /// All names in source order.
    pub fn names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    /// All definitions in source order.
    pub fn foods(&self) -> &[FoodDefinition] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_food(name: &str) -> FoodDefinition {
        FoodDefinition {
            name: name.to_string(),
            unit: "100g".to_string(),
            protein: 2.5,
            fat: 0.3,
            carbs: 37.0,
            calories: 168.0,
            price: None,
        }
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let catalog = FoodCatalog::from_foods(vec![sample_food("Rice")]).unwrap();
        assert!(catalog.find("Rice").is_some());
        assert!(catalog.find("rice").is_none());
        assert!(catalog.find("RICE").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = FoodCatalog::from_foods(vec![sample_food("rice"), sample_food("rice")]);
        assert!(matches!(result, Err(LedgerError::Catalog(_))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut bad = sample_food("rice");
        bad.calories = -1.0;
        let result = FoodCatalog::from_foods(vec![bad]);
        assert!(matches!(result, Err(LedgerError::Catalog(_))));
    }

    #[test]
    fn test_load_json_file() {
        let json = r#"[
            {"name": "rice", "unit": "100g", "protein": 2.5, "fat": 0.3, "carbs": 37, "calories": 168},
            {"name": "egg", "unit": "piece", "protein": 6.2, "fat": 5.0, "carbs": 0.2, "calories": 76, "price": 0.3}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = FoodCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["rice", "egg"]);
        assert_eq!(catalog.find("egg").unwrap().price, Some(0.3));
    }

    #[test]
    fn test_load_json_missing_field_fails() {
        // no calories field
        let json = r#"[{"name": "rice", "unit": "100g", "protein": 2.5, "fat": 0.3, "carbs": 37}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(FoodCatalog::load(file.path()).is_err());
    }

    #[test]
    fn test_load_csv_file() {
        let csv = "name,unit,protein,fat,carbs,calories,price\n\
                   rice,100g,2.5,0.3,37,168,\n\
                   egg,piece,6.2,5.0,0.2,76,0.3\n";

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let catalog = FoodCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("rice").unwrap().price_per_unit(), 0.0);
        assert_eq!(catalog.find("egg").unwrap().price_per_unit(), 0.3);
    }
}
