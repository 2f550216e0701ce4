use std::{fs::File, io::Read, path::Path};

use dietplan_shared::{DietClass, MealSlot};

use crate::{CatalogError, CatalogResult, ColumnMap, FoodItem};

/// In-memory food table. Read-only once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Load a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DatasetNotFound`] if nothing exists at `path`
    /// - [`CatalogError::SchemaError`] if required columns cannot be matched
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::DatasetNotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "Loading nutrition dataset");

        Self::from_reader(File::open(path)?)
    }

    /// Load a catalog from any CSV source. Rows with a blank name or with
    /// unparseable or negative numbers are skipped with a warning.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = ColumnMap::resolve(reader.headers()?)?;
        if !columns.has_category() {
            tracing::info!("Category column missing, inferring categories from food names");
        }

        let mut items = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            // header is line 1
            let line = index + 2;

            match columns.parse_row(&record) {
                Ok(item) => items.push(item),
                Err(reason) => tracing::warn!(line, %reason, "Skipping catalog row"),
            }
        }

        tracing::info!(rows = items.len(), "Nutrition dataset loaded");

        Ok(Self { items })
    }

    /// Rows of `diet` (exact class match), optionally restricted to `slot`.
    pub fn filter(&self, diet: &DietClass, slot: Option<MealSlot>) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| &item.diet_class == diet)
            .filter(|item| slot.is_none_or(|slot| item.meal_slot == Some(slot)))
            .collect()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
