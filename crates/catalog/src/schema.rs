use csv::StringRecord;
use dietplan_shared::{DietClass, MealSlot, normalize_label};
use strum::{Display, IntoStaticStr, VariantArray};
use thiserror::Error;

use crate::{CatalogError, Category, FoodItem};

/// Logical dataset column.
#[derive(Display, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Name,
    Diet,
    MealSlot,
    Category,
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Column {
    /// Header names accepted for this column, after normalization.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Name => &["name", "food_item", "food", "item", "dish", "food_name"],
            Column::Diet => &["diet", "diet_type", "diet_class", "type"],
            Column::MealSlot => &["meal_slot", "meal", "meal_time", "meal_type", "slot"],
            Column::Category => &["category", "food_category"],
            Column::Calories => &["calories", "kcal", "energy_kcal", "calories_kcal"],
            Column::Protein => &["protein", "protein_g"],
            Column::Carbs => &["carbs", "carbs_g", "carbohydrates", "carbohydrates_g"],
            Column::Fats => &["fats", "fat", "fat_g", "fats_g"],
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Column::Category)
    }
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum RowError {
    #[error("blank name")]
    BlankName,

    #[error("missing value for {0}")]
    MissingValue(Column),

    #[error("invalid number {value:?} for {column}")]
    InvalidNumber { column: Column, value: String },

    #[error("negative value {value} for {column}")]
    Negative { column: Column, value: f64 },

    #[error("value {value} for {column} is out of range")]
    OutOfRange { column: Column, value: f64 },
}

/// Position of every logical column in a CSV header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name: usize,
    diet: usize,
    meal_slot: usize,
    category: Option<usize>,
    calories: usize,
    protein: usize,
    carbs: usize,
    fats: usize,
}

impl ColumnMap {
    /// Matches headers against the alias table, case and whitespace
    /// insensitively. Every required column missing is reported at once.
    pub fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let normalized: Vec<String> = headers.iter().map(normalize_label).collect();
        let find = |column: Column| {
            column
                .aliases()
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias))
        };

        let missing: Vec<&'static str> = Column::VARIANTS
            .iter()
            .filter(|c| c.is_required() && find(**c).is_none())
            .map(|c| <&'static str>::from(*c))
            .collect();

        if !missing.is_empty() {
            return Err(CatalogError::SchemaError { missing });
        }

        let required = |column: Column| find(column).unwrap_or_default();

        Ok(Self {
            name: required(Column::Name),
            diet: required(Column::Diet),
            meal_slot: required(Column::MealSlot),
            category: find(Column::Category),
            calories: required(Column::Calories),
            protein: required(Column::Protein),
            carbs: required(Column::Carbs),
            fats: required(Column::Fats),
        })
    }

    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }

    pub(crate) fn parse_row(&self, record: &StringRecord) -> Result<FoodItem, RowError> {
        let name = field(record, self.name).ok_or(RowError::BlankName)?;
        let diet = field(record, self.diet).ok_or(RowError::MissingValue(Column::Diet))?;
        let meal_slot = field(record, self.meal_slot).and_then(MealSlot::parse);
        let category = self
            .category
            .and_then(|index| field(record, index))
            .and_then(Category::parse);

        let calories = whole_calories(number(record, self.calories, Column::Calories)?)?;
        let protein = number(record, self.protein, Column::Protein)?;
        let carbs = number(record, self.carbs, Column::Carbs)?;
        let fats = number(record, self.fats, Column::Fats)?;

        Ok(
            FoodItem::new(name, DietClass::parse(diet), meal_slot, category)
                .with_nutrition(calories, protein, carbs, fats),
        )
    }
}

fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn number(record: &StringRecord, index: usize, column: Column) -> Result<f64, RowError> {
    let raw = field(record, index).ok_or(RowError::MissingValue(column))?;
    let value: f64 = raw.parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: raw.to_owned(),
    })?;

    if !value.is_finite() {
        return Err(RowError::InvalidNumber {
            column,
            value: raw.to_owned(),
        });
    }

    if value < 0.0 {
        return Err(RowError::Negative { column, value });
    }

    Ok(value)
}

/// Whole kcal, truncated like the plan totals.
fn whole_calories(value: f64) -> Result<u32, RowError> {
    let truncated = value.trunc();
    if truncated > f64::from(u32::MAX) {
        return Err(RowError::OutOfRange {
            column: Column::Calories,
            value,
        });
    }

    Ok(truncated as u32)
}
