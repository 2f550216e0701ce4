use dietplan_shared::{DietClass, MealSlot, normalize_label, title_case};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::CategorizationService;

/// Culinary category used to pair a main dish with a side.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Curry,
    DryVeg,
    Rice,
    Flatbread,
    Bread,
    Soup,
    Salad,
    Pasta,
    Oats,
    BreakfastItem,
    Fruit,
    Beverage,
    Snack,
    Yogurt,
    Milk,
    Nuts,
    #[default]
    Generic,
}

impl Category {
    /// Parses a category column value (`"Breakfast Item"`, `"dry-veg"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        normalize_label(value).parse().ok()
    }
}

/// Immutable catalog row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoodItem {
    /// Display name, title-cased.
    pub name: String,
    /// Lower-cased, trimmed name used for matching.
    #[serde(skip)]
    pub key: String,
    pub diet_class: DietClass,
    pub meal_slot: Option<MealSlot>,
    pub category: Category,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodItem {
    /// Creates a row with zeroed nutrition. The category is inferred from
    /// the name when `category` is `None`.
    pub fn new(
        name: &str,
        diet_class: DietClass,
        meal_slot: Option<MealSlot>,
        category: Option<Category>,
    ) -> Self {
        let key = name.trim().to_lowercase();
        let category = category.unwrap_or_else(|| CategorizationService::categorize(&key));

        Self {
            name: title_case(&key),
            key,
            diet_class,
            meal_slot,
            category,
            calories: 0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    pub fn with_nutrition(mut self, calories: u32, protein: f64, carbs: f64, fats: f64) -> Self {
        self.calories = calories;
        self.protein = protein.max(0.0);
        self.carbs = carbs.max(0.0);
        self.fats = fats.max(0.0);
        self
    }
}
