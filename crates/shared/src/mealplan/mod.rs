use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Meal slot of a day. Declaration order is serving order.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Share of the daily calorie target assigned to this slot.
    pub fn budget_ratio(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.40,
            MealSlot::Dinner => 0.35,
        }
    }

    /// Case-insensitive parse that tolerates surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}
