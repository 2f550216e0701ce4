//! Builds one meal out of a main dish and an optional side.
//!
//! The main is drawn from the more substantial half of the diet-safe
//! candidates. A side is only added when the main leaves more than
//! [`SIDE_THRESHOLD`] kcal of the budget and its category has pairing rules;
//! it is drawn from the [`SIDE_CANDIDATES`] items closest to what is left.

use std::ops::AddAssign;

use dietplan_catalog::FoodItem;
use dietplan_shared::DietClass;
use serde::Serialize;
use strum::Display;

use crate::{
    Chooser,
    chooser::pick,
    dietary_filter::{filter_diet_safe, is_diet_safe},
    pairing::compatible_sides,
};

/// Number of closest-calorie items a side is drawn from.
pub const SIDE_CANDIDATES: usize = 3;

/// Budget (kcal) a main must leave before a side is considered.
pub const SIDE_THRESHOLD: f64 = 50.0;

#[derive(Display, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Main,
    Side,
}

#[derive(Display, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealWarning {
    /// No diet-safe item was available for the meal.
    EmptyMeal,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MealEntry {
    #[serde(flatten)]
    pub item: FoodItem,
    pub role: Role,
}

/// Macronutrient totals in grams.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroSummary {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroSummary {
    pub fn of(item: &FoodItem) -> Self {
        Self {
            protein: item.protein,
            carbs: item.carbs,
            fats: item.fats,
        }
    }

    /// Each total rounded to one decimal.
    pub fn rounded(self) -> Self {
        let round = |value: f64| (value * 10.0).round() / 10.0;

        Self {
            protein: round(self.protein),
            carbs: round(self.carbs),
            fats: round(self.fats),
        }
    }
}

impl AddAssign for MacroSummary {
    fn add_assign(&mut self, other: Self) {
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fats += other.fats;
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ComposedMeal {
    pub items: Vec<MealEntry>,
    pub total_calories: u64,
    pub macro_summary: MacroSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<MealWarning>,
}

impl ComposedMeal {
    pub fn empty() -> Self {
        Self {
            warning: Some(MealWarning::EmptyMeal),
            ..Default::default()
        }
    }

    /// Totals are exact sums of the entries, never the requested budget.
    pub fn from_entries(items: Vec<MealEntry>) -> Self {
        let mut total_calories = 0;
        let mut macro_summary = MacroSummary::default();
        for entry in &items {
            total_calories += u64::from(entry.item.calories);
            macro_summary += MacroSummary::of(&entry.item);
        }

        Self {
            items,
            total_calories,
            macro_summary,
            warning: None,
        }
    }

    pub fn main(&self) -> Option<&FoodItem> {
        self.entry(Role::Main)
    }

    pub fn side(&self) -> Option<&FoodItem> {
        self.entry(Role::Side)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn entry(&self, role: Role) -> Option<&FoodItem> {
        self.items
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| &entry.item)
    }
}

/// Compose one meal for `target_calories` out of `candidates`.
///
/// `candidates` is the catalog subset for a diet class and slot. An empty
/// diet-safe subset yields [`ComposedMeal::empty`], which is a warning and
/// not an error.
pub fn compose_meal(
    candidates: &[&FoodItem],
    preference: &DietClass,
    target_calories: f64,
    chooser: &mut dyn Chooser,
) -> ComposedMeal {
    let Some(main) = select_main(candidates, preference, chooser) else {
        tracing::warn!(
            diet = %preference,
            target_calories,
            "No diet-safe food for meal, leaving it empty"
        );
        return ComposedMeal::empty();
    };

    let mut entries = vec![MealEntry {
        item: main.clone(),
        role: Role::Main,
    }];

    let remaining = target_calories - f64::from(main.calories);
    if remaining > SIDE_THRESHOLD
        && let Some(side) = select_side(main, candidates, preference, remaining, chooser)
    {
        entries.push(MealEntry {
            item: side.clone(),
            role: Role::Side,
        });
    }

    ComposedMeal::from_entries(entries)
}

/// Random pick among the top half by calories, at least one item.
fn select_main<'a>(
    candidates: &[&'a FoodItem],
    preference: &DietClass,
    chooser: &mut dyn Chooser,
) -> Option<&'a FoodItem> {
    let mut ranked = filter_diet_safe(candidates, preference);
    ranked.sort_by(|a, b| b.calories.cmp(&a.calories));
    ranked.truncate((ranked.len() / 2).max(1));

    pick(chooser, &ranked)
}

fn select_side<'a>(
    main: &FoodItem,
    candidates: &[&'a FoodItem],
    preference: &DietClass,
    remaining: f64,
    chooser: &mut dyn Chooser,
) -> Option<&'a FoodItem> {
    let sides = compatible_sides(main.category);
    if sides.is_empty() {
        return None;
    }

    let mut ranked: Vec<&FoodItem> = candidates
        .iter()
        .copied()
        .filter(|item| sides.contains(&item.category))
        .filter(|item| item.key != main.key)
        .filter(|item| is_diet_safe(item, preference))
        .collect();

    let distance = |item: &FoodItem| (f64::from(item.calories) - remaining).abs();
    ranked.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
    ranked.truncate(SIDE_CANDIDATES);

    pick(chooser, &ranked)
}

#[cfg(test)]
mod tests {
    use dietplan_catalog::Category;
    use dietplan_shared::MealSlot;

    use super::*;
    use crate::{FirstChooser, RandomChooser};

    fn food(name: &str, category: Category, calories: u32) -> FoodItem {
        FoodItem::new(name, DietClass::Veg, Some(MealSlot::Lunch), Some(category)).with_nutrition(
            calories,
            f64::from(calories) / 40.0,
            f64::from(calories) / 8.0,
            f64::from(calories) / 30.0,
        )
    }

    fn lunch() -> Vec<FoodItem> {
        vec![
            food("Rajma Curry", Category::Curry, 420),
            food("Dal Makhani", Category::Curry, 380),
            food("Jeera Rice", Category::Rice, 210),
            food("Plain Rice", Category::Rice, 160),
            food("Tandoori Roti", Category::Flatbread, 120),
            food("Bhindi Fry", Category::DryVeg, 140),
            food("Green Salad", Category::Salad, 60),
            food("Masala Chaas", Category::Beverage, 50),
        ]
    }

    #[test]
    fn test_main_from_top_half_and_closest_side() {
        let rows = lunch();
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 800.0, &mut FirstChooser);

        // ranked by calories: rajma 420 first
        assert_eq!(meal.main().map(|m| m.name.as_str()), Some("Rajma Curry"));
        // 380 left; closest rice/flatbread/dry_veg is jeera rice (210)
        assert_eq!(meal.side().map(|s| s.name.as_str()), Some("Jeera Rice"));
        assert_eq!(meal.total_calories, 630);
        assert_eq!(meal.warning, None);
    }

    #[test]
    fn test_no_side_when_budget_is_used_up() {
        let rows = lunch();
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        // 470 - 420 = 50, not more than the threshold
        let meal = compose_meal(&candidates, &DietClass::Veg, 470.0, &mut FirstChooser);

        assert_eq!(meal.items.len(), 1);
        assert_eq!(meal.total_calories, 420);
    }

    #[test]
    fn test_no_side_for_unpaired_category() {
        let rows = vec![
            food("Gulab Jamun", Category::Generic, 300),
            food("Jeera Rice", Category::Rice, 210),
        ];
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 900.0, &mut FirstChooser);

        assert_eq!(meal.main().map(|m| m.name.as_str()), Some("Gulab Jamun"));
        assert!(meal.side().is_none());
    }

    #[test]
    fn test_side_is_never_the_main() {
        let rows = vec![food("Dal Fry", Category::Curry, 250)];
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 1000.0, &mut FirstChooser);

        assert_eq!(meal.items.len(), 1);
    }

    #[test]
    fn test_side_is_diet_safe() {
        let rows = vec![
            food("Paneer Curry", Category::Curry, 400),
            food("Egg Fried Rice", Category::Rice, 300),
            food("Steamed Rice", Category::Rice, 150),
        ];
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 700.0, &mut FirstChooser);

        assert_eq!(meal.side().map(|s| s.name.as_str()), Some("Steamed Rice"));
    }

    #[test]
    fn test_empty_safe_subset_is_a_warning() {
        let rows = vec![food("Chicken Curry", Category::Curry, 500)];
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 600.0, &mut FirstChooser);

        assert!(meal.is_empty());
        assert_eq!(meal.total_calories, 0);
        assert_eq!(meal.warning, Some(MealWarning::EmptyMeal));

        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["warning"], "empty_meal");
    }

    #[test]
    fn test_random_meals_respect_invariants() {
        let rows = lunch();
        let candidates: Vec<&FoodItem> = rows.iter().collect();
        let mut chooser = RandomChooser::seeded(2024);

        for target in [300.0, 500.0, 750.0, 1200.0] {
            for _ in 0..25 {
                let meal = compose_meal(&candidates, &DietClass::Veg, target, &mut chooser);

                assert!(!meal.is_empty());
                assert!(meal.items.len() <= 2);
                assert_eq!(meal.items[0].role, Role::Main);
                if let [main, side] = meal.items.as_slice() {
                    assert_ne!(main.item.name, side.item.name);
                    assert_eq!(side.role, Role::Side);
                }

                let sum: u64 = meal.items.iter().map(|e| u64::from(e.item.calories)).sum();
                assert_eq!(meal.total_calories, sum);

                // mains come from the 4 highest-calorie rows
                let main = meal.main().unwrap();
                assert!(main.calories >= 160, "{} is not a top-half main", main.name);
            }
        }
    }

    #[test]
    fn test_macro_summary_sums_entries() {
        let rows = lunch();
        let candidates: Vec<&FoodItem> = rows.iter().collect();

        let meal = compose_meal(&candidates, &DietClass::Veg, 800.0, &mut FirstChooser);

        let mut expected = MacroSummary::default();
        for entry in &meal.items {
            expected += MacroSummary::of(&entry.item);
        }
        assert_eq!(meal.macro_summary, expected);
    }

    #[test]
    fn test_macro_summary_rounding() {
        let summary = MacroSummary {
            protein: 12.345,
            carbs: 80.06,
            fats: 9.94,
        };

        assert_eq!(
            summary.rounded(),
            MacroSummary {
                protein: 12.3,
                carbs: 80.1,
                fats: 9.9
            }
        );
    }
}
