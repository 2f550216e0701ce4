use std::collections::BTreeMap;

use dietplan_catalog::{Catalog, FoodItem};
use dietplan_shared::{DietClass, MealSlot};
use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::VariantArray;

use crate::{Chooser, ComposedMeal, MacroSummary, MealPlanningError, MealPlanningResult, compose_meal};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayPlan {
    pub meals: BTreeMap<MealSlot, ComposedMeal>,
    pub calories: u64,
    /// Day totals, rounded to one decimal.
    pub macros: MacroSummary,
}

impl DayPlan {
    fn from_meals(meals: BTreeMap<MealSlot, ComposedMeal>) -> Self {
        let mut calories = 0;
        let mut macros = MacroSummary::default();
        for meal in meals.values() {
            calories += meal.total_calories;
            macros += meal.macro_summary;
        }

        Self {
            meals,
            calories,
            macros: macros.rounded(),
        }
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&ComposedMeal> {
        self.meals.get(&slot)
    }
}

/// Ordered days of a plan. Serializes as `{"Day 1": .., "Day 2": ..}`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub fn label(index: usize) -> String {
        format!("Day {}", index + 1)
    }
}

impl Serialize for WeekPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (index, day) in self.days.iter().enumerate() {
            map.serialize_entry(&Self::label(index), day)?;
        }
        map.end()
    }
}

/// Plans days against a read-only catalog. Holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Split `target_calories` over the slots and compose a meal for each.
    ///
    /// A slot without tagged items draws from every item of the diet.
    ///
    /// # Errors
    ///
    /// [`MealPlanningError::NoFoodForDiet`] if the catalog has no item of the
    /// preferred diet class at all.
    pub fn plan_day(
        &self,
        preference: &DietClass,
        target_calories: i32,
        chooser: &mut dyn Chooser,
    ) -> MealPlanningResult<DayPlan> {
        let diet_items = self.catalog.filter(preference, None);
        if diet_items.is_empty() {
            return Err(MealPlanningError::NoFoodForDiet(preference.clone()));
        }

        let mut meals = BTreeMap::new();
        for slot in MealSlot::VARIANTS {
            let budget = f64::from(target_calories) * slot.budget_ratio();
            let slot_items = self.catalog.filter(preference, Some(*slot));
            let candidates: &[&FoodItem] = if slot_items.is_empty() {
                tracing::debug!(%slot, diet = %preference, "No items tagged for slot, using whole diet");
                &diet_items
            } else {
                &slot_items
            };

            meals.insert(*slot, compose_meal(candidates, preference, budget, chooser));
        }

        Ok(DayPlan::from_meals(meals))
    }

    /// [`DAYS_PER_WEEK`] independent days with the same inputs. Meals may
    /// repeat across days.
    pub fn plan_week(
        &self,
        preference: &DietClass,
        target_calories: i32,
        chooser: &mut dyn Chooser,
    ) -> MealPlanningResult<WeekPlan> {
        let days = (0..DAYS_PER_WEEK)
            .map(|_| self.plan_day(preference, target_calories, chooser))
            .collect::<MealPlanningResult<Vec<_>>>()?;

        Ok(WeekPlan { days })
    }
}
