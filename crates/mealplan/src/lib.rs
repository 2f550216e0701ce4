//! Meal composition and day/week planning over a food catalog.

mod chooser;
pub mod composer;
pub mod dietary_filter;
mod error;
pub mod pairing;
mod planner;

pub use chooser::{Chooser, FirstChooser, RandomChooser};
pub use composer::{
    ComposedMeal, MacroSummary, MealEntry, MealWarning, Role, SIDE_CANDIDATES, compose_meal,
};
pub use error::{MealPlanningError, MealPlanningResult};
pub use planner::{DAYS_PER_WEEK, DayPlan, Planner, WeekPlan};
