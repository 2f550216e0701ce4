pub mod diet;
mod label;
pub mod mealplan;

pub use diet::DietClass;
pub use label::*;
pub use mealplan::MealSlot;
