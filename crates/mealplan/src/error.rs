use dietplan_shared::DietClass;
use thiserror::Error;

pub type MealPlanningResult<T> = Result<T, MealPlanningError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MealPlanningError {
    #[error("No foods found for diet: {0}")]
    NoFoodForDiet(DietClass),
}
