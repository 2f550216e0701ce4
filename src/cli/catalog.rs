use dietplan::{AppError, Config};
use dietplan_catalog::FoodItem;
use dietplan_shared::{DietClass, MealSlot};

/// Print catalog rows, with their categories, as a JSON array.
#[tracing::instrument(skip(config))]
pub fn list(config: &Config, diet: Option<String>, slot: Option<MealSlot>) -> Result<(), AppError> {
    let catalog = dietplan::load_catalog(config)?;
    let diet = diet.as_deref().map(DietClass::parse);

    let rows: Vec<&FoodItem> = catalog
        .items()
        .iter()
        .filter(|item| diet.as_ref().is_none_or(|diet| &item.diet_class == diet))
        .filter(|item| slot.is_none_or(|slot| item.meal_slot == Some(slot)))
        .collect();

    tracing::info!(rows = rows.len(), "Catalog rows matched");
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
