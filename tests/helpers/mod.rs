use std::{path::PathBuf, sync::Arc};

use dietplan::{FallbackNarrator, PlanService};
use dietplan_catalog::Catalog;
use dietplan_health::RawProfile;
use temp_dir::TempDir;

/// One veg dish per slot, with the original dataset's headers.
pub const FIXTURE_CSV: &str = "\
Food_Item,Calories,Protein_g,Carbs_g,Fat_g,Diet,Meal
Vegetable Poha,250,5,45,6,Veg,Breakfast
Dal Tadka,260,13,30,8,Veg,Lunch
Veg Khichdi,350,12,58,7,Veg,Dinner
";

pub fn write_fixture(dir: &TempDir) -> anyhow::Result<PathBuf> {
    let path = dir.child("foods.csv");
    std::fs::write(&path, FIXTURE_CSV)?;

    Ok(path)
}

pub fn setup_service(dir: &TempDir) -> anyhow::Result<PlanService> {
    let catalog = Catalog::load(write_fixture(dir)?)?;

    Ok(PlanService::new(Arc::new(catalog), Box::new(FallbackNarrator)))
}

pub fn reference_profile() -> RawProfile {
    serde_json::from_str(
        r#"{
            "name": "Test User",
            "age": 25,
            "gender": "male",
            "height": 170,
            "weight": 70,
            "activity_level": "moderately_active",
            "goal": "maintenance",
            "diet_preference": "veg"
        }"#,
    )
    .expect("reference profile is valid JSON")
}
