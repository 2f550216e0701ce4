use dietplan::{AppError, Config, PlanOutcome, PlanService, narrator_from_config};
use dietplan_health::{RawProfile, analyze_user};
use dietplan_mealplan::RandomChooser;

#[tracing::instrument(skip_all, fields(seed = ?seed))]
pub fn plan(config: &Config, profile: RawProfile, seed: Option<u64>) -> Result<(), AppError> {
    let catalog = dietplan::load_catalog(config)?;
    let service = PlanService::new(catalog, narrator_from_config(&config.narrative));

    let mut chooser = match seed {
        Some(seed) => RandomChooser::seeded(seed),
        None => RandomChooser::from_os_rng(),
    };

    let result = service.generate_plan(&profile, &mut chooser);
    let failure = result.as_ref().err().cloned();

    let outcome = PlanOutcome::from(result);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[tracing::instrument(skip_all)]
pub fn analyze(profile: RawProfile) -> Result<(), AppError> {
    let analysis = analyze_user(&profile).map_err(dietplan::PlanError::from)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
