use std::sync::Arc;

use dietplan_catalog::Catalog;
use dietplan_health::{
    Biometrics, HealthError, NutritionalTargets, RawProfile, UserProfile, analyze_user,
};
use dietplan_mealplan::{Chooser, MealPlanningError, Planner, WeekPlan};
use serde::Serialize;
use thiserror::Error;

use crate::narrative::Narrator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Could not analyze health metrics: {0}")]
    AnalysisFailed(#[from] HealthError),

    #[error(transparent)]
    MealPlanning(#[from] MealPlanningError),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub user_profile: UserProfile,
    pub biometrics: Biometrics,
    pub nutritional_targets: NutritionalTargets,
    pub weekly_plan: WeekPlan,
    pub ai_insight: String,
}

/// Either a full plan or `{"error": "..."}` once serialized.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PlanOutcome {
    Plan(Box<PlanResult>),
    Error { error: String },
}

impl PlanOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, PlanOutcome::Error { .. })
    }
}

impl From<Result<PlanResult, PlanError>> for PlanOutcome {
    fn from(result: Result<PlanResult, PlanError>) -> Self {
        match result {
            Ok(plan) => PlanOutcome::Plan(Box::new(plan)),
            Err(err) => PlanOutcome::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Profile in, seven-day plan out. Stateless between calls.
pub struct PlanService {
    catalog: Arc<Catalog>,
    narrator: Box<dyn Narrator>,
}

impl PlanService {
    pub fn new(catalog: Arc<Catalog>, narrator: Box<dyn Narrator>) -> Self {
        Self { catalog, narrator }
    }

    /// Analyze the profile, plan a week for its target and narrate it.
    ///
    /// Any failure aborts the whole plan; nothing partial is returned.
    #[tracing::instrument(skip_all, fields(user = raw.name.as_deref().unwrap_or("User")))]
    pub fn generate_plan(
        &self,
        raw: &RawProfile,
        chooser: &mut dyn Chooser,
    ) -> Result<PlanResult, PlanError> {
        tracing::info!("Generating plan");

        let analysis = analyze_user(raw)?;
        let profile = analysis.profile;
        let targets = analysis.targets;

        let weekly_plan = Planner::new(&self.catalog)
            .plan_week(&profile.diet_preference, targets.calories, chooser)
            .inspect_err(|err| tracing::error!(error = %err, "Meal planning failed"))?;

        let ai_insight = self.narrator.explain(&targets, &profile);

        tracing::info!(
            target_calories = targets.calories,
            days = weekly_plan.days.len(),
            "Plan generated successfully"
        );

        Ok(PlanResult {
            user_profile: profile,
            biometrics: analysis.biometrics,
            nutritional_targets: targets,
            weekly_plan,
            ai_insight,
        })
    }
}
