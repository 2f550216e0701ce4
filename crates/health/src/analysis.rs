use serde::Serialize;

use crate::{
    BmiCategory, HealthResult, RawProfile, UserProfile,
    calculator::{adjusted_calories, bmi, bmr, macros, tdee},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Biometrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: i32,
    pub tdee: i32,
}

/// Daily calorie and macro targets, in kcal and grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionalTargets {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthAnalysis {
    pub profile: UserProfile,
    pub biometrics: Biometrics,
    pub targets: NutritionalTargets,
}

/// Normalize a raw profile and derive its biometrics and targets.
///
/// Enum fields and missing measures never fail (see [`crate::ProfileField`]);
/// only a number that does not parse does.
pub fn analyze_user(raw: &RawProfile) -> HealthResult<HealthAnalysis> {
    let profile = UserProfile::try_from(raw).inspect_err(|err| {
        tracing::error!(error = %err, "Health analysis failed");
    })?;

    Ok(analyze_profile(profile))
}

pub fn analyze_profile(profile: UserProfile) -> HealthAnalysis {
    let bmi = bmi(profile.weight_kg, profile.height_cm);
    let bmr = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = tdee(bmr, profile.activity_level);
    let calories = adjusted_calories(tdee, profile.goal, profile.age, bmi.category);
    let grams = macros(calories, profile.goal);

    tracing::info!(
        bmi = bmi.value,
        bmi_category = %bmi.category,
        target_calories = calories,
        "Health analysis complete"
    );

    HealthAnalysis {
        profile,
        biometrics: Biometrics {
            bmi: bmi.value,
            bmi_category: bmi.category,
            bmr,
            tdee,
        },
        targets: NutritionalTargets {
            calories,
            protein: grams.protein,
            carbs: grams.carbs,
            fats: grams.fats,
        },
    }
}
