use std::fmt;

use dietplan_shared::{normalize_label, title_case};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Gender for BMR calculations
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Activity level for TDEE calculation
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtraActive,
}

/// Dietary goal driving the calorie adjustment and macro split
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    #[default]
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Human label: `weight_loss` reads as "Weight Loss".
    pub fn title(&self) -> String {
        title_case(&self.as_ref().replace('_', " "))
    }
}

#[derive(Display, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BmiCategory {
    Underweight,
    #[default]
    Normal,
    Overweight,
    Obese,
}

/// Free-text to enum normalization with an explicit default.
///
/// Input is case-folded and separators collapsed (`"Weight Loss"` →
/// `weight_loss`) before matching. Anything unrecognized, including a
/// missing value, yields the default and a warning.
pub trait ProfileField: Sized + Copy + Default + fmt::Display {
    const FIELD: &'static str;

    fn from_label(label: &str) -> Option<Self>;

    fn normalize(value: Option<&str>) -> Self {
        let parsed = value.and_then(|v| Self::from_label(&normalize_label(v)));

        parsed.unwrap_or_else(|| {
            let default = Self::default();
            tracing::warn!(
                field = Self::FIELD,
                value = value.unwrap_or("<missing>"),
                "Invalid {}, using default: {}",
                Self::FIELD,
                default
            );
            default
        })
    }
}

impl ProfileField for Gender {
    const FIELD: &'static str = "gender";

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "m" | "man" => Some(Gender::Male),
            "f" | "woman" => Some(Gender::Female),
            other => other.parse().ok(),
        }
    }
}

impl ProfileField for ActivityLevel {
    const FIELD: &'static str = "activity_level";

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "light" | "lightly" => Some(ActivityLevel::LightlyActive),
            "moderate" | "moderately" => Some(ActivityLevel::ModeratelyActive),
            "very" | "active" => Some(ActivityLevel::VeryActive),
            "extra" | "extremely_active" => Some(ActivityLevel::ExtraActive),
            other => other.parse().ok(),
        }
    }
}

impl ProfileField for Goal {
    const FIELD: &'static str = "goal";

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "maintain" | "maintain_weight" => Some(Goal::Maintenance),
            "lose_weight" | "fat_loss" => Some(Goal::WeightLoss),
            "gain_muscle" | "bulk" => Some(Goal::MuscleGain),
            other => other.parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_spaces() {
        assert_eq!(Goal::normalize(Some("Weight Loss")), Goal::WeightLoss);
        assert_eq!(Goal::normalize(Some(" MUSCLE_GAIN ")), Goal::MuscleGain);
        assert_eq!(
            ActivityLevel::normalize(Some("Very Active")),
            ActivityLevel::VeryActive
        );
        assert_eq!(Gender::normalize(Some("Female")), Gender::Female);
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(Goal::normalize(Some("maintain")), Goal::Maintenance);
        assert_eq!(Gender::normalize(Some("F")), Gender::Female);
        assert_eq!(
            ActivityLevel::normalize(Some("moderate")),
            ActivityLevel::ModeratelyActive
        );
    }

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(Gender::normalize(Some("unknown")), Gender::Male);
        assert_eq!(Gender::normalize(None), Gender::Male);
        assert_eq!(
            ActivityLevel::normalize(Some("couch")),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(Goal::normalize(Some("")), Goal::Maintenance);
    }

    #[test]
    fn test_goal_title() {
        assert_eq!(Goal::WeightLoss.title(), "Weight Loss");
        assert_eq!(Goal::Maintenance.title(), "Maintenance");
        assert_eq!(Goal::MuscleGain.title(), "Muscle Gain");
    }

    #[test]
    fn test_bmi_category_display() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }
}
