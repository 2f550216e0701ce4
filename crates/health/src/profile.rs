use dietplan_shared::DietClass;
use serde::{Deserialize, Serialize};

use crate::{ActivityLevel, Gender, Goal, HealthError, HealthResult, ProfileField};

const DEFAULT_AGE: u32 = 25;

/// Numeric profile input as it arrives from JSON or a form: a number or a
/// numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Number(f64),
    Text(String),
}

impl ProfileValue {
    fn as_f64(&self, field: &'static str) -> HealthResult<f64> {
        let value = match self {
            ProfileValue::Number(value) => *value,
            ProfileValue::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| HealthError::InvalidNumber {
                        field,
                        value: text.to_owned(),
                    })?
            }
        };

        if !value.is_finite() {
            return Err(HealthError::InvalidNumber {
                field,
                value: value.to_string(),
            });
        }

        Ok(value)
    }
}

impl From<f64> for ProfileValue {
    fn from(value: f64) -> Self {
        ProfileValue::Number(value)
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::Text(value.to_owned())
    }
}

/// Loosely typed user profile, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: Option<String>,
    pub age: Option<ProfileValue>,
    pub gender: Option<String>,
    #[serde(alias = "height_cm")]
    pub height: Option<ProfileValue>,
    #[serde(alias = "weight_kg")]
    pub weight: Option<ProfileValue>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub diet_preference: Option<String>,
}

/// Normalized profile. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietClass,
}

impl TryFrom<&RawProfile> for UserProfile {
    type Error = HealthError;

    /// Numbers must parse. A missing or non-positive body measure becomes
    /// `0`, which the BMI calculation reports as `0` / `Normal`. A missing or
    /// age under one year becomes 25. Enum fields fall back to their defaults.
    /// A missing diet preference means veg.
    fn try_from(raw: &RawProfile) -> HealthResult<Self> {
        let weight_kg = measure(raw.weight.as_ref(), "weight")?;
        let height_cm = measure(raw.height.as_ref(), "height")?;
        let age = match raw.age.as_ref() {
            Some(age) => match age.as_f64("age")? {
                years if years >= 1.0 => years as u32,
                years => {
                    tracing::warn!(value = years, "Invalid age, using default: {DEFAULT_AGE}");
                    DEFAULT_AGE
                }
            },
            None => DEFAULT_AGE,
        };

        Ok(Self {
            name: raw.name.clone(),
            age,
            gender: Gender::normalize(raw.gender.as_deref()),
            height_cm,
            weight_kg,
            activity_level: ActivityLevel::normalize(raw.activity_level.as_deref()),
            goal: Goal::normalize(raw.goal.as_deref()),
            diet_preference: raw
                .diet_preference
                .as_deref()
                .map(DietClass::preference)
                .unwrap_or_default(),
        })
    }
}

fn measure(value: Option<&ProfileValue>, field: &'static str) -> HealthResult<f64> {
    let value = match value {
        Some(value) => value.as_f64(field)?,
        None => 0.0,
    };

    if value <= 0.0 {
        tracing::warn!(field, value, "Missing or non-positive {field}, using 0");
        return Ok(0.0);
    }

    Ok(value)
}
