pub mod catalog;
pub mod plan;

use std::path::{Path, PathBuf};

use clap::Args;
use dietplan::AppError;
use dietplan_health::RawProfile;

/// Profile given as a JSON file, individual flags, or both (flags win).
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// JSON profile file
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    /// Age in years (defaults to 25)
    #[arg(long)]
    pub age: Option<f64>,

    /// male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// sedentary, lightly_active, moderately_active, very_active or extra_active
    #[arg(long)]
    pub activity: Option<String>,

    /// weight_loss, maintenance or muscle_gain
    #[arg(long)]
    pub goal: Option<String>,

    /// veg, non-veg or vegan
    #[arg(long)]
    pub diet: Option<String>,
}

impl ProfileArgs {
    pub fn into_raw(self) -> Result<RawProfile, AppError> {
        let mut raw = match &self.profile {
            Some(path) => read_profile(path)?,
            None => RawProfile::default(),
        };

        if self.name.is_some() {
            raw.name = self.name;
        }
        if let Some(age) = self.age {
            raw.age = Some(age.into());
        }
        if self.gender.is_some() {
            raw.gender = self.gender;
        }
        if let Some(height) = self.height {
            raw.height = Some(height.into());
        }
        if let Some(weight) = self.weight {
            raw.weight = Some(weight.into());
        }
        if self.activity.is_some() {
            raw.activity_level = self.activity;
        }
        if self.goal.is_some() {
            raw.goal = self.goal;
        }
        if self.diet.is_some() {
            raw.diet_preference = self.diet;
        }

        Ok(raw)
    }
}

fn read_profile(path: &Path) -> Result<RawProfile, AppError> {
    let contents = std::fs::read_to_string(path)?;

    serde_json::from_str(&contents).map_err(|source| AppError::ProfileError {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use dietplan_health::ProfileValue;
    use temp_dir::TempDir;

    use super::*;

    #[test]
    fn test_flags_override_profile_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("profile.json");
        std::fs::write(
            &path,
            r#"{"name": "Ravi", "age": 33, "weight_kg": 80, "height_cm": 178, "goal": "bulk"}"#,
        )?;

        let raw = ProfileArgs {
            profile: Some(path),
            weight: Some(76.5),
            diet: Some("vegan".to_owned()),
            ..ProfileArgs::default()
        }
        .into_raw()?;

        assert_eq!(raw.name.as_deref(), Some("Ravi"));
        assert_eq!(raw.weight, Some(ProfileValue::Number(76.5)));
        assert_eq!(raw.height, Some(ProfileValue::Number(178.0)));
        assert_eq!(raw.goal.as_deref(), Some("bulk"));
        assert_eq!(raw.diet_preference.as_deref(), Some("vegan"));

        Ok(())
    }

    #[test]
    fn test_malformed_profile_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("profile.json");
        std::fs::write(&path, "{ not json")?;

        let err = ProfileArgs {
            profile: Some(path),
            ..ProfileArgs::default()
        }
        .into_raw()
        .unwrap_err();

        assert!(matches!(err, AppError::ProfileError { .. }));

        Ok(())
    }
}
