//! Short motivational summary of a plan.
//!
//! A [`Narrator`] never fails: any problem with the remote model is logged and
//! answered with [`fallback_text`]. Prompts carry only the goal and the
//! calorie target, never individual meals.

use std::time::Duration;

use dietplan_health::{Goal, NutritionalTargets, UserProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::NarrativeConfig;

pub trait Narrator: Send + Sync {
    fn explain(&self, targets: &NutritionalTargets, profile: &UserProfile) -> String;
}

pub fn fallback_text(calories: i32, goal: Goal) -> String {
    format!(
        "Your {calories} kcal plan is carefully designed to support your {} goals. \
         Maintaining this calorie target helps optimize energy levels, recovery, and \
         long-term consistency. Stay committed for the best results.",
        goal.title()
    )
}

/// Always answers with [`fallback_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackNarrator;

impl Narrator for FallbackNarrator {
    fn explain(&self, targets: &NutritionalTargets, profile: &UserProfile) -> String {
        fallback_text(targets.calories, profile.goal)
    }
}

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        let text = text.trim();

        (!text.is_empty()).then(|| text.to_owned())
    }
}

/// Narrator backed by the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiNarrator {
    client: reqwest::blocking::Client,
    api_key: String,
    url: String,
    temperature: f64,
}

impl GeminiNarrator {
    pub fn new(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            temperature: config.temperature,
        })
    }

    fn prompt(calories: i32, goal: Goal) -> String {
        format!(
            "You are an expert Nutritionist.\n\n\
             USER GOAL: {goal}\n\
             TARGET CALORIES: {calories} kcal (USE THIS EXACT NUMBER)\n\n\
             TASK:\n\
             Write a 2-sentence motivational summary explaining how this {calories} kcal \
             plan helps the user reach their goal. Avoid mentioning specific foods.",
            goal = goal.title()
        )
    }

    fn generate(&self, prompt: String) -> Result<String, NarrativeError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response: GenerateResponse = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        response.text().ok_or(NarrativeError::EmptyResponse)
    }
}

impl Narrator for GeminiNarrator {
    fn explain(&self, targets: &NutritionalTargets, profile: &UserProfile) -> String {
        match self.generate(Self::prompt(targets.calories, profile.goal)) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "Gemini narrative failed, using fallback text");
                fallback_text(targets.calories, profile.goal)
            }
        }
    }
}

/// Gemini when an API key is configured, the fallback narrator otherwise.
pub fn narrator_from_config(config: &NarrativeConfig) -> Box<dyn Narrator> {
    if config.api_key.trim().is_empty() {
        tracing::warn!("GEMINI_API_KEY not configured, narrative uses fallback text");
        return Box::new(FallbackNarrator);
    }

    match GeminiNarrator::new(config) {
        Ok(narrator) => {
            tracing::info!(model = %config.model, "Gemini narrator initialized");
            Box::new(narrator)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize Gemini client");
            Box::new(FallbackNarrator)
        }
    }
}

#[cfg(test)]
mod tests {
    use dietplan_health::{ActivityLevel, Gender};
    use dietplan_shared::DietClass;

    use super::*;

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            name: None,
            age: 30,
            gender: Gender::Female,
            height_cm: 165.0,
            weight_kg: 60.0,
            activity_level: ActivityLevel::LightlyActive,
            goal,
            diet_preference: DietClass::Veg,
        }
    }

    fn targets(calories: i32) -> NutritionalTargets {
        NutritionalTargets {
            calories,
            protein: 0,
            carbs: 0,
            fats: 0,
        }
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(
            fallback_text(1850, Goal::WeightLoss),
            "Your 1850 kcal plan is carefully designed to support your Weight Loss goals. \
             Maintaining this calorie target helps optimize energy levels, recovery, and \
             long-term consistency. Stay committed for the best results."
        );
    }

    #[test]
    fn test_fallback_narrator_uses_targets() {
        let text = FallbackNarrator.explain(&targets(2300), &profile(Goal::MuscleGain));

        assert!(text.starts_with("Your 2300 kcal plan"));
        assert!(text.contains("Muscle Gain goals"));
    }

    #[test]
    fn test_prompt_mentions_only_goal_and_target() {
        let prompt = GeminiNarrator::prompt(2100, Goal::Maintenance);

        assert!(prompt.contains("USER GOAL: Maintenance"));
        assert!(prompt.contains("TARGET CALORIES: 2100 kcal"));
    }

    #[test]
    fn test_response_text_is_joined_and_trimmed() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  Stay on track. "}, {"text": "You got this.\n"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(
            response.text().as_deref(),
            Some("Stay on track. You got this.")
        );

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(empty.text(), None);

        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": " "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_unreachable_endpoint_falls_back() {
        let config = NarrativeConfig {
            api_key: "test-key".to_string(),
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..NarrativeConfig::default()
        };
        let narrator = GeminiNarrator::new(&config).unwrap();

        let text = narrator.explain(&targets(1900), &profile(Goal::Maintenance));

        assert_eq!(text, fallback_text(1900, Goal::Maintenance));
    }

    #[test]
    fn test_missing_key_selects_fallback() {
        let narrator = narrator_from_config(&NarrativeConfig::default());
        let text = narrator.explain(&targets(2000), &profile(Goal::Maintenance));

        assert_eq!(text, fallback_text(2000, Goal::Maintenance));
    }
}
