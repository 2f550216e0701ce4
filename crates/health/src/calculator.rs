//! Deterministic health metrics.
//!
//! BMR uses the Mifflin-St Jeor equation (Mifflin et al., 1990,
//! DOI: 10.1093/ajcn/51.2.241). Every integer result is truncated toward
//! zero, never rounded.

use serde::{Deserialize, Serialize};

use crate::{ActivityLevel, BmiCategory, Gender, Goal};

/// TDEE multiplier per activity level, in `ActivityLevel` declaration order.
pub const ACTIVITY_MULTIPLIERS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::LightlyActive, 1.375),
    (ActivityLevel::ModeratelyActive, 1.55),
    (ActivityLevel::VeryActive, 1.725),
    (ActivityLevel::ExtraActive, 1.9),
];

/// Share of calories per macronutrient, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRatio {
    pub protein: u8,
    pub carbs: u8,
    pub fats: u8,
}

/// Macro split per goal (protein / carbs / fats), in `Goal` declaration order.
pub const MACRO_RATIOS: [(Goal, MacroRatio); 3] = [
    (
        Goal::WeightLoss,
        MacroRatio {
            protein: 30,
            carbs: 40,
            fats: 30,
        },
    ),
    (
        Goal::Maintenance,
        MacroRatio {
            protein: 25,
            carbs: 50,
            fats: 25,
        },
    ),
    (
        Goal::MuscleGain,
        MacroRatio {
            protein: 30,
            carbs: 50,
            fats: 20,
        },
    ),
];

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        ACTIVITY_MULTIPLIERS[*self as usize].1
    }
}

impl Goal {
    pub fn macro_ratio(&self) -> MacroRatio {
        MACRO_RATIOS[*self as usize].1
    }

    fn calorie_factor(&self) -> f64 {
        match self {
            Goal::WeightLoss => 0.85,
            Goal::MuscleGain => 1.15,
            Goal::Maintenance => 1.0,
        }
    }
}

/// Body mass index rounded to two decimals.
///
/// Non-positive weight or height yields `0` / `Normal` instead of failing.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Bmi {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Bmi {
            value: 0.0,
            category: BmiCategory::Normal,
        };
    }

    let height_m = height_cm / 100.0;
    let value = (weight_kg / (height_m * height_m) * 100.0).round() / 100.0;

    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Bmi { value, category }
}

/// Basal metabolic rate: `10w + 6.25h - 5a + (5 | -161)`.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };

    (base + offset) as i32
}

/// Total daily energy expenditure.
pub fn tdee(bmr: i32, activity_level: ActivityLevel) -> i32 {
    (f64::from(bmr) * activity_level.multiplier()) as i32
}

/// Daily calorie target.
///
/// Adjustments apply in order, each seeing the previous result:
/// 1. goal: weight loss x0.85, muscle gain x1.15
/// 2. age: over 40 x0.95; 18 to 25 with muscle gain x1.05
/// 3. BMI: underweight is floored at `tdee * 1.1`; overweight or obese
///    with weight loss x0.95
pub fn adjusted_calories(tdee: i32, goal: Goal, age: u32, bmi_category: BmiCategory) -> i32 {
    let tdee = f64::from(tdee);
    let mut calories = tdee * goal.calorie_factor();

    if age > 40 {
        calories *= 0.95;
    } else if (18..=25).contains(&age) && goal == Goal::MuscleGain {
        calories *= 1.05;
    }

    match bmi_category {
        BmiCategory::Underweight => calories = calories.max(tdee * 1.1),
        BmiCategory::Overweight | BmiCategory::Obese if goal == Goal::WeightLoss => {
            calories *= 0.95
        }
        _ => {}
    }

    calories as i32
}

/// Macro targets in grams for a calorie budget.
pub fn macros(calories: i32, goal: Goal) -> MacroGrams {
    let ratio = goal.macro_ratio();
    let share = |percent: u8| f64::from(calories) * f64::from(percent) / 100.0;

    MacroGrams {
        protein: (share(ratio.protein) / KCAL_PER_GRAM_PROTEIN) as i32,
        carbs: (share(ratio.carbs) / KCAL_PER_GRAM_CARBS) as i32,
        fats: (share(ratio.fats) / KCAL_PER_GRAM_FAT) as i32,
    }
}
