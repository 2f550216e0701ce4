//! Biometric and caloric target derivation from a user profile.

mod analysis;
pub mod calculator;
mod error;
mod profile;
mod types;

pub use analysis::*;
pub use calculator::{Bmi, MacroGrams, adjusted_calories, bmi, bmr, macros, tdee};
pub use error::{HealthError, HealthResult};
pub use profile::{ProfileValue, RawProfile, UserProfile};
pub use types::*;
