use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::normalize_label;

/// Diet class of a catalog row, or the diet preference of a user.
///
/// Catalog rows may carry labels outside the three known classes; those are
/// kept verbatim (normalized) in [`DietClass::Other`] so that exact matching
/// against a preference simply never selects them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DietClass {
    #[default]
    Veg,
    NonVeg,
    Vegan,
    Other(String),
}

impl DietClass {
    /// Parses a catalog label. Never fails: unknown labels become `Other`.
    pub fn parse(value: &str) -> Self {
        match normalize_label(value).as_str() {
            "veg" | "vegetarian" | "veggie" => DietClass::Veg,
            "non_veg" | "nonveg" | "non_vegetarian" | "nonvegetarian" => DietClass::NonVeg,
            "vegan" => DietClass::Vegan,
            other => DietClass::Other(other.to_owned()),
        }
    }

    /// Normalizes a user's diet preference, defaulting to `Veg` on anything
    /// that is not one of the three supported classes.
    pub fn preference(value: &str) -> Self {
        match Self::parse(value) {
            DietClass::Other(label) => {
                tracing::warn!(
                    field = "diet_preference",
                    value = %label,
                    "Invalid diet preference, using default: veg"
                );
                DietClass::Veg
            }
            known => known,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DietClass::Veg => "veg",
            DietClass::NonVeg => "non-veg",
            DietClass::Vegan => "vegan",
            DietClass::Other(label) => label,
        }
    }
}

impl fmt::Display for DietClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DietClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DietClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(DietClass::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_aliases() {
        assert_eq!(DietClass::parse("Veg"), DietClass::Veg);
        assert_eq!(DietClass::parse(" vegetarian "), DietClass::Veg);
        assert_eq!(DietClass::parse("Non-Veg"), DietClass::NonVeg);
        assert_eq!(DietClass::parse("non veg"), DietClass::NonVeg);
        assert_eq!(DietClass::parse("NONVEG"), DietClass::NonVeg);
        assert_eq!(DietClass::parse("Vegan"), DietClass::Vegan);
    }

    #[test]
    fn test_parse_keeps_unknown_label() {
        assert_eq!(
            DietClass::parse("Pescatarian"),
            DietClass::Other("pescatarian".to_owned())
        );
    }

    #[test]
    fn test_preference_defaults_to_veg() {
        assert_eq!(DietClass::preference("keto"), DietClass::Veg);
        assert_eq!(DietClass::preference("non-veg"), DietClass::NonVeg);
    }

    #[test]
    fn test_vegan_is_not_veg() {
        assert_ne!(DietClass::parse("vegan"), DietClass::parse("veg"));
    }

    #[test]
    fn test_serde_uses_display_label() {
        let json = serde_json::to_string(&DietClass::NonVeg).unwrap();
        assert_eq!(json, "\"non-veg\"");

        let parsed: DietClass = serde_json::from_str("\"Vegan\"").unwrap();
        assert_eq!(parsed, DietClass::Vegan);
    }
}
