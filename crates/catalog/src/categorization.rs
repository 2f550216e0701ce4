use crate::Category;

/// Ordered keyword policy for rows without a usable category column.
///
/// A name is tested against each rule in order; the first rule with a
/// keyword contained in the lower-cased name decides the category.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Curry,
        &[
            "dal", "lentil", "sambar", "curry", "paneer", "chicken", "fish", "gravy",
        ],
    ),
    (Category::Rice, &["rice", "biryani", "pulao", "khichdi"]),
    (
        Category::Flatbread,
        &["roti", "chapati", "naan", "paratha", "bread", "toast"],
    ),
    (Category::Soup, &["soup", "broth", "rasam"]),
    (Category::Salad, &["salad", "sprouts", "cucumber"]),
    (
        Category::BreakfastItem,
        &[
            "oats", "porridge", "cereal", "muesli", "upma", "poha", "idli", "dosa",
        ],
    ),
    (
        Category::Beverage,
        &["milk", "shake", "tea", "coffee", "juice"],
    ),
    (Category::Fruit, &["apple", "banana", "fruit", "papaya"]),
];

/// Stateless service mapping food names to culinary categories.
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize a food by name. Unmatched names are `Generic`.
    pub fn categorize(name: &str) -> Category {
        let normalized = name.trim().to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_each_rule() {
        let cases = [
            ("Dal Makhani", Category::Curry),
            ("Veg Pulao", Category::Rice),
            ("Butter Naan", Category::Flatbread),
            ("Tomato Rasam", Category::Soup),
            ("Moong Sprouts", Category::Salad),
            ("Masala Dosa", Category::BreakfastItem),
            ("Cold Coffee", Category::Beverage),
            ("Papaya", Category::Fruit),
        ];

        for (name, expected) in cases {
            assert_eq!(
                CategorizationService::categorize(name),
                expected,
                "unexpected category for {}",
                name
            );
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "chicken" (curry) is checked before "rice"
        assert_eq!(
            CategorizationService::categorize("Chicken Fried Rice"),
            Category::Curry
        );
        // "bread" (flatbread) is checked before "milk" (beverage)
        assert_eq!(
            CategorizationService::categorize("Milk Bread"),
            Category::Flatbread
        );
    }

    #[test]
    fn test_unmatched_is_generic() {
        assert_eq!(CategorizationService::categorize("Gulab Jamun"), Category::Generic);
        assert_eq!(CategorizationService::categorize(""), Category::Generic);
    }

    #[test]
    fn test_containment_is_substring_based() {
        // "teacake" contains "tea"
        assert_eq!(CategorizationService::categorize("Teacake"), Category::Beverage);
    }
}
