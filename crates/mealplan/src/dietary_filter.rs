use dietplan_catalog::FoodItem;
use dietplan_shared::DietClass;

/// Whole words that disqualify a dish for a vegetarian.
pub const NON_VEG_KEYWORDS: &[&str] = &[
    "chicken", "fish", "egg", "eggs", "mutton", "beef", "pork", "lamb", "meat", "bacon", "prawn",
    "prawns", "shrimp", "duck", "turkey", "ham", "salmon", "tuna", "crab", "keema", "sausage",
];

/// Whether `name` contains a non-veg keyword as a whole word.
///
/// Every non-letter separates words, so "Egg-Fried Rice" and "Shrimp's
/// Platter" match while "Eggplant Curry" and "Hamburger Bun" do not.
pub fn has_non_veg_word(name: &str) -> bool {
    name.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .any(|word| NON_VEG_KEYWORDS.contains(&word))
}

/// Safety check on top of the catalog's own diet column.
///
/// Only a veg preference is screened by name; non-veg and vegan rows are
/// trusted to their exact diet class match.
pub fn is_diet_safe(item: &FoodItem, preference: &DietClass) -> bool {
    match preference {
        DietClass::Veg => !has_non_veg_word(&item.key),
        _ => true,
    }
}

/// Keeps the items of `items` that are safe for `preference`, in order.
pub fn filter_diet_safe<'a>(items: &[&'a FoodItem], preference: &DietClass) -> Vec<&'a FoodItem> {
    items
        .iter()
        .copied()
        .filter(|item| is_diet_safe(item, preference))
        .collect()
}
