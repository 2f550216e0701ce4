use dietplan_catalog::Category;

/// Side categories that go with a main of the given category.
pub const PAIRING_RULES: &[(Category, &[Category])] = &[
    (
        Category::Curry,
        &[Category::Rice, Category::Flatbread, Category::DryVeg],
    ),
    (
        Category::Rice,
        &[Category::Curry, Category::DryVeg, Category::Snack],
    ),
    (
        Category::Soup,
        &[Category::Flatbread, Category::Salad, Category::BreakfastItem],
    ),
    (Category::Pasta, &[Category::Salad, Category::Soup]),
    (
        Category::BreakfastItem,
        &[Category::Beverage, Category::Fruit],
    ),
    (
        Category::Oats,
        &[Category::Fruit, Category::Beverage, Category::Snack],
    ),
    (Category::Flatbread, &[Category::Curry, Category::DryVeg]),
];

/// Categories absent from [`PAIRING_RULES`] pair with nothing.
pub fn compatible_sides(main: Category) -> &'static [Category] {
    PAIRING_RULES
        .iter()
        .find(|(category, _)| *category == main)
        .map(|(_, sides)| *sides)
        .unwrap_or(&[])
}
