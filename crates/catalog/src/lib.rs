mod catalog;
mod categorization;
mod error;
mod item;
mod schema;

pub use catalog::Catalog;
pub use categorization::{CATEGORY_RULES, CategorizationService};
pub use error::{CatalogError, CatalogResult};
pub use item::{Category, FoodItem};
pub use schema::{Column, ColumnMap};
