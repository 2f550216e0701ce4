pub mod config;
pub mod error;
pub mod narrative;
pub mod observability;
pub mod plan;

pub use crate::config::Config;
pub use error::AppError;
pub use narrative::{FallbackNarrator, GeminiNarrator, Narrator, narrator_from_config};
pub use plan::{PlanError, PlanOutcome, PlanResult, PlanService};

use std::sync::Arc;

use dietplan_catalog::Catalog;

/// Load the configured catalog once, ready to share between plan calls.
pub fn load_catalog(config: &Config) -> Result<Arc<Catalog>, AppError> {
    let catalog = Catalog::load(&config.catalog.path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog.path.display(), "Catalog has no usable rows");
    }

    Ok(Arc::new(catalog))
}
