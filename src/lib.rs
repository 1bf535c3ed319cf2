pub mod archive;
pub mod categories;
pub mod config;
pub mod error;
pub mod extract;
pub mod list;
pub mod model;
pub mod pipeline;
pub mod serialize;
pub mod text;

use log::info;
use std::fs;

pub use categories::{build_index, Category, CategoryIndex};
pub use config::ImportConfig;
pub use error::{ExtractError, ImportError};
pub use extract::extract;
pub use model::{ContentBlock, RecipeRecord};
pub use pipeline::{process_batch, BatchReport, BatchSummary, ImportFailure, RecipePage};
pub use serialize::serialize;

/// Indexes and parses every page of an archive directory.
///
/// Nothing is written; see [`write_outputs`].
pub fn import_archive(config: &ImportConfig) -> Result<BatchReport, ImportError> {
    info!("Building category index...");
    let listing_pages = archive::load_listing_pages(&config.archives_dir)?;
    let index = build_index(&listing_pages);
    info!("Found {} recipes in category indexes", index.len());

    let pages = archive::load_recipe_pages(&config.archives_dir)?;
    info!("Found {} recipe files to parse", pages.len());

    Ok(process_batch(&index, pages))
}

/// Writes the rendered documents and, if configured, the JSON summary.
pub fn write_outputs(config: &ImportConfig, report: &BatchReport) -> Result<(), ImportError> {
    let written = archive::write_documents(&config.output_dir, report)?;
    info!(
        "Wrote {} documents to {}",
        written.len(),
        config.output_dir.display()
    );

    if let Some(path) = &config.report {
        fs::write(path, serde_json::to_string_pretty(&report.summary)?)?;
        info!("Wrote summary to {}", path.display());
    }
    Ok(())
}
