use serde::Serialize;
use thiserror::Error;

/// Reasons a single recipe page is skipped.
///
/// None of these abort a batch: the page is counted under its reason code
/// and processing moves on to the next page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ExtractError {
    /// No `h3.title` heading, or one with no text
    #[error("recipe title not found")]
    #[serde(rename = "title-missing")]
    MissingTitle,

    /// No `div.blogbody` container
    #[error("recipe content region not found")]
    #[serde(rename = "content-region-missing")]
    MissingContentRegion,

    /// The identifier is not linked from any category listing page
    #[error("recipe is not listed under any category")]
    #[serde(rename = "uncategorized")]
    UncategorizedRecipe,

    /// The content region produced no ingredient or instruction blocks
    #[error("no recipe content found in content region")]
    #[serde(rename = "empty-extraction")]
    EmptyExtraction,
}

impl ExtractError {
    /// Stable reason code used in batch reports.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::MissingTitle => "title-missing",
            ExtractError::MissingContentRegion => "content-region-missing",
            ExtractError::UncategorizedRecipe => "uncategorized",
            ExtractError::EmptyExtraction => "empty-extraction",
        }
    }
}

/// Errors that end an import run
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading pages or writing documents failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize the batch report
    #[error("Report serialization failed: {0}")]
    ReportError(#[from] serde_json::Error),
}
