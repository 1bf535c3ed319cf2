use crate::categories::{Category, CategoryIndex};
use crate::error::ExtractError;
use crate::extract::{extract, slug_from_identifier};
use crate::serialize::serialize;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// An archived recipe page as handed over by the loader.
#[derive(Debug, Clone)]
pub struct RecipePage {
    /// Page file name, e.g. `apple_pie.html`
    pub identifier: String,
    pub content: String,
}

impl RecipePage {
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
        }
    }
}

/// A page that produced no document, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    pub identifier: String,
    pub reason: ExtractError,
}

/// Rendered output of one page.
#[derive(Debug, Clone)]
pub struct RenderedRecipe {
    pub slug: String,
    pub category: Category,
    pub document: String,
}

/// Aggregate counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: BTreeMap<ExtractError, usize>,
    pub by_category: BTreeMap<Category, usize>,
}

impl BatchSummary {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Everything a batch run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Result<RenderedRecipe, ImportFailure>>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn rendered(&self) -> impl Iterator<Item = &RenderedRecipe> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ImportFailure> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    fn record(&mut self, outcome: Result<RenderedRecipe, ImportFailure>) {
        self.summary.attempted += 1;
        match &outcome {
            Ok(rendered) => {
                self.summary.succeeded += 1;
                *self.summary.by_category.entry(rendered.category).or_default() += 1;
            }
            Err(failure) => *self.summary.skipped.entry(failure.reason).or_default() += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Logs the totals, with per-category counts under their display names.
    pub fn log_summary(&self) {
        let summary = &self.summary;
        info!(
            "Parsed {} of {} recipes, skipped {}",
            summary.succeeded,
            summary.attempted,
            summary.skipped_total()
        );
        for (category, count) in &summary.by_category {
            info!("  {}: {}", category.display_name(), count);
        }
        for (reason, count) in &summary.skipped {
            info!("  skipped ({}): {}", reason.code(), count);
        }
    }
}

/// Converts a single page into a document.
pub fn process_page(index: &CategoryIndex, page: &RecipePage) -> Result<RenderedRecipe, ExtractError> {
    let category = index.get(&page.identifier).ok_or_else(|| {
        warn!("No category found for {}, skipping", page.identifier);
        ExtractError::UncategorizedRecipe
    })?;

    let slug = slug_from_identifier(&page.identifier);
    let record = extract(&page.content, category, &slug)?;

    Ok(RenderedRecipe {
        slug: record.slug.clone(),
        category: record.category,
        document: serialize(&record),
    })
}

/// Runs every page through the pipeline. A failing page is recorded and
/// never stops the batch.
pub fn process_batch<I>(index: &CategoryIndex, pages: I) -> BatchReport
where
    I: IntoIterator<Item = RecipePage>,
{
    let mut report = BatchReport::default();

    for page in pages {
        let outcome = process_page(index, &page).map_err(|reason| ImportFailure {
            identifier: page.identifier.clone(),
            reason,
        });
        report.record(outcome);
    }

    report
}
