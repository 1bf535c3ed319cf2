use crate::categories::Category;
use serde::Serialize;

/// One structural unit of recipe content, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Ingredients { items: Vec<String> },
    Instruction { text: String },
}

impl ContentBlock {
    pub fn instruction_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Instruction { text } => Some(text),
            ContentBlock::Ingredients { .. } => None,
        }
    }
}

/// A recipe recovered from one archived page.
///
/// Built by [`crate::extract::extract`], which guarantees a non-empty title
/// and at least one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    pub title: String,
    pub category: Category,
    pub blocks: Vec<ContentBlock>,
    pub story: Option<String>,
    /// File stem of the source page, e.g. `apple_pie` for `apple_pie.html`
    pub slug: String,
}
