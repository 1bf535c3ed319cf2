use crate::model::{ContentBlock, RecipeRecord};

/// Escapes a value for a double-quoted YAML scalar.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Renders a recipe as Markdown with a YAML front-matter header.
///
/// Ingredient items become `- ` bullets, instructions become paragraphs,
/// and every block is followed by a blank line.
pub fn serialize(record: &RecipeRecord) -> String {
    let mut lines = vec!["---".to_string()];
    lines.push(format!("title: {}", quote(&record.title)));
    lines.push(format!("category: {}", record.category.slug()));
    if let Some(story) = &record.story {
        lines.push(format!("story: {}", quote(story)));
    }
    lines.push("---".to_string());
    lines.push(String::new());

    for block in &record.blocks {
        match block {
            ContentBlock::Ingredients { items } => {
                lines.extend(items.iter().map(|item| format!("- {item}")));
            }
            ContentBlock::Instruction { text } => lines.push(text.clone()),
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
