use crate::categories::Category;
use crate::error::ExtractError;
use crate::list::parse_list;
use crate::model::{ContentBlock, RecipeRecord};
use crate::text::{fragment_text, normalize};
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.title").expect("Invalid title selector"));

static CONTENT_REGION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.blogbody").expect("Invalid content selector"));

static END_OF_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[name="more"]"#).expect("Invalid end marker selector"));

/// Phrases that mark a trailing paragraph as a personal anecdote rather
/// than a recipe step. Matched case-insensitively as substrings.
pub const STORY_INDICATORS: &[&str] = &[
    "I like",
    "I love",
    "I usually",
    "This is",
    "This was",
    "Grandma",
    "My mother",
    "My grandmother",
    "recipe from",
    "Mama's",
    "Grandma's",
    "This makes",
    "Very good",
    "Kirk",
    "Lorea",
    "Joel",
    "Vivian",
];

/// Value of the `name` attribute on the anchor that ends recipe content.
/// Comments and trackbacks follow it.
pub const END_OF_CONTENT_ANCHOR: &str = "more";

/// Derives a recipe slug from its page file name: `apple_pie.html` becomes
/// `apple_pie`.
pub fn slug_from_identifier(identifier: &str) -> String {
    Path::new(identifier)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| identifier.to_string())
}

/// Extracts one recipe page.
pub fn extract(page: &str, category: Category, slug: &str) -> Result<RecipeRecord, ExtractError> {
    let document = Html::parse_document(page);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| normalize(&el.text().collect::<String>()))
        .filter(|title| !title.is_empty())
        .ok_or_else(|| {
            warn!("No title found in {}", slug);
            ExtractError::MissingTitle
        })?;

    let body = document.select(&CONTENT_REGION).next().ok_or_else(|| {
        warn!("No blogbody found in {}", slug);
        ExtractError::MissingContentRegion
    })?;

    let mut blocks = collect_blocks(body);
    if blocks.is_empty() {
        warn!("No recipe content found in {}", slug);
        return Err(ExtractError::EmptyExtraction);
    }

    let story = split_story(&mut blocks);
    debug!(
        "Extracted {}: {} blocks, story: {}",
        slug,
        blocks.len(),
        story.is_some()
    );

    Ok(RecipeRecord {
        title,
        category,
        blocks,
        story,
        slug: slug.to_string(),
    })
}

/// Walks the direct children of the content region in document order.
fn collect_blocks(body: ElementRef) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for child in body.children().filter_map(ElementRef::wrap) {
        let element = child.value();
        match element.name() {
            // the title heading
            "h3" => continue,
            "ul" | "ol" => {
                let items = parse_list(&child.html());
                if !items.is_empty() {
                    blocks.push(ContentBlock::Ingredients { items });
                }
                // an unclosed list can swallow the end marker
                if child.select(&END_OF_CONTENT).next().is_some() {
                    break;
                }
            }
            "p" => {
                let text = fragment_text(&child.html());
                if !text.is_empty() {
                    blocks.push(ContentBlock::Instruction { text });
                }
            }
            "a" if element.attr("name") == Some(END_OF_CONTENT_ANCHOR) => break,
            _ => {}
        }
    }

    blocks
}

fn is_story(text: &str) -> bool {
    let lowered = text.to_lowercase();
    STORY_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(&indicator.to_lowercase()))
}

/// Looks for a personal anecdote among the last two blocks (never the
/// first block), scanning backwards. On a match the story is removed along
/// with every block after it.
pub fn split_story(blocks: &mut Vec<ContentBlock>) -> Option<String> {
    let floor = blocks.len().saturating_sub(3);

    for i in (floor + 1..blocks.len()).rev() {
        let Some(text) = blocks[i].instruction_text() else {
            continue;
        };
        if is_story(text) {
            let story = text.to_string();
            debug!("Story found at block {} of {}", i, blocks.len());
            blocks.truncate(i);
            return Some(story);
        }
    }

    None
}
