use log::{debug, warn};
use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// File suffix of archived recipe pages
pub const RECIPE_SUFFIX: &str = ".html";

/// Every category listing page starts with this prefix
pub const LISTING_PREFIX: &str = "cat_";

static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("Invalid link selector"));

/// The six recipe categories of the cookbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CakesPiesFrostings,
    CandiesCookiesConfections,
    MainDishesMeatsVegetables,
    QuickbreadsMuffinsPancakes,
    Salads,
    YeastBreadsRollsSweetDough,
}

/// Listing page, slug and display name of a category.
#[derive(Debug)]
pub struct CategoryInfo {
    pub category: Category,
    pub listing_file: &'static str,
    pub slug: &'static str,
    pub display_name: &'static str,
}

/// The single source of truth for category naming.
pub static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        category: Category::CakesPiesFrostings,
        listing_file: "cat_cakes_pies_frostings.html",
        slug: "cakes-pies-frostings",
        display_name: "Cakes, Pies, Frostings",
    },
    CategoryInfo {
        category: Category::CandiesCookiesConfections,
        listing_file: "cat_candies_cookies_confections.html",
        slug: "candies-cookies-confections",
        display_name: "Candies, Cookies, Confections",
    },
    CategoryInfo {
        category: Category::MainDishesMeatsVegetables,
        listing_file: "cat_main_dishes_meats_vegetables.html",
        slug: "main-dishes-meats-vegetables",
        display_name: "Main Dishes, Meats, Vegetables",
    },
    CategoryInfo {
        category: Category::QuickbreadsMuffinsPancakes,
        listing_file: "cat_quickbreads_muffins_pancakes.html",
        slug: "quickbreads-muffins-pancakes",
        display_name: "Quickbreads, Muffins, Pancakes",
    },
    CategoryInfo {
        category: Category::Salads,
        listing_file: "cat_salads.html",
        slug: "salads",
        display_name: "Salads",
    },
    CategoryInfo {
        category: Category::YeastBreadsRollsSweetDough,
        listing_file: "cat_yeast_breads_rolls_sweet_dough.html",
        slug: "yeast-breads-rolls-sweet-dough",
        display_name: "Yeast Breads, Rolls, Sweet Dough",
    },
];

impl Category {
    pub fn info(self) -> &'static CategoryInfo {
        // Variants are declared in table order
        &CATEGORIES[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.info().slug
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn listing_file(self) -> &'static str {
        self.info().listing_file
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|info| info.slug == slug)
            .map(|info| info.category)
    }

    pub fn from_listing_file(file_name: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|info| info.listing_file == file_name)
            .map(|info| info.category)
    }

    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORIES.iter().map(|info| info.category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Recipe identifier (page file name) to category.
///
/// Recipe pages carry no category of their own; it is recovered from the
/// listing pages that link to them.
#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    entries: HashMap<String, Category>,
}

impl CategoryIndex {
    pub fn get(&self, identifier: &str) -> Option<Category> {
        self.entries.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, identifier: String, category: Category) {
        if let Some(previous) = self.entries.insert(identifier.clone(), category) {
            if previous != category {
                debug!(
                    "{} listed under both {} and {}, keeping {}",
                    identifier, previous, category, category
                );
            }
        }
    }
}

/// Whether a link target on a listing page points at a recipe page.
pub fn is_recipe_link(href: &str) -> bool {
    href.ends_with(RECIPE_SUFFIX) && !href.starts_with(LISTING_PREFIX) && !href.starts_with("..")
}

/// Builds the identifier to category map from listing page contents keyed
/// by listing file name.
///
/// A missing listing page only logs a warning; recipes it would have
/// covered end up uncategorized.
pub fn build_index(listing_pages: &HashMap<String, String>) -> CategoryIndex {
    let mut index = CategoryIndex::default();

    for info in CATEGORIES {
        let Some(content) = listing_pages.get(info.listing_file) else {
            warn!("Category listing page not found: {}", info.listing_file);
            continue;
        };

        let document = Html::parse_document(content);
        let mut found = 0;
        for link in document.select(&LINK) {
            if let Some(href) = link.value().attr("href") {
                if is_recipe_link(href) {
                    index.insert(href.to_string(), info.category);
                    found += 1;
                }
            }
        }
        debug!("Found {} recipe links in {}", found, info.listing_file);
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for (i, info) in CATEGORIES.iter().enumerate() {
            assert_eq!(info.category as usize, i);
            assert!(info.listing_file.starts_with(LISTING_PREFIX));
            assert!(info.listing_file.ends_with(RECIPE_SUFFIX));
        }
        assert_eq!(Category::all().count(), 6);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(Category::from_slug("salads"), Some(Category::Salads));
        assert_eq!(
            Category::from_listing_file("cat_quickbreads_muffins_pancakes.html"),
            Some(Category::QuickbreadsMuffinsPancakes)
        );
        assert_eq!(Category::from_slug("desserts"), None);
        assert_eq!(
            Category::CandiesCookiesConfections.display_name(),
            "Candies, Cookies, Confections"
        );
        assert_eq!(
            Category::YeastBreadsRollsSweetDough.to_string(),
            "yeast-breads-rolls-sweet-dough"
        );
    }

    #[test]
    fn test_serialized_category_is_slug() {
        for category in Category::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }

    #[test]
    fn test_is_recipe_link() {
        assert!(is_recipe_link("apple_pie.html"));
        assert!(!is_recipe_link("cat_salads.html"));
        assert!(!is_recipe_link("../index.html"));
        assert!(!is_recipe_link("apple_pie.htm"));
        assert!(!is_recipe_link("mailto:cook@example.com"));
    }
}
