//! Filesystem side of an import: reading archived pages and writing the
//! rendered documents.

use crate::categories::{CATEGORIES, LISTING_PREFIX, RECIPE_SUFFIX};
use crate::pipeline::{BatchReport, RecipePage};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a page, replacing invalid UTF-8 with U+FFFD. Old archived pages
/// are frequently Latin-1.
pub fn read_page(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads whichever of the known category listing pages exist in `dir`,
/// keyed by file name.
pub fn load_listing_pages(dir: &Path) -> io::Result<HashMap<String, String>> {
    let mut pages = HashMap::new();
    for info in CATEGORIES {
        let path = dir.join(info.listing_file);
        if !path.is_file() {
            continue;
        }
        match read_page(&path) {
            Ok(content) => {
                pages.insert(info.listing_file.to_string(), content);
            }
            Err(e) => warn!("Skipping listing page {}: {}", info.listing_file, e),
        }
    }
    Ok(pages)
}

/// Reads every recipe page in `dir`, sorted by file name.
///
/// Only an unreadable `dir` is an error. A page that cannot be read is
/// logged and left out so the rest of the archive still gets processed.
pub fn load_recipe_pages(dir: &Path) -> io::Result<Vec<RecipePage>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(RECIPE_SUFFIX) && !name.starts_with(LISTING_PREFIX) {
            names.push(name);
        }
    }
    names.sort();

    let mut pages = Vec::with_capacity(names.len());
    for name in names {
        match read_page(&dir.join(&name)) {
            Ok(content) => pages.push(RecipePage::new(name, content)),
            Err(e) => warn!("Skipping {}: {}", name, e),
        }
    }
    debug!("Loaded {} recipe pages from {}", pages.len(), dir.display());
    Ok(pages)
}

/// Writes `<slug>.md` for every rendered recipe and returns the paths.
pub fn write_documents(dir: &Path, report: &BatchReport) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for rendered in report.rendered() {
        let path = dir.join(format!("{}.md", rendered.slug));
        fs::write(&path, &rendered.document)?;
        written.push(path);
    }
    Ok(written)
}
