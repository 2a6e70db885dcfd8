use crate::classify::{self, AiClassifier, ClassifierConfig};
use crate::models::{Book, CatalogRow};
use crate::{config, cover, isbn, normalize, render, source};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings for one import run. Directories default to the site layout
/// from [`config`]; tests point them at temporary directories.
pub struct ImportConfig {
    pub input: PathBuf,
    pub books_dir: PathBuf,
    pub covers_dir: PathBuf,
    pub classifier: Option<ClassifierConfig>,
}

impl ImportConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            books_dir: PathBuf::from(config::BOOKS_DIR),
            covers_dir: PathBuf::from(config::BOOK_COVERS_DIR),
            classifier: None,
        }
    }
}

/// Runs the whole pipeline: read rows, normalize, render, write. Each row
/// is fully written before the next begins. Returns the number of
/// documents written and prints one line per document plus a summary.
pub fn run_import(cfg: &ImportConfig) -> Result<usize> {
    let rows = source::read_rows(&cfg.input)?;
    info!(rows = rows.len(), input = %cfg.input.display(), "Starting import");

    let ai = match &cfg.classifier {
        Some(classifier_cfg) => Some(AiClassifier::new(classifier_cfg.clone())?),
        None => None,
    };

    fs::create_dir_all(&cfg.books_dir).with_context(|| {
        format!("Failed to create output directory: {}", cfg.books_dir.display())
    })?;

    let mut count = 0usize;
    for row in &rows {
        let book = normalize_row(row, &cfg.covers_dir, ai.as_ref());
        let path = write_book(&book, &cfg.books_dir)?;
        count += 1;
        println!("Wrote {}", path.display());
    }

    println!("Imported {} books into {}/", count, cfg.books_dir.display());
    Ok(count)
}

/// Derives the render-ready fields for one row. Pure except for the
/// cover copy and the optional classifier call.
fn normalize_row(row: &CatalogRow, covers_dir: &Path, ai: Option<&AiClassifier>) -> Book {
    let slug = normalize::make_slug(row);
    let title = {
        let raw = row.get("title").trim();
        if raw.is_empty() { "Untitled" } else { raw }
    };
    let author = {
        let authors = row.get("authors");
        if authors.is_empty() {
            row.get("author")
        } else {
            authors
        }
    };
    let isbn = isbn::find_isbn(row);
    let cover = cover::resolve_cover(row, &slug, &isbn, covers_dir);
    let tags = normalize::split_list(row.get("tags"));
    let category = classify::detect_category(title, &tags, row.get("comments"), ai);
    debug!(slug = %slug, category = %category, "Normalized row");

    Book {
        slug,
        title: title.to_string(),
        author: author.to_string(),
        isbn,
        cover,
        year: normalize::parse_year(row.get("pubdate")),
        stars: row.get("rating").trim().to_string(),
        languages: normalize::split_list(row.get("languages")),
        tags,
        category,
        body: row.get("comments").trim().to_string(),
    }
}

/// Writes the rendered document to `<books_dir>/<slug>.md`, truncating
/// any prior document with the same slug. Last row wins on duplicates.
fn write_book(book: &Book, books_dir: &Path) -> Result<PathBuf> {
    let path = books_dir.join(format!("{}.{}", book.slug, config::OUTPUT_EXT));
    fs::write(&path, render::render_document(book))
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_derives_all_fields() {
        let covers_dir = tempfile::TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[
            ("title", "Dune"),
            ("authors", "Frank Herbert"),
            ("isbn", "978-0-441-01359-3"),
            ("pubdate", "1965-08-01"),
            ("rating", " 5 "),
            ("tags", "novel; classic"),
            ("languages", "eng"),
            ("comments", "  Desert planet epic.  "),
        ]);

        let book = normalize_row(&row, covers_dir.path(), None);
        assert_eq!(book.slug, "dune");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.isbn, "9780441013593");
        assert_eq!(
            book.cover,
            "https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg"
        );
        assert_eq!(book.year, "1965");
        assert_eq!(book.stars, "5");
        assert_eq!(book.languages, vec!["eng"]);
        assert_eq!(book.tags, vec!["novel", "classic"]);
        assert_eq!(book.category, "Fiction");
        assert_eq!(book.body, "Desert planet epic.");
    }

    #[test]
    fn empty_title_defaults_to_untitled() {
        let covers_dir = tempfile::TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[("id", "7")]);
        let book = normalize_row(&row, covers_dir.path(), None);
        assert_eq!(book.title, "Untitled");
        assert_eq!(book.slug, "book-7");
    }

    #[test]
    fn singular_author_column_is_a_fallback() {
        let covers_dir = tempfile::TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[("title", "Dune"), ("author", "Frank Herbert")]);
        let book = normalize_row(&row, covers_dir.path(), None);
        assert_eq!(book.author, "Frank Herbert");
    }
}
