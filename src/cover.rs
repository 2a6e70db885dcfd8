use crate::config;
use crate::isbn;
use crate::models::CatalogRow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resolves the cover reference for a row, first hit wins: a supplied
/// local file (copied next to the site's other covers), an Open Library
/// URL keyed by ISBN, the same keyed by ASIN, else empty. Never fatal --
/// a failed copy falls back to the raw column value.
pub fn resolve_cover(row: &CatalogRow, slug: &str, isbn: &str, covers_dir: &Path) -> String {
    let raw = row.get("cover").trim();
    if !raw.is_empty() {
        if let Some(local) = copy_local_cover(raw, slug, covers_dir) {
            return local;
        }
        return raw.to_string();
    }

    if !isbn.is_empty() {
        return format!("https://covers.openlibrary.org/b/isbn/{isbn}-L.jpg");
    }

    let asin = isbn::find_asin(row.get("identifiers"));
    if !asin.is_empty() {
        return format!("https://covers.openlibrary.org/b/asin/{asin}-L.jpg");
    }

    String::new()
}

/// Copies a local cover image into the covers directory under a
/// slug-derived name and returns its site-relative URL. Any failure
/// returns None so the caller keeps the raw value.
fn copy_local_cover(path_str: &str, slug: &str, covers_dir: &Path) -> Option<String> {
    let src = Path::new(path_str);
    if !src.is_file() {
        return None;
    }

    if let Err(e) = fs::create_dir_all(covers_dir) {
        debug!(error = %e, "Failed to create covers directory");
        return None;
    }

    let ext = src
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| config::DEFAULT_COVER_EXT.to_string());
    let name = format!("{slug}{ext}");

    if let Err(e) = fs::copy(src, covers_dir.join(&name)) {
        debug!(error = %e, "Cover copy failed");
        return None;
    }

    Some(format!("{}/{}", config::BOOK_COVERS_URL_PREFIX, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn local_cover_is_copied_and_renamed() {
        let src_dir = TempDir::new().unwrap();
        let covers_dir = TempDir::new().unwrap();
        let src = src_dir.path().join("original.png");
        fs::File::create(&src)
            .unwrap()
            .write_all(b"png-bytes")
            .unwrap();

        let row = CatalogRow::from_pairs(&[("cover", src.to_str().unwrap())]);
        let url = resolve_cover(&row, "dune", "", covers_dir.path());

        assert_eq!(url, "assets/img/book_covers/dune.png");
        assert_eq!(
            fs::read(covers_dir.path().join("dune.png")).unwrap(),
            b"png-bytes"
        );
    }

    #[test]
    fn extensionless_cover_defaults_to_jpg() {
        let src_dir = TempDir::new().unwrap();
        let covers_dir = TempDir::new().unwrap();
        let src = src_dir.path().join("original");
        fs::File::create(&src).unwrap();

        let row = CatalogRow::from_pairs(&[("cover", src.to_str().unwrap())]);
        let url = resolve_cover(&row, "dune", "", covers_dir.path());

        assert_eq!(url, "assets/img/book_covers/dune.jpg");
    }

    #[test]
    fn missing_local_cover_falls_back_to_raw_value() {
        let covers_dir = TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[("cover", "/no/such/file.png")]);
        assert_eq!(
            resolve_cover(&row, "dune", "", covers_dir.path()),
            "/no/such/file.png"
        );
    }

    #[test]
    fn isbn_url_when_no_cover_column() {
        let covers_dir = TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[]);
        assert_eq!(
            resolve_cover(&row, "dune", "9781593278281", covers_dir.path()),
            "https://covers.openlibrary.org/b/isbn/9781593278281-L.jpg"
        );
    }

    #[test]
    fn asin_url_when_no_isbn() {
        let covers_dir = TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[("identifiers", "mobi-asin:B00AAAA111")]);
        assert_eq!(
            resolve_cover(&row, "dune", "", covers_dir.path()),
            "https://covers.openlibrary.org/b/asin/B00AAAA111-L.jpg"
        );
    }

    #[test]
    fn nothing_known_is_empty() {
        let covers_dir = TempDir::new().unwrap();
        let row = CatalogRow::from_pairs(&[]);
        assert_eq!(resolve_cover(&row, "dune", "", covers_dir.path()), "");
    }
}
