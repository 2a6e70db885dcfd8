//! Folio: book catalog import pipeline
//!
//! This crate converts a tabular book-catalog CSV export into one
//! front-matter + body document per row, ready for a static site's
//! `_books/` collection:
//!
//! 1. **Row Source** -- Parse the CSV into header-keyed field mappings
//! 2. **Field Normalizer** -- Derive slug, year, list fields, ISBN/ASIN,
//!    cover reference, and category for each row
//! 3. **Document Renderer** -- Assemble the front-matter block and body text
//! 4. **Writer** -- Persist `<slug>.md`, overwriting any prior document
//!
//! Rows are processed sequentially; a row is fully normalized, rendered,
//! and written before the next one begins. The only fatal error is a
//! missing input file -- every per-field failure degrades to an empty
//! value or the next fallback strategy.
//!
//! # Key Modules
//!
//! - [`source`] -- CSV reading into [`models::CatalogRow`]
//! - [`normalize`] -- Slug derivation, year parsing, list splitting
//! - [`isbn`] -- Multi-strategy ISBN resolution and ASIN extraction
//! - [`cover`] -- Local cover copy and Open Library URL synthesis
//! - [`classify`] -- Category rule chain with optional AI assistance
//! - [`render`] -- Front-matter and document assembly
//! - [`import`] -- Per-row pipeline and file output
//! - [`config`] -- Path constants and classifier environment defaults
//!
//! # Example Usage
//!
//! ```bash
//! # Import the default catalog
//! folio
//!
//! # Import a specific export with info logging
//! folio -v exports/calibre.csv
//! ```

pub mod classify;
pub mod config;
pub mod cover;
pub mod import;
pub mod isbn;
pub mod models;
pub mod normalize;
pub mod render;
pub mod source;
