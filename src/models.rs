use std::collections::HashMap;

/// One CSV row, keyed by header name. Recognized columns are looked up by
/// exact name; extra columns are carried along but ignored downstream.
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    fields: HashMap<String, String>,
}

impl CatalogRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Raw value for `field`, or `""` when the column is absent.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Normalized, render-ready fields derived from one catalog row.
/// Recomputed each run; consumed by the renderer and discarded.
#[derive(Debug, Clone, Default)]
pub struct Book {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub cover: String,
    pub year: String,
    pub stars: String,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub body: String,
}
