use crate::models::CatalogRow;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,\s]+").unwrap());

/// Lowercase, hyphen-joined, alphanumeric-only transformation of `text`,
/// with a fixed fallback when nothing survives.
pub fn safe_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let slug = NON_ALNUM_RUN.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "book".to_string()
    } else {
        slug.to_string()
    }
}

/// Stable document identifier for a row: the uuid column when present,
/// else a tagged numeric id, else a slug of the title.
pub fn make_slug(row: &CatalogRow) -> String {
    let uuid = row.get("uuid").trim();
    if !uuid.is_empty() {
        return uuid.to_string();
    }
    let id = row.get("id").trim();
    if !id.is_empty() {
        return format!("book-{id}");
    }
    safe_slug(row.get("title"))
}

/// Extracts the 4-digit year from a date-like field, trying the known
/// export formats in order: offset timestamp, naive timestamp, date-only.
/// Unparseable or absent values degrade to `""`.
pub fn parse_year(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y").to_string();
    }
    // The naive formats tolerate trailing fragments by matching a prefix.
    if let Some(prefix) = value.get(..19) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S") {
            return dt.format("%Y").to_string();
        }
    }
    if let Some(prefix) = value.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return date.format("%Y").to_string();
        }
    }

    String::new()
}

/// Splits a packed list field on semicolon/comma/whitespace runs.
/// Order is preserved, empties are dropped, no deduplication.
pub fn split_list(value: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
