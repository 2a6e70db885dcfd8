use crate::models::CatalogRow;
use once_cell::sync::Lazy;
use regex::Regex;

/// ISBN-13-shaped substrings in free text: 978/979 prefix, digit groups,
/// optional hyphen or space separators, optional X check digit.
static ISBN13_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"97[89][- ]?\d{1,5}[- ]?\d{1,7}[- ]?\d{1,7}[- ]?[0-9Xx]").unwrap());

/// Strips everything but digits and the X check character, then validates
/// by length: exactly 10 or 13 characters, else `""`.
pub fn clean_isbn(candidate: &str) -> String {
    let digits: String = candidate
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .collect();
    match digits.len() {
        10 | 13 => digits,
        _ => String::new(),
    }
}

/// `key:value` pairs from a packed identifiers column, keys lowercased.
fn identifier_pairs(value: &str) -> impl Iterator<Item = (String, &str)> {
    value.split(',').filter_map(|part| {
        let (key, val) = part.split_once(':')?;
        Some((key.trim().to_lowercase(), val))
    })
}

/// The value of the first `isbn:` pair that survives validation.
pub fn isbn_from_identifiers(value: &str) -> String {
    for (key, val) in identifier_pairs(value) {
        if key == "isbn" {
            let cleaned = clean_isbn(val);
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
    }
    String::new()
}

/// Resolves a row's ISBN through the ordered strategies: direct column,
/// identifiers pair, free-text scan of the description. First valid
/// candidate wins; invalid candidates fall through to the next strategy.
pub fn find_isbn(row: &CatalogRow) -> String {
    let direct = clean_isbn(&row.get("isbn").replace('-', ""));
    if !direct.is_empty() {
        return direct;
    }

    let from_identifiers = isbn_from_identifiers(row.get("identifiers"));
    if !from_identifiers.is_empty() {
        return from_identifiers;
    }

    for candidate in ISBN13_SCAN.find_iter(row.get("comments")) {
        let cleaned = clean_isbn(candidate.as_str());
        if !cleaned.is_empty() {
            return cleaned;
        }
    }

    String::new()
}

/// The value of the first identifiers pair whose key mentions ASIN,
/// stripped of non-alphanumeric characters.
pub fn find_asin(identifiers: &str) -> String {
    for (key, val) in identifier_pairs(identifiers) {
        if key.contains("asin") {
            let cleaned: String = val.chars().filter(char::is_ascii_alphanumeric).collect();
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
    }
    String::new()
}
