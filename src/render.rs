use crate::config;
use crate::models::Book;

/// Wraps a value in double quotes, escaping interior quotes.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Renders a bracketed, comma-separated, quoted sequence; `[]` when empty.
pub fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Assembles the full document: front-matter block, blank-line separator,
/// trimmed body, trailing newline. Optional keys with empty values are
/// omitted entirely; layout, title, and status are always present.
pub fn render_document(book: &Book) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(13);
    lines.push("---".to_string());
    lines.push(format!("layout: {}", config::LAYOUT));
    lines.push(format!("title: {}", quote(&book.title)));
    if !book.author.is_empty() {
        lines.push(format!("author: {}", quote(&book.author)));
    }
    if !book.isbn.is_empty() {
        lines.push(format!("isbn: {}", book.isbn));
    }
    if !book.cover.is_empty() {
        lines.push(format!("cover: {}", book.cover));
    }
    if !book.year.is_empty() {
        lines.push(format!("released: {}", book.year));
    }
    if !book.stars.is_empty() {
        lines.push(format!("stars: {}", book.stars));
    }
    if !book.languages.is_empty() {
        lines.push(format!("languages: {}", render_list(&book.languages)));
    }
    if !book.tags.is_empty() {
        lines.push(format!("tags: {}", render_list(&book.tags)));
    }
    if !book.category.is_empty() {
        lines.push(format!(
            "categories: {}",
            render_list(std::slice::from_ref(&book.category))
        ));
    }
    lines.push(format!("status: {}", config::STATUS));
    lines.push("---".to_string());

    let mut doc = lines.join("\n");
    doc.push_str("\n\n");
    if !book.body.is_empty() {
        doc.push_str(&book.body);
    }
    doc.push('\n');
    doc
}
