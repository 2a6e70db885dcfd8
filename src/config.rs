/// Catalog file used when no path is given on the command line
pub const DEFAULT_INPUT: &str = "_data/books.csv";

/// Output collection directory for rendered book documents
pub const BOOKS_DIR: &str = "_books";

/// Extension for rendered documents
pub const OUTPUT_EXT: &str = "md";

/// Destination directory for locally copied cover images
pub const BOOK_COVERS_DIR: &str = "assets/img/book_covers";

/// URL prefix recorded in front matter for copied covers
pub const BOOK_COVERS_URL_PREFIX: &str = "assets/img/book_covers";

/// Cover extension assumed when the source file has none
pub const DEFAULT_COVER_EXT: &str = ".jpg";

/// Front-matter layout value, fixed for every document
pub const LAYOUT: &str = "book-review";

/// Front-matter reading status, fixed for every document
pub const STATUS: &str = "Planned";

/// Environment variable holding the classifier credential (absent = disabled)
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable overriding the classifier model
pub const ENV_AI_MODEL: &str = "AI_CLASSIFIER_MODEL";

/// Environment variable overriding the classifier timeout in seconds
pub const ENV_AI_TIMEOUT: &str = "AI_CLASSIFIER_TIMEOUT";

/// Classifier model used when the override is unset
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

/// Classifier timeout used when the override is unset
pub const DEFAULT_AI_TIMEOUT_SECS: f64 = 8.0;
