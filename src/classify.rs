use crate::config;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Closed category set used for site navigation and filtering.
pub const ALLOWED_CATEGORIES: &[&str] = &[
    "Engineering",
    "Science",
    "Fiction",
    "Nonfiction",
    "Business",
    "Psychology",
    "Arts",
    "Physical Health",
    "Uncategorized",
];

/// Tag-to-category shortcuts, consulted before the keyword scan.
/// First matching tag wins.
const TAG_CATEGORY_HINTS: &[(&str, &str)] = &[
    ("comp_programming", "Engineering"),
    ("programming", "Engineering"),
    ("engineering", "Engineering"),
    ("security", "Engineering"),
    ("cloud", "Engineering"),
    ("devops", "Engineering"),
    ("infrastructure", "Engineering"),
    ("web", "Engineering"),
    ("software", "Engineering"),
    ("sci_psychology", "Science"),
    ("literature_19", "Fiction"),
    ("prose_rus_classic", "Fiction"),
    ("child_prose", "Fiction"),
    ("nonfiction", "Nonfiction"),
    ("business", "Business"),
    ("psychology", "Psychology"),
    ("arts", "Arts"),
    ("physical_health", "Physical Health"),
    ("health", "Physical Health"),
    ("fitness", "Physical Health"),
    ("running", "Physical Health"),
];

/// Keyword hints searched as substrings of the combined tags + title +
/// description blob. Category order is the match priority.
const KEYWORD_HINTS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &[
            "programming",
            "software",
            "engineering",
            "systems",
            "system",
            "algorithm",
            "computer",
            "developer",
            "devops",
            "code",
            "ai",
            "machine learning",
            "ml",
            "data science",
            "cloud",
            "aws",
            "azure",
            "gcp",
            "kubernetes",
            "docker",
            "containers",
            "security",
            "secure",
            "infosec",
            "cybersecurity",
            "network security",
            "application security",
            "web security",
            "web application security",
            "sre",
            "site reliability",
            "observability",
            "monitoring",
            "logging",
            "infrastructure",
            "iac",
            "terraform",
            "ansible",
            "policy as code",
        ],
    ),
    (
        "Science",
        &[
            "science",
            "physics",
            "chemistry",
            "biology",
            "math",
            "mathematics",
            "discrete math",
            "discrete mathematics",
            "astronomy",
            "geology",
            "cognitive",
            "neuroscience",
        ],
    ),
    (
        "Psychology",
        &[
            "psychology",
            "psychological",
            "cognitive",
            "mind",
            "behavior",
            "behaviour",
            "brain",
        ],
    ),
    (
        "Business",
        &[
            "business",
            "startup",
            "start-up",
            "strategy",
            "management",
            "leadership",
            "marketing",
            "sales",
            "finance",
            "economics",
            "entrepreneur",
        ],
    ),
    (
        "Arts",
        &[
            "art",
            "arts",
            "design",
            "music",
            "painting",
            "photography",
            "film",
            "cinema",
            "theater",
            "theatre",
            "language",
        ],
    ),
    (
        "Physical Health",
        &[
            "health",
            "fitness",
            "exercise",
            "training",
            "run",
            "running",
            "marathon",
            "triathlon",
            "sport",
            "sports",
            "athlete",
            "coaching",
            "diet",
            "dieting",
            "nutrition",
            "wellness",
        ],
    ),
    (
        "Fiction",
        &[
            "novel",
            "story",
            "stories",
            "fiction",
            "fantasy",
            "sci-fi",
            "science fiction",
            "thriller",
            "romance",
            "mystery",
            "prose",
            "classic",
        ],
    ),
    (
        "Nonfiction",
        &[
            "nonfiction",
            "non-fiction",
            "biography",
            "memoir",
            "history",
            "essay",
            "reportage",
        ],
    ),
];

/// Assigns one category from the allowed set. Ordered strategies, first
/// answer wins: optional AI call, tag hint table, keyword scan, fallback.
pub fn detect_category(
    title: &str,
    tags: &[String],
    comments: &str,
    ai: Option<&AiClassifier>,
) -> String {
    if let Some(ai) = ai {
        match ai.classify(title, tags, comments) {
            Ok(Some(category)) => return category,
            Ok(None) => debug!("AI classifier gave no usable answer"),
            Err(e) => debug!(error = %e, "AI classification failed"),
        }
    }

    for tag in tags {
        let tag = tag.to_lowercase();
        if let Some((_, category)) = TAG_CATEGORY_HINTS.iter().find(|(hint, _)| *hint == tag) {
            return category.to_string();
        }
    }

    let blob = format!("{} {} {}", tags.join(" "), title, comments).to_lowercase();
    for (category, keywords) in KEYWORD_HINTS {
        if keywords.iter().any(|keyword| blob.contains(keyword)) {
            return category.to_string();
        }
    }

    "Uncategorized".to_string()
}

/// Classifier settings resolved once at startup. Absence of the
/// credential disables the AI strategy entirely.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClassifierConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(config::ENV_API_KEY)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())?;

        let model = std::env::var(config::ENV_AI_MODEL)
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| config::DEFAULT_AI_MODEL.to_string());

        let timeout_secs = std::env::var(config::ENV_AI_TIMEOUT)
            .ok()
            .and_then(|t| t.trim().parse::<f64>().ok())
            .unwrap_or(config::DEFAULT_AI_TIMEOUT_SECS);

        Some(Self {
            api_key,
            model,
            timeout: Duration::from_secs_f64(timeout_secs),
        })
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

/// Optional external text classifier with a narrow contract: the reply
/// must be a bare category name from the allowed set or it is discarded.
pub struct AiClassifier {
    config: ClassifierConfig,
    client: reqwest::blocking::Client,
}

impl AiClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build classifier HTTP client")?;
        Ok(Self { config, client })
    }

    /// One bounded request, no retries. Network, timeout, and parse
    /// failures surface as errors; the caller treats them as no answer.
    pub fn classify(&self, title: &str, tags: &[String], comments: &str) -> Result<Option<String>> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": "You classify books into high-level categories."},
                {"role": "user", "content": build_prompt(title, tags, comments)},
            ],
            "temperature": 0,
            "max_tokens": 10,
        });

        let response: ChatResponse = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or("");
        // Models sometimes append extra text; keep the first token only.
        let guess = content.split(['\n', ',', ';']).next().unwrap_or("").trim();

        if ALLOWED_CATEGORIES.contains(&guess) {
            Ok(Some(guess.to_string()))
        } else {
            Ok(None)
        }
    }
}

fn build_prompt(title: &str, tags: &[String], comments: &str) -> String {
    let mut allowed: Vec<&str> = ALLOWED_CATEGORIES.to_vec();
    allowed.sort_unstable();

    format!(
        "You classify books into exactly one of these categories. \
         Return only the category name. If unsure, return 'Uncategorized'. \
         Definitions: \
         Engineering = programming, software, security, cloud, devops, systems, infra, web, SRE. \
         Science = math, physics, discrete math, biology, neuroscience, research. \
         Business = business, startups, management, finance, strategy. \
         Psychology = psychology, cognition, behavior, brain. \
         Arts = design, art, music, film, theater. \
         Physical Health = fitness, sports, running, training, diet, nutrition, wellness. \
         Fiction = novels, stories, literature. \
         Nonfiction = biography, memoir, history, essays, reportage. \
         Favor Engineering for systems, security, cloud, programming; do not place those in Nonfiction. \
         Allowed: {}. Title: {}. Tags: {}. Description: {}.",
        allowed.join(", "),
        if title.is_empty() { "N/A" } else { title },
        if tags.is_empty() {
            "None".to_string()
        } else {
            tags.join(", ")
        },
        if comments.is_empty() { "None" } else { comments },
    )
}
