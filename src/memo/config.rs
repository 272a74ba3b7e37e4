use serde::{Deserialize, Serialize};

/// A user-defined task category
///
/// `name` is both an explicit prefix trigger (`work: deploy api`) and the
/// label written into task entries. `keywords` classify unprefixed tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Check whether any keyword occurs anywhere in `text_lower`
    ///
    /// `text_lower` must already be lower-cased.
    pub fn matches(&self, text_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| text_lower.contains(&keyword.to_lowercase()))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self {
            name: "new-category".to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Read-only configuration consulted by the classifier
///
/// Every field may be empty. Missing fields in a settings file fall back to
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Entry type tags recognized as explicit prefixes (`idea: ...`)
    pub entry_types: Vec<String>,
    /// Categories in priority order
    pub categories: Vec<Category>,
    /// Leading words that mark input as a task
    pub task_keywords: Vec<String>,
    /// Category used when no category keyword matches
    pub default_category: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            entry_types: ["note", "idea", "log", "task"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            categories: vec![
                Category::new(
                    "work",
                    &[
                        "jira", "meeting", "standup", "client", "deploy", "pr", "sprint", "ticket",
                        "slack", "report",
                    ],
                ),
                Category::new(
                    "personal",
                    &["home", "family", "gym", "doctor", "shopping", "groceries"],
                ),
            ],
            task_keywords: [
                "fix", "call", "email", "send", "buy", "finish", "complete", "review", "check",
                "update", "create", "make", "write", "schedule", "book", "meet", "submit",
                "prepare", "clean", "organize",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            default_category: "personal".to_string(),
        }
    }
}

impl CaptureConfig {
    /// Create a configuration with no entry types, categories or keywords
    pub fn empty(default_category: &str) -> Self {
        Self {
            entry_types: Vec::new(),
            categories: Vec::new(),
            task_keywords: Vec::new(),
            default_category: default_category.to_string(),
        }
    }

    /// Resolve the category of an unprefixed task
    ///
    /// Categories are scanned in configured order; the first one with a
    /// keyword contained in `text` wins. Falls back to `default_category`.
    pub fn category_for(&self, text: &str) -> &str {
        let text_lower = text.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.matches(&text_lower))
            .map(|category| category.name.as_str())
            .unwrap_or(&self.default_category)
    }

    /// Clean up user-edited lists
    ///
    /// Keywords and entry types are trimmed, lower-cased and empty entries
    /// dropped. Category names are trimmed and lower-cased. An empty
    /// default category is reset to the built-in one.
    pub fn normalize(&mut self) {
        normalize_list(&mut self.entry_types);
        normalize_list(&mut self.task_keywords);
        for category in &mut self.categories {
            category.name = category.name.trim().to_lowercase();
            normalize_list(&mut category.keywords);
        }
        if self.default_category.trim().is_empty() {
            self.default_category = Self::default().default_category;
        }
    }
}

fn normalize_list(items: &mut Vec<String>) {
    *items = items
        .iter()
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
}
