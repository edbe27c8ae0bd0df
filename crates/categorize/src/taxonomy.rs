use std::collections::HashSet;

use centsible_core::Category;

use crate::error::ConfigError;

/// Built-in taxonomy. Order breaks ties between equally scored categories.
pub const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Food & Dining",
        &[
            "restaurant", "cafe", "pizza", "burger", "coffee", "lunch", "dinner", "breakfast",
            "food", "meal", "snack", "groceries", "supermarket",
        ],
    ),
    (
        "Transportation",
        &[
            "uber", "lyft", "bus", "metro", "taxi", "gas", "fuel", "parking", "train", "flight",
            "airline",
        ],
    ),
    (
        "Education",
        &[
            "tuition", "books", "textbook", "course", "lab", "library", "school", "university",
            "college", "supplies", "notebook",
        ],
    ),
    (
        "Entertainment",
        &[
            "movie", "cinema", "concert", "game", "spotify", "netflix", "music", "theater",
            "party", "club", "bar",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon", "target", "walmart", "clothing", "shoes", "electronics", "phone", "laptop",
            "shopping",
        ],
    ),
    (
        "Health & Fitness",
        &[
            "gym", "pharmacy", "doctor", "medical", "hospital", "medicine", "fitness", "wellness",
        ],
    ),
    (
        "Utilities",
        &["electricity", "water", "internet", "phone bill", "rent", "utilities", "wifi"],
    ),
    (
        "Personal Care",
        &["haircut", "salon", "beauty", "cosmetics", "personal", "hygiene"],
    ),
];

/// Lower-cased keywords matched by substring containment.
///
/// Empty keywords are dropped since they would match every description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let normalized = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .filter(|k| seen.insert(k.clone()))
            .collect();
        KeywordSet(normalized)
    }

    /// Number of keywords found in `lowered`, which must already be lower case.
    pub fn count_matches(&self, lowered: &str) -> usize {
        self.0.iter().filter(|k| lowered.contains(k.as_str())).count()
    }

    pub fn matches_any(&self, lowered: &str) -> bool {
        self.0.iter().any(|k| lowered.contains(k.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyEntry {
    pub category: Category,
    pub keywords: KeywordSet,
}

/// Ordered, immutable category table.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Builds a taxonomy, keeping the given order.
    pub fn new(entries: Vec<(Category, KeywordSet)>) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();
        let mut built = Vec::with_capacity(entries.len());
        for (category, keywords) in entries {
            if category.is_other() {
                return Err(ConfigError::ReservedCategory(category.to_string()));
            }
            if !names.insert(category.as_str().to_lowercase()) {
                return Err(ConfigError::DuplicateCategory(category.to_string()));
            }
            built.push(TaxonomyEntry { category, keywords });
        }
        Ok(Self { entries: built })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|e| &e.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().map(|e| &e.category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let entries = DEFAULT_TAXONOMY
            .iter()
            .map(|(name, keywords)| TaxonomyEntry {
                category: Category::new(*name),
                keywords: KeywordSet::new(keywords.iter()),
            })
            .collect();
        Self { entries }
    }
}
