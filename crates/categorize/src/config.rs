use std::path::Path;

use centsible_core::{CategorizationResult, Category, Confidence, Money};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::overrides::{AmountOverride, OverrideRule};
use crate::taxonomy::{KeywordSet, Taxonomy};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    name: String,
    keywords: Vec<String>,
    amount_above: Option<Money>,
    amount_below: Option<Money>,
    category: String,
    confidence: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    categories: Option<Vec<CategoryEntry>>,
    overrides: Option<Vec<OverrideEntry>>,
}

/// Taxonomy plus override rules, validated against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    taxonomy: Taxonomy,
    overrides: AmountOverride,
}

impl EngineConfig {
    /// Every override rule must target a category present in the taxonomy.
    pub fn new(taxonomy: Taxonomy, overrides: AmountOverride) -> Result<Self, ConfigError> {
        if let Some(rule) = overrides
            .rules()
            .iter()
            .find(|rule| !taxonomy.contains(&rule.result.category))
        {
            return Err(ConfigError::UnknownCategory {
                rule: rule.name.clone(),
                category: rule.result.category.to_string(),
            });
        }
        Ok(Self { taxonomy, overrides })
    }

    /// Parses a TOML document. A missing `categories` or `overrides`
    /// table falls back to the built-in defaults; an empty one is kept empty.
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_content)?;

        let taxonomy = match file.categories {
            Some(entries) => Taxonomy::new(
                entries
                    .into_iter()
                    .map(|e| (Category::new(e.name), KeywordSet::new(e.keywords)))
                    .collect(),
            )?,
            None => Taxonomy::default(),
        };
        let overrides = match file.overrides {
            Some(entries) => AmountOverride::new(
                entries
                    .into_iter()
                    .map(override_rule)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => AmountOverride::default(),
        };

        let config = Self::new(taxonomy, overrides)?;
        tracing::info!(
            categories = config.taxonomy.len(),
            overrides = config.overrides.rules().len(),
            "Loaded categorization config"
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Reading categorization config");
        Self::from_toml(&content)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn overrides(&self) -> &AmountOverride {
        &self.overrides
    }

    pub fn into_parts(self) -> (Taxonomy, AmountOverride) {
        (self.taxonomy, self.overrides)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::default(),
            overrides: AmountOverride::default(),
        }
    }
}

fn override_rule(entry: OverrideEntry) -> Result<OverrideRule, ConfigError> {
    if !(Confidence::MIN..=Confidence::MAX).contains(&entry.confidence) {
        return Err(ConfigError::InvalidConfidence {
            rule: entry.name,
            confidence: entry.confidence,
        });
    }
    let keywords = KeywordSet::new(entry.keywords);
    if keywords.is_empty() {
        return Err(ConfigError::MissingKeywords(entry.name));
    }
    if entry.amount_above.is_none() && entry.amount_below.is_none() {
        return Err(ConfigError::MissingAmountBound(entry.name));
    }
    Ok(OverrideRule {
        name: entry.name,
        keywords,
        amount_above: entry.amount_above,
        amount_below: entry.amount_below,
        result: CategorizationResult::new(
            Category::new(entry.category),
            Confidence::new(entry.confidence),
        ),
    })
}
