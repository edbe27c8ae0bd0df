use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Category '{0}' is reserved for the fallback")]
    ReservedCategory(String),
    #[error("Duplicate category: '{0}'")]
    DuplicateCategory(String),
    #[error("Override rule '{rule}' targets unknown category '{category}'")]
    UnknownCategory { rule: String, category: String },
    #[error("Override rule '{rule}' has confidence {confidence} outside [0.30, 0.95]")]
    InvalidConfidence { rule: String, confidence: f64 },
    #[error("Override rule '{0}' needs at least one keyword")]
    MissingKeywords(String),
    #[error("Override rule '{0}' needs amount_above or amount_below")]
    MissingAmountBound(String),
}
