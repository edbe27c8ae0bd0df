use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a spending category.
///
/// Categories are configuration, not code, so this is an open string
/// newtype rather than an enum. `Other` is reserved for the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const OTHER: &'static str = "Other";

    pub fn new(name: impl Into<String>) -> Self {
        Category(name.into())
    }

    pub fn other() -> Self {
        Category(Self::OTHER.to_string())
    }

    pub fn is_other(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::OTHER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::new(name)
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Engine certainty in an assigned category. Not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const MIN: f64 = 0.30;
    pub const MAX: f64 = 0.95;

    /// Clamps into `[MIN, MAX]`. NaN collapses to `MIN`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Confidence(Self::MIN);
        }
        Confidence(value.clamp(Self::MIN, Self::MAX))
    }

    /// Builds a confidence from whole hundredths, e.g. `75` for 0.75.
    ///
    /// Dividing an integer keeps results bit-identical to the matching
    /// decimal literal.
    pub fn from_hundredths(hundredths: u32) -> Self {
        Confidence::new(f64::from(hundredths) / 100.0)
    }

    pub fn floor() -> Self {
        Confidence(Self::MIN)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Confidence::new)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The outcome of categorizing one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub category: Category,
    pub confidence: Confidence,
}

impl CategorizationResult {
    pub fn new(category: Category, confidence: Confidence) -> Self {
        Self { category, confidence }
    }

    /// `Other` at the confidence floor; returned when nothing matched.
    pub fn fallback() -> Self {
        Self::new(Category::other(), Confidence::floor())
    }

    pub fn is_fallback(&self) -> bool {
        self.category.is_other()
    }
}
