use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{CategorizationResult, Category, Confidence};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        TransactionId(id.to_string())
    }
}

/// A transaction as held by the presentation layer.
///
/// The engine only reads `description` and `amount`; everything else is
/// carried for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: Category,
    pub confidence: Confidence,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl Transaction {
    /// A not-yet-categorized transaction, sitting at the fallback.
    pub fn new(id: impl Into<String>, description: &str, amount: Money, date: NaiveDate) -> Self {
        let fallback = CategorizationResult::fallback();
        Transaction {
            id: TransactionId(id.into()),
            description: description.to_string(),
            amount,
            date,
            category: fallback.category,
            confidence: fallback.confidence,
            is_recurring: false,
            subcategory: None,
        }
    }

    /// Attaches a categorization result chosen by the caller.
    pub fn apply(&mut self, result: CategorizationResult) {
        self.category = result.category;
        self.confidence = result.confidence;
    }
}
