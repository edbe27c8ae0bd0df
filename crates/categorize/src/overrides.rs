use centsible_core::{CategorizationResult, Category, Confidence, Money};

use crate::taxonomy::KeywordSet;

/// An amount-aware rule whose result replaces the keyword score outright.
///
/// Fires when the description contains any of `keywords` and the amount
/// satisfies every bound that is set. Bounds are strict.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRule {
    pub name: String,
    pub keywords: KeywordSet,
    pub amount_above: Option<Money>,
    pub amount_below: Option<Money>,
    pub result: CategorizationResult,
}

impl OverrideRule {
    fn fires(&self, lowered: &str, amount: Money) -> bool {
        if let Some(above) = self.amount_above {
            if amount <= above {
                return false;
            }
        }
        if let Some(below) = self.amount_below {
            if amount >= below {
                return false;
            }
        }
        self.keywords.matches_any(lowered)
    }
}

/// Large rent payments are utilities; small coffee or snack purchases are food.
pub fn default_rules() -> Vec<OverrideRule> {
    vec![
        OverrideRule {
            name: "large rent".to_string(),
            keywords: KeywordSet::new(["rent"]),
            amount_above: Some(Money::from_cents(100_000)),
            amount_below: None,
            result: CategorizationResult::new(
                Category::new("Utilities"),
                Confidence::from_hundredths(90),
            ),
        },
        OverrideRule {
            name: "small coffee or snack".to_string(),
            keywords: KeywordSet::new(["coffee", "snack"]),
            amount_above: None,
            amount_below: Some(Money::from_cents(1_500)),
            result: CategorizationResult::new(
                Category::new("Food & Dining"),
                Confidence::from_hundredths(85),
            ),
        },
    ]
}

/// Ordered override rules; the first rule that fires wins.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountOverride {
    rules: Vec<OverrideRule>,
}

impl AmountOverride {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    pub fn evaluate(&self, description: &str, amount: Money) -> Option<&OverrideRule> {
        self.evaluate_lowered(&description.to_lowercase(), amount)
    }

    /// Like [`evaluate`](Self::evaluate) for an already lower-cased description.
    pub fn evaluate_lowered(&self, lowered: &str, amount: Money) -> Option<&OverrideRule> {
        self.rules.iter().find(|rule| rule.fires(lowered, amount))
    }
}

impl Default for AmountOverride {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
