use centsible_core::{CategorizationResult, Category, Money, Transaction, TransactionId};

use crate::config::EngineConfig;
use crate::feedback::{CorrectionLog, CorrectionRecord, CorrectionSink};
use crate::overrides::AmountOverride;
use crate::scorer::MatchScorer;
use crate::taxonomy::Taxonomy;

/// Entry point for the presentation layer.
///
/// `categorize` reads only immutable configuration, so one service can be
/// shared across threads. `correct` appends to the sink and nothing else.
#[derive(Debug)]
pub struct CategorizationService<S = CorrectionLog> {
    scorer: MatchScorer,
    overrides: AmountOverride,
    sink: S,
}

impl<S: CorrectionSink> CategorizationService<S> {
    pub fn new(config: EngineConfig, sink: S) -> Self {
        let (taxonomy, overrides) = config.into_parts();
        Self {
            scorer: MatchScorer::new(taxonomy),
            overrides,
            sink,
        }
    }

    /// An override rule that fires wins outright; otherwise the keyword score.
    pub fn categorize(&self, description: &str, amount: Money) -> CategorizationResult {
        let lowered = description.to_lowercase();
        if let Some(rule) = self.overrides.evaluate_lowered(&lowered, amount) {
            tracing::debug!(
                rule = %rule.name,
                category = %rule.result.category,
                confidence = rule.result.confidence.value(),
                "Override rule fired"
            );
            return rule.result.clone();
        }
        let result = self.scorer.score_lowered(&lowered);
        tracing::debug!(
            category = %result.category,
            confidence = result.confidence.value(),
            "Keyword match"
        );
        result
    }

    pub fn categorize_transaction(&self, transaction: &Transaction) -> CategorizationResult {
        self.categorize(&transaction.description, transaction.amount)
    }

    /// Results in input order.
    pub fn categorize_all(&self, transactions: &[Transaction]) -> Vec<CategorizationResult> {
        transactions
            .iter()
            .map(|tx| self.categorize_transaction(tx))
            .collect()
    }

    /// Records one correction. Accepts any strings, including empty ones.
    pub fn correct(
        &self,
        transaction_id: TransactionId,
        description: &str,
        predicted_category: Category,
        corrected_category: Category,
    ) {
        tracing::debug!(
            transaction_id = %transaction_id,
            predicted = %predicted_category,
            corrected = %corrected_category,
            "Recording correction"
        );
        self.sink.record(CorrectionRecord::new(
            transaction_id,
            description,
            predicted_category,
            corrected_category,
        ));
    }

    /// Records a user edit; the transaction's current category is the prediction.
    pub fn correct_transaction(&self, transaction: &Transaction, corrected_category: &str) {
        self.correct(
            transaction.id.clone(),
            &transaction.description,
            transaction.category.clone(),
            Category::new(corrected_category),
        );
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.scorer.taxonomy()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl Default for CategorizationService<CorrectionLog> {
    fn default() -> Self {
        Self::new(EngineConfig::default(), CorrectionLog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::TracingSink;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::thread;

    fn dollars(n: i64) -> Money {
        Money::from_cents(n * 100)
    }

    fn default_service() -> CategorizationService {
        CategorizationService::default()
    }

    fn make_tx(id: &str, desc: &str, amount: Money) -> Transaction {
        Transaction::new(id, desc, amount, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn rent_override_beats_keyword_score() {
        let service = default_service();
        let result = service.categorize("Monthly rent payment", dollars(1500));
        assert_eq!(result.category, "Utilities");
        assert_eq!(result.confidence.value(), 0.90);
    }

    #[test]
    fn rent_override_ignores_food_keywords() {
        // three Food & Dining keywords would otherwise score 0.95
        let service = default_service();
        let result = service.categorize("Rent for pizza restaurant, dinner included", dollars(2400));
        assert_eq!(result.category, "Utilities");
        assert_eq!(result.confidence.value(), 0.90);
    }

    #[test]
    fn small_coffee_returns_override_confidence() {
        let service = default_service();
        let result = service.categorize("Morning coffee", dollars(5));
        assert_eq!(result.category, "Food & Dining");
        assert_eq!(result.confidence.value(), 0.85);
    }

    #[test]
    fn larger_coffee_falls_back_to_scorer() {
        let service = default_service();
        let result = service.categorize("Morning coffee", dollars(40));
        assert_eq!(result.category, "Food & Dining");
        assert_eq!(result.confidence.value(), 0.75);
    }

    #[test]
    fn sub_cent_float_amounts_keep_override_thresholds() {
        let service = default_service();

        let rent = Money::try_from_f64(1000.004).unwrap();
        let result = service.categorize("Monthly rent payment", rent);
        assert_eq!(result.category, "Utilities");
        assert_eq!(result.confidence.value(), 0.90);

        let coffee = Money::try_from_f64(14.996).unwrap();
        let result = service.categorize("Morning coffee", coffee);
        assert_eq!(result.category, "Food & Dining");
        assert_eq!(result.confidence.value(), 0.85);

        let exact = Money::try_from_f64(1000.0).unwrap();
        assert_eq!(service.categorize("Monthly rent payment", exact).confidence.value(), 0.75);
    }

    #[test]
    fn small_rent_is_scored_normally() {
        let service = default_service();
        let result = service.categorize("Rent", dollars(500));
        assert_eq!(result.category, "Utilities");
        assert_eq!(result.confidence.value(), 0.75);
    }

    #[test]
    fn unmatched_description_is_other() {
        let service = default_service();
        let result = service.categorize("Wire transfer 0042", dollars(60));
        assert_eq!(result, CategorizationResult::fallback());
    }

    #[test]
    fn empty_description_is_other() {
        let service = default_service();
        assert_eq!(service.categorize("", Money::zero()), CategorizationResult::fallback());
    }

    #[test]
    fn confidence_always_within_bounds() {
        let service = default_service();
        let descriptions = [
            "",
            "Morning coffee",
            "Monthly rent payment",
            "Pizza burger dinner lunch food meal",
            "Uber to the airline flight via metro",
            "Netflix",
            "???",
        ];
        let amounts = [-50_000, -1, 0, 499, 1_499, 1_500, 100_000, 100_001, 10_000_000];
        for desc in descriptions {
            for cents in amounts {
                let c = service.categorize(desc, Money::from_cents(cents)).confidence.value();
                assert!((0.30..=0.95).contains(&c), "{desc} / {cents}: {c}");
            }
        }
    }

    #[test]
    fn categorize_is_pure() {
        let service = default_service();
        let first = service.categorize("Spotify and concert tickets", dollars(25));
        for _ in 0..5 {
            assert_eq!(service.categorize("Spotify and concert tickets", dollars(25)), first);
        }
        assert!(service.sink().is_empty());
    }

    #[test]
    fn categorize_all_keeps_input_order() {
        let service = default_service();
        let txs = vec![
            make_tx("t1", "Gym membership", dollars(40)),
            make_tx("t2", "Bank transfer", dollars(100)),
            make_tx("t3", "Campus coffee", Money::from_cents(350)),
        ];
        let results = service.categorize_all(&txs);
        let categories: Vec<&str> = results.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Health & Fitness", "Other", "Food & Dining"]);
        assert_eq!(results[2].confidence.value(), 0.85);
    }

    #[test]
    fn correct_transaction_records_prediction_and_correction() {
        let service = default_service();
        let mut tx = make_tx("t1", "Campus bookstore lab coat", dollars(30));
        tx.apply(service.categorize_transaction(&tx));
        assert_eq!(tx.category, "Education");

        service.correct_transaction(&tx, "Shopping");

        let records = service.sink().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id, TransactionId::from("t1"));
        assert_eq!(records[0].description, "Campus bookstore lab coat");
        assert_eq!(records[0].predicted_category, "Education");
        assert_eq!(records[0].corrected_category, "Shopping");
    }

    #[test]
    fn repeated_corrections_append_each_time() {
        let service = default_service();
        let tx = make_tx("t1", "Laptop sleeve", dollars(25));
        for corrected in ["Education", "Shopping", "Education"] {
            service.correct_transaction(&tx, corrected);
        }
        assert_eq!(service.sink().len(), 3);
        let last = service.sink().records().pop().unwrap();
        assert_eq!(last.corrected_category, "Education");
    }

    #[test]
    fn correction_does_not_change_future_results() {
        let service = default_service();
        let before = service.categorize("Target run", dollars(45));
        service.correct(
            TransactionId::from("t5"),
            "Target run",
            before.category.clone(),
            Category::new("Personal Care"),
        );
        assert_eq!(service.categorize("Target run", dollars(45)), before);
    }

    #[test]
    fn empty_correction_is_accepted() {
        let service = default_service();
        service.correct(TransactionId::from(""), "", Category::new(""), Category::new(""));
        assert_eq!(service.sink().len(), 1);
    }

    #[test]
    fn custom_config_drives_scoring() {
        let config = EngineConfig::from_toml(
            r#"
            overrides = []

            [[categories]]
            name = "Housing"
            keywords = ["rent", "dorm"]
            "#,
        )
        .unwrap();
        let service = CategorizationService::new(config, TracingSink);
        let result = service.categorize("Dorm rent", dollars(5000));
        assert_eq!(result.category, "Housing");
        assert_eq!(result.confidence.value(), 0.90);
        assert_eq!(service.taxonomy().len(), 1);
        service.correct_transaction(&make_tx("t1", "Dorm rent", dollars(5000)), "Utilities");
    }

    #[test]
    fn shared_across_threads() {
        let log = Arc::new(CorrectionLog::new());
        let service = Arc::new(CategorizationService::new(
            EngineConfig::default(),
            Arc::clone(&log),
        ));
        thread::scope(|scope| {
            for worker in 0..4 {
                let service = Arc::clone(&service);
                scope.spawn(move || {
                    for n in 0..25 {
                        let result = service.categorize("Morning coffee", dollars(5));
                        assert_eq!(result.confidence.value(), 0.85);
                        service.correct(
                            TransactionId(format!("w{worker}-{n}")),
                            "Morning coffee",
                            result.category,
                            Category::new("Snacks"),
                        );
                    }
                });
            }
        });
        assert_eq!(log.len(), 100);
    }
}
