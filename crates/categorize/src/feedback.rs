//! Correction feedback: an append-only record of user category edits.
//!
//! A learning step would consume [`CorrectionLog::records`] in append order,
//! treating the most recent record for a transaction as authoritative. No
//! such consumer lives in this crate.

use std::sync::{Arc, Mutex, PoisonError};

use centsible_core::{Category, TransactionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRecord {
    pub transaction_id: TransactionId,
    pub description: String,
    pub predicted_category: Category,
    pub corrected_category: Category,
    pub timestamp: DateTime<Utc>,
}

impl CorrectionRecord {
    /// Stamps a new record with the current time.
    pub fn new(
        transaction_id: TransactionId,
        description: &str,
        predicted_category: Category,
        corrected_category: Category,
    ) -> Self {
        Self {
            transaction_id,
            description: description.to_string(),
            predicted_category,
            corrected_category,
            timestamp: Utc::now(),
        }
    }
}

/// Destination for corrections. Implementations must accept every record.
pub trait CorrectionSink: Send + Sync {
    fn record(&self, record: CorrectionRecord);
}

impl<T: CorrectionSink + ?Sized> CorrectionSink for Arc<T> {
    fn record(&self, record: CorrectionRecord) {
        (**self).record(record)
    }
}

/// In-memory append-only log. Appends are serialized by a single lock.
#[derive(Debug, Default)]
pub struct CorrectionLog {
    records: Mutex<Vec<CorrectionRecord>>,
}

impl CorrectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, oldest first.
    pub fn records(&self) -> Vec<CorrectionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Correction history of one transaction, oldest first.
    pub fn history(&self, transaction_id: &TransactionId) -> Vec<CorrectionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.transaction_id == transaction_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CorrectionSink for CorrectionLog {
    fn record(&self, record: CorrectionRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

/// Keeps nothing; emits one `tracing` event per correction.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl CorrectionSink for TracingSink {
    fn record(&self, record: CorrectionRecord) {
        tracing::info!(
            transaction_id = %record.transaction_id,
            predicted = %record.predicted_category,
            corrected = %record.corrected_category,
            "Learning: \"{}\" should be categorized as \"{}\" instead of \"{}\"",
            record.description,
            record.corrected_category,
            record.predicted_category,
        );
    }
}
