pub mod config;
pub mod error;
pub mod feedback;
pub mod overrides;
pub mod scorer;
pub mod service;
pub mod taxonomy;

pub use config::EngineConfig;
pub use error::ConfigError;
pub use feedback::{CorrectionLog, CorrectionRecord, CorrectionSink, TracingSink};
pub use overrides::{AmountOverride, OverrideRule};
pub use scorer::MatchScorer;
pub use service::CategorizationService;
pub use taxonomy::{KeywordSet, Taxonomy, TaxonomyEntry, DEFAULT_TAXONOMY};
