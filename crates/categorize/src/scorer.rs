use centsible_core::{CategorizationResult, Confidence};

use crate::taxonomy::Taxonomy;

const BASE_HUNDREDTHS: u32 = 60;
const PER_MATCH_HUNDREDTHS: u32 = 15;

/// Confidence for a category with `match_count` keyword hits (at least one).
pub fn keyword_confidence(match_count: usize) -> Confidence {
    let matches = u32::try_from(match_count).unwrap_or(u32::MAX);
    let hundredths = PER_MATCH_HUNDREDTHS
        .saturating_mul(matches)
        .saturating_add(BASE_HUNDREDTHS);
    Confidence::from_hundredths(hundredths)
}

/// Keyword-count scorer over a [`Taxonomy`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScorer {
    taxonomy: Taxonomy,
}

impl MatchScorer {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn score(&self, description: &str) -> CategorizationResult {
        self.score_lowered(&description.to_lowercase())
    }

    /// Scores a description that is already lower case.
    ///
    /// A later category only replaces the held best on a strictly higher
    /// confidence, so ties go to the earlier category.
    pub fn score_lowered(&self, lowered: &str) -> CategorizationResult {
        let mut best = CategorizationResult::fallback();
        for entry in self.taxonomy.iter() {
            let match_count = entry.keywords.count_matches(lowered);
            if match_count == 0 {
                continue;
            }
            let confidence = keyword_confidence(match_count);
            if confidence > best.confidence {
                best = CategorizationResult::new(entry.category.clone(), confidence);
            }
        }
        best
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}
