use crate::core::criteria::FilterCriteria;
use crate::core::filters::matches_criteria;
use crate::models::ProviderProfile;

/// Result of a provider search
#[derive(Debug)]
pub struct SearchResult {
    pub providers: Vec<ProviderProfile>,
    pub total_candidates: usize,
}

/// Applies the filter criteria to a candidate list and ranks the survivors.
///
/// Ranking is by rating descending, then hourly rate ascending, so two
/// equally rated providers tie-break on price.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    default_limit: usize,
    max_limit: usize,
}

impl Searcher {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    /// Filter and rank candidates against the criteria.
    ///
    /// A missing limit falls back to the configured default; any requested
    /// limit is capped at the configured maximum.
    pub fn search(
        &self,
        criteria: &FilterCriteria,
        candidates: Vec<ProviderProfile>,
        limit: Option<usize>,
    ) -> SearchResult {
        let total_candidates = candidates.len();
        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit);

        let mut providers: Vec<ProviderProfile> = candidates
            .into_iter()
            .filter(|profile| matches_criteria(profile, criteria))
            .collect();

        providers.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.hourly_rate.cmp(&b.hourly_rate))
        });

        providers.truncate(limit);

        SearchResult {
            providers,
            total_candidates,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(20, 100)
    }
}
