use std::hash::{DefaultHasher, Hash, Hasher};

use super::domain::CaseRecord;
use super::prediction::CasePrediction;

/// Cache key tying a prediction to the exact case content it was computed
/// from. Any change to the record produces a different key, so stale entries
/// are never served for an updated case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub case_id: String,
    content_hash: u64,
}

impl CacheKey {
    pub fn for_case(case: &CaseRecord) -> Self {
        let mut hasher = DefaultHasher::new();
        match serde_json::to_string(case) {
            Ok(serialized) => serialized.hash(&mut hasher),
            // Serialization of these types cannot fail in practice; hash the
            // id alone rather than abort the prediction.
            Err(_) => case.case_id.hash(&mut hasher),
        }
        Self {
            case_id: case.case_id.clone(),
            content_hash: hasher.finish(),
        }
    }
}

/// Storage for completed predictions. Implementations decide retention; the
/// pipeline only ever reads before scoring and writes after.
pub trait PredictionCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CasePrediction>;
    fn put(&self, key: CacheKey, prediction: CasePrediction);
}

/// Pass-through cache for callers that want every request scored fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl PredictionCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<CasePrediction> {
        None
    }

    fn put(&self, _key: CacheKey, _prediction: CasePrediction) {}
}
