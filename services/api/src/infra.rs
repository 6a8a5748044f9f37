use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::PrometheusHandle;

use collections_ai::scoring::{CacheKey, CasePrediction, PredictionCache};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory prediction cache with per-entry TTL expiry. Expired entries are
/// dropped on read; a full sweep runs on every insert so the map does not
/// accumulate dead cases between lookups.
pub(crate) struct TtlPredictionCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, (CasePrediction, Instant)>>,
}

impl TtlPredictionCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }
}

impl PredictionCache for TtlPredictionCache {
    fn get(&self, key: &CacheKey) -> Option<CasePrediction> {
        let mut guard = self.entries.lock().expect("cache mutex poisoned");
        match guard.get(key) {
            Some((_, stored_at)) if stored_at.elapsed() > self.ttl => {
                guard.remove(key);
                None
            }
            Some((prediction, _)) => Some(prediction.clone()),
            None => None,
        }
    }

    fn put(&self, key: CacheKey, prediction: CasePrediction) {
        let mut guard = self.entries.lock().expect("cache mutex poisoned");
        guard.retain(|_, (_, stored_at)| stored_at.elapsed() <= self.ttl);
        guard.insert(key, (prediction, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collections_ai::scoring::{CasePrioritizer, CaseRecord, PredictionPipeline, RiskProfile};

    fn case(case_id: &str) -> CaseRecord {
        CaseRecord {
            case_id: case_id.to_string(),
            customer_id: "CUST-001".to_string(),
            debt_amount: 5_000.0,
            aging_days: 45,
            customer_risk_profile: RiskProfile::Medium,
            service_type: "STANDARD".to_string(),
            customer_segment: "STANDARD".to_string(),
            previous_interactions: 0,
            payment_history: Vec::new(),
        }
    }

    fn prediction_for(case: &CaseRecord) -> CasePrediction {
        PredictionPipeline::<TtlPredictionCache>::new(CasePrioritizer::default(), None)
            .predict(case)
    }

    #[test]
    fn entries_survive_within_the_ttl() {
        let cache = TtlPredictionCache::new(Duration::from_secs(60));
        let case = case("CASE-1");
        let key = CacheKey::for_case(&case);

        cache.put(key.clone(), prediction_for(&case));

        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn expired_entries_are_dropped_on_read() {
        let cache = TtlPredictionCache::new(Duration::from_secs(0));
        let case = case("CASE-1");
        let key = CacheKey::for_case(&case);

        cache.put(key.clone(), prediction_for(&case));
        std::thread::sleep(Duration::from_millis(5));

        assert!(cache.get(&key).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn insert_sweeps_expired_entries() {
        let cache = TtlPredictionCache::new(Duration::from_secs(0));
        let first = case("CASE-1");
        cache.put(CacheKey::for_case(&first), prediction_for(&first));
        std::thread::sleep(Duration::from_millis(5));

        let second = case("CASE-2");
        cache.put(CacheKey::for_case(&second), prediction_for(&second));

        assert_eq!(cache.len(), 1);
    }
}
