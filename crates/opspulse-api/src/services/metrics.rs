// Dashboard metrics service
//
// The one synthesized read path: reuse the stored snapshot while fresh,
// otherwise jitter the seed and store the result. The decision itself
// lives in opspulse_core::synth so it tests without a store.

use anyhow::Result;
use chrono::Utc;
use opspulse_core::{get_json, keys, put_json, synth, DashboardMetrics, KvStore};
use std::sync::Arc;

pub struct MetricsService {
    store: Arc<dyn KvStore>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn dashboard(&self) -> Result<DashboardMetrics> {
        let now = Utc::now();
        let previous: Option<DashboardMetrics> =
            get_json(self.store.as_ref(), keys::METRICS_KEY).await?;

        let snapshot = {
            let mut rng = rand::thread_rng();
            synth::refresh_dashboard(previous.as_ref(), now, &mut rng)
        };

        // A reused fresh snapshot comes back unchanged; only store regenerations.
        if previous.as_ref() != Some(&snapshot) {
            put_json(self.store.as_ref(), keys::METRICS_KEY, &snapshot).await?;
        }

        Ok(snapshot)
    }
}
