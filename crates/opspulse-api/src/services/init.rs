// Seeding service for POST /v1/init/data
//
// Writes every collection's seed. Individual failures are logged and
// reported in the summary but never fail the call; the init marker keeps
// its original timestamp across repeated runs.

use chrono::Utc;
use opspulse_core::{
    get_json, keys, put_json, seeds, synth, InitMarker, KvStore, INIT_VERSION,
};
use std::sync::Arc;

/// What a seeding run did
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub version: String,
    pub already_initialized: bool,
    pub seeded: Vec<String>,
    pub failed: Vec<String>,
}

pub struct InitService {
    store: Arc<dyn KvStore>,
}

impl InitService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn seed_all(&self) -> InitSummary {
        let now = Utc::now();
        let store = self.store.as_ref();
        let mut seeded = Vec::new();
        let mut failed = Vec::new();

        let dashboard = {
            let mut rng = rand::thread_rng();
            synth::synthesize_dashboard(now, &mut rng)
        };
        Self::track(
            put_json(store, keys::METRICS_KEY, &dashboard).await,
            keys::METRICS_KEY,
            &mut seeded,
            &mut failed,
        );

        Self::track(
            put_json(store, keys::ALERTS_KEY, &seeds::alerts_seed(now)).await,
            keys::ALERTS_KEY,
            &mut seeded,
            &mut failed,
        );

        Self::track(
            put_json(store, keys::PROJECTS_KEY, &seeds::projects_seed(now)).await,
            keys::PROJECTS_KEY,
            &mut seeded,
            &mut failed,
        );

        let feed = {
            let mut rng = rand::thread_rng();
            seeds::notification_feed(now, &mut rng)
        };
        Self::track(
            put_json(store, keys::NOTIFICATIONS_KEY, &feed).await,
            keys::NOTIFICATIONS_KEY,
            &mut seeded,
            &mut failed,
        );

        Self::track(
            put_json(store, keys::AUDIT_KEY, &seeds::audit_seed(now)).await,
            keys::AUDIT_KEY,
            &mut seeded,
            &mut failed,
        );

        for profile in seeds::users_seed(now) {
            let key = keys::user_profile_key(&profile.user_id);
            Self::track(put_json(store, &key, &profile).await, &key, &mut seeded, &mut failed);
        }

        // The marker's timestamp records the FIRST run; later runs only
        // reconfirm the version.
        let already_initialized =
            matches!(get_json::<InitMarker>(store, keys::INIT_KEY).await, Ok(Some(_)));
        if !already_initialized {
            let marker = InitMarker {
                version: INIT_VERSION.to_string(),
                initialized_at: now,
            };
            Self::track(
                put_json(store, keys::INIT_KEY, &marker).await,
                keys::INIT_KEY,
                &mut seeded,
                &mut failed,
            );
        }

        InitSummary {
            version: INIT_VERSION.to_string(),
            already_initialized,
            seeded,
            failed,
        }
    }

    fn track(
        result: opspulse_core::Result<()>,
        key: &str,
        seeded: &mut Vec<String>,
        failed: &mut Vec<String>,
    ) {
        match result {
            Ok(()) => seeded.push(key.to_string()),
            Err(e) => {
                tracing::warn!("Seeding {} failed: {}", key, e);
                failed.push(key.to_string());
            }
        }
    }
}
