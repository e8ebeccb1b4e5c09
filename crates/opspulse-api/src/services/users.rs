// User profile service
//
// Profiles are per-entity records; the dashboard view composes the
// profile with the shared metrics snapshot and the audit head.

use anyhow::Result;
use opspulse_core::{get_json, keys, put_json, KvStore, UserPreferences, UserProfile};
use std::sync::Arc;

use crate::services::{AuditService, MetricsService};
use crate::users::UserDashboard;

/// How many audit entries the per-user dashboard shows
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub struct UsersService {
    store: Arc<dyn KvStore>,
    metrics: Arc<MetricsService>,
    audit: Arc<AuditService>,
}

impl UsersService {
    pub fn new(
        store: Arc<dyn KvStore>,
        metrics: Arc<MetricsService>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            store,
            metrics,
            audit,
        }
    }

    pub async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let profile = get_json(self.store.as_ref(), &keys::user_profile_key(user_id)).await?;
        Ok(profile)
    }

    /// Per-user dashboard view; None when the profile is absent
    pub async fn dashboard(&self, user_id: &str) -> Result<Option<UserDashboard>> {
        let Some(user) = self.profile(user_id).await? else {
            return Ok(None);
        };

        let metrics = self.metrics.dashboard().await?;
        let mut recent_activities = self.audit.events().await?;
        recent_activities.truncate(RECENT_ACTIVITY_LIMIT);

        Ok(Some(UserDashboard {
            user,
            metrics,
            recent_activities,
        }))
    }

    /// Replace the stored preferences
    ///
    /// Returns false on an unknown user; the handler still reports success.
    pub async fn update_preferences(
        &self,
        user_id: &str,
        preferences: UserPreferences,
    ) -> Result<bool> {
        let key = keys::user_profile_key(user_id);

        let Some(mut profile) = get_json::<UserProfile>(self.store.as_ref(), &key).await? else {
            return Ok(false);
        };

        profile.preferences = preferences;
        put_json(self.store.as_ref(), &key, &profile).await?;
        Ok(true)
    }
}
