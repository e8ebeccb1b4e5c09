// Notifications service
//
// The feed is regenerated wholesale on every read and written back, so a
// mark-read only survives until the next GET. That matches the demo UI,
// which refetches after acting on a notification.

use anyhow::Result;
use chrono::Utc;
use opspulse_core::{get_json, keys, put_json, seeds, KvStore, Notification};
use std::sync::Arc;

pub struct NotificationsService {
    store: Arc<dyn KvStore>,
}

impl NotificationsService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Regenerate the feed and persist it
    pub async fn current(&self) -> Result<Vec<Notification>> {
        let feed = {
            let mut rng = rand::thread_rng();
            seeds::notification_feed(Utc::now(), &mut rng)
        };
        put_json(self.store.as_ref(), keys::NOTIFICATIONS_KEY, &feed).await?;
        Ok(feed)
    }

    /// Mark one stored entry read
    ///
    /// Returns false on an unknown id; the handler still reports success.
    pub async fn mark_read(&self, id: &str) -> Result<bool> {
        let mut feed: Vec<Notification> =
            get_json(self.store.as_ref(), keys::NOTIFICATIONS_KEY)
                .await?
                .unwrap_or_default();

        let Some(entry) = feed.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };

        entry.read = true;
        put_json(self.store.as_ref(), keys::NOTIFICATIONS_KEY, &feed).await?;
        Ok(true)
    }

    /// Mark every stored entry read
    pub async fn mark_all_read(&self) -> Result<()> {
        let mut feed: Vec<Notification> =
            get_json(self.store.as_ref(), keys::NOTIFICATIONS_KEY)
                .await?
                .unwrap_or_default();

        for entry in &mut feed {
            entry.read = true;
        }

        put_json(self.store.as_ref(), keys::NOTIFICATIONS_KEY, &feed).await?;
        Ok(())
    }
}
