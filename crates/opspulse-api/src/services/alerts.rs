// Alerts service

use anyhow::Result;
use chrono::Utc;
use opspulse_core::{get_json, keys, put_json, seeds, Alert, AlertStatus, KvStore};
use std::sync::Arc;

pub struct AlertsService {
    store: Arc<dyn KvStore>,
}

impl AlertsService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Seed-if-empty read of the alert list
    pub async fn current(&self) -> Result<Vec<Alert>> {
        if let Some(alerts) = get_json::<Vec<Alert>>(self.store.as_ref(), keys::ALERTS_KEY).await?
        {
            return Ok(alerts);
        }

        let seeded = seeds::alerts_seed(Utc::now());
        put_json(self.store.as_ref(), keys::ALERTS_KEY, &seeded).await?;
        Ok(seeded)
    }

    /// Update one alert in place
    ///
    /// Returns false on an unknown id; the handler still reports success.
    pub async fn update_status(
        &self,
        id: &str,
        status: AlertStatus,
        assignee: Option<String>,
    ) -> Result<bool> {
        let mut alerts = self.current().await?;

        let Some(alert) = alerts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };

        alert.status = status;
        if assignee.is_some() {
            alert.assignee = assignee;
        }

        put_json(self.store.as_ref(), keys::ALERTS_KEY, &alerts).await?;
        Ok(true)
    }
}
