// Audit trail service

use anyhow::Result;
use chrono::Utc;
use opspulse_core::{get_json, keys, put_json, seeds, AuditEvent, KvStore, RiskLevel};
use std::sync::Arc;
use uuid::Uuid;

pub struct AuditService {
    store: Arc<dyn KvStore>,
}

impl AuditService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Seed-if-empty read, newest first
    pub async fn events(&self) -> Result<Vec<AuditEvent>> {
        if let Some(events) =
            get_json::<Vec<AuditEvent>>(self.store.as_ref(), keys::AUDIT_KEY).await?
        {
            return Ok(events);
        }

        let seeded = seeds::audit_seed(Utc::now());
        put_json(self.store.as_ref(), keys::AUDIT_KEY, &seeded).await?;
        Ok(seeded)
    }

    /// Prepend a new entry
    pub async fn record(
        &self,
        actor: String,
        action: String,
        resource: String,
        risk_level: RiskLevel,
    ) -> Result<AuditEvent> {
        let mut events = self.events().await?;

        let event = AuditEvent {
            id: Uuid::now_v7(),
            actor,
            action,
            resource,
            risk_level,
            created_at: Utc::now(),
        };
        events.insert(0, event.clone());

        put_json(self.store.as_ref(), keys::AUDIT_KEY, &events).await?;
        Ok(event)
    }
}
