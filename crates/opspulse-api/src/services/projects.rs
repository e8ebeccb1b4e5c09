// Projects service

use anyhow::Result;
use chrono::Utc;
use opspulse_core::{get_json, keys, put_json, seeds, KvStore, Project};
use std::sync::Arc;

pub struct ProjectsService {
    store: Arc<dyn KvStore>,
}

impl ProjectsService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Seed-if-empty read; a cold store gets exactly the three seed projects
    pub async fn list(&self) -> Result<Vec<Project>> {
        if let Some(projects) =
            get_json::<Vec<Project>>(self.store.as_ref(), keys::PROJECTS_KEY).await?
        {
            return Ok(projects);
        }

        let seeded = seeds::projects_seed(Utc::now());
        put_json(self.store.as_ref(), keys::PROJECTS_KEY, &seeded).await?;
        Ok(seeded)
    }

    /// Update one project's completion percentage, clamped to [0, 100]
    ///
    /// Returns false on an unknown id; the handler still reports success.
    pub async fn update_progress(&self, id: &str, progress: u8) -> Result<bool> {
        let mut projects = self.list().await?;

        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        project.progress = progress.min(100);

        put_json(self.store.as_ref(), keys::PROJECTS_KEY, &projects).await?;
        Ok(true)
    }
}
