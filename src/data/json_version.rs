use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::time::Instant;

use crate::data::{LoadSubjectData, SubjectCollection};

/// Canonical dataset source: the study dump converted to JSON upstream.
pub struct JsonVersion {
    pub path: PathBuf,
}

#[async_trait]
impl LoadSubjectData for JsonVersion {
    fn signature(&self) -> &'static str {
        "JSON dump"
    }

    async fn load_subject_data(&self) -> Result<SubjectCollection> {
        let start_time = Instant::now();

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .context(format!("Failed to read dataset dump: {:?}", self.path))?;
        let collection: SubjectCollection = serde_json::from_str(&raw)
            .context(format!("Failed to parse dataset dump: {:?}", self.path))?;

        log::info!(
            "Loaded {} subject records from {:?} in {:?}",
            collection.subjects.len(),
            self.path,
            start_time.elapsed()
        );

        Ok(collection)
    }
}
