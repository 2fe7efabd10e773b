// Data loading, caching, and export
pub mod cache_version;
pub mod export;
pub mod json_version;
pub mod pre_main_async;
pub mod subjects;

// Re-export commonly used types
pub use pre_main_async::fetch_subject_data;
pub use subjects::{NetworkSurvey, RawCommEvent, SubjectCollection, SubjectRecord, SubjectStore};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

#[async_trait]
pub trait LoadSubjectData {
    // Either load the dataset OR return an anyhow::Error
    async fn load_subject_data(&self) -> Result<SubjectCollection>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_subject_data_async(
    implementations: &[Box<dyn LoadSubjectData>],
) -> Result<(SubjectCollection, &'static str)> {
    for imp in implementations {
        match imp.load_subject_data().await {
            Ok(data) => {
                let signature = imp.signature();
                return Ok((data, signature));
            }
            Err(e) => {
                log::info!("Error with a dataset source: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All dataset sources failed to load"))
}
